use crate::{
    hex::HexCoord,
    map::{MapError, TerrainDeck, Tile},
};
use std::{collections::HashMap, slice};

/// Sparse store of the tiles indexed by their coordinate.
///
/// Tiles are kept in insertion order, the bounds grow with each insertion and never shrink.
/// Only on-grid coordinates of the non-negative quadrant can be occupied.
#[derive(Debug, Clone, Default)]
pub struct TileGrid {
    width: u32,
    height: u32,
    tiles: Vec<Tile>,
    index: HashMap<HexCoord, usize>,
}

impl TileGrid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble a grid by drawing one terrain card for each coordinate.
    pub fn from_deck<I>(coords: I, deck: &mut TerrainDeck) -> Result<Self, MapError>
    where
        I: IntoIterator<Item = HexCoord>,
    {
        let mut grid = Self::new();
        for coord in coords {
            let terrain = deck.draw()?;
            grid.set(Tile::new(coord, terrain))?;
        }
        log::debug!("Grid assembled from deck with {} tiles, {} cards left", grid.len(), deck.remaining());
        Ok(grid)
    }

    /// One more than the largest x coordinate.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// One more than the largest y coordinate.
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn get(&self, coord: &HexCoord) -> Option<&Tile> {
        self.index.get(coord).map(|&idx| &self.tiles[idx])
    }

    pub fn contains(&self, coord: &HexCoord) -> bool {
        self.index.contains_key(coord)
    }

    /// Insert the tile at its own coordinate replacing any previous tile there.
    /// The selection state of the incoming tile is ignored, the cell stays active only if it was active before.
    pub fn set(&mut self, mut tile: Tile) -> Result<(), MapError> {
        let coord = tile.coords;
        if coord.x < 0 || coord.y < 0 || !coord.is_on_grid() {
            return Err(MapError::InvalidPlacement(coord));
        }
        tile.set_active(self.get(&coord).is_some_and(Tile::is_active));

        self.width = self.width.max(coord.x as u32 + 1);
        self.height = self.height.max(coord.y as u32 + 1);

        match self.index.get(&coord) {
            Some(&idx) => self.tiles[idx] = tile,
            None => {
                self.index.insert(coord, self.tiles.len());
                self.tiles.push(tile);
            }
        }
        Ok(())
    }

    /// Activate the tile at the given coordinate and deactivate all the others.
    /// Returns the active tile, or `None` if the coordinate is not occupied.
    pub fn set_active(&mut self, coord: &HexCoord) -> Option<&Tile> {
        self.clear_active();

        let idx = *self.index.get(coord)?;
        self.tiles[idx].set_active(true);
        Some(&self.tiles[idx])
    }

    /// Deactivate all the tiles.
    pub fn clear_active(&mut self) {
        for tile in &mut self.tiles {
            tile.set_active(false);
        }
    }

    /// The currently active tile.
    pub fn active(&self) -> Option<&Tile> {
        self.tiles.iter().find(|tile| tile.is_active())
    }

    pub fn iter(&self) -> slice::Iter<'_, Tile> {
        self.tiles.iter()
    }
}

impl<'a> IntoIterator for &'a TileGrid {
    type Item = &'a Tile;
    type IntoIter = slice::Iter<'a, Tile>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::{DeckError, Sight, Terrain, DECK_SIZE};
    use hexmap_test::test;
    use itertools::assert_equal;
    use rand::{rngs::StdRng, SeedableRng};

    fn active_count(grid: &TileGrid) -> usize {
        grid.iter().filter(|tile| tile.is_active()).count()
    }

    #[test]
    fn test_set_get() {
        let mut grid = TileGrid::new();
        assert!(grid.is_empty());
        assert_eq!((grid.width(), grid.height()), (0, 0));

        let tile = Tile::new(HexCoord::new(5, 3), Terrain::Forest).with_sight(Sight::Toucan);
        grid.set(tile.clone()).unwrap();

        assert_eq!(grid.get(&HexCoord::new(5, 3)), Some(&tile));
        assert!(grid.contains(&HexCoord::new(5, 3)));
        assert!(grid.get(&HexCoord::new(3, 5)).is_none());
        assert!(!grid.contains(&HexCoord::new(3, 5)));
        assert!(grid.width() >= 6);
        assert!(grid.height() >= 4);
    }

    #[test]
    fn test_bounds_never_shrink() {
        let mut grid = TileGrid::new();
        grid.set(Tile::new(HexCoord::new(8, 2), Terrain::Water)).unwrap();
        grid.set(Tile::new(HexCoord::new(1, 5), Terrain::Water)).unwrap();
        grid.set(Tile::new(HexCoord::new(0, 0), Terrain::Water)).unwrap();
        assert_eq!((grid.width(), grid.height()), (9, 6));
    }

    #[test]
    fn test_overwrite_keeps_order() {
        let mut grid = TileGrid::new();
        grid.set(Tile::new(HexCoord::new(0, 0), Terrain::Desert)).unwrap();
        grid.set(Tile::new(HexCoord::new(2, 0), Terrain::Desert)).unwrap();
        grid.set(Tile::new(HexCoord::new(0, 0), Terrain::Mountain)).unwrap();

        assert_eq!(grid.len(), 2);
        assert_equal(
            grid.iter().map(|tile| (tile.coords, tile.terrain)),
            [
                (HexCoord::new(0, 0), Terrain::Mountain),
                (HexCoord::new(2, 0), Terrain::Desert),
            ],
        );
    }

    #[test]
    fn test_invalid_placement() {
        let mut grid = TileGrid::new();
        for coord in [HexCoord::new(-2, 0), HexCoord::new(1, -1), HexCoord::new(1, 0)] {
            let err = grid.set(Tile::new(coord, Terrain::Desert)).unwrap_err();
            assert!(matches!(err, MapError::InvalidPlacement(c) if c == coord));
        }
        assert!(grid.is_empty());
        assert_eq!((grid.width(), grid.height()), (0, 0));
    }

    #[test]
    fn test_set_active() {
        let mut grid = TileGrid::new();
        for x in [4, 6, 8] {
            grid.set(Tile::new(HexCoord::new(x, 0), Terrain::Desert)).unwrap();
        }

        let active = grid.set_active(&HexCoord::new(4, 0)).map(|tile| tile.coords);
        assert_eq!(active, Some(HexCoord::new(4, 0)));
        assert_eq!(active_count(&grid), 1);

        // activation moves, never duplicates
        grid.set_active(&HexCoord::new(8, 0));
        assert_eq!(active_count(&grid), 1);
        assert_eq!(grid.active().map(|tile| tile.coords), Some(HexCoord::new(8, 0)));
        assert!(!grid.get(&HexCoord::new(4, 0)).unwrap().is_active());

        // a miss clears the selection
        assert!(grid.set_active(&HexCoord::new(5, 1)).is_none());
        assert_eq!(active_count(&grid), 0);
        assert!(grid.active().is_none());
    }

    #[test]
    fn test_set_does_not_copy_selection() {
        let mut grid = TileGrid::new();
        grid.set(Tile::new(HexCoord::new(0, 0), Terrain::Desert)).unwrap();
        grid.set(Tile::new(HexCoord::new(2, 0), Terrain::Desert)).unwrap();
        grid.set_active(&HexCoord::new(0, 0));

        // an active copy placed elsewhere arrives inactive
        let mut copy = grid.active().unwrap().clone();
        copy.coords = HexCoord::new(2, 0);
        grid.set(copy).unwrap();
        assert_eq!(active_count(&grid), 1);
        assert_eq!(grid.active().map(|tile| tile.coords), Some(HexCoord::new(0, 0)));

        // replacing the active cell keeps it selected
        grid.set(Tile::new(HexCoord::new(0, 0), Terrain::Forest)).unwrap();
        let active = grid.active().unwrap();
        assert_eq!((active.coords, active.terrain), (HexCoord::new(0, 0), Terrain::Forest));

        grid.clear_active();
        assert_eq!(active_count(&grid), 0);
    }

    #[test]
    fn test_from_deck() {
        let mut deck = TerrainDeck::with_rng(&mut StdRng::seed_from_u64(3));
        let coords: Vec<_> = HexCoord::new(4, 2).spiral(2).collect();
        let grid = TileGrid::from_deck(coords.iter().cloned(), &mut deck).unwrap();

        assert_eq!(grid.len(), 19);
        assert_eq!(deck.remaining(), DECK_SIZE - 19);
        assert_equal(grid.iter().map(|tile| tile.coords), coords);
    }

    #[test]
    fn test_from_deck_exhausted() {
        let mut deck = TerrainDeck::new();
        let coords = (0..=DECK_SIZE as i32).map(|i| HexCoord::new(2 * i, 0));
        let err = TileGrid::from_deck(coords, &mut deck).unwrap_err();
        assert!(matches!(err, MapError::Deck(DeckError::Exhausted)));
    }
}
