use hexmap::{
    hex::HexCoord,
    map::{Terrain, Tile, TileGrid, TileMapData},
};

pub const ISLA_PETIT: &str = include_str!("isla_petit.json");
pub const ISLA_PETIT_TILES: usize = 73;

pub fn load_isla_petit() -> TileMapData {
    TileMapData::load_from_str(ISLA_PETIT).unwrap()
}

/// Two desert tiles next to each other in the bottom row.
pub fn two_deserts() -> TileMapData {
    let mut grid = TileGrid::new();
    grid.set(Tile::new(HexCoord::new(4, 0), Terrain::Desert)).unwrap();
    grid.set(Tile::new(HexCoord::new(6, 0), Terrain::Desert)).unwrap();
    TileMapData::new(grid)
}
