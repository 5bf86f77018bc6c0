use crate::{
    hex::HexCoord,
    layout::{Layout, LayoutConfig},
    map::{MapError, Path, Tile, TileGrid, TileMapData},
    render::TileRenderer,
};

/// The interactive map: tiles, paths and their placement on the screen.
///
/// Owned by the thread driving the input, all updates are synchronous.
#[derive(Debug, Clone)]
pub struct TileMap {
    grid: TileGrid,
    paths: Vec<Path>,
    layout: Layout,
}

impl TileMap {
    pub fn new(data: TileMapData, config: &LayoutConfig) -> Self {
        let TileMapData { grid, paths } = data;
        let mut layout = Layout::new(config);
        layout.update(grid.width(), grid.height());
        Self { grid, paths, layout }
    }

    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn add_path(&mut self, path: Path) {
        self.paths.push(path);
    }

    /// Add or replace a tile, the layout follows the grid extent.
    pub fn set_tile(&mut self, tile: Tile) -> Result<(), MapError> {
        self.grid.set(tile)?;
        self.layout.update(self.grid.width(), self.grid.height());
        Ok(())
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.layout.resize(width, height);
        self.layout.update(self.grid.width(), self.grid.height());
    }

    /// Select the tile under the pointer. Returns the coordinate of the selected tile if there is any.
    pub fn pointer_moved(&mut self, x: f64, y: f64) -> Option<HexCoord> {
        let previous = self.grid.active().map(|tile| tile.coords);
        let Some(coord) = self.layout.hit_test(x, y) else {
            self.grid.clear_active();
            if previous.is_some() {
                log::debug!("Selection cleared, the layout is collapsed");
            }
            return None;
        };

        let active = self.grid.set_active(&coord).map(|tile| tile.coords);
        if previous != active {
            match active {
                Some(active) => log::debug!("Tile {} selected", active),
                None if coord.is_on_grid() => log::debug!("Selection cleared, no tile at {}", coord),
                None => log::trace!("Selection cleared, pointer is between cells at {}", coord),
            }
        }
        active
    }

    /// Emit the tiles followed by the paths.
    pub fn render<R>(&self, renderer: &mut R)
    where
        R: TileRenderer + ?Sized,
    {
        let tile_size = self.layout.tile_size();
        for tile in &self.grid {
            renderer.render_tile(tile, self.layout.tile_center(&tile.coords), tile_size);
        }
        for path in &self.paths {
            renderer.render_path(
                path,
                self.layout.tile_center(&path.start),
                self.layout.tile_center(&path.end),
                tile_size,
            );
        }
    }

    pub fn into_data(self) -> TileMapData {
        TileMapData {
            grid: self.grid,
            paths: self.paths,
        }
    }
}
