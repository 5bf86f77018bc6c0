use crate::map::{Path, Tile};

/// Drawing backend receiving the screen-space geometry of the map.
///
/// Positions are tile centers in the screen convention of the [`Layout`](crate::layout::Layout) used.
pub trait TileRenderer {
    fn render_tile(&mut self, tile: &Tile, pixel_pos: (f64, f64), tile_size: f64);

    fn render_path(&mut self, path: &Path, start: (f64, f64), end: (f64, f64), tile_size: f64);
}
