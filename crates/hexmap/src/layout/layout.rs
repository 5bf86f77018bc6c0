use crate::{
    hex::HexCoord,
    layout::{LayoutConfig, VerticalAxis},
};

const SQRT3_2: f64 = 0.866_025_403_784_438_6;

/// Largest uniform tile size that fits a grid of the given extent into the viewport keeping the hex aspect ratio.
///
/// Degenerate inputs (empty grid, non positive or non finite viewport) result in zero.
pub fn compute_tile_size(viewport_width: f64, viewport_height: f64, grid_width: u32, grid_height: u32) -> f64 {
    if grid_width == 0 || grid_height == 0 {
        return 0.0;
    }
    if !(viewport_width > 0.0 && viewport_height > 0.0 && viewport_width.is_finite() && viewport_height.is_finite()) {
        return 0.0;
    }

    // tiles are centered at half a tile from their cartesian origin, a hex is sqrt(3)/2 wide and 1 tall
    let max_tile_width = viewport_width / (grid_width as f64 * SQRT3_2 / 2.0 + 0.5);
    let max_tile_height = viewport_height / (grid_height as f64 * 0.75 + 0.25);
    max_tile_width.min(max_tile_height)
}

/// Map a lattice aligned pointer position (origin bottom-left, y up) to the closest coordinate.
pub fn pointer_to_hex(pointer_x: f64, pointer_y: f64, tile_size: f64) -> HexCoord {
    let half = tile_size / 2.0;
    HexCoord::from_cartesian(pointer_x - half, pointer_y - half, tile_size)
}

/// Screen-space placement of the tiles in a viewport.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    viewport_width: f64,
    viewport_height: f64,
    vertical_axis: VerticalAxis,
    tile_size: f64,
}

impl Layout {
    pub fn new(config: &LayoutConfig) -> Self {
        Self {
            viewport_width: config.viewport_width,
            viewport_height: config.viewport_height,
            vertical_axis: config.vertical_axis,
            tile_size: 0.0,
        }
    }

    pub fn viewport(&self) -> (f64, f64) {
        (self.viewport_width, self.viewport_height)
    }

    pub fn vertical_axis(&self) -> VerticalAxis {
        self.vertical_axis
    }

    pub fn tile_size(&self) -> f64 {
        self.tile_size
    }

    /// Change the viewport. The tile size is not updated until the next [`Layout::update`].
    pub fn resize(&mut self, viewport_width: f64, viewport_height: f64) {
        self.viewport_width = viewport_width;
        self.viewport_height = viewport_height;
    }

    /// Recompute the tile size for the grid extent.
    pub fn update(&mut self, grid_width: u32, grid_height: u32) -> f64 {
        self.tile_size = compute_tile_size(self.viewport_width, self.viewport_height, grid_width, grid_height);
        log::debug!(
            "Layout of {}x{} grid in {}x{} viewport: tile size {}",
            grid_width,
            grid_height,
            self.viewport_width,
            self.viewport_height,
            self.tile_size
        );
        self.tile_size
    }

    /// Convert between lattice aligned and screen vertical positions, the mapping is its own inverse.
    fn flip_y(&self, y: f64) -> f64 {
        match self.vertical_axis {
            VerticalAxis::Up => y,
            VerticalAxis::Down => self.viewport_height - y,
        }
    }

    /// Screen position of the corner of the tile's bounding box closest to the screen origin.
    pub fn tile_origin(&self, coord: &HexCoord) -> (f64, f64) {
        let (x, y) = coord.cartesian(self.tile_size);
        match self.vertical_axis {
            VerticalAxis::Up => (x, y),
            VerticalAxis::Down => (x, self.viewport_height - y - self.tile_size),
        }
    }

    /// Screen position of the visual center of the tile.
    pub fn tile_center(&self, coord: &HexCoord) -> (f64, f64) {
        let half = self.tile_size / 2.0;
        let (x, y) = coord.cartesian(self.tile_size);
        (x + half, self.flip_y(y + half))
    }

    /// Find the coordinate under a screen position. The result may be unoccupied or off grid.
    /// Returns `None` while the layout is collapsed, nothing is drawn then.
    pub fn hit_test(&self, pointer_x: f64, pointer_y: f64) -> Option<HexCoord> {
        if self.tile_size <= 0.0 {
            return None;
        }
        Some(pointer_to_hex(pointer_x, self.flip_y(pointer_y), self.tile_size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexmap_test::test;

    #[test]
    fn test_compute_tile_size() {
        // width bound
        let size = compute_tile_size(800.0, 800.0, 7, 1);
        assert!((size - 800.0 / (3.5 * SQRT3_2 + 0.5)).abs() < 1e-9);

        // height bound
        let size = compute_tile_size(800.0, 100.0, 7, 1);
        assert!((size - 100.0).abs() < 1e-9);

        // grows with the viewport
        assert!(compute_tile_size(1600.0, 1600.0, 10, 10) > compute_tile_size(800.0, 800.0, 10, 10));
    }

    #[test]
    fn test_compute_tile_size_degenerate() {
        assert_eq!(compute_tile_size(800.0, 800.0, 0, 0), 0.0);
        assert_eq!(compute_tile_size(800.0, 800.0, 5, 0), 0.0);
        assert_eq!(compute_tile_size(0.0, 800.0, 5, 5), 0.0);
        assert_eq!(compute_tile_size(800.0, -1.0, 5, 5), 0.0);
        assert_eq!(compute_tile_size(f64::NAN, 800.0, 5, 5), 0.0);
        assert_eq!(compute_tile_size(f64::INFINITY, 800.0, 5, 5), 0.0);
    }

    #[test]
    fn test_grid_fits_viewport() {
        let (width, height) = (640.0, 480.0);
        let (grid_width, grid_height) = (18, 10);
        let size = compute_tile_size(width, height, grid_width, grid_height);

        // the right-most and top-most hexes stay inside the viewport
        let (x, _) = HexCoord::new(grid_width as i32 - 1, 1).cartesian(size);
        let (_, y) = HexCoord::new(1, grid_height as i32 - 1).cartesian(size);
        assert!(x + size / 2.0 + size * SQRT3_2 / 2.0 <= width + 1e-9);
        assert!(y + size <= height + 1e-9);
        // and one of the bounds is tight
        let right = x + size / 2.0 + size * SQRT3_2 / 2.0;
        assert!((right - width).abs() < 1e-9 || (y + size - height).abs() < 1e-9);
    }

    #[test]
    fn test_pointer_to_hex() {
        let size = 50.0;
        for coord in [HexCoord::new(0, 0), HexCoord::new(4, 0), HexCoord::new(7, 3)] {
            let (x, y) = coord.cartesian(size);
            assert_eq!(pointer_to_hex(x + size / 2.0, y + size / 2.0, size), coord);
        }
    }

    #[test]
    fn test_hit_test_both_axes() {
        for vertical_axis in [VerticalAxis::Up, VerticalAxis::Down] {
            let mut layout = Layout::new(&LayoutConfig {
                viewport_width: 800.0,
                viewport_height: 600.0,
                vertical_axis,
            });
            layout.update(17, 10);
            assert!(layout.tile_size() > 0.0);

            for coord in [HexCoord::new(0, 0), HexCoord::new(16, 0), HexCoord::new(5, 9), HexCoord::new(8, 4)] {
                let (x, y) = layout.tile_center(&coord);
                assert_eq!(layout.hit_test(x, y), Some(coord), "{vertical_axis:?}");
            }
        }
    }

    #[test]
    fn test_hit_test_collapsed_layout() {
        let mut layout = Layout::new(&LayoutConfig::default());
        assert_eq!(layout.hit_test(0.0, 0.0), None);

        layout.update(4, 2);
        assert!(layout.hit_test(10.0, 10.0).is_some());

        layout.resize(0.0, 0.0);
        layout.update(4, 2);
        assert_eq!(layout.tile_size(), 0.0);
        assert_eq!(layout.hit_test(5000.0, -3000.0), None);
        assert_eq!(layout.hit_test(0.0, 0.0), None);
    }

    #[test]
    fn test_tile_origin_down() {
        let mut layout = Layout::new(&LayoutConfig {
            viewport_width: 800.0,
            viewport_height: 800.0,
            vertical_axis: VerticalAxis::Down,
        });
        layout.update(1, 1);
        let size = layout.tile_size();

        // the single bottom row tile touches the bottom edge of a top-left origin screen
        let (x, y) = layout.tile_origin(&HexCoord::origin());
        assert_eq!(x, 0.0);
        assert!((y + size - 800.0).abs() < 1e-9);
        let (_, cy) = layout.tile_center(&HexCoord::origin());
        assert!((cy - (800.0 - size / 2.0)).abs() < 1e-9);
    }

    #[test]
    fn test_resize_requires_update() {
        let mut layout = Layout::new(&LayoutConfig::default());
        let size = layout.update(7, 1);
        layout.resize(400.0, 400.0);
        assert_eq!(layout.tile_size(), size);
        assert!(layout.update(7, 1) < size);
        assert_eq!(layout.viewport(), (400.0, 400.0));
    }
}
