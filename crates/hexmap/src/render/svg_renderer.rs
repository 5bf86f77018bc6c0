use crate::{
    layout::VerticalAxis,
    map::{Path, Tile},
    render::{TileRenderer, TileStyle},
};

/// Renders the map into a standalone svg document.
pub struct SvgRenderer {
    width: f64,
    height: f64,
    vertical_axis: VerticalAxis,
    body: String,
}

impl SvgRenderer {
    /// Create a renderer for a viewport. Incoming positions are interpreted in the given vertical convention.
    pub fn new(width: f64, height: f64, vertical_axis: VerticalAxis) -> Self {
        Self {
            width,
            height,
            vertical_axis,
            body: String::new(),
        }
    }

    // svg has a top-left origin
    fn svg_y(&self, y: f64) -> f64 {
        match self.vertical_axis {
            VerticalAxis::Up => self.height - y,
            VerticalAxis::Down => y,
        }
    }

    fn hexagon_points(cx: f64, cy: f64, radius: f64) -> String {
        (0..6)
            .map(|i| {
                let angle = (30.0 + 60.0 * i as f64).to_radians();
                format!("{:.2},{:.2}", cx + radius * angle.cos(), cy + radius * angle.sin())
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Complete the document.
    pub fn finish(self) -> String {
        format!(
            concat!(
                "<svg xmlns=\"http://www.w3.org/2000/svg\" ",
                "width=\"{w:.0}\" height=\"{h:.0}\" viewBox=\"0 0 {w:.2} {h:.2}\">\n",
                "<rect class=\"background\" x=\"0\" y=\"0\" width=\"{w:.2}\" height=\"{h:.2}\" fill=\"{bg}\"/>\n",
                "{body}",
                "</svg>\n"
            ),
            w = self.width,
            h = self.height,
            bg = TileStyle::BACKGROUND,
            body = self.body
        )
    }
}

impl TileRenderer for SvgRenderer {
    fn render_tile(&mut self, tile: &Tile, pixel_pos: (f64, f64), tile_size: f64) {
        let (cx, cy) = (pixel_pos.0, self.svg_y(pixel_pos.1));
        let radius = tile_size / 2.0;

        self.body.push_str(&format!(
            "<polygon class=\"tile-border\" data-coord=\"{},{}\" points=\"{}\" fill=\"{}\"/>\n",
            tile.coords.x,
            tile.coords.y,
            Self::hexagon_points(cx, cy, radius),
            TileStyle::border_color(tile.is_active())
        ));
        self.body.push_str(&format!(
            "<polygon class=\"tile-fill\" points=\"{}\" fill=\"{}\"/>\n",
            Self::hexagon_points(cx, cy, radius * TileStyle::FILL_SCALE),
            TileStyle::terrain_color(tile.terrain)
        ));

        if let Some(icon) = tile.sight.and_then(|sight| sight.icon()) {
            let icon_size = tile_size * TileStyle::ICON_SCALE;
            self.body.push_str(&format!(
                "<image class=\"sight\" href=\"{}\" x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\"/>\n",
                icon,
                cx - icon_size / 2.0,
                cy - icon_size / 2.0,
                icon_size,
                icon_size
            ));
        }
    }

    fn render_path(&mut self, _path: &Path, start: (f64, f64), end: (f64, f64), tile_size: f64) {
        self.body.push_str(&format!(
            concat!(
                "<line class=\"path\" x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" ",
                "stroke=\"{}\" stroke-width=\"{:.2}\"/>\n"
            ),
            start.0,
            self.svg_y(start.1),
            end.0,
            self.svg_y(end.1),
            TileStyle::PATH,
            tile_size * TileStyle::PATH_WIDTH
        ));
    }
}
