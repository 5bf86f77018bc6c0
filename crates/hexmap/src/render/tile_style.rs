use crate::map::Terrain;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    fn channel(value: f32) -> u8 {
        (value.clamp(0.0, 1.0) * 255.0).round() as u8
    }
}

/// Formats as a css `#rrggbb` color, alpha is not included.
impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:02x}{:02x}{:02x}",
            Self::channel(self.r),
            Self::channel(self.g),
            Self::channel(self.b)
        )
    }
}

pub struct TileStyle;

impl TileStyle {
    pub const BACKGROUND: Rgba = Rgba::rgb(0.5, 0.5, 0.5);
    pub const BORDER_INACTIVE: Rgba = Rgba::rgb(0.5, 0.5, 0.5);
    pub const BORDER_ACTIVE: Rgba = Rgba::rgb(1.0, 0.0, 0.0);
    pub const PATH: Rgba = Rgba::rgb(0.0, 0.0, 0.2);

    /// Relative size of the terrain fill inside the border.
    pub const FILL_SCALE: f64 = 0.96;
    /// Relative size of a sight icon.
    pub const ICON_SCALE: f64 = 0.5;
    /// Relative width of a path line.
    pub const PATH_WIDTH: f64 = 0.03;

    pub const fn terrain_color(terrain: Terrain) -> Rgba {
        match terrain {
            Terrain::Desert => Rgba::rgb(1.0, 1.0, 0.8),
            Terrain::Forest => Rgba::rgb(0.8, 1.0, 0.8),
            Terrain::Mountain => Rgba::rgb(0.8, 0.8, 0.8),
            Terrain::Water => Rgba::rgb(0.6, 0.8, 1.0),
            Terrain::Any => Rgba::rgb(1.0, 1.0, 1.0),
        }
    }

    pub const fn border_color(active: bool) -> Rgba {
        if active {
            Self::BORDER_ACTIVE
        } else {
            Self::BORDER_INACTIVE
        }
    }
}
