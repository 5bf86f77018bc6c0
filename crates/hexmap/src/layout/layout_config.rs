use serde::{Deserialize, Serialize};

/// Direction of the vertical screen axis of the host surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VerticalAxis {
    /// Origin at the bottom-left corner, y grows upward like the lattice y.
    #[default]
    Up,
    /// Origin at the top-left corner, y grows downward.
    Down,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutConfig {
    pub viewport_width: f64,
    pub viewport_height: f64,
    #[serde(default)]
    pub vertical_axis: VerticalAxis,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            viewport_width: 800.0,
            viewport_height: 800.0,
            vertical_axis: VerticalAxis::Up,
        }
    }
}
