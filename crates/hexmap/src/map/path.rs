use crate::hex::HexCoord;
use serde::{Deserialize, Serialize};

/// Directed connector drawn between two cells. Neighborhood of the end points is not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Path {
    pub start: HexCoord,
    pub end: HexCoord,
}

impl Path {
    pub const fn new(start: HexCoord, end: HexCoord) -> Self {
        Self { start, end }
    }
}
