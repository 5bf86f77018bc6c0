use crate::{
    hex::HexCoord,
    map::{Sight, Terrain},
};

/// A single occupied cell of the map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub coords: HexCoord,
    pub terrain: Terrain,
    pub sight: Option<Sight>,
    active: bool,
}

impl Tile {
    pub fn new(coords: HexCoord, terrain: Terrain) -> Self {
        Self {
            coords,
            terrain,
            sight: None,
            active: false,
        }
    }

    pub fn with_sight(self, sight: Sight) -> Self {
        Self {
            sight: Some(sight),
            ..self
        }
    }

    /// Selection state, changed only through [`TileGrid::set_active`](crate::map::TileGrid::set_active).
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub(crate) fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}
