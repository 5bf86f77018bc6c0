//! Hexagonal tile map model.
//!
//! Doubled-width hex coordinates, a sparse grid of terrain tiles with points of interest,
//! the fitting of the grid into a viewport and the mapping of pointer positions back to tiles.
//! Drawing is delegated to a [`render::TileRenderer`].

pub mod hex;
pub mod layout;
pub mod map;
pub mod render;

mod tile_map;
pub use self::tile_map::*;
