mod map_error;
pub use self::map_error::*;
mod terrain;
pub use self::terrain::*;
mod tile;
pub use self::tile::*;
mod path;
pub use self::path::*;
mod tile_grid;
pub use self::tile_grid::*;
mod terrain_deck;
pub use self::terrain_deck::*;
mod map_file;
pub use self::map_file::*;
