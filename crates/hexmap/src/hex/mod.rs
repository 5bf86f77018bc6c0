mod hex_coord;
pub use self::hex_coord::*;
