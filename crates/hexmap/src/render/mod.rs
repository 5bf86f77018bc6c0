mod tile_renderer;
pub use self::tile_renderer::*;
mod tile_style;
pub use self::tile_style::*;
mod svg_renderer;
pub use self::svg_renderer::*;
