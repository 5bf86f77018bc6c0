mod layout_config;
pub use self::layout_config::*;
mod layout;
pub use self::layout::*;
