pub mod app;
pub mod bitmap;
pub mod color;
pub mod host;
pub mod theme;

pub use app::WatchApp;
pub use bitmap::Bitmap;
pub use color::Color;
pub use host::{Drawable, Host};
pub use theme::{Theme, ThemeSlot};

/// Width of the watch display in pixels.
pub const DISPLAY_WIDTH: u32 = 240;
/// Height of the watch display in pixels.
pub const DISPLAY_HEIGHT: u32 = 240;
