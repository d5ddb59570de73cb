//! Theme and color customization for a single-page portfolio site.
//!
//! A user-editable palette, keyed by semantic role and light/dark mode, is
//! projected into the rendering framework's theme object, the document's CSS
//! custom properties and a generated cursor glyph.

pub mod app;
pub mod color;
pub mod css;
pub mod cursor;
pub mod debounce;
pub mod device;
pub mod editor;
pub mod error;
pub mod mode;
pub mod model;
pub mod preferences;
pub mod projection;
pub mod settings;
pub mod storage;
pub mod store;
pub mod theme;

pub use app::ThemeRuntime;
pub use color::{ColorValue, Rgb};
pub use css::{StyleSheet, StyleTarget};
pub use error::ThemeError;
pub use mode::ThemeMode;
pub use model::{ColorModel, DEFAULT_COLORS, LeafPath};
pub use store::{ColorSource, ColorStore};
