//! Highlight Palettes
//!
//! Named color palettes for word highlighting, loadable from TOML files
//! with an embedded default.

pub mod registry;
pub mod schema;

pub use registry::{PaletteRegistry, DEFAULT_PALETTE};
pub use schema::{Color, Palette, PaletteError, PaletteFile};
