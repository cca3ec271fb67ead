//! Word Grid Solver
//!
//! A word-search puzzle solver: locate words in a 2D letter grid and render
//! the solution as highlighted HTML, terminal text, or JSON.
//!
//! This library provides:
//! - Grid and word list parsing
//! - Word search across all eight directions
//! - Palette-based highlight colors
//! - Artifact rendering and configuration management

pub mod config;
pub mod palette;
pub mod parser;
pub mod report;
pub mod search;

// Re-exports for clean public API
pub use config::Config;
pub use palette::{Palette, PaletteRegistry};
pub use parser::{parse_grid, parse_word_list, Grid, Word};
pub use report::{build_artifact, Artifact, ArtifactRenderer, OutputFormat};
pub use search::{search_words, SearchResult};
