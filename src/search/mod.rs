//! Grid Search
//!
//! Deterministic word location, separated from parsing and rendering
//! concerns.

pub mod engine;

pub use engine::{locate, search_words, Direction, Placement, SearchResult, WordMatch};
