//! Input Normalization
//!
//! Turns the two raw inputs - grid text and word-list text - into the
//! typed model the search engine works on. This is the only place where
//! input is unwrapped and validated; everything downstream assumes
//! well-formed data.

pub mod grid;
pub mod wordlist;

pub use grid::{parse_grid, Grid, GridParseError, Position};
pub use wordlist::{parse_word_list, Word};

/// Normalize both inputs in one step
///
/// Grid text must deserialize into a rectangular character grid; word-list
/// text always normalizes (an empty word list is legal).
pub fn parse_inputs(grid_text: &str, words_text: &str) -> Result<(Grid, Vec<Word>), GridParseError> {
    let grid = parse_grid(grid_text)?;
    let words = parse_word_list(words_text);
    Ok((grid, words))
}
