//! Render Artifact
//!
//! The structured, display-ready projection of a search result: an
//! ordered word status list plus a cell-by-cell grid view with
//! highlights. Renderers consume this; none of them re-run any search
//! logic.

use std::collections::HashMap;

use serde::Serialize;

use crate::palette::{Color, Palette};
use crate::parser::{Grid, Position, Word};
use crate::search::SearchResult;

/// Status line for one word, in input order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordStatus {
    pub word: Word,
    pub found: bool,
    /// Assigned color - deterministic by input index, independent of outcome
    pub color: Color,
}

/// One grid cell with its optional highlight color
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CellView {
    #[serde(rename = "char")]
    pub ch: char,
    pub highlight: Option<Color>,
}

/// Complete render-ready bundle
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Artifact {
    pub rows: usize,
    pub cols: usize,
    /// rows x cols cell views, row-major
    pub cells: Vec<Vec<CellView>>,
    /// One status per input word, in input order
    pub words: Vec<WordStatus>,
}

/// Assemble the artifact for a grid and its search result
///
/// Pure projection. Word at input index i gets `palette[i mod len]`;
/// highlights are built first-writer-wins in word input order, so when
/// paths overlap the earliest word's color stays.
pub fn build_artifact(grid: &Grid, result: &SearchResult, palette: &Palette) -> Artifact {
    let mut highlights: HashMap<Position, Color> = HashMap::new();
    let mut words = Vec::with_capacity(result.matches.len());

    for (index, word_match) in result.matches.iter().enumerate() {
        let color = palette.color_for(index);

        if let Some(path) = word_match.path() {
            for &pos in path {
                highlights.entry(pos).or_insert(color);
            }
        }

        words.push(WordStatus {
            word: word_match.word.clone(),
            found: word_match.is_found(),
            color,
        });
    }

    let cells = grid
        .iter_rows()
        .enumerate()
        .map(|(row, chars)| {
            chars
                .iter()
                .enumerate()
                .map(|(col, &ch)| CellView {
                    ch,
                    highlight: highlights.get(&Position::new(row, col)).copied(),
                })
                .collect()
        })
        .collect();

    Artifact {
        rows: grid.rows(),
        cols: grid.cols(),
        cells,
        words,
    }
}
