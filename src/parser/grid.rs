//! Letter Grid Model
//!
//! Rectangular grid of single characters plus its JSON deserialization.
//! Pure data representation - no search or rendering concerns.

use serde_json::Value;
use thiserror::Error;

/// A cell coordinate, 0-indexed from the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Structural errors raised while turning grid text into a [`Grid`]
#[derive(Debug, Error)]
pub enum GridParseError {
    /// The input is not valid JSON at all
    #[error("grid text is not valid JSON: {0}")]
    Syntax(#[from] serde_json::Error),
    /// The top-level JSON value is not an array of rows
    #[error("grid JSON must be an array of rows")]
    NotAnArray,
    /// A row is not an array of cells
    #[error("row {row} is not an array of cells")]
    RowNotArray { row: usize },
    /// A cell holds a non-string value
    #[error("cell ({row}, {col}) is not a string")]
    CellNotString { row: usize, col: usize },
    /// A cell string is empty or longer than one character
    #[error("cell ({row}, {col}) must be exactly one character, got {value:?}")]
    CellNotSingleChar {
        row: usize,
        col: usize,
        value: String,
    },
    /// A row's length differs from the first row's length
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// A rectangular grid of single characters
///
/// Invariant: every row has the same length. A grid with zero rows is
/// legal and has zero columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Vec<char>>,
    cols: usize,
}

impl Grid {
    /// Build a grid from rows of characters, rejecting ragged input
    pub fn from_rows(cells: Vec<Vec<char>>) -> Result<Self, GridParseError> {
        let cols = cells.first().map(Vec::len).unwrap_or(0);

        for (row, row_cells) in cells.iter().enumerate() {
            if row_cells.len() != cols {
                return Err(GridParseError::RaggedRow {
                    row,
                    expected: cols,
                    found: row_cells.len(),
                });
            }
        }

        Ok(Self { cells, cols })
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    /// Number of columns (0 when the grid has no rows)
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// True when the grid holds no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty() || self.cols == 0
    }

    /// Character at a position, or None when out of bounds
    pub fn get(&self, pos: Position) -> Option<char> {
        self.cells.get(pos.row)?.get(pos.col).copied()
    }

    /// Iterate over rows as character slices, top to bottom
    pub fn iter_rows(&self) -> impl Iterator<Item = &[char]> {
        self.cells.iter().map(Vec::as_slice)
    }
}

/// Parse grid text (a JSON array of arrays of single-character strings)
/// into a [`Grid`]
///
/// Every structural problem maps to a distinct [`GridParseError`] variant
/// so the boundary can report it instead of crashing mid-search.
pub fn parse_grid(text: &str) -> Result<Grid, GridParseError> {
    let value: Value = serde_json::from_str(text)?;
    let rows = value.as_array().ok_or(GridParseError::NotAnArray)?;

    let mut cells = Vec::with_capacity(rows.len());
    for (row, row_value) in rows.iter().enumerate() {
        let row_cells = row_value
            .as_array()
            .ok_or(GridParseError::RowNotArray { row })?;

        let mut chars = Vec::with_capacity(row_cells.len());
        for (col, cell) in row_cells.iter().enumerate() {
            let text = cell
                .as_str()
                .ok_or(GridParseError::CellNotString { row, col })?;

            let mut it = text.chars();
            match (it.next(), it.next()) {
                (Some(ch), None) => chars.push(ch),
                _ => {
                    return Err(GridParseError::CellNotSingleChar {
                        row,
                        col,
                        value: text.to_string(),
                    });
                }
            }
        }
        cells.push(chars);
    }

    Grid::from_rows(cells)
}
