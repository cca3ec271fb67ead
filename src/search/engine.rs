//! Search Engine
//!
//! Exhaustive, deterministic word location. Scan order is part of the
//! contract: start positions in row-major order, directions in a fixed
//! priority order, first full match wins. Re-running a search on the same
//! input always returns the same path, which keeps rendering stable.

use crate::parser::{Grid, Position, Word};

/// One of the eight straight-line scan directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Right,
    Left,
    Down,
    Up,
    DownRight,
    DownLeft,
    UpRight,
    UpLeft,
}

impl Direction {
    /// All directions in tie-break priority order
    pub const IN_PRIORITY_ORDER: [Direction; 8] = [
        Direction::Right,
        Direction::Left,
        Direction::Down,
        Direction::Up,
        Direction::DownRight,
        Direction::DownLeft,
        Direction::UpRight,
        Direction::UpLeft,
    ];

    /// Unit step as (row delta, column delta)
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Right => (0, 1),
            Direction::Left => (0, -1),
            Direction::Down => (1, 0),
            Direction::Up => (-1, 0),
            Direction::DownRight => (1, 1),
            Direction::DownLeft => (1, -1),
            Direction::UpRight => (-1, 1),
            Direction::UpLeft => (-1, -1),
        }
    }
}

/// A successful placement: the winning direction and the full cell path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub direction: Direction,
    /// One position per word character, start to end
    pub path: Vec<Position>,
}

impl Placement {
    /// First cell of the path (paths are never empty - words are never empty)
    pub fn start(&self) -> Position {
        self.path[0]
    }
}

/// Outcome of searching one word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordMatch {
    pub word: Word,
    pub placement: Option<Placement>,
}

impl WordMatch {
    pub fn is_found(&self) -> bool {
        self.placement.is_some()
    }

    /// The matched path, if any
    pub fn path(&self) -> Option<&[Position]> {
        self.placement.as_ref().map(|p| p.path.as_slice())
    }
}

/// Ordered outcomes for a whole word list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub matches: Vec<WordMatch>,
}

impl Default for SearchResult {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchResult {
    pub fn new() -> Self {
        Self {
            matches: Vec::new(),
        }
    }

    pub fn push(&mut self, word_match: WordMatch) {
        self.matches.push(word_match);
    }

    /// Number of words that were located
    pub fn found_count(&self) -> usize {
        self.matches.iter().filter(|m| m.is_found()).count()
    }

    /// Number of words with no placement
    pub fn missing_count(&self) -> usize {
        self.matches.len() - self.found_count()
    }

    pub fn all_found(&self) -> bool {
        self.matches.iter().all(WordMatch::is_found)
    }
}

/// Locate a single word in the grid
///
/// Enumerates start positions row-major, then directions in priority
/// order, and returns the first placement whose every step stays in
/// bounds and matches case-insensitively. Returns None when no placement
/// exists anywhere in the grid.
pub fn locate(grid: &Grid, word: &Word) -> Option<Placement> {
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let start = Position::new(row, col);
            for direction in Direction::IN_PRIORITY_ORDER {
                if let Some(path) = walk(grid, word, start, direction) {
                    return Some(Placement { direction, path });
                }
            }
        }
    }
    None
}

/// Search every word in input order and collect per-word outcomes
pub fn search_words(grid: &Grid, words: &[Word]) -> SearchResult {
    let mut result = SearchResult::new();

    for word in words {
        let placement = locate(grid, word);
        match &placement {
            Some(p) => log::debug!(
                "word '{}' found at ({}, {}) heading {:?}",
                word,
                p.start().row,
                p.start().col,
                p.direction
            ),
            None => log::debug!("word '{}' not found", word),
        }
        result.push(WordMatch {
            word: word.clone(),
            placement,
        });
    }

    result
}

/// Walk `word.len()` steps from `start` along `direction`
///
/// Aborts at the first out-of-bounds cell or character mismatch.
fn walk(grid: &Grid, word: &Word, start: Position, direction: Direction) -> Option<Vec<Position>> {
    let (dr, dc) = direction.delta();
    let rows = grid.rows() as isize;
    let cols = grid.cols() as isize;

    let mut path = Vec::with_capacity(word.len());
    for (i, target) in word.chars().enumerate() {
        let row = start.row as isize + dr * i as isize;
        let col = start.col as isize + dc * i as isize;
        if row < 0 || col < 0 || row >= rows || col >= cols {
            return None;
        }

        let pos = Position::new(row as usize, col as usize);
        let cell = grid.get(pos)?;
        if !chars_match(cell, target) {
            return None;
        }
        path.push(pos);
    }

    Some(path)
}

/// Case-insensitive comparison of a grid cell against a word character
///
/// Both sides are upper-cased at the code-point level, so 'a' matches 'A'
/// while characters that upper-case to multiple code points never match a
/// single one (mirroring per-cell string upper-casing).
fn chars_match(cell: char, target: char) -> bool {
    cell == target || cell.to_uppercase().eq(target.to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_word_list;

    fn grid_from(rows: &[&str]) -> Grid {
        Grid::from_rows(rows.iter().map(|r| r.chars().collect()).collect()).unwrap()
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn test_direction_priority_order() {
        assert_eq!(
            Direction::IN_PRIORITY_ORDER,
            [
                Direction::Right,
                Direction::Left,
                Direction::Down,
                Direction::Up,
                Direction::DownRight,
                Direction::DownLeft,
                Direction::UpRight,
                Direction::UpLeft,
            ]
        );
    }

    #[test]
    fn test_locate_right() {
        let grid = grid_from(&["CAT", "XXX"]);
        let placement = locate(&grid, &word("CAT")).unwrap();

        assert_eq!(placement.direction, Direction::Right);
        assert_eq!(
            placement.path,
            vec![
                Position::new(0, 0),
                Position::new(0, 1),
                Position::new(0, 2)
            ]
        );
    }

    #[test]
    fn test_locate_reversed_word_goes_left() {
        // "TAC" spelled left-to-right means "CAT" reads right-to-left
        let grid = grid_from(&["TAC"]);
        let placement = locate(&grid, &word("CAT")).unwrap();

        assert_eq!(placement.direction, Direction::Left);
        assert_eq!(placement.start(), Position::new(0, 2));
    }

    #[test]
    fn test_locate_diagonal() {
        let grid = grid_from(&["CXX", "XAX", "XXT"]);
        let placement = locate(&grid, &word("CAT")).unwrap();

        assert_eq!(placement.direction, Direction::DownRight);
        assert_eq!(
            placement.path,
            vec![
                Position::new(0, 0),
                Position::new(1, 1),
                Position::new(2, 2)
            ]
        );
    }

    #[test]
    fn test_locate_up_left() {
        let grid = grid_from(&["TXX", "XAX", "XXC"]);
        let placement = locate(&grid, &word("CAT")).unwrap();

        assert_eq!(placement.direction, Direction::UpLeft);
        assert_eq!(placement.start(), Position::new(2, 2));
    }

    #[test]
    fn test_row_major_tie_break() {
        // Two horizontal placements; the one starting on row 0 must win
        let grid = grid_from(&["XXAB", "ABXX"]);
        let placement = locate(&grid, &word("AB")).unwrap();

        assert_eq!(placement.start(), Position::new(0, 2));
        assert_eq!(placement.direction, Direction::Right);
    }

    #[test]
    fn test_direction_priority_tie_break() {
        // From (0,0) both Right and Down spell "AB"; Right has priority
        let grid = grid_from(&["AB", "BX"]);
        let placement = locate(&grid, &word("AB")).unwrap();

        assert_eq!(placement.start(), Position::new(0, 0));
        assert_eq!(placement.direction, Direction::Right);
    }

    #[test]
    fn test_single_letter_degenerate_case() {
        // A 1-step walk succeeds identically in all 8 directions; the
        // first-priority direction must be reported
        let grid = grid_from(&["AA", "AA"]);
        let placement = locate(&grid, &word("A")).unwrap();

        assert_eq!(placement.path, vec![Position::new(0, 0)]);
        assert_eq!(placement.direction, Direction::Right);
    }

    #[test]
    fn test_case_insensitive_match() {
        let grid = grid_from(&["cat"]);
        let placement = locate(&grid, &word("CAT")).unwrap();

        assert_eq!(placement.direction, Direction::Right);
    }

    #[test]
    fn test_not_found() {
        let grid = grid_from(&["DOG"]);
        assert!(locate(&grid, &word("CAT")).is_none());
    }

    #[test]
    fn test_word_longer_than_any_line() {
        let grid = grid_from(&["CA", "AT"]);
        assert!(locate(&grid, &word("CATS")).is_none());
    }

    #[test]
    fn test_empty_grid_finds_nothing() {
        let grid = Grid::from_rows(vec![]).unwrap();
        assert!(locate(&grid, &word("CAT")).is_none());
    }

    #[test]
    fn test_locate_is_deterministic() {
        let grid = grid_from(&["ABAB", "BABA", "ABAB"]);
        let first = locate(&grid, &word("ABA"));
        let second = locate(&grid, &word("ABA"));

        assert_eq!(first, second);
    }

    #[test]
    fn test_search_words_preserves_input_order() {
        let grid = grid_from(&["CAT"]);
        let words = parse_word_list("dog,cat,bird");
        let result = search_words(&grid, &words);

        assert_eq!(result.matches.len(), 3);
        assert_eq!(result.matches[0].word.as_str(), "DOG");
        assert!(!result.matches[0].is_found());
        assert_eq!(result.matches[1].word.as_str(), "CAT");
        assert!(result.matches[1].is_found());
        assert_eq!(result.matches[2].word.as_str(), "BIRD");
        assert!(!result.matches[2].is_found());

        assert_eq!(result.found_count(), 1);
        assert_eq!(result.missing_count(), 2);
        assert!(!result.all_found());
    }

    #[test]
    fn test_path_steps_are_one_direction_apart() {
        let grid = grid_from(&["XXXX", "XCXX", "XXAX", "XXXT"]);
        let placement = locate(&grid, &word("CAT")).unwrap();
        let (dr, dc) = placement.direction.delta();

        for pair in placement.path.windows(2) {
            assert_eq!(pair[1].row as isize - pair[0].row as isize, dr);
            assert_eq!(pair[1].col as isize - pair[0].col as isize, dc);
        }
    }
}
