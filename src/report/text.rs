//! Text Renderer
//!
//! Terminal output: the grid as space-separated letters with truecolor
//! background highlights, followed by the word list. Escape sequences are
//! suppressed when color is disabled so the output stays pipe-friendly.

use super::artifact::Artifact;
use super::ArtifactRenderer;

const RESET: &str = "\x1b[0m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";

/// Renders the artifact as plain or ANSI-colored terminal text
#[derive(Debug, Clone, Copy)]
pub struct TextRenderer {
    color: bool,
}

impl TextRenderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }
}

impl ArtifactRenderer for TextRenderer {
    fn render(&self, artifact: &Artifact) -> String {
        let mut out = String::new();

        for row in &artifact.cells {
            let mut line = String::new();
            for (col, cell) in row.iter().enumerate() {
                if col > 0 {
                    line.push(' ');
                }
                let letter: String = cell.ch.to_uppercase().collect();
                match cell.highlight {
                    Some(color) if self.color => {
                        // Black text on the word's background color
                        line.push_str(&format!(
                            "\x1b[30;48;2;{};{};{}m{}{}",
                            color.r, color.g, color.b, letter, RESET
                        ));
                    }
                    _ => line.push_str(&letter),
                }
            }
            out.push_str(&line);
            out.push('\n');
        }

        if !artifact.words.is_empty() {
            out.push('\n');
            out.push_str("Words:\n");
            for status in &artifact.words {
                if status.found {
                    if self.color {
                        out.push_str(&format!(
                            "{}\x1b[38;2;{};{};{}m✓ {}{}\n",
                            BOLD,
                            status.color.r,
                            status.color.g,
                            status.color.b,
                            status.word,
                            RESET
                        ));
                    } else {
                        out.push_str(&format!("✓ {}\n", status.word));
                    }
                } else if self.color {
                    out.push_str(&format!("{}✗ {} (not found){}\n", DIM, status.word, RESET));
                } else {
                    out.push_str(&format!("✗ {} (not found)\n", status.word));
                }
            }
        }

        out
    }

    fn render_error(&self, message: &str) -> String {
        format!("Error parsing grid: {}\n", message)
    }
}
