//! HTML Renderer
//!
//! Emits a standalone HTML page: the letter grid as a bordered table with
//! highlight backgrounds, next to a two-column word list with found /
//! not-found markers.

use super::artifact::Artifact;
use super::ArtifactRenderer;

/// Page stylesheet (dark theme, grid table next to the word list)
const PAGE_STYLE: &str = "\
    body { font-family: 'Segoe UI', sans-serif; background: #1a1a2e; color: #eee; padding: 20px; }
    h2 { color: #4ECDC4; }
    table { border-collapse: separate; border-spacing: 3px; margin-bottom: 30px; }
    ul { list-style: none; padding: 0; columns: 2; }
    li { padding: 4px 8px; margin: 2px 0; font-size: 15px; }
    .container { display: flex; gap: 40px; flex-wrap: wrap; }
    .word-list { background: #16213e; padding: 16px; border-radius: 8px; min-width: 200px; }
    .word-list h3 { color: #4ECDC4; margin-top: 0; }
";

const CELL_SIZE: &str = "36px";

/// Renders the artifact as a standalone HTML document
#[derive(Debug, Clone, Copy)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ArtifactRenderer for HtmlRenderer {
    fn render(&self, artifact: &Artifact) -> String {
        let mut table_rows = String::new();
        for row in &artifact.cells {
            table_rows.push_str("<tr>");
            for cell in row {
                let (bg, fg) = match cell.highlight {
                    Some(color) => (color.hex(), "#000"),
                    None => ("transparent".to_string(), "#ccc"),
                };
                let letter: String = cell.ch.to_uppercase().collect();
                table_rows.push_str(&format!(
                    "<td style=\"width:{size};height:{size};text-align:center;\
                     vertical-align:middle;font-weight:bold;font-size:14px;\
                     background:{bg};color:{fg};border:1px solid #333;\
                     border-radius:4px;\">{}</td>",
                    escape_html(&letter),
                    size = CELL_SIZE,
                ));
            }
            table_rows.push_str("</tr>");
        }

        let mut word_items = String::new();
        for status in &artifact.words {
            if status.found {
                word_items.push_str(&format!(
                    "<li style=\"color:{}; font-weight:bold;\">✓ {}</li>\n",
                    status.color.hex(),
                    escape_html(status.word.as_str()),
                ));
            } else {
                word_items.push_str(&format!(
                    "<li style=\"color:#aaa;\">✗ {} (not found)</li>\n",
                    escape_html(status.word.as_str()),
                ));
            }
        }

        let mut html = String::new();
        html.push_str("<!DOCTYPE html>\n<html>\n<head>\n  <style>\n");
        html.push_str(PAGE_STYLE);
        html.push_str("  </style>\n</head>\n<body>\n  <h2>Word Grid Finder</h2>\n");
        html.push_str("  <div class=\"container\">\n    <div>\n      <table>");
        html.push_str(&table_rows);
        html.push_str("</table>\n    </div>\n    <div class=\"word-list\">\n");
        html.push_str("      <h3>Words</h3>\n      <ul>");
        html.push_str(&word_items);
        html.push_str("</ul>\n    </div>\n  </div>\n</body>\n</html>\n");
        html
    }

    fn render_error(&self, message: &str) -> String {
        format!("<p>Error parsing grid: {}</p>\n", escape_html(message))
    }
}

/// Escape text for use inside an HTML text node
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
