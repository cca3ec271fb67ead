//! JSON Renderer
//!
//! Serializes the artifact for downstream tooling. Cells carry their
//! highlight color (or null) and words their found flag, so a consumer can
//! rebuild the same view the HTML renderer shows.

use super::artifact::Artifact;
use super::ArtifactRenderer;

/// Renders the artifact as pretty-printed JSON
#[derive(Debug, Clone, Copy)]
pub struct JsonRenderer;

impl JsonRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ArtifactRenderer for JsonRenderer {
    fn render(&self, artifact: &Artifact) -> String {
        match serde_json::to_string_pretty(artifact) {
            Ok(json) => json,
            Err(e) => {
                log::error!("Failed to serialize artifact: {}", e);
                self.render_error(&e.to_string())
            }
        }
    }

    fn render_error(&self, message: &str) -> String {
        serde_json::json!({ "error": message }).to_string()
    }
}
