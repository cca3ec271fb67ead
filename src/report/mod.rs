//! Report Rendering
//!
//! Builds the render artifact and serializes it through pluggable output
//! strategies (HTML, terminal text, JSON). The artifact is the contract;
//! renderers are interchangeable projections of it.

pub mod artifact;
pub mod html;
pub mod json;
pub mod text;

pub use artifact::{build_artifact, Artifact, CellView, WordStatus};
pub use html::HtmlRenderer;
pub use json::JsonRenderer;
pub use text::TextRenderer;

use clap::ValueEnum;

/// Output formats the solver can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Standalone HTML page with a colored grid table
    Html,
    /// Terminal text, with ANSI colors unless disabled
    Text,
    /// Machine-readable JSON serialization of the artifact
    Json,
}

/// Serialization strategy turning an artifact into final output
pub trait ArtifactRenderer {
    /// Render a complete artifact
    fn render(&self, artifact: &Artifact) -> String;

    /// Render a structural-error report in place of the artifact
    fn render_error(&self, message: &str) -> String;
}

/// Renderer instance for an output format
pub fn renderer_for(format: OutputFormat, color: bool) -> Box<dyn ArtifactRenderer> {
    match format {
        OutputFormat::Html => Box::new(HtmlRenderer::new()),
        OutputFormat::Text => Box::new(TextRenderer::new(color)),
        OutputFormat::Json => Box::new(JsonRenderer::new()),
    }
}
