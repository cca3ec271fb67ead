//! Configuration management for the word grid solver.
//!
//! Handles:
//! - Command-line argument parsing
//! - Palette directory configuration

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::report::OutputFormat;

/// Command-line arguments for the word grid solver
#[derive(Debug, Parser)]
#[command(name = "wordgrid")]
#[command(about = "Find words in a letter grid and render the solution")]
#[command(version)]
pub struct Args {
    /// Path to the grid JSON file ('-' reads from stdin)
    #[arg(long, help = "Grid file: JSON array of rows of single-character strings ('-' for stdin)")]
    pub grid: PathBuf,

    /// Path to a file with the words to search for
    #[arg(long, help = "File with words separated by commas or newlines")]
    pub words: Option<PathBuf>,

    /// Words to search for, passed inline
    #[arg(long, conflicts_with = "words", help = "Words separated by commas or newlines")]
    pub words_text: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write the rendered output to this file instead of stdout
    #[arg(long, help = "Output file (defaults to stdout)")]
    pub output: Option<PathBuf>,

    /// Explicitly specify the color palette to use
    #[arg(long, help = "Color palette to use (e.g., 'classic')")]
    pub palette: Option<String>,

    /// Custom palette directory to search for palette files
    #[arg(long, help = "Directory containing palette TOML files")]
    pub palette_dir: Option<PathBuf>,

    /// Disable ANSI colors in text output
    #[arg(long)]
    pub no_color: bool,

    /// Log level for the solver
    #[arg(
        long,
        default_value = "info",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    /// Grid input path ('-' means stdin)
    pub grid: PathBuf,
    /// Word list file, if given
    pub words: Option<PathBuf>,
    /// Inline word list, if given
    pub words_text: Option<String>,
    /// Output format
    pub format: OutputFormat,
    /// Output file (None means stdout)
    pub output: Option<PathBuf>,
    /// Palette name explicitly set via command line
    pub cli_palette: Option<String>,
    /// Custom palette directories to search
    pub palette_dirs: Vec<PathBuf>,
    /// Whether text output may use ANSI colors
    pub color: bool,
    /// Log level
    pub log_level: String,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        // Determine palette directories
        let mut palette_dirs = Vec::new();

        // Add user-specified directory if provided
        if let Some(custom_dir) = args.palette_dir {
            palette_dirs.push(custom_dir);
        }

        // Add default user config directory
        if let Some(config_dir) = dirs::config_dir() {
            palette_dirs.push(config_dir.join("wordgrid").join("palettes"));
        }

        Ok(Config {
            grid: args.grid,
            words: args.words,
            words_text: args.words_text,
            format: args.format,
            output: args.output,
            cli_palette: args.palette,
            palette_dirs,
            color: !args.no_color,
            log_level: args.log_level,
        })
    }

    /// Get the effective palette name from CLI arguments
    pub fn get_effective_palette(&self) -> Option<String> {
        self.cli_palette.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Config {
        Config::from_args(Args::parse_from(argv)).unwrap()
    }

    #[test]
    fn test_minimal_arguments() {
        let config = parse(&["wordgrid", "--grid", "puzzle.json"]);

        assert_eq!(config.grid, PathBuf::from("puzzle.json"));
        assert!(config.words.is_none());
        assert!(config.words_text.is_none());
        assert!(matches!(config.format, OutputFormat::Text));
        assert!(config.color);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_palette_dir_precedes_config_dir() {
        let config = parse(&[
            "wordgrid",
            "--grid",
            "-",
            "--palette-dir",
            "/tmp/palettes",
        ]);

        assert_eq!(config.palette_dirs[0], PathBuf::from("/tmp/palettes"));
    }

    #[test]
    fn test_format_and_output_flags() {
        let config = parse(&[
            "wordgrid",
            "--grid",
            "g.json",
            "--format",
            "html",
            "--output",
            "out.html",
            "--no-color",
        ]);

        assert!(matches!(config.format, OutputFormat::Html));
        assert_eq!(config.output, Some(PathBuf::from("out.html")));
        assert!(!config.color);
    }

    #[test]
    fn test_words_sources_conflict() {
        let result = Args::try_parse_from([
            "wordgrid",
            "--grid",
            "g.json",
            "--words",
            "w.txt",
            "--words-text",
            "cat,dog",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_effective_palette() {
        let config = parse(&["wordgrid", "--grid", "g.json", "--palette", "classic"]);
        assert_eq!(config.get_effective_palette(), Some("classic".to_string()));
    }
}
