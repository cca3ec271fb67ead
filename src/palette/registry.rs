//! Palette Registry
//!
//! Simple in-memory registry: the embedded default palette plus any
//! palettes found in user palette directories.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::schema::{Color, Palette};

/// Name of the embedded default palette
pub const DEFAULT_PALETTE: &str = "classic";

/// File suffix recognized when scanning palette directories
const PALETTE_FILE_SUFFIX: &str = ".palette.toml";

/// Simple in-memory palette registry
#[derive(Debug, Clone)]
pub struct PaletteRegistry {
    palettes: HashMap<String, Palette>,
    active_palette: Option<String>,
}

impl Default for PaletteRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl PaletteRegistry {
    pub fn new() -> Self {
        Self {
            palettes: HashMap::new(),
            active_palette: None,
        }
    }

    /// Add a palette to the registry, replacing any same-named one
    pub fn add_palette(&mut self, palette: Palette) {
        self.palettes.insert(palette.name.clone(), palette);
    }

    /// Set the active palette; fails when the name is unknown
    pub fn set_active_palette(&mut self, name: &str) -> bool {
        if self.palettes.contains_key(name) {
            self.active_palette = Some(name.to_string());
            true
        } else {
            false
        }
    }

    /// The currently active palette
    pub fn get_active_palette(&self) -> Option<&Palette> {
        self.active_palette
            .as_ref()
            .and_then(|name| self.palettes.get(name))
    }

    /// Look up a palette by name
    pub fn get_palette(&self, name: &str) -> Option<&Palette> {
        self.palettes.get(name)
    }

    /// List all registered palette names
    pub fn list_palettes(&self) -> Vec<&str> {
        self.palettes.keys().map(|s| s.as_str()).collect()
    }

    /// Add the embedded "classic" palette (12 highlight colors)
    pub fn add_embedded_classic_palette(&mut self) {
        let embedded_toml = include_str!("../../resources/palettes/classic.palette.toml");

        match Palette::from_toml_str(embedded_toml) {
            Ok(palette) => self.add_palette(palette),
            Err(e) => {
                // Fallback to a minimal palette if parsing fails
                log::warn!("Failed to parse embedded classic palette: {e}. Using minimal fallback.");
                self.add_minimal_fallback_palette();
            }
        }
    }

    /// Minimal 8-color fallback in case embedded TOML parsing fails
    fn add_minimal_fallback_palette(&mut self) {
        let colors = vec![
            Color::new(0xFF, 0x6B, 0x6B),
            Color::new(0x4E, 0xCD, 0xC4),
            Color::new(0x45, 0xB7, 0xD1),
            Color::new(0x96, 0xCE, 0xB4),
            Color::new(0xFF, 0xEA, 0xA7),
            Color::new(0xDD, 0xA0, 0xDD),
            Color::new(0x98, 0xD8, 0xC8),
            Color::new(0xF7, 0xDC, 0x6F),
        ];

        match Palette::from_colors(DEFAULT_PALETTE, colors) {
            Ok(palette) => self.add_palette(palette),
            Err(e) => log::error!("Failed to build fallback palette: {e}"),
        }
    }

    /// Load every `*.palette.toml` file in a directory
    ///
    /// Unreadable or invalid files are skipped with a warning so one bad
    /// palette never blocks the run. Returns the number of palettes loaded.
    pub fn load_palette_dir(&mut self, dir: &Path) -> usize {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                log::debug!("Skipping palette directory {}: {e}", dir.display());
                return 0;
            }
        };

        let mut loaded = 0;
        for entry in entries.flatten() {
            let path = entry.path();
            let is_palette_file = path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.ends_with(PALETTE_FILE_SUFFIX));
            if !is_palette_file {
                continue;
            }

            let text = match fs::read_to_string(&path) {
                Ok(text) => text,
                Err(e) => {
                    log::warn!("Failed to read palette file {}: {e}", path.display());
                    continue;
                }
            };

            match Palette::from_toml_str(&text) {
                Ok(palette) => {
                    log::debug!("Loaded palette '{}' from {}", palette.name, path.display());
                    self.add_palette(palette);
                    loaded += 1;
                }
                Err(e) => {
                    log::warn!("Skipping invalid palette file {}: {e}", path.display());
                }
            }
        }

        loaded
    }
}
