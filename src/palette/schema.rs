//! Palette Schema Types
//!
//! TOML-facing palette definitions and the runtime palette used by the
//! renderer. Color assignment cycles through the palette by word index,
//! so every word gets a deterministic color regardless of search outcome.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading or validating palettes
#[derive(Debug, Error)]
pub enum PaletteError {
    /// A color value is not of the form #RRGGBB
    #[error("invalid color {value:?}: expected #RRGGBB")]
    InvalidColor { value: String },
    /// A palette defines no colors (index cycling needs at least one)
    #[error("palette {name:?} defines no colors")]
    Empty { name: String },
    /// The palette file is not valid TOML
    #[error("palette file is not valid TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// A 24-bit RGB highlight color, written as #RRGGBB
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Hex form with a leading '#', upper-case digits
    pub fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PaletteError::InvalidColor {
            value: s.to_string(),
        };

        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| invalid())?;
        let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| invalid())?;
        let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| invalid())?;
        Ok(Self { r, g, b })
    }
}

impl TryFrom<String> for Color {
    type Error = PaletteError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.hex()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

/// Root palette file structure (matches TOML)
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PaletteFile {
    pub palette: PaletteMeta,
    pub colors: Vec<ColorDef>,
}

/// Palette metadata
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PaletteMeta {
    pub name: String,
    pub description: Option<String>,
}

/// One color entry in a palette file
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ColorDef {
    pub name: Option<String>,
    pub value: Color,
}

/// Runtime palette (ordered, non-empty)
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub name: String,
    pub description: Option<String>,
    colors: Vec<Color>,
}

impl Palette {
    /// Build a palette from explicit colors, rejecting an empty list
    pub fn from_colors(name: &str, colors: Vec<Color>) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::Empty {
                name: name.to_string(),
            });
        }
        Ok(Self {
            name: name.to_string(),
            description: None,
            colors,
        })
    }

    /// Parse a palette TOML document into a validated runtime palette
    pub fn from_toml_str(text: &str) -> Result<Self, PaletteError> {
        let file: PaletteFile = toml::from_str(text)?;
        Self::try_from(file)
    }

    /// Color for the word at `index`, cycling when the index exceeds the
    /// palette length (`index mod len`)
    pub fn color_for(&self, index: usize) -> Color {
        self.colors[index % self.colors.len()]
    }

    /// Number of colors before cycling repeats
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false; palettes reject empty color lists at construction
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl TryFrom<PaletteFile> for Palette {
    type Error = PaletteError;

    fn try_from(file: PaletteFile) -> Result<Self, Self::Error> {
        if file.colors.is_empty() {
            return Err(PaletteError::Empty {
                name: file.palette.name,
            });
        }

        Ok(Self {
            name: file.palette.name,
            description: file.palette.description,
            colors: file.colors.into_iter().map(|c| c.value).collect(),
        })
    }
}
