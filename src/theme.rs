//! Theme and font resolution
//!
//! Resolves a possibly-partial eight-role color map and a font-style key into
//! a fully-populated [`ColorTheme`] and [`FontPairing`]. Both resolutions are
//! total: every input, including the empty one, produces a usable theme.
//! Resolution happens once per deck, never per slide.
//!
//! An optional TOML palette file (`--theme`) can supply per-role overrides,
//! using the same `[colors]` table shape as a stylesheet:
//!
//! ```toml
//! [colors]
//! primary = "#1E2761"
//! accent = "4A90D9"
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::request::RawColors;

/// Documented defaults for the eight color roles
pub const DEFAULT_PRIMARY: &str = "#1E2761";
pub const DEFAULT_SECONDARY: &str = "#CADCFC";
pub const DEFAULT_ACCENT: &str = "#4A90D9";
pub const DEFAULT_DARK: &str = "#0F1629";
pub const DEFAULT_LIGHT: &str = "#F8F9FA";
pub const DEFAULT_TEXT_DARK: &str = "#1A1A2E";
pub const DEFAULT_TEXT_LIGHT: &str = "#FFFFFF";
pub const DEFAULT_TEXT_MUTED: &str = "#6B7280";

/// Errors that can occur when loading a palette file
#[derive(Error, Debug)]
pub enum ThemeFileError {
    #[error("failed to read theme file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse theme TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// A palette file mapping color roles to hex values
#[derive(Debug, Clone, Default)]
pub struct ThemeFile {
    /// Role name -> hex color; unknown roles are ignored at resolution
    pub colors: HashMap<String, String>,
}

#[derive(Deserialize)]
struct TomlTheme {
    #[serde(default)]
    colors: HashMap<String, String>,
}

impl ThemeFile {
    /// Load a palette from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ThemeFileError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load a palette from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, ThemeFileError> {
        let parsed: TomlTheme = toml::from_str(content)?;
        Ok(Self {
            colors: parsed.colors,
        })
    }

    fn get(&self, role: &str) -> Option<&str> {
        self.colors.get(role).map(|s| s.as_str())
    }
}

/// The resolved set of eight colors applied uniformly across one deck
///
/// Every value carries a leading `#`. Exactly these eight roles exist; no
/// layout rule references any other color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorTheme {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub dark: String,
    pub light: String,
    pub text_dark: String,
    pub text_light: String,
    pub text_muted: String,
}

impl ColorTheme {
    /// Resolve request colors against a palette file and the defaults.
    ///
    /// Precedence per role: request value, then palette file, then default.
    pub fn resolve(raw: &RawColors, file: &ThemeFile) -> Self {
        let pick = |value: &Option<String>, role: &str, default: &str| -> String {
            value
                .as_deref()
                .and_then(normalize_hex)
                .or_else(|| file.get(role).and_then(normalize_hex))
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            primary: pick(&raw.primary, "primary", DEFAULT_PRIMARY),
            secondary: pick(&raw.secondary, "secondary", DEFAULT_SECONDARY),
            accent: pick(&raw.accent, "accent", DEFAULT_ACCENT),
            dark: pick(&raw.dark, "dark", DEFAULT_DARK),
            light: pick(&raw.light, "light", DEFAULT_LIGHT),
            text_dark: pick(&raw.text_dark, "textDark", DEFAULT_TEXT_DARK),
            text_light: pick(&raw.text_light, "textLight", DEFAULT_TEXT_LIGHT),
            text_muted: pick(&raw.text_muted, "textMuted", DEFAULT_TEXT_MUTED),
        }
    }
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self::resolve(&RawColors::default(), &ThemeFile::default())
    }
}

/// Normalize a hex color to `#rrggbb` form; empty strings resolve to None
/// so the role falls through to the next source.
fn normalize_hex(value: &str) -> Option<String> {
    let trimmed = value.trim().trim_start_matches('#');
    if trimmed.is_empty() {
        return None;
    }
    Some(format!("#{trimmed}"))
}

/// A header/body font family pair resolved from a font-style key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontPairing {
    pub header: &'static str,
    pub body: &'static str,
}

impl FontPairing {
    /// Resolve a font-style key to a pairing. The mapping is total:
    /// unknown or empty keys take the aptos pairing.
    pub fn resolve(key: &str) -> Self {
        let (header, body) = match key.trim().to_ascii_lowercase().as_str() {
            "georgia" => ("Georgia", "Georgia"),
            "arial" => ("Arial Black", "Arial"),
            "trebuchet" => ("Trebuchet MS", "Trebuchet MS"),
            "palatino" => ("Palatino Linotype", "Book Antiqua"),
            "cambria" => ("Cambria", "Calibri"),
            // "aptos" and everything else
            _ => ("Aptos Display", "Aptos"),
        };
        Self { header, body }
    }
}

impl Default for FontPairing {
    fn default() -> Self {
        Self::resolve("aptos")
    }
}
