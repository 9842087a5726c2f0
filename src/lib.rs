//! Decksmith - proposal decks from JSON slide specs
//!
//! This library turns a JSON presentation request (client info, theme
//! colors, an ordered list of typed slides) into a rendered SVG deck.
//! The pipeline is a pure mapping: parse the request, resolve the theme and
//! fonts once, resolve each slide to draw primitives, serialize.
//!
//! # Example
//!
//! ```rust
//! use decksmith::{generate, DeckOptions, DeckRequest};
//!
//! let request = DeckRequest::from_json(r#"{
//!     "outputPath": "deck.svg",
//!     "clientName": "Acme",
//!     "slides": [{"layout": "title", "title": "Acme Proposal"}]
//! }"#).unwrap();
//! let svg = generate(&request, &DeckOptions::default());
//! assert!(svg.contains("<svg"));
//! assert!(svg.contains("Acme Proposal"));
//! ```

pub mod assets;
pub mod deck;
pub mod error;
pub mod layout;
pub mod renderer;
pub mod request;
pub mod theme;

use std::path::Path;

pub use deck::{Deck, DrawPrimitive, Slide};
pub use error::DeckError;
pub use renderer::{render_deck, SvgConfig};
pub use request::{DeckRequest, SlideSpec};
pub use theme::{ColorTheme, FontPairing, ThemeFile};

/// Per-run knobs that are not part of the request itself
#[derive(Debug, Clone, Default)]
pub struct DeckOptions {
    /// Formatted "Month Year" label for the title slide. The CLI fills this
    /// from the current date; tests inject a fixed value.
    pub date_label: String,
    /// Palette-file overrides for color roles the request leaves unset
    pub theme_file: ThemeFile,
    /// SVG serialization options
    pub svg: SvgConfig,
}

impl DeckOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_date_label(mut self, label: impl Into<String>) -> Self {
        self.date_label = label.into();
        self
    }

    pub fn with_theme_file(mut self, theme_file: ThemeFile) -> Self {
        self.theme_file = theme_file;
        self
    }

    pub fn with_svg(mut self, svg: SvgConfig) -> Self {
        self.svg = svg;
        self
    }
}

/// Resolve a request into a deck of draw primitives.
///
/// Theme and fonts are resolved once here, then threaded through every
/// layout rule via the context. The logo is loaded best-effort: a missing or
/// unreadable file simply renders no image primitive.
pub fn build_deck(request: &DeckRequest, options: &DeckOptions) -> Deck {
    let theme = ColorTheme::resolve(&request.colors, &options.theme_file);
    let fonts = FontPairing::resolve(request.font_style.as_str());
    let logo = request
        .logo_path
        .as_deref()
        .and_then(|p| assets::load_logo(Path::new(p)));
    layout::resolve_deck(request, &theme, &fonts, logo.as_ref(), &options.date_label)
}

/// Resolve and serialize a request to the SVG deck string.
///
/// Infallible by construction: every per-field problem was defaulted at
/// parse time and no layout rule can fail.
pub fn generate(request: &DeckRequest, options: &DeckOptions) -> String {
    render_deck(&build_deck(request, options), &options.svg)
}

/// Run the whole pipeline for one request: generate the deck and write it
/// to the request's output path. Returns the output path on success.
pub fn run(request: &DeckRequest, options: &DeckOptions) -> Result<String, DeckError> {
    let svg = generate(request, options);
    std::fs::write(&request.output_path, svg).map_err(|source| DeckError::Write {
        path: request.output_path.clone(),
        source,
    })?;
    Ok(request.output_path.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_simple_deck() {
        let request = DeckRequest::from_json(
            r#"{
                "outputPath": "deck.svg",
                "clientName": "Acme",
                "companyName": "Northwind",
                "slides": [
                    {"layout": "title", "title": "Acme Proposal"},
                    {"layout": "agenda", "title": "Agenda", "bullets": ["One", "Two"]}
                ]
            }"#,
        )
        .unwrap();
        let svg = generate(&request, &DeckOptions::default());
        assert!(svg.contains("<svg"));
        assert!(svg.contains("Acme Proposal"));
        assert!(svg.contains("Agenda"));
        assert!(svg.contains("Northwind"));
    }

    #[test]
    fn test_generate_is_deterministic() {
        let request = DeckRequest::from_json(
            r#"{"outputPath": "d.svg", "slides": [{"layout": "stats", "title": "S",
                "stats": [{"value": "7", "label": "wins"}]}]}"#,
        )
        .unwrap();
        let options = DeckOptions::new().with_date_label("March 2026");
        assert_eq!(generate(&request, &options), generate(&request, &options));
    }

    #[test]
    fn test_missing_logo_renders_no_image() {
        let request = DeckRequest::from_json(
            r#"{"outputPath": "d.svg", "logoPath": "/nope/logo.png",
                "slides": [{"layout": "title", "title": "T"}]}"#,
        )
        .unwrap();
        let deck = build_deck(&request, &DeckOptions::default());
        assert_eq!(deck.slides[0].image_count(), 0);
    }

    #[test]
    fn test_run_reports_write_failure() {
        let request = DeckRequest::from_json(
            r#"{"outputPath": "/no/such/dir/deck.svg", "slides": []}"#,
        )
        .unwrap();
        let err = run(&request, &DeckOptions::default()).unwrap_err();
        assert!(matches!(err, DeckError::Write { .. }));
    }

    #[test]
    fn test_run_writes_the_deck() {
        let path = std::env::temp_dir().join("decksmith_lib_test.svg");
        let request = DeckRequest::from_json(&format!(
            r#"{{"outputPath": "{}", "slides": [{{"layout": "closing"}}]}}"#,
            path.display()
        ))
        .unwrap();
        let written = run(&request, &DeckOptions::default()).unwrap();
        assert_eq!(written, path.display().to_string());
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("Thank You"));
        std::fs::remove_file(&path).ok();
    }
}
