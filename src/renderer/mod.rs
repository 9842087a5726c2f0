//! Deck rendering to SVG

mod config;
mod svg;

pub use config::SvgConfig;
pub use svg::render_deck;
