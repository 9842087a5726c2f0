//! Error types for the deck pipeline
//!
//! Failure is coarse by design: a malformed request or a failed write aborts
//! the whole run and nothing is written. Per-field input problems never reach
//! here (they default at parse time), and logo failures are absorbed at the
//! asset boundary.

use thiserror::Error;

use crate::theme::ThemeFileError;

/// Errors that can abort a deck run
#[derive(Debug, Error)]
pub enum DeckError {
    /// The request JSON could not be parsed
    #[error("invalid request: {0}")]
    Parse(#[from] serde_json::Error),

    /// The request input could not be read
    #[error("failed to read request from '{path}': {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    /// The finished deck could not be written to the output path
    #[error("failed to write deck to '{path}': {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },

    /// The `--theme` palette file could not be loaded
    #[error(transparent)]
    Theme(#[from] ThemeFileError),
}
