//! Best-effort asset loading
//!
//! The logo is the only external asset. Loading is a best-effort contract at
//! the interface boundary: a missing file, an unreadable file, or an unknown
//! extension all yield `None`, and the layout rules treat "absent" and
//! "failed" identically. Load failure never surfaces as an error.

use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// A logo ready for embedding, as a `data:` URI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Logo {
    pub href: String,
}

/// Load a logo file and encode it as a data URI.
///
/// Returns `None` when the path does not exist, cannot be read, or has an
/// extension outside the supported set (png, jpg, jpeg, gif, webp, svg).
pub fn load_logo(path: &Path) -> Option<Logo> {
    let mime = match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        _ => return None,
    };

    let bytes = std::fs::read(path).ok()?;
    Some(Logo {
        href: format!("data:{};base64,{}", mime, STANDARD.encode(bytes)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_none() {
        assert_eq!(load_logo(Path::new("/nonexistent/logo.png")), None);
    }

    #[test]
    fn test_unsupported_extension_is_none() {
        assert_eq!(load_logo(Path::new("/etc/hostname")), None);
    }

    #[test]
    fn test_load_encodes_data_uri() {
        let dir = std::env::temp_dir();
        let path = dir.join("decksmith_test_logo.png");
        std::fs::write(&path, b"fake png bytes").unwrap();
        let logo = load_logo(&path).expect("should load");
        assert!(logo.href.starts_with("data:image/png;base64,"));
        std::fs::remove_file(&path).ok();
    }
}
