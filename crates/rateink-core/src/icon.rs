//! Icon selection for the rating bar.
//!
//! A rating bar picks its glyph artwork in one of three ways: a bundled
//! [`Symbol`], a symbol name looked up at render time, or a caller-registered
//! asset pair. [`IconSource`] captures the choice and [`IconSource::resolve`]
//! collapses it into something a renderer can draw.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::symbol::Symbol;

/// Icon errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IconError {
    #[error("Unknown symbol name: {0}")]
    UnknownSymbol(String),
}

/// Result type for icon operations.
pub type IconResult<T> = Result<T, IconError>;

/// How the rating bar chooses its glyph artwork.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum IconSource {
    /// A bundled symbol.
    Symbol(Symbol),
    /// A bundled symbol selected by name. Unknown names resolve to the
    /// default symbol instead of failing.
    Named(String),
    /// A caller-registered image by URI. The filled companion URI is derived
    /// with [`fill_companion`]; both images must be registered for the pair
    /// to be usable.
    Custom(String),
}

impl Default for IconSource {
    fn default() -> Self {
        IconSource::Symbol(Symbol::default())
    }
}

/// An [`IconSource`] resolved to drawable artwork.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedIcon {
    /// Bundled plain/filled pair for a symbol.
    Builtin(Symbol),
    /// Caller-registered plain/filled pair of image URIs.
    AssetPair { plain: String, filled: String },
}

impl IconSource {
    /// A bundled symbol selected by name.
    pub fn named(name: impl Into<String>) -> Self {
        IconSource::Named(name.into())
    }

    /// A caller-registered image by URI.
    pub fn custom(uri: impl Into<String>) -> Self {
        IconSource::Custom(uri.into())
    }

    /// Resolve to drawable artwork. Never fails: an unknown symbol name
    /// falls back to [`Symbol::Star`] with a warning, matching what
    /// [`IconSource::validate`] reports.
    pub fn resolve(&self) -> ResolvedIcon {
        match self {
            IconSource::Symbol(symbol) => ResolvedIcon::Builtin(*symbol),
            IconSource::Named(name) => match Symbol::from_name(name) {
                Some(symbol) => ResolvedIcon::Builtin(symbol),
                None => {
                    log::warn!("Unknown symbol name '{}', falling back to star", name);
                    ResolvedIcon::Builtin(Symbol::Star)
                }
            },
            IconSource::Custom(uri) => ResolvedIcon::AssetPair {
                plain: uri.clone(),
                filled: fill_companion(uri),
            },
        }
    }

    /// Check whether [`IconSource::resolve`] would succeed without falling
    /// back. Lets callers surface a bad symbol name early instead of
    /// shipping a bar that silently renders stars.
    pub fn validate(&self) -> IconResult<()> {
        match self {
            IconSource::Named(name) if Symbol::from_name(name).is_none() => {
                Err(IconError::UnknownSymbol(name.clone()))
            }
            _ => Ok(()),
        }
    }
}

/// Image file extensions that keep their position when deriving the filled
/// companion URI.
const IMAGE_EXTENSIONS: [&str; 5] = ["svg", "png", "jpg", "jpeg", "webp"];

/// Derive the filled-companion URI for a custom asset.
///
/// Appends `.fill` to the base URI. When the URI ends in a recognized image
/// extension, `.fill` is inserted before it so the extension still drives
/// loader selection:
///
/// - `bytes://ball.svg` becomes `bytes://ball.fill.svg`
/// - `ball` becomes `ball.fill`
pub fn fill_companion(base: &str) -> String {
    if let Some((stem, ext)) = base.rsplit_once('.') {
        if !stem.is_empty() && IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()) {
            return format!("{}.fill.{}", stem, ext);
        }
    }
    format!("{}.fill", base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_symbol() {
        let source = IconSource::Symbol(Symbol::Heart);
        assert_eq!(source.resolve(), ResolvedIcon::Builtin(Symbol::Heart));
    }

    #[test]
    fn test_resolve_named() {
        let source = IconSource::named("pin");
        assert_eq!(source.resolve(), ResolvedIcon::Builtin(Symbol::Pin));
    }

    #[test]
    fn test_resolve_unknown_name_falls_back_to_star() {
        let source = IconSource::named("starfish");
        assert_eq!(source.resolve(), ResolvedIcon::Builtin(Symbol::Star));
    }

    #[test]
    fn test_resolve_custom_derives_filled_uri() {
        let source = IconSource::custom("bytes://ball.svg");
        assert_eq!(
            source.resolve(),
            ResolvedIcon::AssetPair {
                plain: "bytes://ball.svg".to_string(),
                filled: "bytes://ball.fill.svg".to_string(),
            }
        );
    }

    #[test]
    fn test_validate() {
        assert!(IconSource::Symbol(Symbol::Flag).validate().is_ok());
        assert!(IconSource::named("flag").validate().is_ok());
        assert!(IconSource::custom("anything").validate().is_ok());
        assert_eq!(
            IconSource::named("starfish").validate(),
            Err(IconError::UnknownSymbol("starfish".to_string()))
        );
    }

    #[test]
    fn test_fill_companion_with_extension() {
        assert_eq!(fill_companion("bytes://ball.svg"), "bytes://ball.fill.svg");
        assert_eq!(fill_companion("file://a/b.PNG"), "file://a/b.fill.PNG");
    }

    #[test]
    fn test_fill_companion_without_extension() {
        assert_eq!(fill_companion("ball"), "ball.fill");
        assert_eq!(fill_companion("bytes://ball"), "bytes://ball.fill");
    }

    #[test]
    fn test_fill_companion_unrecognized_extension() {
        assert_eq!(fill_companion("archive.tar"), "archive.tar.fill");
    }

    #[test]
    fn test_default_source_is_star() {
        assert_eq!(
            IconSource::default().resolve(),
            ResolvedIcon::Builtin(Symbol::Star)
        );
    }

    #[test]
    fn test_source_serde_round_trip() {
        for source in [
            IconSource::Symbol(Symbol::Diamond),
            IconSource::named("eye"),
            IconSource::custom("bytes://ball.svg"),
        ] {
            let json = serde_json::to_string(&source).unwrap();
            let back: IconSource = serde_json::from_str(&json).unwrap();
            assert_eq!(back, source);
        }
    }
}
