//! Bundled icon artwork.
//!
//! Every [`Symbol`] ships as a plain/filled SVG pair drawn in white so the
//! rating bar can tint it to any color at paint time.

use std::borrow::Cow;

use egui::{include_image, ImageSource};
use rateink_core::Symbol;

/// Plain and filled artwork for one glyph.
#[derive(Clone)]
pub struct IconPair {
    /// Artwork for an unselected position.
    pub plain: ImageSource<'static>,
    /// Artwork for a selected position.
    pub filled: ImageSource<'static>,
}

/// Bundled artwork for a symbol.
pub fn symbol_icon_pair(symbol: Symbol) -> IconPair {
    match symbol {
        Symbol::Bell => IconPair {
            plain: include_image!("../assets/bell.svg"),
            filled: include_image!("../assets/bell.fill.svg"),
        },
        Symbol::Bookmark => IconPair {
            plain: include_image!("../assets/bookmark.svg"),
            filled: include_image!("../assets/bookmark.fill.svg"),
        },
        Symbol::Diamond => IconPair {
            plain: include_image!("../assets/diamond.svg"),
            filled: include_image!("../assets/diamond.fill.svg"),
        },
        Symbol::Eye => IconPair {
            plain: include_image!("../assets/eye.svg"),
            filled: include_image!("../assets/eye.fill.svg"),
        },
        Symbol::Flag => IconPair {
            plain: include_image!("../assets/flag.svg"),
            filled: include_image!("../assets/flag.fill.svg"),
        },
        Symbol::Heart => IconPair {
            plain: include_image!("../assets/heart.svg"),
            filled: include_image!("../assets/heart.fill.svg"),
        },
        Symbol::Pencil => IconPair {
            plain: include_image!("../assets/pencil.svg"),
            filled: include_image!("../assets/pencil.fill.svg"),
        },
        Symbol::Person => IconPair {
            plain: include_image!("../assets/person.svg"),
            filled: include_image!("../assets/person.fill.svg"),
        },
        Symbol::Pin => IconPair {
            plain: include_image!("../assets/pin.svg"),
            filled: include_image!("../assets/pin.fill.svg"),
        },
        Symbol::Star => IconPair {
            plain: include_image!("../assets/star.svg"),
            filled: include_image!("../assets/star.fill.svg"),
        },
        Symbol::ThumbsUp => IconPair {
            plain: include_image!("../assets/thumbs-up.svg"),
            filled: include_image!("../assets/thumbs-up.fill.svg"),
        },
        Symbol::Tag => IconPair {
            plain: include_image!("../assets/tag.svg"),
            filled: include_image!("../assets/tag.fill.svg"),
        },
        Symbol::Trash => IconPair {
            plain: include_image!("../assets/trash.svg"),
            filled: include_image!("../assets/trash.fill.svg"),
        },
    }
}

/// Artwork for a caller-registered pair of image URIs.
pub fn custom_icon_pair(plain: &str, filled: &str) -> IconPair {
    IconPair {
        plain: ImageSource::Uri(Cow::Owned(plain.to_string())),
        filled: ImageSource::Uri(Cow::Owned(filled.to_string())),
    }
}

/// Artwork for the clear control.
pub fn clear_icon() -> ImageSource<'static> {
    include_image!("../assets/x-circle.svg")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_symbol_has_a_pair() {
        for symbol in Symbol::ALL {
            let pair = symbol_icon_pair(symbol);
            let plain = pair.plain.uri().unwrap();
            let filled = pair.filled.uri().unwrap();
            assert!(plain.contains(symbol.name()), "{}", plain);
            assert!(filled.contains(".fill.svg"), "{}", filled);
            assert_ne!(plain, filled);
        }
    }

    #[test]
    fn test_custom_pair_keeps_uris() {
        let pair = custom_icon_pair("bytes://ball.svg", "bytes://ball.fill.svg");
        assert_eq!(pair.plain.uri(), Some("bytes://ball.svg"));
        assert_eq!(pair.filled.uri(), Some("bytes://ball.fill.svg"));
    }

    #[test]
    fn test_clear_icon_uri() {
        assert!(clear_icon().uri().unwrap().contains("x-circle.svg"));
    }
}
