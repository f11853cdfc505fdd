//! Built-in symbol identifiers for rating glyphs.

use serde::{Deserialize, Serialize};

use crate::icon::IconError;

/// Bundled rating symbols.
///
/// Every symbol ships as a plain/filled image pair, so a rating bar built
/// from one never needs caller-provided assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Symbol {
    Bell,
    Bookmark,
    Diamond,
    Eye,
    Flag,
    Heart,
    Pencil,
    Person,
    Pin,
    #[default]
    Star,
    ThumbsUp,
    Tag,
    Trash,
}

impl Symbol {
    /// All bundled symbols.
    pub const ALL: [Symbol; 13] = [
        Symbol::Bell,
        Symbol::Bookmark,
        Symbol::Diamond,
        Symbol::Eye,
        Symbol::Flag,
        Symbol::Heart,
        Symbol::Pencil,
        Symbol::Person,
        Symbol::Pin,
        Symbol::Star,
        Symbol::ThumbsUp,
        Symbol::Tag,
        Symbol::Trash,
    ];

    /// Canonical name, as accepted by [`Symbol::from_name`].
    pub const fn name(self) -> &'static str {
        match self {
            Symbol::Bell => "bell",
            Symbol::Bookmark => "bookmark",
            Symbol::Diamond => "diamond",
            Symbol::Eye => "eye",
            Symbol::Flag => "flag",
            Symbol::Heart => "heart",
            Symbol::Pencil => "pencil",
            Symbol::Person => "person",
            Symbol::Pin => "pin",
            Symbol::Star => "star",
            Symbol::ThumbsUp => "thumbs-up",
            Symbol::Tag => "tag",
            Symbol::Trash => "trash",
        }
    }

    /// Look up a symbol by its canonical name.
    pub fn from_name(name: &str) -> Option<Symbol> {
        Symbol::ALL.into_iter().find(|s| s.name() == name)
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Symbol {
    type Err = IconError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Symbol::from_name(s).ok_or_else(|| IconError::UnknownSymbol(s.to_string()))
    }
}
