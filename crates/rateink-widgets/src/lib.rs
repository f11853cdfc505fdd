//! Tappable rating bar widget for egui.
//!
//! This crate provides an integer rating control rendered as a row of
//! glyphs with a leading clear control:
//!
//! - **RatingBar**: the widget itself, bound to a `&mut u32` rating
//! - **RatingBarStyle**: glyph width, tint, and animation configuration
//! - **Icons**: bundled plain/filled artwork for every [`rateink_core::Symbol`]

pub mod icons;
pub mod rating;

pub use icons::{clear_icon, custom_icon_pair, symbol_icon_pair, IconPair};
pub use rating::{bar_size, slot_at, slot_width, RatingBar, RatingBarStyle};

/// Standard sizing constants used by the rating bar.
pub mod sizing {
    /// Default glyph slot width
    pub const GLYPH_WIDTH: f32 = 30.0;
    /// Compact glyph slot width (dense layouts)
    pub const COMPACT: f32 = 20.0;
    /// Large glyph slot width (touch targets)
    pub const LARGE: f32 = 50.0;
}

/// Standard colors used by the rating bar.
pub mod theme {
    use egui::Color32;

    /// Default glyph tint (amber)
    pub const TINT: Color32 = Color32::from_rgb(251, 191, 36);
    /// Missing-asset marker color (red)
    pub const MISSING: Color32 = Color32::from_rgb(239, 68, 68);
}
