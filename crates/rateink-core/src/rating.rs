//! Rating-scale semantics.
//!
//! The rating value itself lives with the caller; [`RatingScale`] only
//! answers questions about it. Which glyphs render filled, what a tap
//! writes, what the clear control writes. Everything here is total and
//! side-effect free so the interactive widget stays a thin shell.

use serde::{Deserialize, Serialize};

/// A rating scale with `max` selectable positions.
///
/// Positions are zero-based and ordered left to right. A rating of `n`
/// means the first `n` positions render filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingScale {
    /// Number of selectable positions. Zero is a valid, empty scale.
    pub max: u32,
}

impl RatingScale {
    /// Create a scale with `max` positions.
    pub const fn new(max: u32) -> Self {
        Self { max }
    }

    /// Positions on the scale, left to right.
    pub fn positions(&self) -> std::ops::Range<u32> {
        0..self.max
    }

    /// Whether the glyph at `position` renders filled for `current`.
    ///
    /// Holds for any `current`, including values above `max` that a caller
    /// pre-set out of range.
    pub const fn is_filled(&self, position: u32, current: u32) -> bool {
        position < current
    }

    /// Whether `current` is a value this scale can itself produce.
    pub const fn contains(&self, current: u32) -> bool {
        current <= self.max
    }

    /// Clamp an externally supplied rating into `0..=max`.
    pub const fn clamp(&self, current: u32) -> u32 {
        if current > self.max { self.max } else { current }
    }

    /// The rating written by tapping the glyph at `position`.
    pub const fn tap_value(&self, position: u32) -> u32 {
        position + 1
    }

    /// The rating written by tapping the clear control.
    pub const fn clear_value(&self) -> u32 {
        0
    }
}

impl Default for RatingScale {
    fn default() -> Self {
        Self::new(5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_below_current() {
        let scale = RatingScale::new(5);
        let filled: Vec<bool> = scale.positions().map(|p| scale.is_filled(p, 2)).collect();
        assert_eq!(filled, [true, true, false, false, false]);
    }

    #[test]
    fn test_tap_writes_position_plus_one() {
        let scale = RatingScale::new(5);
        assert_eq!(scale.tap_value(0), 1);
        assert_eq!(scale.tap_value(4), 5);
    }

    #[test]
    fn test_clear_writes_zero() {
        let scale = RatingScale::new(5);
        assert_eq!(scale.clear_value(), 0);
    }

    #[test]
    fn test_tap_then_clear_sequence() {
        let scale = RatingScale::new(5);
        let mut rating = 2;

        rating = scale.tap_value(4);
        assert_eq!(rating, 5);
        assert!(scale.positions().all(|p| scale.is_filled(p, rating)));

        rating = scale.clear_value();
        assert_eq!(rating, 0);
        assert!(!scale.positions().any(|p| scale.is_filled(p, rating)));
    }

    #[test]
    fn test_out_of_range_renders_like_clamped() {
        let scale = RatingScale::new(5);
        assert!(!scale.contains(9));
        assert_eq!(scale.clamp(9), 5);
        for position in scale.positions() {
            assert_eq!(
                scale.is_filled(position, 9),
                scale.is_filled(position, scale.clamp(9))
            );
        }
    }

    #[test]
    fn test_clamp_keeps_in_range_values() {
        let scale = RatingScale::new(3);
        assert_eq!(scale.clamp(0), 0);
        assert_eq!(scale.clamp(3), 3);
        assert_eq!(scale.clamp(4), 3);
    }

    #[test]
    fn test_default_scale() {
        assert_eq!(RatingScale::default(), RatingScale::new(5));
    }

    #[test]
    fn test_empty_scale() {
        let scale = RatingScale::new(0);
        assert_eq!(scale.positions().count(), 0);
        assert_eq!(scale.clamp(7), 0);
        assert!(scale.contains(0));
    }
}
