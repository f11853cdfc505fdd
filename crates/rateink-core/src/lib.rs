//! RateInk Core Library
//!
//! Platform-agnostic icon and rating-scale model for the RateInk rating bar.

pub mod icon;
pub mod rating;
pub mod symbol;

pub use icon::{fill_companion, IconError, IconResult, IconSource, ResolvedIcon};
pub use rating::RatingScale;
pub use symbol::Symbol;
