//! RateInk Application
//!
//! The demo shell providing windowing and rendering for the rating bar,
//! showing every construction mode bound to live app state.

mod app;
mod ui;

pub use app::{App, AppConfig};
pub use ui::{render_ui, DemoState};

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::run_wasm;
