//! Demo UI built with egui.

use egui::{Color32, Context, RichText, Ui};
use rateink_core::Symbol;
use rateink_widgets::{RatingBar, RatingBarStyle};

/// Live ratings backing the demo rows.
#[derive(Debug, Clone, Default)]
pub struct DemoState {
    /// Default star bar.
    pub stars: u32,
    /// Heart bar picked through the symbol enum.
    pub hearts: u32,
    /// Pin bar picked by symbol name.
    pub pins: u32,
    /// Custom artwork registered as in-memory bytes.
    pub footballs: u32,
    /// Custom artwork that was never registered.
    pub medals: u32,
}

/// Register the custom artwork used by the demo.
///
/// The football pair is loaded from embedded bytes so the demo works
/// without any files on disk. `include_bytes` is a no-op for URIs that
/// are already registered.
pub fn register_demo_assets(ctx: &Context) {
    ctx.include_bytes(
        "bytes://football.svg",
        include_bytes!("../assets/football.svg"),
    );
    ctx.include_bytes(
        "bytes://football.fill.svg",
        include_bytes!("../assets/football.fill.svg"),
    );
}

/// Render the demo panel with one row per construction mode.
pub fn render_ui(ctx: &Context, demo: &mut DemoState) {
    egui_extras::install_image_loaders(ctx);

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading("RateInk");
        ui.add_space(4.0);
        ui.label(
            RichText::new("Tap a glyph to rate, tap the x to clear")
                .size(12.0)
                .color(Color32::from_gray(140)),
        );
        ui.add_space(16.0);

        section_label(ui, "Stars (defaults)");
        rating_row(ui, 5, &mut demo.stars, |bar| bar.width(40.0));
        ui.add_space(12.0);

        section_label(ui, "Hearts (symbol enum)");
        rating_row(ui, 3, &mut demo.hearts, |bar| {
            bar.symbol(Symbol::Heart)
                .width(50.0)
                .tint(Color32::from_rgb(239, 68, 68))
        });
        ui.add_space(12.0);

        section_label(ui, "Pins (symbol name)");
        rating_row(ui, 5, &mut demo.pins, |bar| {
            bar.named("pin")
                .width(40.0)
                .tint(Color32::from_rgb(34, 197, 94))
        });
        ui.add_space(12.0);

        section_label(ui, "Footballs (custom image)");
        rating_row(ui, 5, &mut demo.footballs, |bar| {
            bar.custom("bytes://football.svg")
                .width(50.0)
                .tint(Color32::from_rgb(180, 83, 9))
        });
        ui.add_space(12.0);

        section_label(ui, "Medals (missing image)");
        rating_row(ui, 5, &mut demo.medals, |bar| {
            bar.custom("bytes://medal.svg")
                .style(RatingBarStyle::compact())
        });
        ui.add_space(12.0);

        section_label(ui, "Stars again (read-only mirror)");
        let mut mirror = demo.stars;
        ui.horizontal(|ui| {
            RatingBar::new(5, &mut mirror)
                .width(40.0)
                .interactive(false)
                .show(ui);
            value_label(ui, mirror, 5);
        });
    });
}

/// One interactive demo row: the bar plus its current value.
fn rating_row(
    ui: &mut Ui,
    max_rating: u32,
    rating: &mut u32,
    configure: impl FnOnce(RatingBar<'_>) -> RatingBar<'_>,
) {
    ui.horizontal(|ui| {
        let response = configure(RatingBar::new(max_rating, rating)).show(ui);
        if response.changed() {
            log::info!("Rating changed to {}", *rating);
        }
        value_label(ui, *rating, max_rating);
    });
}

fn section_label(ui: &mut Ui, text: &str) {
    ui.label(
        RichText::new(text)
            .size(10.0)
            .color(Color32::from_gray(140)),
    );
}

fn value_label(ui: &mut Ui, current: u32, max_rating: u32) {
    ui.label(
        RichText::new(format!("{}/{}", current, max_rating))
            .size(12.0)
            .color(Color32::from_gray(160)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_state_starts_cleared() {
        let demo = DemoState::default();
        assert_eq!(demo.stars, 0);
        assert_eq!(demo.hearts, 0);
        assert_eq!(demo.pins, 0);
        assert_eq!(demo.footballs, 0);
        assert_eq!(demo.medals, 0);
    }

    #[test]
    fn test_render_ui_runs_headless() {
        let ctx = Context::default();
        register_demo_assets(&ctx);

        let mut demo = DemoState {
            stars: 3,
            ..Default::default()
        };
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            render_ui(ctx, &mut demo);
        });

        // Rendering alone never writes through the bindings
        assert_eq!(demo.stars, 3);
        assert_eq!(demo.hearts, 0);
    }

    #[test]
    fn test_register_demo_assets_is_idempotent() {
        let ctx = Context::default();
        register_demo_assets(&ctx);
        register_demo_assets(&ctx);
    }
}
