//! The tappable rating bar.

use egui::{
    pos2, vec2, Color32, CursorIcon, Image, Rect, Response, Sense, Stroke, Ui, Vec2, Widget,
};
use rateink_core::{IconSource, RatingScale, ResolvedIcon, Symbol};

use crate::{icons, sizing, theme};

/// Style configuration for the rating bar.
#[derive(Clone)]
pub struct RatingBarStyle {
    /// Width in points of one glyph slot. The whole bar spans `max_rating`
    /// times this, with the clear control squeezed into the same span.
    pub glyph_width: f32,
    /// Tint applied to the glyph and clear artwork.
    pub tint: Color32,
    /// Fraction of a slot kept as padding around the artwork.
    pub icon_inset: f32,
    /// Duration in seconds of the fill and clear cross-fades.
    pub animation_time: f32,
}

impl Default for RatingBarStyle {
    fn default() -> Self {
        Self {
            glyph_width: sizing::GLYPH_WIDTH,
            tint: theme::TINT,
            icon_inset: 0.12,
            animation_time: 0.15,
        }
    }
}

impl RatingBarStyle {
    /// Create a compact style for dense layouts.
    pub fn compact() -> Self {
        Self {
            glyph_width: sizing::COMPACT,
            ..Default::default()
        }
    }

    /// Create a large style for touch-friendly layouts.
    pub fn large() -> Self {
        Self {
            glyph_width: sizing::LARGE,
            ..Default::default()
        }
    }
}

/// Size of the full bar for `max_rating` glyph slots of `glyph_width` points.
///
/// The bar is always `max_rating * glyph_width` wide. The leading clear
/// control shares that span, so each of the `max_rating + 1` slots is
/// squeezed slightly narrower than `glyph_width`. Slots are square, which
/// fixes the height.
pub fn bar_size(max_rating: u32, glyph_width: f32) -> Vec2 {
    vec2(
        max_rating as f32 * glyph_width,
        slot_width(max_rating, glyph_width),
    )
}

/// Width of one of the `max_rating + 1` uniform slots the bar divides into.
pub fn slot_width(max_rating: u32, glyph_width: f32) -> f32 {
    max_rating as f32 * glyph_width / (max_rating + 1) as f32
}

/// Slot index under `x`, measured from the bar's left edge. Out-of-range
/// coordinates clamp to the nearest slot. Slot 0 is the clear control;
/// slot `s >= 1` is rating position `s - 1`.
pub fn slot_at(max_rating: u32, glyph_width: f32, x: f32) -> u32 {
    if max_rating == 0 {
        return 0;
    }
    let slot = (x / slot_width(max_rating, glyph_width)).floor();
    (slot.max(0.0) as u32).min(max_rating)
}

/// The rating written by tapping `slot`.
fn rating_for_slot(scale: RatingScale, slot: u32) -> u32 {
    if slot == 0 {
        scale.clear_value()
    } else {
        scale.tap_value(slot - 1)
    }
}

/// A horizontal row of tappable rating glyphs bound to an integer rating.
///
/// The bar renders a leading clear control followed by `max_rating` glyph
/// positions. Positions below the current rating show the filled variant
/// of the icon, the rest show the plain variant. Tapping a position writes
/// `position + 1` through the binding; tapping the clear control writes 0.
///
/// ```no_run
/// # use rateink_widgets::RatingBar;
/// # use rateink_core::Symbol;
/// # fn demo(ui: &mut egui::Ui, rating: &mut u32) {
/// if RatingBar::new(3, rating)
///     .symbol(Symbol::Heart)
///     .tint(egui::Color32::RED)
///     .show(ui)
///     .changed()
/// {
///     // rating was tapped
/// }
/// # }
/// ```
pub struct RatingBar<'a> {
    rating: &'a mut u32,
    max_rating: u32,
    icon: IconSource,
    interactive: bool,
    style: RatingBarStyle,
}

impl<'a> RatingBar<'a> {
    /// Create a rating bar with `max_rating` positions over `rating`.
    pub fn new(max_rating: u32, rating: &'a mut u32) -> Self {
        Self {
            rating,
            max_rating,
            icon: IconSource::default(),
            interactive: true,
            style: RatingBarStyle::default(),
        }
    }

    /// Set the icon source directly.
    pub fn icon_source(mut self, icon: IconSource) -> Self {
        self.icon = icon;
        self
    }

    /// Use a bundled symbol.
    pub fn symbol(mut self, symbol: Symbol) -> Self {
        self.icon = IconSource::Symbol(symbol);
        self
    }

    /// Use a bundled symbol selected by name. Unknown names render as the
    /// default star.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.icon = IconSource::named(name);
        self
    }

    /// Use a caller-registered image by URI. The filled companion URI is
    /// derived by suffixing `.fill`; when either image is missing the bar
    /// renders placeholder markers instead.
    pub fn custom(mut self, uri: impl Into<String>) -> Self {
        self.icon = IconSource::custom(uri);
        self
    }

    /// Set whether taps change the rating. A non-interactive bar renders
    /// identically but never writes through the binding.
    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    /// Set the bar style.
    pub fn style(mut self, style: RatingBarStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the glyph slot width.
    pub fn width(mut self, width: f32) -> Self {
        self.style.glyph_width = width;
        self
    }

    /// Set the glyph tint.
    pub fn tint(mut self, tint: Color32) -> Self {
        self.style.tint = tint;
        self
    }

    /// Show the bar. The response reports `changed` when a tap wrote a new
    /// value through the binding.
    pub fn show(self, ui: &mut Ui) -> Response {
        let scale = RatingScale::new(self.max_rating);
        let size = bar_size(self.max_rating, self.style.glyph_width);
        let sense = if self.interactive {
            Sense::click()
        } else {
            Sense::hover()
        };
        let (rect, mut response) = ui.allocate_exact_size(size, sense);

        // Update the binding before painting so the tapped state shows in
        // the same frame.
        if self.interactive && response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let slot = slot_at(self.max_rating, self.style.glyph_width, pos.x - rect.left());
                let tapped = rating_for_slot(scale, slot);
                if tapped != *self.rating {
                    *self.rating = tapped;
                    response.mark_changed();
                }
            }
        }

        if ui.is_rect_visible(rect) {
            let slot = slot_width(self.max_rating, self.style.glyph_width);
            let inset = slot * self.style.icon_inset;
            // Render from the clamped value; an out-of-range binding shows
            // all positions filled but is never written back.
            let current = scale.clamp(*self.rating);

            let slot_rect = |index: u32| {
                Rect::from_min_size(
                    pos2(rect.left() + index as f32 * slot, rect.top()),
                    vec2(slot, slot),
                )
            };

            // Clear control fades out at rating zero but stays tappable.
            if self.max_rating > 0 {
                let shown = ui.ctx().animate_bool_with_time(
                    response.id.with("clear"),
                    current > 0,
                    self.style.animation_time,
                );
                if shown > 0.0 {
                    let icon_rect = slot_rect(0).shrink(inset);
                    Image::new(icons::clear_icon())
                        .fit_to_exact_size(icon_rect.size())
                        .tint(self.style.tint.gamma_multiply(shown))
                        .paint_at(ui, icon_rect);
                }
            }

            let pair = match self.icon.resolve() {
                ResolvedIcon::Builtin(symbol) => Some(icons::symbol_icon_pair(symbol)),
                ResolvedIcon::AssetPair { plain, filled } => {
                    let probe = vec2(slot - 2.0 * inset, slot - 2.0 * inset);
                    let available = |uri: &str| {
                        Image::from_uri(uri.to_string())
                            .load_for_size(ui.ctx(), probe)
                            .is_ok()
                    };
                    // Both images or neither: a half-registered pair would
                    // flip artwork mid-interaction.
                    if available(&plain) && available(&filled) {
                        Some(icons::custom_icon_pair(&plain, &filled))
                    } else {
                        None
                    }
                }
            };

            for position in scale.positions() {
                let icon_rect = slot_rect(position + 1).shrink(inset);
                match &pair {
                    Some(pair) => {
                        let fill = ui.ctx().animate_bool_with_time(
                            response.id.with(position),
                            scale.is_filled(position, current),
                            self.style.animation_time,
                        );
                        if fill < 1.0 {
                            Image::new(pair.plain.clone())
                                .fit_to_exact_size(icon_rect.size())
                                .tint(self.style.tint.gamma_multiply(1.0 - fill))
                                .paint_at(ui, icon_rect);
                        }
                        if fill > 0.0 {
                            Image::new(pair.filled.clone())
                                .fit_to_exact_size(icon_rect.size())
                                .tint(self.style.tint.gamma_multiply(fill))
                                .paint_at(ui, icon_rect);
                        }
                    }
                    None => paint_missing_marker(ui, icon_rect),
                }
            }
        }

        if self.interactive {
            response = response.on_hover_cursor(CursorIcon::PointingHand);
        }
        response
    }
}

impl Widget for RatingBar<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        self.show(ui)
    }
}

/// Placeholder for a custom pair with a missing image: a circle with a
/// diagonal slash.
fn paint_missing_marker(ui: &Ui, icon_rect: Rect) {
    let center = icon_rect.center();
    let radius = icon_rect.width().min(icon_rect.height()) / 2.0;
    let stroke = Stroke::new(2.0, theme::MISSING);

    ui.painter().circle_stroke(center, radius, stroke);
    let offset = radius * 0.6;
    ui.painter().line_segment(
        [
            pos2(center.x - offset, center.y + offset),
            pos2(center.x + offset, center.y - offset),
        ],
        stroke,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_spans_max_glyph_widths() {
        assert_eq!(bar_size(5, 30.0), vec2(150.0, 25.0));
        assert_eq!(bar_size(3, 50.0), vec2(150.0, 37.5));
        assert_eq!(bar_size(0, 30.0), vec2(0.0, 0.0));
    }

    #[test]
    fn test_slots_divide_bar_evenly() {
        assert_eq!(slot_width(5, 30.0), 25.0);
        assert_eq!(slot_width(4, 30.0), 24.0);
    }

    #[test]
    fn test_slot_at_boundaries() {
        assert_eq!(slot_at(5, 30.0, 0.0), 0);
        assert_eq!(slot_at(5, 30.0, 24.9), 0);
        assert_eq!(slot_at(5, 30.0, 25.0), 1);
        assert_eq!(slot_at(5, 30.0, 149.9), 5);
    }

    #[test]
    fn test_slot_at_clamps_out_of_range() {
        assert_eq!(slot_at(5, 30.0, -3.0), 0);
        assert_eq!(slot_at(5, 30.0, 1000.0), 5);
        assert_eq!(slot_at(0, 30.0, 10.0), 0);
    }

    #[test]
    fn test_slot_to_rating() {
        let scale = RatingScale::new(5);
        assert_eq!(rating_for_slot(scale, 0), 0);
        assert_eq!(rating_for_slot(scale, 1), 1);
        assert_eq!(rating_for_slot(scale, 5), 5);
    }

    #[test]
    fn test_style_presets() {
        assert_eq!(RatingBarStyle::default().glyph_width, sizing::GLYPH_WIDTH);
        assert_eq!(RatingBarStyle::compact().glyph_width, sizing::COMPACT);
        assert_eq!(RatingBarStyle::large().glyph_width, sizing::LARGE);
    }

    #[test]
    fn test_show_allocates_exact_size() {
        let ctx = egui::Context::default();
        let mut rating = 2;
        let mut measured = None;

        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                let response = RatingBar::new(5, &mut rating).show(ui);
                measured = Some(response.rect.size());
            });
        });

        let size = measured.unwrap();
        assert!((size.x - 150.0).abs() < 0.5, "width {}", size.x);
        assert!((size.y - 25.0).abs() < 0.5, "height {}", size.y);
        assert_eq!(rating, 2);
    }

    #[test]
    fn test_show_does_not_write_without_input() {
        let ctx = egui::Context::default();
        let mut rating = 9;

        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                RatingBar::new(5, &mut rating).show(ui);
            });
        });

        // Out-of-range values render clamped but are never written back.
        assert_eq!(rating, 9);
    }

    fn pointer_press(pos: egui::Pos2) -> egui::Event {
        egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed: true,
            modifiers: egui::Modifiers::default(),
        }
    }

    fn pointer_release(pos: egui::Pos2) -> egui::Event {
        egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed: false,
            modifiers: egui::Modifiers::default(),
        }
    }

    /// Run one frame showing a five-glyph default bar, feeding `events` in.
    /// Returns the bar rect and whether the response reported a change.
    fn show_frame(
        ctx: &egui::Context,
        events: Vec<egui::Event>,
        rating: &mut u32,
    ) -> (Rect, bool) {
        let mut rect = Rect::NOTHING;
        let mut changed = false;
        let input = egui::RawInput {
            events,
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                let response = RatingBar::new(5, rating).show(ui);
                rect = response.rect;
                changed = response.changed();
            });
        });
        (rect, changed)
    }

    #[test]
    fn test_tap_writes_position_value() {
        let ctx = egui::Context::default();
        let mut rating = 0;

        // First frame registers the bar with the hit-tester.
        let (rect, _) = show_frame(&ctx, vec![], &mut rating);
        let slot = slot_width(5, 30.0);
        let glyph = pos2(rect.left() + 3.5 * slot, rect.center().y);

        let _ = show_frame(
            &ctx,
            vec![egui::Event::PointerMoved(glyph), pointer_press(glyph)],
            &mut rating,
        );
        let (_, changed) = show_frame(&ctx, vec![pointer_release(glyph)], &mut rating);
        assert_eq!(rating, 3);
        assert!(changed);

        // Tapping the already-selected position leaves the binding and the
        // change flag untouched.
        let _ = show_frame(&ctx, vec![pointer_press(glyph)], &mut rating);
        let (_, changed) = show_frame(&ctx, vec![pointer_release(glyph)], &mut rating);
        assert_eq!(rating, 3);
        assert!(!changed);
    }

    #[test]
    fn test_clear_tap_writes_zero() {
        let ctx = egui::Context::default();
        let mut rating = 3;

        let (rect, _) = show_frame(&ctx, vec![], &mut rating);
        let slot = slot_width(5, 30.0);
        let clear = pos2(rect.left() + 0.5 * slot, rect.center().y);

        let _ = show_frame(
            &ctx,
            vec![egui::Event::PointerMoved(clear), pointer_press(clear)],
            &mut rating,
        );
        let (_, changed) = show_frame(&ctx, vec![pointer_release(clear)], &mut rating);
        assert_eq!(rating, 0);
        assert!(changed);

        // The faded-out control keeps its slot and stays tappable; clearing
        // at zero writes nothing.
        let _ = show_frame(&ctx, vec![pointer_press(clear)], &mut rating);
        let (_, changed) = show_frame(&ctx, vec![pointer_release(clear)], &mut rating);
        assert_eq!(rating, 0);
        assert!(!changed);
    }
}
