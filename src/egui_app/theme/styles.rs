//! Theme Styling Functions
//!
//! Helpers for applying the castle palette consistently across screens.

use eframe::egui::{self, CornerRadius, Stroke};
use super::colors;

/// Apply the global theme to the egui context
pub fn apply_global_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals.window_fill = colors::BG_DARK;
    style.visuals.window_stroke = Stroke::new(1.0, colors::CARD_BORDER);
    style.visuals.panel_fill = colors::BG_DARK;

    style.visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, colors::TEXT_LIGHT);
    style.visuals.widgets.inactive.bg_fill = colors::CARD_BG;
    style.visuals.widgets.inactive.weak_bg_fill = colors::CARD_BG;
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, colors::TEXT_LIGHT);
    style.visuals.widgets.hovered.bg_fill = colors::HOVER_ITEM;
    style.visuals.widgets.hovered.weak_bg_fill = colors::HOVER_ITEM;
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, colors::TEXT_LIGHT);
    style.visuals.widgets.active.bg_fill = colors::ACCENT;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, colors::TEXT_LIGHT);

    style.visuals.selection.bg_fill = colors::SELECTED;
    style.visuals.selection.stroke = Stroke::new(1.0, colors::TEXT_LIGHT);

    ctx.set_style(style);
}

/// Frame for a bordered content card
pub fn card_frame() -> egui::Frame {
    egui::Frame::default()
        .fill(colors::CARD_BG)
        .stroke(Stroke::new(1.0, colors::CARD_BORDER))
        .corner_radius(CornerRadius::same(6))
        .inner_margin(egui::Margin::same(16))
}

/// Screen heading in the theme's title size
pub fn heading(text: &str) -> egui::RichText {
    egui::RichText::new(text).size(28.0).strong().color(colors::TEXT_LIGHT)
}

/// Primary action button
pub fn primary_button(text: &str) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.to_string()).color(colors::TEXT_LIGHT))
        .fill(colors::ACCENT)
        .min_size(egui::vec2(160.0, 36.0))
}
