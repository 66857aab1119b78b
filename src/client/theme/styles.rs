//! Theme Styling Functions

use eframe::egui::{self, Stroke};
use super::colors;

/// Apply the global theme to the egui context
pub fn apply_global_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals = egui::Visuals::light();
    style.visuals.panel_fill = colors::BG_LIGHT;
    style.visuals.window_fill = colors::BG_LIGHT;

    style.visuals.widgets.hovered.bg_fill = colors::ACCENT_HOVER;
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, colors::TEXT_LIGHT);
    style.visuals.widgets.active.bg_fill = colors::ACCENT;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, colors::TEXT_LIGHT);

    style.visuals.selection.bg_fill = colors::ACCENT;
    style.visuals.selection.stroke = Stroke::new(1.0, colors::TEXT_LIGHT);

    ctx.set_style(style);
}

/// Frame for the top bar
pub fn top_bar_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::TOP_BAR_BG)
        .inner_margin(egui::Margin::symmetric(12, 8))
}

/// Frame for the scrolling content of authenticated screens
pub fn content_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::BG_LIGHT)
        .inner_margin(egui::Margin::symmetric(20, 16))
}

/// Full-bleed frame behind the login and register forms
pub fn auth_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::AUTH_BG)
        .inner_margin(egui::Margin::same(0))
}

/// Filled accent button
pub fn primary_button(text: &str) -> egui::Button<'_> {
    egui::Button::new(egui::RichText::new(text).color(colors::TEXT_LIGHT)).fill(colors::ACCENT)
}

/// Outlined button for destructive actions
pub fn danger_button(text: &str) -> egui::Button<'_> {
    egui::Button::new(egui::RichText::new(text).color(colors::DANGER))
        .stroke(Stroke::new(1.0, colors::DANGER))
        .fill(egui::Color32::TRANSPARENT)
}
