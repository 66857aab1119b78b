use eframe::egui;

use crate::client::state::AppState;
use crate::client::theme::{colors, styles};

/// Raw session dump: the user as JSON and the opaque token
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.vertical_centered(|ui| {
        ui.heading(egui::RichText::new("Protected Screen").strong().color(colors::TEXT_PRIMARY));
        ui.add_space(16.0);

        if ui.add(styles::primary_button("Logout")).clicked() {
            state.logout();
            return;
        }
        ui.add_space(16.0);

        let user_json = state
            .session
            .user()
            .and_then(|user| serde_json::to_string_pretty(user).ok())
            .unwrap_or_default();
        ui.label(egui::RichText::new(user_json).monospace().color(colors::TEXT_PRIMARY));
        ui.add_space(12.0);

        let token = state.session.token().unwrap_or_default().to_string();
        ui.add(egui::Label::new(egui::RichText::new(token).monospace().color(colors::TEXT_SECONDARY)).wrap());
    });
}
