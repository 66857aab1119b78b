use eframe::egui;

use crate::client::theme::colors;

pub fn render(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.add(egui::Spinner::new().size(48.0).color(colors::TEXT_LIGHT));
    });
}
