use eframe::egui;

use crate::client::navigation::ProductRoute;
use crate::client::state::AppState;
use crate::client::theme::{colors, styles};

enum RowAction {
    Open(ProductRoute),
    Delete { id: String, name: String },
}

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let is_admin = state.session.user().map(|u| u.is_admin()).unwrap_or(false);

    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("Products:").strong().color(colors::TEXT_SECONDARY));
        ui.label(state.products.products().len().to_string());

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.add(styles::primary_button("＋ Add Product")).clicked() {
                state.open_product(ProductRoute::new_product());
            }
            let refreshing = state.is_refreshing();
            if ui.add_enabled(!refreshing, egui::Button::new("⟳ Refresh")).clicked() {
                state.refresh_products();
            }
            if refreshing {
                ui.spinner();
            }
        });
    });
    ui.add_space(16.0);

    let mut action = None;
    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            for product in state.products.products() {
                ui.horizontal(|ui| {
                    if ui
                        .link(egui::RichText::new(&product.name).size(18.0).color(colors::TEXT_PRIMARY))
                        .clicked()
                    {
                        action = Some(RowAction::Open(ProductRoute::existing(&product.id, &product.name)));
                    }
                    if is_admin {
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            let deleting = state.is_deleting();
                            let delete = egui::Button::new(egui::RichText::new("✖").color(colors::DANGER))
                                .frame(false);
                            if ui.add_enabled(!deleting, delete).clicked() {
                                action = Some(RowAction::Delete {
                                    id: product.id.clone(),
                                    name: product.name.clone(),
                                });
                            }
                        });
                    }
                });
                ui.separator();
            }
        });

    match action {
        Some(RowAction::Open(route)) => state.open_product(route),
        Some(RowAction::Delete { id, name }) => state.request_delete(&id, &name),
        None => {}
    }
}
