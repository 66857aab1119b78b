use eframe::egui;

use crate::client::navigation::{product_title, ProductRoute};
use crate::client::state::{fields, AppState};
use crate::client::theme::{colors, styles};
use crate::client::upload;

const IMAGE_SIZE: egui::Vec2 = egui::vec2(240.0, 240.0);

pub fn render(ui: &mut egui::Ui, state: &mut AppState, _route: &ProductRoute) {
    ui.heading(product_title(state.product_form.get(fields::PRODUCT_NAME)));
    ui.add_space(12.0);

    if state.is_loading_product() {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label("Loading product...");
        });
    }

    ui.label(egui::RichText::new("Product name:").size(16.0).color(colors::TEXT_PRIMARY));
    ui.add(
        egui::TextEdit::singleline(state.product_form.field_mut(fields::PRODUCT_NAME))
            .hint_text("your product name...")
            .desired_width(f32::INFINITY),
    );
    ui.add_space(12.0);

    ui.label(egui::RichText::new("Category:").size(16.0).color(colors::TEXT_PRIMARY));
    if state.categories.is_loading() {
        ui.spinner();
    } else if let Some(error) = state.categories.error() {
        ui.colored_label(colors::DANGER, format!("Categories unavailable: {}", error));
    } else {
        let categories = state.categories.categories().to_vec();
        let selected_id = state.effective_category_id().unwrap_or_default();
        let selected_name = categories
            .iter()
            .find(|c| c.id == selected_id)
            .map(|c| c.name.clone())
            .unwrap_or_default();

        let current = state.product_form.field_mut(fields::CATEGORY_ID);
        egui::ComboBox::from_id_salt("category_picker")
            .selected_text(selected_name)
            .width(240.0)
            .show_ui(ui, |ui| {
                for category in &categories {
                    ui.selectable_value(current, category.id.clone(), &category.name);
                }
            });
    }
    ui.add_space(16.0);

    let saving = state.is_saving();
    ui.horizontal(|ui| {
        if ui
            .add_enabled(!saving, styles::primary_button("Save").min_size(egui::vec2(120.0, 30.0)))
            .clicked()
        {
            state.save_product();
        }
        if saving {
            ui.spinner();
        }
    });

    if !state.product_form.is_empty(fields::PRODUCT_ID) {
        ui.add_space(16.0);
        ui.separator();
        ui.label(egui::RichText::new("Photo:").size(16.0).color(colors::TEXT_PRIMARY));

        let uploading = state.products.is_uploading_img();
        ui.horizontal(|ui| {
            ui.add(
                egui::TextEdit::singleline(state.product_form.field_mut(fields::IMAGE_PATH))
                    .hint_text("/path/to/photo.jpg")
                    .desired_width(320.0),
            );
            if ui.add_enabled(!uploading, styles::primary_button("Upload")).clicked() {
                state.upload_image();
            }
        });

        if uploading {
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Uploading image...");
            });
        }
    }

    let image = state.product_form.get(fields::PRODUCT_IMG).to_string();
    let preview = upload::preview_uri(state.product_form.get(fields::IMAGE_PATH));
    if image.is_empty() && preview.is_none() {
        return;
    }

    ui.add_space(12.0);
    ui.horizontal(|ui| {
        if !image.is_empty() {
            ui.vertical(|ui| {
                ui.add(egui::Image::new(image.as_str()).max_size(IMAGE_SIZE).corner_radius(6));
                ui.hyperlink_to("Current image", image.as_str());
            });
        }
        if let Some(preview) = preview {
            ui.vertical(|ui| {
                ui.add(egui::Image::new(preview).max_size(IMAGE_SIZE).corner_radius(6));
                ui.label(egui::RichText::new("Selected photo").color(colors::TEXT_SECONDARY));
            });
        }
    });
}
