use eframe::egui;

use crate::client::navigation::Screen;
use crate::client::state::{fields, AppState};
use crate::client::theme::{colors, styles};

const INPUT_WIDTH: f32 = 280.0;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    super::render_session_error(ui, state, "Invalid Signup");

    let available_rect = ui.available_rect_before_wrap();
    ui.scope_builder(egui::UiBuilder::new().max_rect(available_rect), |ui| {
        ui.horizontal(|ui| {
            ui.add_space(16.0);
            if ui
                .link(egui::RichText::new("Login").color(colors::TEXT_LIGHT))
                .clicked()
            {
                state.navigator.replace(Screen::Login);
            }
        });

        ui.vertical_centered(|ui| {
            let top_space = (available_rect.height() - 360.0).max(0.0) / 2.0;
            ui.add_space(top_space);

            ui.label(egui::RichText::new("Register").size(28.0).strong().color(colors::TEXT_LIGHT));
            ui.add_space(20.0);

            let mut submitted = false;
            for (label, field, hint, secret) in [
                ("Name:", fields::NAME, "User name", false),
                ("Email:", fields::EMAIL, "username@google.com", false),
                ("Password:", fields::PASSWORD, "********", true),
            ] {
                ui.label(egui::RichText::new(label).color(colors::TEXT_LIGHT));
                let response = ui.add_sized(
                    [INPUT_WIDTH, 28.0],
                    egui::TextEdit::singleline(state.register_form.field_mut(field))
                        .password(secret)
                        .hint_text(hint),
                );
                submitted |= response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                ui.add_space(8.0);
            }
            ui.add_space(12.0);

            let busy = state.is_authenticating();
            let clicked = ui
                .add_enabled(
                    !busy,
                    styles::primary_button("Create Account").min_size(egui::vec2(160.0, 32.0)),
                )
                .clicked();
            if clicked || (submitted && !busy) {
                state.handle_register();
            }

            if busy {
                ui.add_space(12.0);
                ui.add(egui::Spinner::new().color(colors::TEXT_LIGHT));
            }
        });
    });
}
