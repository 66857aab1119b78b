use eframe::egui;

use crate::client::navigation::Screen;
use crate::client::state::{fields, AppState};
use crate::client::theme::{colors, styles};

const INPUT_WIDTH: f32 = 280.0;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    super::render_session_error(ui, state, "Unsuccessful login");

    let available_rect = ui.available_rect_before_wrap();
    ui.scope_builder(egui::UiBuilder::new().max_rect(available_rect), |ui| {
        ui.vertical_centered(|ui| {
            let top_space = (available_rect.height() - 300.0).max(0.0) / 2.0;
            ui.add_space(top_space);

            ui.label(egui::RichText::new("☕").size(48.0).color(colors::TEXT_LIGHT));
            ui.add_space(12.0);
            ui.label(egui::RichText::new("Login").size(28.0).strong().color(colors::TEXT_LIGHT));
            ui.add_space(20.0);

            ui.label(egui::RichText::new("Email:").color(colors::TEXT_LIGHT));
            let email = ui.add_sized(
                [INPUT_WIDTH, 28.0],
                egui::TextEdit::singleline(state.login_form.field_mut(fields::EMAIL))
                    .hint_text("username@google.com"),
            );
            ui.add_space(8.0);

            ui.label(egui::RichText::new("Password:").color(colors::TEXT_LIGHT));
            let password = ui.add_sized(
                [INPUT_WIDTH, 28.0],
                egui::TextEdit::singleline(state.login_form.field_mut(fields::PASSWORD))
                    .password(true)
                    .hint_text("********"),
            );
            ui.add_space(20.0);

            let submitted = (email.lost_focus() || password.lost_focus())
                && ui.input(|i| i.key_pressed(egui::Key::Enter));

            let busy = state.is_authenticating();
            let clicked = ui
                .add_enabled(!busy, styles::primary_button("Login").min_size(egui::vec2(140.0, 32.0)))
                .clicked();
            if clicked || (submitted && !busy) {
                state.handle_login();
            }

            if busy {
                ui.add_space(12.0);
                ui.add(egui::Spinner::new().color(colors::TEXT_LIGHT));
            }

            ui.add_space(16.0);
            if ui
                .link(egui::RichText::new("Create new account").color(colors::TEXT_LIGHT))
                .clicked()
            {
                state.navigator.replace(Screen::Register);
            }
        });
    });
}
