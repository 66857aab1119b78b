use eframe::egui;

use crate::client::navigation::Screen;
use crate::client::state::{AlertKind, AppState};
use crate::client::theme::{colors, styles};

pub mod loading_view;
pub mod login_view;
pub mod register_view;
pub mod products_view;
pub mod product_view;
pub mod protected_view;

pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState) {
    if !state.session.state().is_authenticated() {
        return;
    }

    egui::TopBottomPanel::top("top_panel")
        .frame(styles::top_bar_frame())
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                if state.navigator.can_go_back() && ui.button("← Back").clicked() {
                    state.go_back();
                }
                ui.colored_label(colors::ACCENT, egui::RichText::new("☕ Cafe Catalog").size(18.0).strong());

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.add(styles::danger_button("Log Out")).clicked() {
                        state.logout();
                        return;
                    }
                    if state.navigator.current() != &Screen::Protected && ui.button("Session").clicked() {
                        state.navigator.push(Screen::Protected);
                    }
                    if let Some(user) = state.session.user() {
                        ui.colored_label(colors::TEXT_SECONDARY, &user.email);
                    }
                });
            });
        });
}

pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState) {
    let frame = match state.navigator.current() {
        Screen::Login | Screen::Register | Screen::Loading => styles::auth_frame(),
        _ => styles::content_frame(),
    };

    egui::CentralPanel::default()
        .frame(frame)
        .show(ctx, |ui| match state.navigator.current().clone() {
            Screen::Loading => loading_view::render(ui),
            Screen::Login => login_view::render(ui, state),
            Screen::Register => register_view::render(ui, state),
            Screen::Products => products_view::render(ui, state),
            Screen::Product(route) => product_view::render(ui, state, &route),
            Screen::Protected => protected_view::render(ui, state),
        });
}

/// Modal for the pending alert, if any
pub fn render_alert(ctx: &egui::Context, state: &mut AppState) {
    let Some(alert) = state.alert.clone() else {
        return;
    };

    egui::Modal::new(egui::Id::new("app_alert")).show(ctx, |ui| {
        ui.set_width(320.0);
        ui.heading(&alert.title);
        if !alert.message.is_empty() {
            ui.add_space(8.0);
            ui.label(&alert.message);
        }
        ui.add_space(16.0);

        ui.horizontal(|ui| match alert.kind {
            AlertKind::Notice => {
                if ui.button("Ok").clicked() {
                    state.dismiss_alert();
                }
            }
            AlertKind::ConfirmDelete { ref id } => {
                if ui.add(styles::danger_button("Cancel")).clicked() {
                    tracing::debug!("Delete of {} cancelled", id);
                    state.dismiss_alert();
                }
                if ui.add(styles::primary_button("Confirm")).clicked() {
                    state.confirm_delete(id.clone());
                }
            }
        });
    });
}

/// Modal for a session error; acknowledging it clears the error
pub(crate) fn render_session_error(ui: &mut egui::Ui, state: &mut AppState, title: &str) {
    if state.session.error_message().is_empty() {
        return;
    }
    let message = state.session.error_message().to_string();

    egui::Modal::new(egui::Id::new("session_error")).show(ui.ctx(), |ui| {
        ui.set_width(320.0);
        ui.heading(title);
        ui.add_space(8.0);
        ui.label(message);
        ui.add_space(16.0);
        if ui.button("Ok").clicked() {
            state.session.remove_error();
        }
    });
}
