use eframe::egui;

use crate::egui_app::auth::MIN_PASSWORD_LEN;
use crate::egui_app::state::AppState;
use crate::egui_app::theme::colors;

const INPUT_WIDTH: f32 = 280.0;
const LABEL_WIDTH: f32 = 110.0;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let available_rect = ui.available_rect_before_wrap();

    ui.vertical_centered(|ui| {
        let total_height = if state.is_register_mode { 360.0 } else { 290.0 };
        let top_space = (available_rect.height() - total_height).max(0.0) / 2.0;
        ui.add_space(top_space);

        ui.label(egui::RichText::new("⚔ Pantheon").size(32.0).strong().color(colors::TEXT_LIGHT));
        ui.add_space(20.0);

        ui.label(
            egui::RichText::new(if state.is_register_mode { "Create Account" } else { "Enter the Realm" })
                .size(24.0)
                .color(colors::TEXT_LIGHT),
        );
        ui.add_space(20.0);

        if let Some(ref error) = state.auth_state.error {
            ui.label(egui::RichText::new(error).color(colors::ERROR));
            ui.add_space(10.0);
        }

        let indent = (available_rect.width() - INPUT_WIDTH - LABEL_WIDTH - 20.0).max(0.0) / 2.0;
        let busy = state.auth_state.loading;

        field(ui, indent, "Account:", &mut state.account_input, false, busy);
        field(ui, indent, "Password:", &mut state.password_input, true, busy);
        if state.is_register_mode {
            field(ui, indent, "Confirm:", &mut state.confirm_password_input, true, busy);
            ui.label(
                egui::RichText::new(format!("At least {} characters", MIN_PASSWORD_LEN))
                    .size(12.0)
                    .color(colors::TEXT_SECONDARY),
            );
        }

        ui.add_space(20.0);

        ui.horizontal(|ui| {
            let button_width = 140.0;
            let total_buttons_width = button_width * 2.0 + 10.0;
            ui.add_space((available_rect.width() - total_buttons_width).max(0.0) / 2.0);

            let submit = egui::Button::new(
                egui::RichText::new(if state.is_register_mode { "Register" } else { "Login" })
                    .color(colors::TEXT_LIGHT),
            )
            .fill(colors::ACCENT);
            if ui.add_enabled_ui(!busy, |ui| ui.add_sized([button_width, 32.0], submit)).inner.clicked() {
                state.auth_state.clear_error();
                if state.is_register_mode {
                    state.handle_register();
                } else {
                    state.handle_login();
                }
            }

            ui.add_space(10.0);

            let toggle = egui::Button::new(
                egui::RichText::new(if state.is_register_mode { "Back to Login" } else { "Create Account" })
                    .color(colors::TEXT_SECONDARY),
            );
            if ui.add_enabled_ui(!busy, |ui| ui.add_sized([button_width, 32.0], toggle)).inner.clicked() {
                state.toggle_auth_mode();
            }
        });

        if busy {
            ui.add_space(15.0);
            ui.horizontal(|ui| {
                ui.add_space((available_rect.width() - 100.0).max(0.0) / 2.0);
                ui.label(egui::RichText::new("Loading...").color(colors::TEXT_LIGHT));
                ui.spinner();
            });
        }
    });
}

fn field(ui: &mut egui::Ui, indent: f32, label: &str, value: &mut String, password: bool, busy: bool) {
    ui.horizontal(|ui| {
        ui.add_space(indent);
        ui.add_sized(
            [LABEL_WIDTH, 24.0],
            egui::Label::new(egui::RichText::new(label).color(colors::TEXT_SECONDARY)),
        );
        ui.add_enabled(
            !busy,
            egui::TextEdit::singleline(value)
                .password(password)
                .desired_width(INPUT_WIDTH),
        );
    });
    ui.add_space(8.0);
}
