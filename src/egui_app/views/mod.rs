use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::colors;
use crate::egui_app::types::{AppView, Route, ScreenId};

pub mod auth_view;
pub mod castle_view;
pub mod character_creation_view;
pub mod god_selection_view;
pub mod settings_view;

pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState) {
    let frame_style = egui::Frame::default()
        .fill(colors::TOP_BAR_BG)
        .inner_margin(egui::Margin::symmetric(12, 8));

    egui::TopBottomPanel::top("top_panel")
        .frame(frame_style)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(colors::TEXT_LIGHT, egui::RichText::new("⚔ Pantheon").size(18.0).strong());

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if state.view != AppView::Screen {
                        return;
                    }
                    if ui.button("Logout").clicked() {
                        state.logout();
                        return;
                    }
                    if state.current_screen() != Some(ScreenId::Settings) && ui.button("Settings").clicked() {
                        state.navigate(Route::Screen(ScreenId::Settings));
                    }
                    if let Some(account) = state.auth_state.account.as_deref() {
                        ui.colored_label(colors::TEXT_SECONDARY, format!("@{}", account));
                    }
                });
            });
        });
}

pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState) {
    let frame = egui::Frame::default()
        .fill(colors::BG_DARK)
        .inner_margin(egui::Margin::same(16));

    egui::CentralPanel::default()
        .frame(frame)
        .show(ctx, |ui| match state.view {
            AppView::Booting => {
                ui.vertical_centered(|ui| {
                    ui.add_space(120.0);
                    ui.spinner();
                    ui.label(egui::RichText::new("Restoring session...").color(colors::TEXT_SECONDARY));
                });
            }
            AppView::Auth => auth_view::render(ui, state),
            AppView::Screen => state.host.ui(ui, &state.ctx),
        });
}

/// Shown instead of the shell when the app configuration could not be loaded.
pub fn render_fatal(ctx: &egui::Context, message: &str) {
    egui::CentralPanel::default()
        .frame(egui::Frame::default().fill(colors::BG_DARK))
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(120.0);
                ui.label(
                    egui::RichText::new("Unable to start")
                        .size(28.0)
                        .strong()
                        .color(colors::ERROR),
                );
                ui.add_space(12.0);
                ui.label(egui::RichText::new(message).color(colors::TEXT_LIGHT));
            });
        });
}
