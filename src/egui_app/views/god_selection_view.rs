use eframe::egui;

use crate::egui_app::context::AppContext;
use crate::egui_app::screens::Screen;
use crate::egui_app::theme::{colors, styles};
use crate::egui_app::types::ScreenId;

/// Deities offered when the server config does not list any.
pub const DEFAULT_GODS: [&str; 6] = ["ra", "odin", "zeus", "anubis", "freya", "athena"];

/// Shown to players whose profile has no god yet.
#[derive(Debug, Default)]
pub struct GodSelectionScreen {
    gods: Vec<String>,
    highlighted: Option<String>,
}

impl GodSelectionScreen {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Screen for GodSelectionScreen {
    fn id(&self) -> ScreenId {
        ScreenId::GodSelection
    }

    fn mount(&mut self, ctx: &AppContext) -> Result<(), crate::egui_app::screens::ScreenError> {
        self.gods = ctx
            .app_config
            .extra
            .get("gods")
            .and_then(|v| v.as_array())
            .map(|gods| gods.iter().filter_map(|g| g.as_str().map(str::to_string)).collect())
            .filter(|gods: &Vec<String>| !gods.is_empty())
            .unwrap_or_else(|| DEFAULT_GODS.iter().map(|g| g.to_string()).collect());
        Ok(())
    }

    fn ui(&mut self, ui: &mut egui::Ui, _ctx: &AppContext) {
        ui.vertical_centered(|ui| {
            ui.add_space(30.0);
            ui.label(styles::heading(ScreenId::GodSelection.title()));
            ui.add_space(8.0);
            ui.label(
                egui::RichText::new("Every champion serves a god. Your choice shapes your realm.")
                    .color(colors::TEXT_SECONDARY),
            );
            ui.add_space(24.0);

            styles::card_frame().show(ui, |ui| {
                ui.horizontal_wrapped(|ui| {
                    for god in &self.gods {
                        let selected = self.highlighted.as_deref() == Some(god.as_str());
                        let text = egui::RichText::new(god.to_uppercase()).size(18.0).color(if selected {
                            colors::SELECTED
                        } else {
                            colors::TEXT_LIGHT
                        });
                        if ui.add(egui::Button::new(text).min_size(egui::vec2(120.0, 48.0))).clicked() {
                            self.highlighted = Some(god.clone());
                        }
                    }
                });
            });

            if let Some(god) = &self.highlighted {
                ui.add_space(16.0);
                ui.label(
                    egui::RichText::new(format!("You have chosen {}.", god.to_uppercase()))
                        .color(colors::TEXT_LIGHT),
                );
            }
        });
    }

    fn teardown(&mut self) {
        self.highlighted = None;
    }
}
