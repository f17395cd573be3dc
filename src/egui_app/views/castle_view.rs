use eframe::egui;

use crate::egui_app::context::AppContext;
use crate::egui_app::screens::Screen;
use crate::egui_app::theme::{colors, styles};
use crate::egui_app::types::ScreenId;

/// Home screen of a fully set up player.
#[derive(Debug, Default)]
pub struct CastleScreen;

impl CastleScreen {
    pub fn new() -> Self {
        Self
    }
}

impl Screen for CastleScreen {
    fn id(&self) -> ScreenId {
        ScreenId::Castle
    }

    fn ui(&mut self, ui: &mut egui::Ui, ctx: &AppContext) {
        let profile = ctx.profile();
        ui.vertical_centered(|ui| {
            ui.add_space(30.0);
            ui.label(styles::heading(ScreenId::Castle.title()));
            ui.add_space(8.0);
            if let Some(god) = profile.as_ref().and_then(|p| p.god.as_deref()) {
                ui.label(
                    egui::RichText::new(format!("The banners of {} fly over your walls.", god.to_uppercase()))
                        .color(colors::TEXT_SECONDARY),
                );
            }
            ui.add_space(24.0);

            styles::card_frame().show(ui, |ui| {
                let music = if ctx.audio.is_enabled() { "playing" } else { "muted" };
                ui.label(egui::RichText::new(format!("Music: {}", music)).color(colors::TEXT_LIGHT));
                ui.label(
                    egui::RichText::new(format!("Language: {}", ctx.language.get().native_name()))
                        .color(colors::TEXT_LIGHT),
                );
            });
        });
    }
}
