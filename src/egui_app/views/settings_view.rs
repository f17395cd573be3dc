use std::sync::mpsc::{channel, Receiver};

use eframe::egui;
use tokio::task::JoinHandle;

use crate::egui_app::context::AppContext;
use crate::egui_app::screens::Screen;
use crate::egui_app::settings::{Language, SettingsController, SettingsError};
use crate::egui_app::theme::{colors, styles};
use crate::egui_app::types::{Route, ScreenId};
use crate::shared::MusicSetting;

/// Language and music preferences.
///
/// The music toggle shows the new value immediately. If the backend rejects
/// it the toggle snaps back to the cached value and the error is shown.
#[derive(Debug)]
pub struct SettingsScreen {
    controller: SettingsController,
    music: MusicSetting,
    pending: Option<Receiver<Result<(), SettingsError>>>,
    task: Option<JoinHandle<()>>,
    error: Option<String>,
    saved: bool,
}

impl SettingsScreen {
    pub fn new(ctx: &AppContext) -> Self {
        let music = ctx
            .profile()
            .map(|p| p.settings.music)
            .unwrap_or_default();
        Self {
            controller: ctx.settings(),
            music,
            pending: None,
            task: None,
            error: None,
            saved: false,
        }
    }

    fn save_music(&mut self, ctx: &AppContext, music: MusicSetting) {
        self.music = music;
        self.error = None;
        self.saved = false;

        let (tx, rx) = channel();
        let controller = self.controller.clone();
        self.task = Some(ctx.runtime.spawn(async move {
            let _ = tx.send(controller.set_music(music).await);
        }));
        self.pending = Some(rx);
    }

    fn poll(&mut self, ctx: &AppContext) {
        let Some(rx) = &self.pending else { return };
        if let Ok(result) = rx.try_recv() {
            self.pending = None;
            self.task = None;
            match result {
                Ok(()) => self.saved = true,
                Err(e) => {
                    tracing::warn!("Music preference not saved: {}", e);
                    self.error = Some(e.to_string());
                    self.music = ctx.profile().map(|p| p.settings.music).unwrap_or_default();
                }
            }
        }
    }
}

impl Screen for SettingsScreen {
    fn id(&self) -> ScreenId {
        ScreenId::Settings
    }

    fn ui(&mut self, ui: &mut egui::Ui, ctx: &AppContext) {
        self.poll(ctx);

        ui.vertical_centered(|ui| {
            ui.add_space(30.0);
            ui.label(styles::heading(ScreenId::Settings.title()));
            ui.add_space(24.0);

            styles::card_frame().show(ui, |ui| {
                ui.label(egui::RichText::new("Language").size(18.0).color(colors::TEXT_LIGHT));
                ui.horizontal_wrapped(|ui| {
                    let active = self.controller.language();
                    for language in Language::ALL {
                        let text = egui::RichText::new(language.native_name()).color(if language == active {
                            colors::SELECTED
                        } else {
                            colors::TEXT_LIGHT
                        });
                        if ui.add(egui::Button::new(text).selected(language == active)).clicked() {
                            self.controller.set_language(language);
                        }
                    }
                });

                ui.add_space(16.0);
                ui.label(egui::RichText::new("Music").size(18.0).color(colors::TEXT_LIGHT));
                ui.horizontal(|ui| {
                    let mut on = self.music.is_on();
                    let busy = self.pending.is_some();
                    if ui.add_enabled(!busy, egui::Checkbox::new(&mut on, "Play music")).changed() {
                        self.save_music(ctx, self.music.toggled());
                    }
                    if busy {
                        ui.spinner();
                    } else if self.saved {
                        ui.colored_label(colors::SUCCESS, "Saved");
                    }
                });
                if let Some(error) = &self.error {
                    ui.colored_label(colors::ERROR, error.as_str());
                }
            });

            ui.add_space(16.0);
            if ui.add(styles::primary_button("Back")).clicked() {
                ctx.navigator.request(Route::Home);
            }
        });
    }

    fn teardown(&mut self) {
        // An in-flight update still completes on the runtime; only its report is dropped.
        self.task = None;
        self.pending = None;
    }
}
