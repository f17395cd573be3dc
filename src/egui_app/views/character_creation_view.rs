use std::sync::mpsc::{channel, Receiver};

use eframe::egui;
use tokio::task::JoinHandle;

use crate::egui_app::api::ApiError;
use crate::egui_app::context::AppContext;
use crate::egui_app::progression::{self, READY_CHARACTER_COUNT};
use crate::egui_app::screens::{Screen, ScreenError};
use crate::egui_app::theme::{colors, styles};
use crate::egui_app::types::{Route, ScreenId};

/// Shown until the player owns enough characters to enter the castle.
#[derive(Debug, Default)]
pub struct CharacterCreationScreen {
    count: Option<usize>,
    error: Option<String>,
    pending: Option<Receiver<Result<usize, ApiError>>>,
    task: Option<JoinHandle<()>>,
}

impl CharacterCreationScreen {
    pub fn new() -> Self {
        Self::default()
    }

    fn refresh(&mut self, ctx: &AppContext) -> Result<(), ScreenError> {
        let profile = ctx
            .profile()
            .ok_or_else(|| ScreenError::mount(ScreenId::CharacterCreation, "no profile loaded"))?;

        let (tx, rx) = channel();
        let api = ctx.api.clone();
        self.task = Some(ctx.runtime.spawn(async move {
            let _ = tx.send(progression::count_characters(&api, &profile.id).await);
        }));
        self.pending = Some(rx);
        self.error = None;
        Ok(())
    }

    fn poll(&mut self) {
        let Some(rx) = &self.pending else { return };
        if let Ok(result) = rx.try_recv() {
            self.pending = None;
            self.task = None;
            match result {
                Ok(count) => self.count = Some(count),
                Err(e) => self.error = Some(e.to_string()),
            }
        }
    }
}

impl Screen for CharacterCreationScreen {
    fn id(&self) -> ScreenId {
        ScreenId::CharacterCreation
    }

    fn mount(&mut self, ctx: &AppContext) -> Result<(), ScreenError> {
        self.refresh(ctx)
    }

    fn ui(&mut self, ui: &mut egui::Ui, ctx: &AppContext) {
        self.poll();

        ui.vertical_centered(|ui| {
            ui.add_space(30.0);
            ui.label(styles::heading(ScreenId::CharacterCreation.title()));
            ui.add_space(8.0);
            if let Some(god) = ctx.profile().and_then(|p| p.god) {
                ui.label(
                    egui::RichText::new(format!("Champions of {}", god.to_uppercase()))
                        .color(colors::TEXT_SECONDARY),
                );
            }
            ui.add_space(24.0);

            styles::card_frame().show(ui, |ui| {
                match (self.count, &self.error) {
                    (_, Some(error)) => {
                        ui.label(egui::RichText::new(error.as_str()).color(colors::ERROR));
                    }
                    (Some(count), None) => {
                        ui.label(
                            egui::RichText::new(format!(
                                "{} of {} characters created",
                                count.min(READY_CHARACTER_COUNT),
                                READY_CHARACTER_COUNT
                            ))
                            .size(18.0)
                            .color(colors::TEXT_LIGHT),
                        );
                    }
                    (None, None) => {
                        ui.spinner();
                    }
                }
            });

            ui.add_space(16.0);
            if ui.add(styles::primary_button("Check again")).clicked() {
                if let Err(e) = self.refresh(ctx) {
                    self.error = Some(e.to_string());
                }
            }
            if self.count.is_some_and(|c| c >= READY_CHARACTER_COUNT)
                && ui.add(styles::primary_button("Enter the castle")).clicked()
            {
                ctx.navigator.request(Route::Home);
            }
        });
    }

    fn teardown(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
        self.pending = None;
    }
}
