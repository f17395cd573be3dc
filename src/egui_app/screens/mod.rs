//! Screen Loader
//!
//! Screens are the independently loadable units of the game UI (god
//! selection, character creation, castle, settings). Exactly one is mounted
//! at a time, in the single container owned by [`ScreenHost`].
//!
//! # Lifecycle
//!
//! ```text
//! registry.build(id) ──→ mount(ctx) ──→ ui(..) every frame ──→ teardown()
//!                            │
//!                            └── error ──→ Failed placeholder (logged)
//! ```
//!
//! Loading a screen always tears down the previous one first, even when the
//! new one then fails to load.

use std::collections::HashMap;

use eframe::egui;
use thiserror::Error;

use crate::egui_app::context::AppContext;
use crate::egui_app::theme::colors;
use crate::egui_app::types::ScreenId;
use crate::egui_app::views;

#[derive(Debug, Error)]
pub enum ScreenError {
    #[error("no screen registered for {0}")]
    NotRegistered(ScreenId),
    #[error("failed to mount {screen}: {message}")]
    Mount { screen: ScreenId, message: String },
}

impl ScreenError {
    pub fn mount(screen: ScreenId, message: impl Into<String>) -> Self {
        Self::Mount {
            screen,
            message: message.into(),
        }
    }
}

/// A mountable screen.
pub trait Screen {
    fn id(&self) -> ScreenId;

    /// Called once, right after construction.
    fn mount(&mut self, _ctx: &AppContext) -> Result<(), ScreenError> {
        Ok(())
    }

    /// Draw one frame.
    fn ui(&mut self, ui: &mut egui::Ui, ctx: &AppContext);

    /// Release everything the screen started: pending calls, listeners.
    fn teardown(&mut self) {}
}

pub type ScreenFactory = Box<dyn Fn(&AppContext) -> Result<Box<dyn Screen>, ScreenError>>;

/// Closed mapping from [`ScreenId`] to constructors.
#[derive(Default)]
pub struct ScreenRegistry {
    factories: HashMap<ScreenId, ScreenFactory>,
}

impl ScreenRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The four built-in game screens.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(ScreenId::GodSelection, |_| {
            Ok(Box::new(views::god_selection_view::GodSelectionScreen::new()))
        });
        registry.register(ScreenId::CharacterCreation, |_| {
            Ok(Box::new(views::character_creation_view::CharacterCreationScreen::new()))
        });
        registry.register(ScreenId::Castle, |_| {
            Ok(Box::new(views::castle_view::CastleScreen::new()))
        });
        registry.register(ScreenId::Settings, |ctx| {
            Ok(Box::new(views::settings_view::SettingsScreen::new(ctx)))
        });
        registry
    }

    /// Register or replace the factory for `id`.
    pub fn register<F>(&mut self, id: ScreenId, factory: F)
    where
        F: Fn(&AppContext) -> Result<Box<dyn Screen>, ScreenError> + 'static,
    {
        self.factories.insert(id, Box::new(factory));
    }

    pub fn contains(&self, id: ScreenId) -> bool {
        self.factories.contains_key(&id)
    }

    pub fn build(&self, id: ScreenId, ctx: &AppContext) -> Result<Box<dyn Screen>, ScreenError> {
        let factory = self.factories.get(&id).ok_or(ScreenError::NotRegistered(id))?;
        factory(ctx)
    }
}

impl std::fmt::Debug for ScreenRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScreenRegistry")
            .field("screens", &self.factories.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Contents of the container.
pub enum Mounted {
    Empty,
    Active(Box<dyn Screen>),
    Failed { screen: ScreenId, message: String },
}

impl std::fmt::Debug for Mounted {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mounted::Empty => f.write_str("Empty"),
            Mounted::Active(screen) => f.debug_tuple("Active").field(&screen.id()).finish(),
            Mounted::Failed { screen, message } => f
                .debug_struct("Failed")
                .field("screen", screen)
                .field("message", message)
                .finish(),
        }
    }
}

/// The single screen container.
#[derive(Debug)]
pub struct ScreenHost {
    registry: ScreenRegistry,
    mounted: Mounted,
}

impl ScreenHost {
    pub fn new(registry: ScreenRegistry) -> Self {
        Self {
            registry,
            mounted: Mounted::Empty,
        }
    }

    /// Replace whatever is mounted with a fresh `id` screen.
    ///
    /// Failures leave a visible placeholder and are logged; they are not
    /// returned.
    pub fn load(&mut self, id: ScreenId, ctx: &AppContext) {
        self.unload();
        tracing::info!("Loading screen {}", id);

        let mut screen = match self.registry.build(id, ctx) {
            Ok(screen) => screen,
            Err(e) => return self.fail(id, e),
        };
        if let Err(e) = screen.mount(ctx) {
            screen.teardown();
            return self.fail(id, e);
        }
        self.mounted = Mounted::Active(screen);
    }

    /// Tear down and empty the container.
    pub fn unload(&mut self) {
        if let Mounted::Active(mut screen) = std::mem::replace(&mut self.mounted, Mounted::Empty) {
            tracing::debug!("Tearing down screen {}", screen.id());
            screen.teardown();
        }
    }

    pub fn mounted(&self) -> &Mounted {
        &self.mounted
    }

    /// Id of the active screen, if one is mounted successfully.
    pub fn current(&self) -> Option<ScreenId> {
        match &self.mounted {
            Mounted::Active(screen) => Some(screen.id()),
            _ => None,
        }
    }

    pub fn ui(&mut self, ui: &mut egui::Ui, ctx: &AppContext) {
        match &mut self.mounted {
            Mounted::Empty => {}
            Mounted::Active(screen) => screen.ui(ui, ctx),
            Mounted::Failed { screen, message } => {
                ui.vertical_centered(|ui| {
                    ui.add_space(60.0);
                    ui.label(
                        egui::RichText::new(format!("Could not open {}", screen.title()))
                            .size(22.0)
                            .color(colors::ERROR),
                    );
                    ui.add_space(8.0);
                    ui.label(egui::RichText::new(message.as_str()).color(colors::TEXT_SECONDARY));
                });
            }
        }
    }

    fn fail(&mut self, screen: ScreenId, error: ScreenError) {
        tracing::error!("Screen {} failed to load: {}", screen, error);
        self.mounted = Mounted::Failed {
            screen,
            message: error.to_string(),
        };
    }
}
