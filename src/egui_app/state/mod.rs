use std::sync::mpsc::{channel, Receiver, Sender};

use crate::egui_app::auth::{self, AuthState};
use crate::egui_app::context::AppContext;
use crate::egui_app::flow::{self, Landing};
use crate::egui_app::progression;
use crate::egui_app::screens::{ScreenHost, ScreenRegistry};
use crate::egui_app::types::{AppView, Route, ScreenId};
use crate::shared::Credentials;

/// Result of background work, delivered back to the UI thread.
#[derive(Debug)]
enum ShellEvent {
    Landed(Landing),
    AuthFailed(String),
}

/// Top-level coordinator: owns the context, the screen container and the
/// auth form, and applies background results once per frame.
///
/// Every navigation bumps `generation`. Background results tagged with an
/// older generation are dropped, so the last navigation the player started
/// is the one that wins.
pub struct AppState {
    pub ctx: AppContext,
    pub host: ScreenHost,
    pub view: AppView,
    pub auth_state: AuthState,
    pub account_input: String,
    pub password_input: String,
    pub confirm_password_input: String,
    pub is_register_mode: bool,
    generation: u64,
    events_tx: Sender<(u64, ShellEvent)>,
    events_rx: Receiver<(u64, ShellEvent)>,
}

impl AppState {
    pub fn new(ctx: AppContext, registry: ScreenRegistry) -> Self {
        let (events_tx, events_rx) = channel();
        Self {
            ctx,
            host: ScreenHost::new(registry),
            view: AppView::Booting,
            auth_state: AuthState::new(),
            account_input: String::new(),
            password_input: String::new(),
            confirm_password_input: String::new(),
            is_register_mode: false,
            generation: 0,
            events_tx,
            events_rx,
        }
    }

    /// Kick off session restoration. Call once after construction.
    pub fn begin(&mut self) {
        self.view = AppView::Booting;
        let ctx = self.ctx.clone();
        self.spawn(async move { ShellEvent::Landed(flow::start(&ctx).await) });
    }

    /// Apply navigation requests and finished background work.
    pub fn poll(&mut self) {
        if let Some(route) = self.ctx.navigator.take() {
            self.navigate(route);
        }

        while let Ok((generation, event)) = self.events_rx.try_recv() {
            if generation != self.generation {
                tracing::debug!("Dropping stale result {:?}", event);
                continue;
            }
            match event {
                ShellEvent::Landed(Landing::Login) => self.show_login(),
                ShellEvent::Landed(Landing::Screen(_)) if !self.ctx.store.is_authenticated() => {
                    tracing::info!("Session ended before landing; showing login");
                    self.show_login();
                }
                ShellEvent::Landed(Landing::Screen(id)) => {
                    self.auth_state.loading = false;
                    self.password_input.clear();
                    self.confirm_password_input.clear();
                    self.load_screen(id);
                }
                ShellEvent::AuthFailed(message) => {
                    tracing::warn!("Authentication failed: {}", message);
                    self.auth_state.set_error(message);
                }
            }
        }
    }

    pub fn navigate(&mut self, route: Route) {
        match route {
            Route::Login => {
                self.generation += 1;
                self.show_login();
            }
            Route::Home if !self.ctx.store.is_authenticated() => {
                tracing::info!("No session; sending home request to login");
                self.generation += 1;
                self.show_login();
            }
            Route::Home => {
                let ctx = self.ctx.clone();
                self.spawn(async move {
                    ShellEvent::Landed(Landing::Screen(
                        progression::resolve(&ctx.api, &ctx.store).await,
                    ))
                });
            }
            Route::Screen(id) => {
                self.generation += 1;
                self.load_screen(id);
            }
        }
    }

    pub fn handle_login(&mut self) {
        let credentials = Credentials::new(self.account_input.trim(), self.password_input.clone());
        if let Err(e) = auth::validate_login(&credentials) {
            self.auth_state.set_error(e.to_string());
            return;
        }
        self.start_auth(credentials, false);
    }

    pub fn handle_register(&mut self) {
        if self.password_input != self.confirm_password_input {
            self.auth_state.set_error("Passwords do not match".to_string());
            return;
        }
        let credentials = Credentials::new(self.account_input.trim(), self.password_input.clone());
        if let Err(e) = auth::validate_registration(&credentials) {
            self.auth_state.set_error(e.to_string());
            return;
        }
        self.start_auth(credentials, true);
    }

    pub fn logout(&mut self) {
        flow::logout(&self.ctx);
        self.generation += 1;
        self.account_input.clear();
        self.show_login();
    }

    pub fn toggle_auth_mode(&mut self) {
        self.is_register_mode = !self.is_register_mode;
        self.auth_state.clear_error();
        self.password_input.clear();
        self.confirm_password_input.clear();
    }

    pub fn current_screen(&self) -> Option<ScreenId> {
        match self.view {
            AppView::Screen => self.host.current(),
            _ => None,
        }
    }

    fn start_auth(&mut self, credentials: Credentials, register: bool) {
        self.auth_state.loading = true;
        self.auth_state.error = None;
        self.auth_state.account = Some(credentials.account_name.clone());

        let ctx = self.ctx.clone();
        self.spawn(async move {
            let result = if register {
                auth::register(&ctx.http, &ctx.config, &credentials).await
            } else {
                auth::login(&ctx.http, &ctx.config, &credentials).await
            };
            match result {
                Ok(response) => match flow::complete_auth(&ctx, response).await {
                    Ok(id) => ShellEvent::Landed(Landing::Screen(id)),
                    Err(e) => ShellEvent::AuthFailed(format!("Could not save session: {}", e)),
                },
                Err(e) => ShellEvent::AuthFailed(e.to_string()),
            }
        });
    }

    fn show_login(&mut self) {
        self.host.unload();
        self.auth_state.loading = false;
        self.password_input.clear();
        self.confirm_password_input.clear();
        self.view = AppView::Auth;
    }

    fn load_screen(&mut self, id: ScreenId) {
        self.host.load(id, &self.ctx);
        self.view = AppView::Screen;
    }

    /// Run `task` on the context runtime under a fresh generation.
    fn spawn<F>(&mut self, task: F)
    where
        F: std::future::Future<Output = ShellEvent> + Send + 'static,
    {
        self.generation += 1;
        let generation = self.generation;
        let tx = self.events_tx.clone();
        self.ctx.runtime.spawn(async move {
            let event = task.await;
            let _ = tx.send((generation, event));
        });
    }
}
