//! Application context
//!
//! Everything a screen or controller needs, bundled into one cheaply
//! clonable value owned by the shell and handed to each screen on mount.
//! There is no global state; two contexts never see each other's session.

use std::sync::Arc;

use tokio::runtime::Handle;

use crate::egui_app::api::ApiClient;
use crate::egui_app::config::ClientConfig;
use crate::egui_app::navigator::Navigator;
use crate::egui_app::session::SessionStore;
use crate::egui_app::settings::{AudioSwitch, LanguageSwitch, SettingsController};
use crate::egui_app::storage::Storage;
use crate::shared::{AppConfig, Profile, Session};

#[derive(Debug, Clone)]
pub struct AppContext {
    pub config: Arc<ClientConfig>,
    pub app_config: Arc<AppConfig>,
    pub http: reqwest::Client,
    pub store: Arc<SessionStore>,
    pub api: ApiClient,
    pub navigator: Navigator,
    pub audio: AudioSwitch,
    pub language: LanguageSwitch,
    /// Runtime that background calls are spawned on
    pub runtime: Handle,
}

impl AppContext {
    pub fn new(
        config: ClientConfig,
        app_config: AppConfig,
        http: reqwest::Client,
        storage: Arc<dyn Storage>,
        runtime: Handle,
    ) -> Self {
        let store = Arc::new(SessionStore::new(storage, http.clone(), config.server_url()));
        let navigator = Navigator::new();
        let api = ApiClient::new(http.clone(), config.server_url(), store.clone(), navigator.clone());

        Self {
            config: Arc::new(config),
            app_config: Arc::new(app_config),
            http,
            store,
            api,
            navigator,
            audio: AudioSwitch::default(),
            language: LanguageSwitch::default(),
            runtime,
        }
    }

    pub fn session(&self) -> Option<Session> {
        self.store.session()
    }

    pub fn profile(&self) -> Option<Profile> {
        self.store.profile()
    }

    pub fn settings(&self) -> SettingsController {
        SettingsController::new(
            self.api.clone(),
            self.store.clone(),
            self.audio.clone(),
            self.language.clone(),
        )
    }

    /// Bring the audio flag in line with the cached profile.
    pub fn sync_audio_with_profile(&self) {
        if let Some(profile) = self.profile() {
            self.audio.set_enabled(profile.settings.music.is_on());
        }
    }
}
