//! Settings Controller
//!
//! Player preferences: interface language and background music.
//!
//! The two preferences are stored differently. Music lives on the backend
//! profile and is mirrored into the cached profile once the backend accepts
//! it. Language is a process-wide switch only and is never sent anywhere.

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use thiserror::Error;

use crate::egui_app::api::{ApiClient, ApiError, RequestOptions};
use crate::egui_app::session::SessionStore;
use crate::egui_app::storage::StorageError;
use crate::shared::{MusicSetting, MusicUpdate, SharedError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    En,
    Fr,
    De,
    Es,
    Ru,
}

impl Language {
    pub const ALL: [Language; 5] = [Language::En, Language::Fr, Language::De, Language::Es, Language::Ru];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fr => "fr",
            Language::De => "de",
            Language::Es => "es",
            Language::Ru => "ru",
        }
    }

    pub fn native_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Fr => "Français",
            Language::De => "Deutsch",
            Language::Es => "Español",
            Language::Ru => "Русский",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_lowercase();
        Language::ALL
            .into_iter()
            .find(|lang| lang.code() == code)
            .ok_or_else(|| SharedError::unknown("language", s))
    }
}

/// Active interface language, shared by every screen.
#[derive(Debug, Clone, Default)]
pub struct LanguageSwitch {
    current: Arc<RwLock<Language>>,
}

impl LanguageSwitch {
    pub fn get(&self) -> Language {
        *self.current.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set(&self, language: Language) {
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = language;
    }
}

/// Global audio-enabled flag read by the sound system.
#[derive(Debug, Clone)]
pub struct AudioSwitch {
    enabled: Arc<AtomicBool>,
}

impl AudioSwitch {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled: Arc::new(AtomicBool::new(enabled)),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::SeqCst);
    }
}

impl Default for AudioSwitch {
    fn default() -> Self {
        Self::new(true)
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("no profile loaded")]
    NoProfile,
    #[error("failed to update settings: {0}")]
    Api(#[from] ApiError),
    #[error("failed to save settings locally: {0}")]
    Storage(#[from] StorageError),
}

/// Music endpoint; the profile id is appended as its own path segment.
pub const MUSIC_PATH: &str = "/api/profile/music";

#[derive(Debug, Clone)]
pub struct SettingsController {
    api: ApiClient,
    store: Arc<SessionStore>,
    audio: AudioSwitch,
    language: LanguageSwitch,
}

impl SettingsController {
    pub fn new(api: ApiClient, store: Arc<SessionStore>, audio: AudioSwitch, language: LanguageSwitch) -> Self {
        Self {
            api,
            store,
            audio,
            language,
        }
    }

    pub fn language(&self) -> Language {
        self.language.get()
    }

    /// Switch the interface language. Local only.
    pub fn set_language(&self, language: Language) {
        tracing::info!("Language switched to {}", language);
        self.language.set(language);
    }

    /// Store the music preference on the backend, then locally.
    ///
    /// Nothing local changes unless the backend accepted the update.
    pub async fn set_music(&self, music: MusicSetting) -> Result<(), SettingsError> {
        let profile = self.store.profile().ok_or(SettingsError::NoProfile)?;

        let options = RequestOptions::patch()
            .segment(profile.id.to_string())
            .json(&MusicUpdate { music })?;
        self.api.call(MUSIC_PATH, options).await?;

        self.store.update_profile(|p| p.settings.music = music)?;
        self.audio.set_enabled(music.is_on());
        tracing::info!("Music preference saved: {}", music);
        Ok(())
    }
}
