//! Session Store
//!
//! Holds the authenticated session and the cached profile for the running
//! client, mirrored to [`Storage`] under [`SESSION_KEY`] and [`PROFILE_KEY`].
//! Both entries are always written together and cleared together.
//!
//! Only [`SessionStore::validate`] touches the network.

use std::sync::{Arc, PoisonError, RwLock};

use serde::de::DeserializeOwned;

use crate::egui_app::storage::{Storage, StorageError, PROFILE_KEY, SESSION_KEY};
use crate::shared::{Profile, Session};

/// Liveness probe endpoint
pub const PROFILE_PROBE_PATH: &str = "/api/profile";

#[derive(Debug, Default)]
struct SessionState {
    session: Option<Session>,
    profile: Option<Profile>,
}

pub struct SessionStore {
    storage: Arc<dyn Storage>,
    state: RwLock<SessionState>,
    http: reqwest::Client,
    base_url: String,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn Storage>, http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            storage,
            state: RwLock::new(SessionState::default()),
            http,
            base_url: base_url.into(),
        }
    }

    /// Load the persisted pair into memory.
    ///
    /// Returns `None` when no usable session is stored. A malformed profile
    /// alone leaves the session in place with an empty profile cache.
    pub fn restore(&self) -> Option<Session> {
        let session: Option<Session> = self.read_entry(SESSION_KEY);
        let profile = match session {
            Some(_) => self.read_entry(PROFILE_KEY),
            None => None,
        };

        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.session = session.clone();
        state.profile = profile;
        if session.is_some() {
            tracing::info!("Restored persisted session (profile cached: {})", state.profile.is_some());
        }
        session
    }

    /// Ask the backend whether `session` is still live.
    pub async fn validate(&self, session: &Session) -> bool {
        let url = format!("{}{}", self.base_url, PROFILE_PROBE_PATH);
        match self
            .http
            .get(&url)
            .header(reqwest::header::AUTHORIZATION, session.bearer())
            .send()
            .await
        {
            Ok(response) if response.status().is_success() => true,
            Ok(response) => {
                tracing::info!("Stored session rejected with status {}", response.status());
                false
            }
            Err(e) => {
                tracing::warn!("Session validation request failed: {}", e);
                false
            }
        }
    }

    /// Persist and adopt a new session/profile pair.
    pub fn set(&self, session: Session, profile: Option<Profile>) -> Result<(), StorageError> {
        let mut entries = vec![(SESSION_KEY, serde_json::to_string(&session)?)];
        let stale: &[&str] = match &profile {
            Some(profile) => {
                entries.push((PROFILE_KEY, serde_json::to_string(profile)?));
                &[]
            }
            None => &[PROFILE_KEY],
        };
        self.storage.apply(&entries, stale)?;

        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.session = Some(session);
        state.profile = profile;
        Ok(())
    }

    /// Forget the session everywhere. Safe to call repeatedly.
    pub fn clear(&self) {
        {
            let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
            state.session = None;
            state.profile = None;
        }
        if let Err(e) = self.storage.remove_many(&[SESSION_KEY, PROFILE_KEY]) {
            tracing::warn!("Failed to remove persisted session: {}", e);
        }
    }

    pub fn session(&self) -> Option<Session> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .session
            .clone()
    }

    pub fn profile(&self) -> Option<Profile> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .profile
            .clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .session
            .is_some()
    }

    /// Apply `update` to the cached profile and persist the result.
    ///
    /// Memory is only touched after the write succeeds. Without a cached
    /// profile this does nothing and returns `Ok(None)`.
    pub fn update_profile<F>(&self, update: F) -> Result<Option<Profile>, StorageError>
    where
        F: FnOnce(&mut Profile),
    {
        let Some(mut profile) = self.profile() else {
            return Ok(None);
        };
        update(&mut profile);
        self.storage
            .set(PROFILE_KEY, serde_json::to_string(&profile)?)?;

        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.profile = Some(profile.clone());
        Ok(Some(profile))
    }

    fn read_entry<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.storage.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!("Failed to read {} from storage: {}", key, e);
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Discarding malformed persisted {}: {}", key, e);
                None
            }
        }
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("base_url", &self.base_url)
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::egui_app::storage::MemoryStorage;
    use crate::shared::MusicSetting;

    fn store_with(storage: Arc<dyn Storage>) -> SessionStore {
        SessionStore::new(storage, reqwest::Client::new(), "http://127.0.0.1:9")
    }

    /// Storage that refuses any write which also removes keys.
    #[derive(Default)]
    struct NoRemoveStorage(MemoryStorage);

    impl Storage for NoRemoveStorage {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.0.get(key)
        }

        fn apply(&self, set: &[(&str, String)], remove: &[&str]) -> Result<(), StorageError> {
            if !remove.is_empty() {
                return Err(StorageError::Io {
                    path: "memory".to_string(),
                    source: std::io::Error::other("read-only"),
                });
            }
            self.0.apply(set, remove)
        }
    }

    #[test]
    fn test_restore_empty_storage() {
        let store = store_with(Arc::new(MemoryStorage::new()));
        assert!(store.restore().is_none());
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_restore_malformed_session_is_absent() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set(SESSION_KEY, "{\"access_token\":".to_string()).unwrap();
        storage.set(PROFILE_KEY, "{\"id\":1}".to_string()).unwrap();

        let store = store_with(storage);
        assert!(store.restore().is_none());
        assert!(store.profile().is_none());
    }

    #[test]
    fn test_restore_malformed_profile_keeps_session() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set(SESSION_KEY, "{\"access_token\":\"t\"}".to_string()).unwrap();
        storage.set(PROFILE_KEY, "[]".to_string()).unwrap();

        let store = store_with(storage);
        assert_eq!(store.restore().map(|s| s.access_token), Some("t".to_string()));
        assert!(store.profile().is_none());
    }

    #[test]
    fn test_set_then_restore_observes_pair() {
        let storage = Arc::new(MemoryStorage::new());
        let store = store_with(storage.clone());
        store
            .set(Session::new("tok"), Some(Profile::new(3).with_god("ra")))
            .unwrap();

        let fresh = store_with(storage);
        assert_eq!(fresh.restore(), Some(Session::new("tok")));
        assert_eq!(fresh.profile(), Some(Profile::new(3).with_god("ra")));
    }

    #[test]
    fn test_set_without_profile_drops_stale_profile() {
        let storage = Arc::new(MemoryStorage::new());
        let store = store_with(storage.clone());
        store.set(Session::new("a"), Some(Profile::new(1))).unwrap();
        store.set(Session::new("b"), None).unwrap();

        assert_eq!(storage.get(PROFILE_KEY).unwrap(), None);
        assert!(store.profile().is_none());
    }

    #[test]
    fn test_failed_set_without_profile_keeps_previous_pair() {
        let storage = Arc::new(NoRemoveStorage::default());
        let store = store_with(storage.clone());
        store.set(Session::new("a"), Some(Profile::new(1))).unwrap();

        assert!(store.set(Session::new("b"), None).is_err());

        let fresh = store_with(storage);
        assert_eq!(fresh.restore(), Some(Session::new("a")));
        assert_eq!(fresh.profile(), Some(Profile::new(1)));
        assert_eq!(store.session(), Some(Session::new("a")));
    }

    #[test]
    fn test_clear_is_idempotent() {
        let storage = Arc::new(MemoryStorage::new());
        let store = store_with(storage.clone());
        store.set(Session::new("tok"), Some(Profile::new(1))).unwrap();

        store.clear();
        store.clear();

        assert!(store.session().is_none());
        assert!(store.profile().is_none());
        assert_eq!(storage.get(SESSION_KEY).unwrap(), None);
        assert_eq!(storage.get(PROFILE_KEY).unwrap(), None);
    }

    #[test]
    fn test_update_profile_persists() {
        let storage = Arc::new(MemoryStorage::new());
        let store = store_with(storage.clone());
        store.set(Session::new("tok"), Some(Profile::new(1))).unwrap();

        let updated = store
            .update_profile(|p| p.settings.music = MusicSetting::Off)
            .unwrap()
            .unwrap();
        assert_eq!(updated.settings.music, MusicSetting::Off);

        let raw = storage.get(PROFILE_KEY).unwrap().unwrap();
        let persisted: Profile = serde_json::from_str(&raw).unwrap();
        assert_eq!(persisted.settings.music, MusicSetting::Off);
    }

    #[test]
    fn test_update_profile_without_profile_is_noop() {
        let store = store_with(Arc::new(MemoryStorage::new()));
        assert!(store.update_profile(|p| p.god = None).unwrap().is_none());
    }
}
