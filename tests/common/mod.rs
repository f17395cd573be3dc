//! Common test utilities and helpers
//!
//! - Client contexts pointed at a mock server
//! - Storage that counts removals
//! - Canned backend payloads

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use pantheon::egui_app::storage::{Storage, StorageError};
use pantheon::egui_app::{AppContext, ClientConfig, MemoryStorage};
use pantheon::shared::{AppConfig, Profile, ProfileId, Session};
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TOKEN: &str = "test-token";

/// Memory storage that records how often keys were removed.
#[derive(Debug, Default)]
pub struct CountingStorage {
    inner: MemoryStorage,
    removals: AtomicUsize,
}

impl CountingStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn removals(&self) -> usize {
        self.removals.load(Ordering::SeqCst)
    }
}

impl Storage for CountingStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get(key)
    }

    fn apply(&self, set: &[(&str, String)], remove: &[&str]) -> Result<(), StorageError> {
        if !remove.is_empty() {
            self.removals.fetch_add(1, Ordering::SeqCst);
        }
        self.inner.apply(set, remove)
    }
}

pub fn client_config(base_url: &str) -> ClientConfig {
    ClientConfig::builder()
        .server_url(base_url)
        .storage_path(std::env::temp_dir().join("pantheon-tests-unused.json"))
        .build()
        .expect("test server url is valid")
}

/// Context on the current tokio runtime.
pub fn context(base_url: &str, storage: Arc<dyn Storage>) -> AppContext {
    AppContext::new(
        client_config(base_url),
        AppConfig::default(),
        reqwest::Client::new(),
        storage,
        tokio::runtime::Handle::current(),
    )
}

pub fn signed_in(ctx: &AppContext, profile: Profile) {
    ctx.store
        .set(Session::new(TOKEN), Some(profile))
        .expect("memory storage never fails");
}

pub fn player(id: i64) -> Profile {
    Profile::new(id).with_god("ra")
}

pub fn characters(count: usize) -> Value {
    Value::Array((0..count).map(|i| json!({ "id": i })).collect())
}

/// Answer the character query for `player_id` with `count` rows.
pub async fn mount_characters(server: &MockServer, player_id: &ProfileId, count: usize) {
    Mock::given(method("GET"))
        .and(path("/api/supabase/rest/v1/characters"))
        .and(query_param("player_id", format!("eq.{}", player_id)))
        .respond_with(ResponseTemplate::new(200).set_body_json(characters(count)))
        .mount(server)
        .await;
}

/// Poll `check` until it holds or two seconds pass.
pub async fn eventually<F: FnMut() -> bool>(mut check: F) -> bool {
    for _ in 0..100 {
        if check() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    check()
}
