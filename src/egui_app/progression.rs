//! Progression Resolver
//!
//! Decides which screen a freshly authenticated player lands on.
//!
//! ```text
//! NoProfile ──────────┐
//! NoGod ──────────────┴──→ god_selection
//! FewCharacters (< 3) ───→ character_creation
//! Ready (>= 3) ──────────→ castle
//! ```
//!
//! The character count is asked for on every decision and never cached. If
//! the count cannot be obtained the player is sent to god selection rather
//! than left without a screen.

use crate::egui_app::api::{ApiClient, ApiError, RequestOptions};
use crate::egui_app::session::SessionStore;
use crate::egui_app::types::ScreenId;
use crate::shared::{CharacterStub, Profile, ProfileId};

/// Characters needed before the castle opens.
pub const READY_CHARACTER_COUNT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressionState {
    NoProfile,
    NoGod,
    FewCharacters,
    Ready,
}

impl ProgressionState {
    pub fn classify(profile: Option<&Profile>, character_count: usize) -> Self {
        match profile {
            None => ProgressionState::NoProfile,
            Some(profile) if !profile.has_god() => ProgressionState::NoGod,
            Some(_) if character_count < READY_CHARACTER_COUNT => ProgressionState::FewCharacters,
            Some(_) => ProgressionState::Ready,
        }
    }

    pub fn target(self) -> ScreenId {
        match self {
            ProgressionState::NoProfile | ProgressionState::NoGod => ScreenId::GodSelection,
            ProgressionState::FewCharacters => ScreenId::CharacterCreation,
            ProgressionState::Ready => ScreenId::Castle,
        }
    }
}

/// Screen for a profile with `character_count` characters.
pub fn route_for(profile: Option<&Profile>, character_count: usize) -> ScreenId {
    ProgressionState::classify(profile, character_count).target()
}

pub const CHARACTERS_PATH: &str = "/api/supabase/rest/v1/characters";

/// The character query for `player_id`.
///
/// Bounded at [`READY_CHARACTER_COUNT`] rows: the decision only needs to know
/// whether the player has reached that many.
pub fn characters_query(player_id: &ProfileId) -> RequestOptions {
    RequestOptions::get()
        .query_pair("player_id", format!("eq.{}", player_id))
        .query_pair("select", "id")
        .query_pair("limit", READY_CHARACTER_COUNT.to_string())
}

pub async fn count_characters(api: &ApiClient, player_id: &ProfileId) -> Result<usize, ApiError> {
    let rows: Vec<CharacterStub> = api
        .fetch_json(CHARACTERS_PATH, characters_query(player_id))
        .await?;
    Ok(rows.len())
}

/// Pick the landing screen for the current session. Never fails.
pub async fn resolve(api: &ApiClient, store: &SessionStore) -> ScreenId {
    let profile = store.profile();
    let profile = match profile {
        Some(profile) if profile.has_god() => profile,
        other => return route_for(other.as_ref(), 0),
    };

    match count_characters(api, &profile.id).await {
        Ok(count) => {
            let target = route_for(Some(&profile), count);
            tracing::info!("Player {} has {} character(s); routing to {}", profile.id, count, target);
            target
        }
        Err(e) => {
            tracing::warn!("Character lookup failed, falling back to god selection: {}", e);
            ProgressionState::NoProfile.target()
        }
    }
}
