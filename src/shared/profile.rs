//! Player Session and Profile Types
//!
//! These are the records exchanged with the auth and profile endpoints and
//! persisted in client storage. Fields the client does not interpret are kept
//! in a flattened `extra` map so a round trip through storage loses nothing
//! the backend sent.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::shared::error::SharedError;

/// Bearer credential for one logged-in player.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    /// Backend-assigned metadata (expiry hints, refresh token, user record).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Session {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            extra: Map::new(),
        }
    }

    /// Value for the `Authorization` header.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.access_token)
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("access_token", &"<redacted>")
            .field("extra", &self.extra)
            .finish()
    }
}

/// Profile identity. The backend sends either a number or a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProfileId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileId::Number(n) => write!(f, "{}", n),
            ProfileId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ProfileId {
    fn from(value: i64) -> Self {
        ProfileId::Number(value)
    }
}

impl From<&str> for ProfileId {
    fn from(value: &str) -> Self {
        ProfileId::Text(value.to_string())
    }
}

/// Background music preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MusicSetting {
    #[default]
    On,
    Off,
}

impl MusicSetting {
    pub fn is_on(self) -> bool {
        self == MusicSetting::On
    }

    pub fn toggled(self) -> Self {
        match self {
            MusicSetting::On => MusicSetting::Off,
            MusicSetting::Off => MusicSetting::On,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MusicSetting::On => "on",
            MusicSetting::Off => "off",
        }
    }
}

impl fmt::Display for MusicSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MusicSetting {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "on" => Ok(MusicSetting::On),
            "off" => Ok(MusicSetting::Off),
            other => Err(SharedError::unknown("music setting", other)),
        }
    }
}

/// Settings bag stored on the profile.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProfileSettings {
    #[serde(default)]
    pub music: MusicSetting,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Cached copy of the player's persistent record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: ProfileId,
    #[serde(default)]
    pub god: Option<String>,
    #[serde(default)]
    pub settings: ProfileSettings,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Profile {
    pub fn new(id: impl Into<ProfileId>) -> Self {
        Self {
            id: id.into(),
            god: None,
            settings: ProfileSettings::default(),
            extra: Map::new(),
        }
    }

    pub fn with_god(mut self, god: impl Into<String>) -> Self {
        self.god = Some(god.into());
        self
    }

    /// A profile without a deity is incomplete.
    pub fn has_god(&self) -> bool {
        self.god.as_deref().is_some_and(|g| !g.trim().is_empty())
    }
}

/// Login and registration request body.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub account_name: String,
    pub password: String,
}

impl Credentials {
    pub fn new(account_name: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            account_name: account_name.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("account_name", &self.account_name)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Successful login/registration payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub session: Session,
    #[serde(default)]
    pub profile: Option<Profile>,
}

/// Error payload returned by the auth endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Row of the character count query; only the id is selected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterStub {
    pub id: Value,
}

/// Body of the music preference update.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MusicUpdate {
    pub music: MusicSetting,
}
