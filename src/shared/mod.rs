//! Shared Module
//!
//! Types shared between the client shell and the battle stub server. All of
//! them are plain serde records that travel over HTTP or into client storage.

/// Shared error types
pub mod error;

/// Remote application configuration
pub mod config;

/// Session, profile and auth payloads
pub mod profile;

/// Battle turn wire types
pub mod battle;

pub use error::SharedError;
pub use config::{AppConfig, ConfigError};
pub use profile::{
    AuthResponse, CharacterStub, Credentials, ErrorBody, MusicSetting, MusicUpdate, Profile,
    ProfileId, ProfileSettings, Session,
};
pub use battle::{CombinedAction, CombinedActionEnd, TurnState};
