//! egui Native Game Client
//!
//! The client shell: login and registration, session persistence, and the
//! screen loader that decides which game screen the player sees.
//!
//! # Architecture
//!
//! - **`config`** - Client configuration and the remote app config fetch
//! - **`storage`** - Durable key/value storage (the local storage analogue)
//! - **`session`** - Session store: current session and cached profile
//! - **`api`** - Authenticated API client with session-expiry handling
//! - **`auth`** - Login and registration calls, form state
//! - **`progression`** - Chooses the landing screen from profile state
//! - **`settings`** - Language and music preferences
//! - **`screens`** - Screen trait, registry and the single-screen host
//! - **`flow`** - Startup and login sequences
//! - **`state`** - `AppState`, the top-level coordinator
//! - **`views`** - egui rendering for the shell and each screen
//!
//! # Example
//!
//! ```rust,no_run
//! // Run the client:
//! // cargo run --bin pantheon
//! ```

pub mod api;
pub mod auth;
pub mod config;
pub mod context;
pub mod flow;
pub mod logging;
pub mod navigator;
pub mod progression;
pub mod screens;
pub mod session;
pub mod settings;
pub mod state;
pub mod storage;
pub mod theme;
pub mod types;
pub mod views;

// Re-export commonly used types
pub use api::{ApiClient, ApiError, RequestOptions};
pub use auth::{login, register, AuthError, AuthState};
pub use config::{fetch_app_config, ClientConfig, ConfigLoadError};
pub use context::AppContext;
pub use flow::Landing;
pub use navigator::Navigator;
pub use screens::{Mounted, Screen, ScreenError, ScreenHost, ScreenRegistry};
pub use session::SessionStore;
pub use settings::{AudioSwitch, Language, LanguageSwitch, SettingsController, SettingsError};
pub use state::AppState;
pub use storage::{FileStorage, MemoryStorage, Storage, StorageError};
pub use types::{AppView, Route, ScreenId};
