//! Pantheon - Game Client Shell
//!
//! Pantheon is the native client shell of a browser-style strategy game:
//! login and registration, session persistence, player preferences, and a
//! screen loader that routes each player to the right screen (god selection,
//! character creation, castle, settings) based on their progression.
//!
//! # Module Structure
//!
//! - **`shared`** - Types shared by client and server
//!   - Session, profile and auth payloads
//!   - Remote app configuration
//!   - Battle turn wire types
//!   - Error types
//!
//! - **`egui_app`** - Native desktop client (egui/eframe)
//!   - Session store, API client, progression resolver
//!   - Screen registry and host
//!   - Settings controller
//!
//! - **`backend`** - Battle turn stub server (only compiled with `ssr`)
//!   - `POST /api/battle/combined-action-end`
//!
//! # Feature Flags
//!
//! - **`ssr`** - Enables the axum battle stub server
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use pantheon::egui_app::{AppContext, AppState, ClientConfig, MemoryStorage, ScreenRegistry};
//!
//! # fn example(runtime: tokio::runtime::Handle) -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClientConfig::load()?;
//! let ctx = AppContext::new(
//!     config,
//!     Default::default(),
//!     reqwest::Client::new(),
//!     Arc::new(MemoryStorage::new()),
//!     runtime,
//! );
//! let mut state = AppState::new(ctx, ScreenRegistry::standard());
//! state.begin();
//! # Ok(())
//! # }
//! ```
//!
//! # Threading
//!
//! - **Client**: egui runs on one thread; network calls run on a tokio
//!   runtime and report back over channels drained once per frame
//! - **Server**: axum handlers are stateless

/// Shared types and data structures
pub mod shared;

/// Battle turn stub server
#[cfg(feature = "ssr")]
pub mod backend;

/// egui native desktop client
pub mod egui_app;
