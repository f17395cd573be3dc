//! Backend Module
//!
//! Server side of the battle turn stub. Only compiled with the `ssr` feature.
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports
//! ├── server/         - Router assembly
//! ├── battle/         - Battle turn handlers
//! └── error/          - Error types and JSON responses
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use pantheon::backend::server::create_app;
//!
//! # async fn example() -> std::io::Result<()> {
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//! axum::serve(listener, create_app()).await?;
//! # Ok(())
//! # }
//! ```

/// Server setup
pub mod server;

/// Battle turn handlers
pub mod battle;

/// Backend error types
pub mod error;

pub use error::BackendError;
pub use server::create_app;
