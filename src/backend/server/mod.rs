//! Server Module
//!
//! - **`init`** - Router assembly

/// Server initialization
pub mod init;

pub use init::{create_app, COMBINED_ACTION_END_PATH};
