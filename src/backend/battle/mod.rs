//! Battle Module
//!
//! Stub endpoint for ending a turn of combined actions. Nothing is resolved
//! server side yet; the handler echoes the turn state back.

pub mod handlers;

pub use handlers::{combined_action_end, health};
