/**
 * Server Initialization
 *
 * Builds the axum router. The battle stub keeps no state, so there is
 * nothing to load before the routes are mounted.
 */

use axum::Router;
use axum::routing::{get, post};

use crate::backend::battle::{combined_action_end, health};

/// Path of the turn-ending endpoint
pub const COMBINED_ACTION_END_PATH: &str = "/api/battle/combined-action-end";

/// Create and configure the Axum application
///
/// # Routes
///
/// - `GET /health` - Liveness probe
/// - `POST /api/battle/combined-action-end` - Battle turn stub
pub fn create_app() -> Router {
    tracing::info!("Initializing battle server routes");

    Router::new()
        .route("/health", get(health))
        .route(COMBINED_ACTION_END_PATH, post(combined_action_end))
}
