/**
 * Battle Turn Handlers
 *
 * Turn resolution has not been built yet. The endpoint accepts the combined
 * actions of a turn, logs them and hands back the turn state untouched with
 * `resolved: false`, so clients can already exercise the round trip.
 */

use axum::Json;

use crate::backend::error::BackendError;
use crate::shared::{CombinedActionEnd, SharedError, TurnState};

/// Handle `POST /api/battle/combined-action-end`
///
/// # Errors
///
/// - `400 Bad Request` - `battleId` is empty
pub async fn combined_action_end(
    Json(payload): Json<CombinedActionEnd>,
) -> Result<Json<TurnState>, BackendError> {
    if payload.battle_id.trim().is_empty() {
        return Err(SharedError::invalid("battleId", "must not be empty").into());
    }

    tracing::info!(
        battle_id = %payload.battle_id,
        turn = payload.current_turn,
        round = payload.round_number,
        actions = payload.actions.len(),
        "Combined action end received"
    );
    for action in &payload.actions {
        tracing::debug!(
            actor = %action.actor_id,
            kind = %action.kind,
            "Queued battle action"
        );
    }

    Ok(Json(TurnState {
        battle_id: payload.battle_id,
        new_current_turn: payload.current_turn,
        new_round_number: payload.round_number,
        resolved: false,
        received_actions: payload.actions.len(),
    }))
}

/// Handle `GET /health`
pub async fn health() -> &'static str {
    "ok"
}
