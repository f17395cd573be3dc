//! Battle turn types
//!
//! Wire types for the combined-action-end endpoint. The server side only
//! acknowledges the end of a combined action; turn resolution lives elsewhere.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One participant action submitted with the turn end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinedAction {
    pub actor_id: Value,
    pub kind: String,
    #[serde(default)]
    pub target_id: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Request body of `POST /api/battle/combined-action-end`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinedActionEnd {
    pub battle_id: String,
    pub current_turn: u32,
    pub round_number: u32,
    #[serde(default)]
    pub actions: Vec<CombinedAction>,
}

/// Response body: the turn state after the action ended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnState {
    pub battle_id: String,
    pub new_current_turn: u32,
    pub new_round_number: u32,
    /// Always false until a resolver exists.
    pub resolved: bool,
    pub received_actions: usize,
}
