/**
 * Backend Error Types
 *
 * Every failure a battle handler can report. `status_code` decides the HTTP
 * status; `conversion` renders the JSON body.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::SharedError;

/// Errors returned from axum handlers.
///
/// ```rust
/// use pantheon::backend::error::BackendError;
/// use pantheon::shared::SharedError;
///
/// let err: BackendError = SharedError::invalid("battleId", "must not be empty").into();
/// assert_eq!(err.status_code().as_u16(), 400);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// A request value the shared types rejected
    #[error(transparent)]
    Rejected(#[from] SharedError),
}

impl BackendError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Rejected(err) if err.is_client_fault() => StatusCode::BAD_REQUEST,
            Self::Rejected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_faults_are_bad_requests() {
        let err: BackendError = SharedError::unknown("action kind", "teleport").into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "unknown action kind: \"teleport\"");
    }

    #[test]
    fn test_malformed_payload_is_server_side() {
        let err: BackendError = SharedError::Malformed("truncated".to_string()).into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
