//! Errors for values that cross the client/server boundary.
//!
//! Parsing a screen key, a language code or a music setting, and checking a
//! battle request, all fail with [`SharedError`]. The server maps it to a
//! 400 or 500 (see `backend::error`); the client shows its message.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// A string key that names none of the known values of `kind`
    #[error("unknown {kind}: {value:?}")]
    UnknownKey { kind: &'static str, value: String },

    /// A field that is present but unusable
    #[error("invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },

    #[error("malformed payload: {0}")]
    Malformed(String),
}

impl SharedError {
    pub fn unknown(kind: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownKey {
            kind,
            value: value.into(),
        }
    }

    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }

    /// True when the caller sent something wrong, as opposed to a payload
    /// that could not be produced or read.
    pub fn is_client_fault(&self) -> bool {
        !matches!(self, Self::Malformed(_))
    }
}

impl From<serde_json::Error> for SharedError {
    fn from(err: serde_json::Error) -> Self {
        Self::Malformed(err.to_string())
    }
}
