//! Error types shared across the crate.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raised synchronously while assembling waypoints or tasks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// A point-of-interest record lacks a field needed to place a waypoint.
    #[error("point of interest is missing `{field}`")]
    MissingField {
        /// Wire name of the missing field.
        field: &'static str,
    },
    /// A required builder argument was empty.
    #[error("`{argument}` must not be empty")]
    InvalidArgument {
        /// Name of the offending argument.
        argument: &'static str,
    },
}

/// Failure of a single exchange with the remote task service.
///
/// Serializable so recorded sessions can replay failures faithfully.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum ServiceError {
    /// The request never produced a response (timeout, refused, DNS, I/O).
    #[error("transport failure: {0}")]
    Transport(String),
    /// The response carried a non-success HTTP status.
    #[error("unexpected HTTP status {0}")]
    HttpStatus(u16),
    /// The body decoded but its embedded `status` was not 200.
    #[error("service rejected request with status {0}")]
    Rejected(i64),
    /// The body could not be decoded into the expected shape.
    #[error("malformed response: {0}")]
    Malformed(String),
    /// An identifier cannot name a single path segment (empty, `.` or `..`).
    #[error("unusable identifier {0:?}")]
    InvalidId(String),
}

impl ServiceError {
    /// Returns true when the failure happened below the HTTP layer.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

impl From<reqwest::Error> for ServiceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Malformed(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}
