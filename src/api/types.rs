//! API request and response types.

use serde::{Deserialize, Serialize};

/// Launch status on the wire.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LaunchStatus {
    /// The agent process was started
    Success,
    /// The task was rejected or the spawn failed
    Error,
}

/// Response to a launch request, in the shape the panel expects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaunchResponse {
    /// Outcome of the request
    pub status: LaunchStatus,

    /// Human-readable acknowledgment or failure description
    pub message: String,
}

impl LaunchResponse {
    /// Create a success response.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: LaunchStatus::Success,
            message: message.into(),
        }
    }

    /// Create an error response.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: LaunchStatus::Error,
            message: message.into(),
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Service version
    pub version: String,
}
