//! Response DTOs.

use serde::{Deserialize, Serialize};

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

impl MessageResponse {
    /// Creates a message response.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Count response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountResponse {
    /// Count value.
    pub count: i64,
}

impl CountResponse {
    /// Build from a sqlx `rows_affected` figure without a lossy cast.
    pub fn from_rows_affected(rows: u64) -> Self {
        Self {
            count: i64::try_from(rows).unwrap_or(i64::MAX),
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}

/// Result of one alert scan pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanResponse {
    /// Number of new notifications inserted.
    pub inserted: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_affected_converts_and_saturates() {
        assert_eq!(CountResponse::from_rows_affected(42).count, 42);
        assert_eq!(CountResponse::from_rows_affected(u64::MAX).count, i64::MAX);
    }
}
