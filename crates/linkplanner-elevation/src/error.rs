//! Error types for elevation lookups.

use thiserror::Error;

/// Errors an elevation service can report.
///
/// None of these reach the user: [`crate::fetch_elevations`] logs them and
/// substitutes zeros.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ElevationError {
    /// The request could not be sent or the connection failed
    #[error("Elevation request failed: {reason}")]
    Transport {
        /// Transport failure description.
        reason: String,
    },

    /// The request did not complete in time
    #[error("Elevation request timed out after {timeout_ms}ms")]
    Timeout {
        /// The configured timeout in milliseconds.
        timeout_ms: u64,
    },

    /// The service answered with a non-success status
    #[error("Elevation service returned HTTP {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },

    /// The body was not the expected shape
    #[error("Malformed elevation response: {reason}")]
    MalformedResponse {
        /// What was wrong with the body.
        reason: String,
    },

    /// The service returned a different number of values than requested
    #[error("Elevation response has {actual} values, expected {expected}")]
    LengthMismatch {
        /// Number of points requested.
        expected: usize,
        /// Number of values returned.
        actual: usize,
    },

    /// The service is switched off or unreachable by construction
    #[error("Elevation service unavailable: {reason}")]
    Unavailable {
        /// Why the service is unavailable.
        reason: String,
    },
}

/// Result type alias for elevation operations.
pub type ElevationResult<T> = Result<T, ElevationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ElevationError::Status { status: 503 };
        assert_eq!(err.to_string(), "Elevation service returned HTTP 503");

        let err = ElevationError::LengthMismatch {
            expected: 51,
            actual: 3,
        };
        assert_eq!(
            err.to_string(),
            "Elevation response has 3 values, expected 51"
        );

        let err = ElevationError::Timeout { timeout_ms: 5000 };
        assert_eq!(err.to_string(), "Elevation request timed out after 5000ms");
    }
}
