//! # API Error Types
//!
//! Error types for REST operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  Transport error (reqwest::Error)                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (this module) ← Adds context and categorization              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Caller decides: 404 on a detail fetch → not-found view,               │
//! │  anything else → reset the saving flag, stay on the form               │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// REST operation errors.
///
/// These errors wrap reqwest errors and provide additional context
/// for debugging and user feedback.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Entity not found on the backend.
    ///
    /// ## When This Occurs
    /// - Detail fetch for an id that was deleted on another terminal
    /// - Stale reference id in an edited record
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: i64 },

    /// Backend answered with a non-success status.
    #[error("Request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    /// The operation needs a persisted entity but got a draft.
    ///
    /// ## When This Occurs
    /// - `update`, `partial_update`, or `delete` on an entity with no id
    #[error("{entity} has no id; save it with create first")]
    MissingId { entity: &'static str },

    /// `create` was handed an already-persisted entity.
    #[error("{entity} already has id {id}; use update instead of create")]
    AlreadyPersisted { entity: &'static str, id: i64 },

    /// The draft failed its form schema or a validation rule.
    #[error("Validation failed: {0}")]
    Validation(#[from] khata_core::CoreError),

    /// Request timed out.
    #[error("Request timed out")]
    Timeout,

    /// The response body could not be decoded.
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// Connection-level failure (refused, DNS, TLS).
    #[error("Transport error: {0}")]
    Transport(String),
}

impl ApiError {
    /// Creates a NotFound error for a given entity type and id.
    pub fn not_found(entity: &'static str, id: i64) -> Self {
        ApiError::NotFound { entity, id }
    }

    /// True when the error is a 404 mapped to not-found.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound { .. })
    }
}

/// Convert reqwest errors to ApiError.
///
/// ## Error Mapping
/// ```text
/// err.is_timeout()  → ApiError::Timeout
/// err.is_decode()   → ApiError::Decode
/// Other             → ApiError::Transport
/// ```
impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

/// Result type for REST operations.
pub type ApiResult<T> = Result<T, ApiError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = ApiError::not_found("Sale", 41);
        assert_eq!(err.to_string(), "Sale not found: 41");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_not_found_takes_the_entity_name_const() {
        use khata_core::types::Employee;
        use khata_core::Entity;

        let err = ApiError::not_found(Employee::NAME, 5);
        assert_eq!(err.to_string(), "Employee not found: 5");
    }

    #[test]
    fn test_missing_id_message() {
        let err = ApiError::MissingId { entity: "Purchase" };
        assert_eq!(
            err.to_string(),
            "Purchase has no id; save it with create first"
        );
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_validation_wraps_core_error() {
        let core = khata_core::CoreError::Validation(khata_core::ValidationError::Required {
            field: "name".to_string(),
        });
        let err: ApiError = core.into();
        assert!(matches!(err, ApiError::Validation(_)));
    }
}
