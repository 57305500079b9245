//! Error types for the Verdant API
//!
//! All errors are serialized as JSON with appropriate HTTP status codes.
//! Ledger and storage failures convert into API errors so handlers can use
//! `?` throughout.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::fmt;

use verdant_core::{ConfigError, LedgerError, StorageError};

// ============================================================================
// ERROR CODE ENUM
// ============================================================================

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Request contains invalid input data
    InvalidInput,

    /// Requested account does not exist
    AccountNotFound,

    /// Account already exists
    AccountExists,

    /// Storage layer is temporarily unavailable
    StorageUnavailable,

    /// Unexpected server-side failure
    InternalError,
}

impl ErrorCode {
    /// HTTP status code for this error category.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ErrorCode::InvalidInput => StatusCode::BAD_REQUEST,
            ErrorCode::AccountNotFound => StatusCode::NOT_FOUND,
            ErrorCode::AccountExists => StatusCode::CONFLICT,
            ErrorCode::StorageUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// ============================================================================
// API ERROR
// ============================================================================

/// Structured API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub code: ErrorCode,
    pub message: String,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    pub fn account_not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::AccountNotFound, message)
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.code.status_code(), Json(self)).into_response()
    }
}

impl From<LedgerError> for ApiError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::AccountNotFound { id } => {
                Self::new(ErrorCode::AccountNotFound, format!("account not found: {}", id))
            }
            LedgerError::StorageUnavailable(source) => {
                Self::new(ErrorCode::StorageUnavailable, source.to_string())
            }
        }
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound { id } => {
                Self::new(ErrorCode::AccountNotFound, format!("account not found: {}", id))
            }
            StorageError::AlreadyExists { id } => {
                Self::new(ErrorCode::AccountExists, format!("account already exists: {}", id))
            }
            other => Self::new(ErrorCode::StorageUnavailable, other.to_string()),
        }
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        Self::new(ErrorCode::InvalidInput, err.to_string())
    }
}

/// Result type alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_map_to_statuses() {
        assert_eq!(ErrorCode::InvalidInput.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorCode::AccountNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorCode::AccountExists.status_code(), StatusCode::CONFLICT);
        assert_eq!(
            ErrorCode::StorageUnavailable.status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn test_ledger_error_conversion() {
        let id = verdant_core::new_account_id();
        let api: ApiError = LedgerError::AccountNotFound { id }.into();
        assert_eq!(api.code, ErrorCode::AccountNotFound);

        let api: ApiError =
            LedgerError::StorageUnavailable(StorageError::LockPoisoned).into();
        assert_eq!(api.code, ErrorCode::StorageUnavailable);
    }

    #[test]
    fn test_error_code_serializes_screaming_snake() {
        let json = serde_json::to_string(&ErrorCode::AccountNotFound).unwrap();
        assert_eq!(json, "\"ACCOUNT_NOT_FOUND\"");
    }
}
