//! Error types for Verdant operations

use thiserror::Error;

use crate::AccountId;

/// Storage layer errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("account not found: {id}")]
    NotFound { id: AccountId },

    #[error("account already exists: {id}")]
    AlreadyExists { id: AccountId },

    #[error("storage unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("storage lock poisoned")]
    LockPoisoned,
}

/// Result type alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Ledger errors surfaced to feature code.
///
/// The ledger never fails for business-rule reasons; the only caller-visible
/// failures are a missing grant target and storage-layer trouble. Callers
/// decide whether either should fail the parent action.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("award target not found: {id}")]
    AccountNotFound { id: AccountId },

    #[error("storage unavailable: {0}")]
    StorageUnavailable(StorageError),
}

/// Result type alias for ledger operations.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Configuration errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required configuration field: {field}")]
    MissingRequired { field: String },

    #[error("invalid value for {field}: {value} - {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_storage_error_display_not_found() {
        let err = StorageError::NotFound { id: Uuid::nil() };
        let msg = format!("{}", err);
        assert!(msg.contains("account not found"));
        assert!(msg.contains("00000000-0000-0000-0000-000000000000"));
    }

    #[test]
    fn test_ledger_error_wraps_storage_error() {
        let err = LedgerError::StorageUnavailable(StorageError::Unavailable {
            reason: "connection refused".to_string(),
        });
        let msg = format!("{}", err);
        assert!(msg.contains("storage unavailable"));
        assert!(msg.contains("connection refused"));
    }
}
