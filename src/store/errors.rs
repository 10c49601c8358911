//! # Store Errors
//!
//! Both provisioning and write failures are fatal for the submission that
//! hit them. There is no transient/permanent split and no retry.

use thiserror::Error;

/// Underlying cause reported by a store backend
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store failures
#[derive(Debug, Error)]
pub enum StoreError {
    /// The table could not be ensured
    #[error("Failed to provision table '{table}': {source}")]
    ProvisioningFailed {
        table: &'static str,
        #[source]
        source: BoxError,
    },

    /// The row could not be inserted
    #[error("Failed to write row into '{table}': {source}")]
    WriteFailed {
        table: &'static str,
        #[source]
        source: BoxError,
    },

    /// The store could not be reached at all
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    pub fn provisioning(table: &'static str, source: impl Into<BoxError>) -> Self {
        StoreError::ProvisioningFailed {
            table,
            source: source.into(),
        }
    }

    pub fn write(table: &'static str, source: impl Into<BoxError>) -> Self {
        StoreError::WriteFailed {
            table,
            source: source.into(),
        }
    }

    /// Stable code for logs and JSON output
    pub fn code(&self) -> &'static str {
        match self {
            StoreError::ProvisioningFailed { .. } => "PROVISIONING_FAILED",
            StoreError::WriteFailed { .. } => "WRITE_FAILED",
            StoreError::Unavailable(_) => "STORE_UNAVAILABLE",
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn test_provisioning_error_keeps_cause() {
        let err = StoreError::provisioning("messages", "disk I/O error");
        assert_eq!(err.code(), "PROVISIONING_FAILED");
        assert!(err.to_string().contains("messages"));
        assert!(err.to_string().contains("disk I/O error"));
        assert_eq!(err.source().unwrap().to_string(), "disk I/O error");
    }

    #[test]
    fn test_write_error_code() {
        let err = StoreError::write("messages", "constraint failed");
        assert_eq!(err.code(), "WRITE_FAILED");
    }
}
