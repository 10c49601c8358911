//! # Contact Errors
//!
//! Handler-level error type. Validation problems are not errors: they are
//! returned as `FieldIssue`s for display.

use thiserror::Error;

use crate::store::StoreError;

/// Failures that end a submission
#[derive(Debug, Error)]
pub enum ContactError {
    /// Provisioning or insert failed
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The blocking worker running the submission did not finish
    #[error("Submission worker failed: {0}")]
    Worker(String),
}

impl ContactError {
    /// Returns the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            ContactError::Store(_) => 500,
            ContactError::Worker(_) => 500,
        }
    }
}
