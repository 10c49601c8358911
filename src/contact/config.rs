//! Contact form configuration
//!
//! The message length bounds are a value handed to the validator and to
//! the form page at construction time, never module-level globals.

use serde::Serialize;
use thiserror::Error;

/// Default minimum message length, in characters
pub const DEFAULT_MESSAGE_MIN: usize = 20;

/// Default maximum message length, in characters
pub const DEFAULT_MESSAGE_MAX: usize = 500;

/// Message bounds with `min > max`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Invalid message bounds: min {min} is greater than max {max}")]
pub struct InvalidBounds {
    pub min: usize,
    pub max: usize,
}

/// Inclusive `[min, max]` bounds on the message length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MessageBounds {
    pub min: usize,
    pub max: usize,
}

impl MessageBounds {
    /// Whether a message of `len` characters is within bounds
    pub fn contains(&self, len: usize) -> bool {
        len >= self.min && len <= self.max
    }
}

/// Everything the contact form needs to know about its rules.
///
/// Serializes as `{"message": {"min": 20, "max": 500}}`, the shape the
/// form page reads its helper text from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FormConfig {
    pub message: MessageBounds,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            message: MessageBounds {
                min: DEFAULT_MESSAGE_MIN,
                max: DEFAULT_MESSAGE_MAX,
            },
        }
    }
}

impl FormConfig {
    /// Build a config with custom message bounds.
    ///
    /// # Errors
    ///
    /// `InvalidBounds` if `min > max`.
    pub fn new(min: usize, max: usize) -> Result<Self, InvalidBounds> {
        if min > max {
            return Err(InvalidBounds { min, max });
        }
        Ok(Self {
            message: MessageBounds { min, max },
        })
    }
}
