//! # Contact Module
//!
//! The contact form: rules, validation, and the validate-then-persist
//! handler.

pub mod config;
pub mod errors;
pub mod handler;
pub mod message;
pub mod validator;

pub use config::{FormConfig, InvalidBounds, MessageBounds, DEFAULT_MESSAGE_MAX, DEFAULT_MESSAGE_MIN};
pub use errors::ContactError;
pub use handler::{FormHandler, FormOutcome, LANDING_PATH};
pub use message::{messages_for, Field, FieldIssue, IssueKind, RawSubmission, ValidMessage};
pub use validator::Validator;
