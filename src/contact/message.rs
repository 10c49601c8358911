//! # Contact Messages
//!
//! Raw form input, the validated message the store accepts, and the
//! per-field issues produced when validation fails.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Fields exactly as submitted. Any of them may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawSubmission {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl RawSubmission {
    /// Convenience constructor with every field present
    pub fn new(name: impl Into<String>, email: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            message: Some(message.into()),
        }
    }
}

/// A submission that passed every rule.
///
/// Only the validator constructs these, so anything handed to the store
/// has already been checked. `id` and `created_at` are assigned by the
/// store and are not part of this value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidMessage {
    name: String,
    email: String,
    message: String,
}

impl ValidMessage {
    pub(crate) fn new(name: String, email: String, message: String) -> Self {
        Self {
            name,
            email,
            message,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// The form fields, used as the issue path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    /// The form input name this field is submitted under
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What rule a field broke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    EmptyField,
    InvalidFormat,
    TooShort,
    TooLong,
}

impl IssueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueKind::EmptyField => "empty_field",
            IssueKind::InvalidFormat => "invalid_format",
            IssueKind::TooShort => "too_short",
            IssueKind::TooLong => "too_long",
        }
    }
}

/// One validation failure tied to one input field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    /// Which input the issue belongs to
    pub path: Field,
    /// Human-readable text shown next to the input
    pub message: String,
    pub kind: IssueKind,
}

impl FieldIssue {
    pub fn new(path: Field, kind: IssueKind, message: impl Into<String>) -> Self {
        Self {
            path,
            message: message.into(),
            kind,
        }
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.path, self.kind.as_str())
    }
}

/// Messages for `field`, joined the way the form displays them.
pub fn messages_for(issues: &[FieldIssue], field: Field) -> String {
    issues
        .iter()
        .filter(|issue| issue.path == field)
        .map(|issue| issue.message.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_submission_missing_fields_default_to_none() {
        let raw: RawSubmission = serde_json::from_str(r#"{"name": "Ada"}"#).unwrap();
        assert_eq!(raw.name.as_deref(), Some("Ada"));
        assert!(raw.email.is_none());
        assert!(raw.message.is_none());
    }

    #[test]
    fn test_issue_serialization() {
        let issue = FieldIssue::new(Field::Email, IssueKind::InvalidFormat, "Invalid email");
        let json = serde_json::to_value(&issue).unwrap();
        assert_eq!(json["path"], "email");
        assert_eq!(json["kind"], "invalid_format");
        assert_eq!(json["message"], "Invalid email");
    }

    #[test]
    fn test_messages_for_joins_only_matching_field() {
        let issues = vec![
            FieldIssue::new(Field::Message, IssueKind::TooShort, "too short"),
            FieldIssue::new(Field::Name, IssueKind::EmptyField, "blank"),
            FieldIssue::new(Field::Message, IssueKind::TooLong, "too long"),
        ];
        assert_eq!(messages_for(&issues, Field::Message), "too short, too long");
        assert_eq!(messages_for(&issues, Field::Name), "blank");
        assert_eq!(messages_for(&issues, Field::Email), "");
    }
}
