//! Contact form validator
//!
//! Rules, each field checked independently and every issue collected:
//! - `name`: blank or missing is `EmptyField`
//! - `email`: blank or missing is `EmptyField`, otherwise it must be a
//!   syntactically valid address with a dotted domain (`InvalidFormat`)
//! - `message`: fewer than `min` characters is `TooShort`, more than `max`
//!   is `TooLong`; a missing message has length zero
//!
//! Validation is pure: no I/O, no clock, no mutation of the input.

use std::str::FromStr;

use email_address::EmailAddress;

use super::config::FormConfig;
use super::message::{Field, FieldIssue, IssueKind, RawSubmission, ValidMessage};

/// Validator bound to one set of form rules.
#[derive(Debug, Clone, Copy)]
pub struct Validator {
    config: FormConfig,
}

impl Validator {
    pub fn new(config: FormConfig) -> Self {
        Self { config }
    }

    /// The rules this validator enforces
    pub fn config(&self) -> FormConfig {
        self.config
    }

    /// Validate a raw submission.
    ///
    /// Returns the validated message, or every issue found across all
    /// fields in `name`, `email`, `message` order.
    pub fn validate(&self, raw: &RawSubmission) -> Result<ValidMessage, Vec<FieldIssue>> {
        let mut issues = Vec::new();

        let name = raw.name.as_deref().unwrap_or_default();
        if is_blank(name) {
            issues.push(FieldIssue::new(
                Field::Name,
                IssueKind::EmptyField,
                "Name cannot be blank",
            ));
        }

        let email = raw.email.as_deref().unwrap_or_default();
        if is_blank(email) {
            issues.push(FieldIssue::new(
                Field::Email,
                IssueKind::EmptyField,
                "Email cannot be blank",
            ));
        } else if !is_valid_email(email) {
            issues.push(FieldIssue::new(
                Field::Email,
                IssueKind::InvalidFormat,
                "Invalid email",
            ));
        }

        let message = raw.message.as_deref().unwrap_or_default();
        let len = message.chars().count();
        let bounds = self.config.message;
        if !bounds.contains(len) {
            let (kind, text) = if len < bounds.min {
                (
                    IssueKind::TooShort,
                    format!("String must contain at least {} character(s)", bounds.min),
                )
            } else {
                (
                    IssueKind::TooLong,
                    format!("String must contain at most {} character(s)", bounds.max),
                )
            };
            issues.push(FieldIssue::new(Field::Message, kind, text));
        }

        if !issues.is_empty() {
            return Err(issues);
        }

        Ok(ValidMessage::new(
            name.to_string(),
            email.to_string(),
            message.to_string(),
        ))
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(FormConfig::default())
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// A bare `local@domain` address.
///
/// `email_address` does the RFC 5322 parse. On top of that the input must
/// be the address itself (no display name, no quoted local part) and the
/// domain must be a dotted host name: labels of `[A-Za-z0-9-]` not
/// starting or ending with `-`, and an alphabetic TLD of two or more
/// letters. Domain literals like `[127.0.0.1]` fail the label rule.
fn is_valid_email(email: &str) -> bool {
    let parsed = match EmailAddress::from_str(email) {
        Ok(parsed) => parsed,
        Err(_) => return false,
    };

    let local = parsed.local_part();
    let domain = parsed.domain();
    if format!("{}@{}", local, domain) != email || local.starts_with('"') {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || !labels.iter().all(|label| is_host_label(label)) {
        return false;
    }

    labels
        .last()
        .map(|tld| tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic()))
        .unwrap_or(false)
}

fn is_host_label(label: &str) -> bool {
    !label.is_empty()
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}
