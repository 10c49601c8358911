//! # Form Handler
//!
//! Validate, then provision, then write, then redirect.
//!
//! Two terminal paths per submission: invalid input comes back as issues
//! with no side effects; valid input either lands as exactly one row
//! followed by a redirect, or fails outright. Provisioning and the insert
//! are separate store calls with no transaction around them and no retry.

use std::sync::Arc;

use super::config::FormConfig;
use super::errors::ContactError;
use super::message::{FieldIssue, RawSubmission};
use super::validator::Validator;
use crate::observability::{Event, Logger, MetricsRegistry, ObservationScope};
use crate::store::MessageStore;

/// Where a successful submission sends the visitor
pub const LANDING_PATH: &str = "/";

/// Result of one submission, for the HTTP layer to interpret
#[derive(Debug)]
pub enum FormOutcome {
    /// Stored; navigate to this path
    Redirect(String),
    /// Rejected; re-render the form with these issues
    ValidationFailure(Vec<FieldIssue>),
    /// A store call failed; nothing more to do for this request
    Fatal(ContactError),
}

impl FormOutcome {
    pub fn is_redirect(&self) -> bool {
        matches!(self, FormOutcome::Redirect(_))
    }
}

/// Orchestrates one contact form submission
pub struct FormHandler {
    validator: Validator,
    store: Arc<dyn MessageStore>,
    metrics: Arc<MetricsRegistry>,
}

impl FormHandler {
    pub fn new(config: FormConfig, store: Arc<dyn MessageStore>) -> Self {
        Self::with_metrics(config, store, Arc::new(MetricsRegistry::new()))
    }

    pub fn with_metrics(
        config: FormConfig,
        store: Arc<dyn MessageStore>,
        metrics: Arc<MetricsRegistry>,
    ) -> Self {
        Self {
            validator: Validator::new(config),
            store,
            metrics,
        }
    }

    /// The configured message bounds, for the form's helper text
    pub fn config(&self) -> FormConfig {
        self.validator.config()
    }

    pub fn metrics(&self) -> &Arc<MetricsRegistry> {
        &self.metrics
    }

    /// Handle one submission. Blocking: runs store I/O on the caller's
    /// thread.
    pub fn handle(&self, raw: &RawSubmission) -> FormOutcome {
        self.metrics.increment_received();

        let message = match self.validator.validate(raw) {
            Ok(message) => message,
            Err(issues) => {
                self.metrics.increment_rejected();
                let summary = issues
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(",");
                Logger::warn(
                    Event::SubmissionRejected.as_str(),
                    &[("issues", summary.as_str())],
                );
                return FormOutcome::ValidationFailure(issues);
            }
        };

        let scope = ObservationScope::new("SUBMISSION");

        self.metrics.increment_provisioning_runs();
        if let Err(e) = self.store.provision() {
            return self.fail(scope, e.into());
        }

        if let Err(e) = self.store.write(&message) {
            return self.fail(scope, e.into());
        }
        self.metrics.increment_rows_written();
        self.metrics.increment_accepted();

        scope.complete_with_fields(&[("redirect", LANDING_PATH)]);
        FormOutcome::Redirect(LANDING_PATH.to_string())
    }

    fn fail(&self, scope: ObservationScope<'_>, error: ContactError) -> FormOutcome {
        self.metrics.increment_failed();
        scope.fail(&error.to_string());
        FormOutcome::Fatal(error)
    }
}
