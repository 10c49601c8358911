//! ObservationScope for start/complete logging around one unit of work
//!
//! - Logs `{name}_BEGIN` on creation
//! - Logs `{name}_COMPLETE` or `{name}_FAILED` when closed
//! - Logs `{name}_INCOMPLETE` at WARN if dropped without either

use std::cell::Cell;
use std::time::Instant;

use super::logger::Logger;

/// A scope that logs begin and outcome events.
///
/// ```ignore
/// let scope = ObservationScope::new("SUBMISSION");
/// // ... provision, write ...
/// scope.complete_with_fields(&[("redirect", "/")]); // SUBMISSION_COMPLETE
/// ```
pub struct ObservationScope<'a> {
    name: &'a str,
    closed: Cell<bool>,
    started: Instant,
}

impl<'a> ObservationScope<'a> {
    /// Open a scope. Logs `{name}_BEGIN` immediately.
    pub fn new(name: &'a str) -> Self {
        Logger::info(&format!("{}_BEGIN", name), &[]);
        Self {
            name,
            closed: Cell::new(false),
            started: Instant::now(),
        }
    }

    fn elapsed_ms(&self) -> String {
        self.started.elapsed().as_millis().to_string()
    }

    /// Close the scope successfully with extra fields.
    pub fn complete_with_fields(self, extra: &[(&str, &str)]) {
        self.closed.set(true);
        let elapsed = self.elapsed_ms();
        let mut fields = vec![("elapsed_ms", elapsed.as_str())];
        fields.extend_from_slice(extra);
        Logger::info(&format!("{}_COMPLETE", self.name), &fields);
    }

    /// Close the scope as failed. Logs `{name}_FAILED` at ERROR.
    pub fn fail(self, reason: &str) {
        self.closed.set(true);
        let elapsed = self.elapsed_ms();
        Logger::error(
            &format!("{}_FAILED", self.name),
            &[("elapsed_ms", elapsed.as_str()), ("reason", reason)],
        );
    }
}

impl Drop for ObservationScope<'_> {
    fn drop(&mut self) {
        if !self.closed.get() {
            Logger::warn(
                &format!("{}_INCOMPLETE", self.name),
                &[("reason", "scope dropped without completion")],
            );
        }
    }
}
