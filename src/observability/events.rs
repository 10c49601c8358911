//! Observable lifecycle events
//!
//! Events are explicit and typed; the string form is what lands in the
//! `event` key of a log line.

use std::fmt;

/// Observable events in deejay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Boot & Lifecycle
    /// Startup begins
    BootStart,
    /// Startup complete
    BootComplete,
    /// Configuration loaded and validated
    ConfigLoaded,
    /// HTTP listener bound, ready for requests
    Serving,
    /// Server exited
    ShutdownComplete,

    // Store
    /// `messages` table ensured
    SchemaProvisioned,
    /// Schema provisioning failed
    ProvisioningFailed,
    /// One row inserted
    MessageStored,
    /// Row insert failed
    WriteFailed,

    // Submissions
    /// Submission failed validation
    SubmissionRejected,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "DEEJAY_STARTUP_BEGIN",
            Event::BootComplete => "DEEJAY_STARTUP_COMPLETE",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::Serving => "DEEJAY_SERVING",
            Event::ShutdownComplete => "SHUTDOWN_COMPLETE",

            Event::SchemaProvisioned => "SCHEMA_PROVISIONED",
            Event::ProvisioningFailed => "PROVISIONING_FAILED",
            Event::MessageStored => "MESSAGE_STORED",
            Event::WriteFailed => "WRITE_FAILED",

            Event::SubmissionRejected => "SUBMISSION_REJECTED",
        }
    }

    /// Returns true if this event indicates a failed operation
    pub fn is_failure(&self) -> bool {
        matches!(self, Event::ProvisioningFailed | Event::WriteFailed)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names_are_screaming_snake_case() {
        let events = [
            Event::BootStart,
            Event::BootComplete,
            Event::ConfigLoaded,
            Event::Serving,
            Event::ShutdownComplete,
            Event::SchemaProvisioned,
            Event::ProvisioningFailed,
            Event::MessageStored,
            Event::WriteFailed,
            Event::SubmissionRejected,
        ];

        for event in events {
            let name = event.as_str();
            assert!(!name.is_empty());
            assert!(name
                .chars()
                .all(|c| c.is_ascii_uppercase() || c == '_'));
        }
    }

    #[test]
    fn test_failure_events() {
        assert!(Event::ProvisioningFailed.is_failure());
        assert!(Event::WriteFailed.is_failure());
        assert!(!Event::SubmissionRejected.is_failure());
        assert!(!Event::MessageStored.is_failure());
    }
}
