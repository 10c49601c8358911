//! Observability subsystem for deejay
//!
//! - Structured logging (JSON lines)
//! - Submission counters
//! - Scoped begin/complete logging
//!
//! ```ignore
//! use deejay::observability::{Logger, Event, log_event_with_fields};
//!
//! Logger::info("MESSAGE_STORED", &[("table", "messages")]);
//! log_event_with_fields(Event::ConfigLoaded, &[("port", "3000")]);
//! ```

mod events;
mod logger;
mod metrics;
mod scope;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use metrics::{MetricsRegistry, MetricsSnapshot};
pub use scope::ObservationScope;

/// Log a lifecycle event
pub fn log_event(event: Event) {
    log_event_with_fields(event, &[]);
}

/// Log a lifecycle event with fields.
///
/// Failure events are logged at ERROR, everything else at INFO.
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    let severity = if event.is_failure() {
        Severity::Error
    } else {
        Severity::Info
    };
    Logger::log(severity, event.as_str(), fields);
}
