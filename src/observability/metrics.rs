//! Submission counters
//!
//! Counters only, monotonic, reset on process start.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Operational counters shared by all request handlers.
///
/// Relaxed ordering throughout; counters are informational.
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    submissions_received: AtomicU64,
    submissions_accepted: AtomicU64,
    submissions_rejected: AtomicU64,
    submissions_failed: AtomicU64,
    provisioning_runs: AtomicU64,
    rows_written: AtomicU64,
}

/// Point-in-time copy of every counter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub submissions_received: u64,
    pub submissions_accepted: u64,
    pub submissions_rejected: u64,
    pub submissions_failed: u64,
    pub provisioning_runs: u64,
    pub rows_written: u64,
}

impl MetricsRegistry {
    /// Create a registry with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_received(&self) {
        self.submissions_received.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_accepted(&self) {
        self.submissions_accepted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_rejected(&self) {
        self.submissions_rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_failed(&self) {
        self.submissions_failed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_provisioning_runs(&self) {
        self.provisioning_runs.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_rows_written(&self) {
        self.rows_written.fetch_add(1, Ordering::Relaxed);
    }

    /// Copy all counters
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            submissions_received: self.submissions_received.load(Ordering::Relaxed),
            submissions_accepted: self.submissions_accepted.load(Ordering::Relaxed),
            submissions_rejected: self.submissions_rejected.load(Ordering::Relaxed),
            submissions_failed: self.submissions_failed.load(Ordering::Relaxed),
            provisioning_runs: self.provisioning_runs.load(Ordering::Relaxed),
            rows_written: self.rows_written.load(Ordering::Relaxed),
        }
    }
}
