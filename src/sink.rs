//! Warning sink boundary for non-fatal anomalies.
//!
//! Rejected custom bounds and similar recoverable problems are reported here
//! and the offending item is omitted; they never abort a build. The default
//! sink forwards to the `log` crate.

use std::sync::Mutex;

/// Severity of a reported anomaly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Info,
    Warning,
}

/// Receiver for non-fatal anomaly reports.
pub trait WarningSink {
    fn report(&self, severity: Severity, message: &str);
}

/// Default sink backed by the `log` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl WarningSink for LogSink {
    fn report(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Info => log::info!("{message}"),
            Severity::Warning => log::warn!("{message}"),
        }
    }
}

/// Sink that records reports in memory, for tests and callers that surface
/// warnings in their own UI.
#[derive(Debug, Default)]
pub struct CollectSink {
    reports: Mutex<Vec<(Severity, String)>>,
}

impl CollectSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All reports received so far, in order.
    pub fn reports(&self) -> Vec<(Severity, String)> {
        self.reports.lock().expect("sink poisoned").clone()
    }
}

impl WarningSink for CollectSink {
    fn report(&self, severity: Severity, message: &str) {
        self.reports
            .lock()
            .expect("sink poisoned")
            .push((severity, message.to_string()));
    }
}
