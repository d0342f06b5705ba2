//! Operator report collection.
//!
//! Operators communicate with the user through leveled reports rather than
//! return values: a warning for a rejected run, an info line for success.
//! The window manager owns one [`ReportList`] and hands a borrow to every
//! operator invocation; tests snapshot it to assert on what the user saw.

use std::fmt;

use parking_lot::Mutex;

/// Severity of an operator report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ReportLevel {
    /// Informational message, e.g. an operation summary.
    Info,
    /// The operation did not run but nothing is broken.
    Warning,
    /// The operation failed.
    Error,
}

impl fmt::Display for ReportLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportLevel::Info => write!(f, "INFO"),
            ReportLevel::Warning => write!(f, "WARNING"),
            ReportLevel::Error => write!(f, "ERROR"),
        }
    }
}

/// A single message emitted by an operator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    pub level: ReportLevel,
    pub message: String,
}

impl Report {
    pub fn new(level: ReportLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.level, self.message)
    }
}

/// Accumulates reports across operator runs.
///
/// Appends go through a mutex so a `&ReportList` can be handed out freely
/// alongside mutable scene access.
#[derive(Debug, Default)]
pub struct ReportList {
    reports: Mutex<Vec<Report>>,
}

impl ReportList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a report, mirroring it to the log.
    pub fn add(&self, level: ReportLevel, message: impl Into<String>) {
        let report = Report::new(level, message);
        match report.level {
            ReportLevel::Info => tracing::info!("{}", report.message),
            ReportLevel::Warning => tracing::warn!("{}", report.message),
            ReportLevel::Error => tracing::error!("{}", report.message),
        }
        self.reports.lock().push(report);
    }

    /// Copy of all reports so far.
    pub fn snapshot(&self) -> Vec<Report> {
        self.reports.lock().clone()
    }

    /// Drain all reports, leaving the list empty.
    pub fn take(&self) -> Vec<Report> {
        std::mem::take(&mut *self.reports.lock())
    }

    /// The most recent report, if any.
    pub fn last(&self) -> Option<Report> {
        self.reports.lock().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.reports.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.lock().is_empty()
    }
}
