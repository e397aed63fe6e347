//! Recency filter
//!
//! Decides whether a package's last modification falls inside the
//! lookback window.

use crate::domain::{Dependency, RegistryRecord, ReportRow};
use chrono::{DateTime, TimeDelta, Utc};
use std::time::Duration;

/// Default lookback window: 60 days
pub const DEFAULT_WINDOW: Duration = Duration::from_secs(60 * 24 * 60 * 60);

/// Cutoff computed once per run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecencyFilter {
    window: Duration,
    cutoff: DateTime<Utc>,
}

impl RecencyFilter {
    /// Create a filter whose cutoff is `now - window`
    pub fn new(window: Duration) -> Self {
        Self::at(Utc::now(), window)
    }

    /// Create a filter with an explicit reference time
    pub fn at(now: DateTime<Utc>, window: Duration) -> Self {
        let delta = TimeDelta::from_std(window).unwrap_or(TimeDelta::MAX);
        let cutoff = now.checked_sub_signed(delta).unwrap_or(DateTime::<Utc>::MIN_UTC);
        Self { window, cutoff }
    }

    pub fn cutoff(&self) -> DateTime<Utc> {
        self.cutoff
    }

    /// Window length in whole days
    pub fn window_days(&self) -> u64 {
        self.window.as_secs() / (24 * 60 * 60)
    }

    /// True if `last_modified` is strictly after the cutoff
    pub fn is_recent(&self, last_modified: DateTime<Utc>) -> bool {
        last_modified > self.cutoff
    }

    /// Build a report row if the record is recent enough
    pub fn row_for(&self, dependency: &Dependency, record: &RegistryRecord) -> Option<ReportRow> {
        self.is_recent(record.last_modified)
            .then(|| ReportRow::new(dependency, record))
    }
}

impl Default for RecencyFilter {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW)
    }
}
