//! Check coordinator for the whole lookup workflow
//!
//! This module provides:
//! - Workflow coordination: fetch → filter → collect → sort
//! - Concurrent registry lookups with a bounded number in flight
//! - Per-package error isolation: failures are logged and skipped

use crate::domain::{Dependency, Report};
use crate::error::RegistryError;
use crate::filter::RecencyFilter;
use crate::manifest::Manifest;
use crate::progress::Progress;
use crate::registry::RegistryAdapter;
use futures::stream::{self, StreamExt};
use std::fmt;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Default concurrency limit for registry requests
pub const DEFAULT_CONCURRENCY: usize = 10;

/// A registry lookup that did not produce a record
#[derive(Debug)]
pub struct LookupFailure {
    /// Package that failed
    pub package: String,
    /// Why it failed
    pub error: RegistryError,
}

impl fmt::Display for LookupFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error checking {}: {}", self.package, self.error)
    }
}

/// Result of checking one manifest
#[derive(Debug)]
pub struct CheckOutcome {
    /// Manifest that was checked
    pub manifest: PathBuf,
    /// Recency window in whole days
    pub window_days: u64,
    /// Number of dependencies looked up
    pub checked: usize,
    /// Recently updated dependencies, newest first
    pub report: Report,
    /// Lookups that failed and were left out of the report
    pub failures: Vec<LookupFailure>,
}

impl CheckOutcome {
    /// Outcome for a manifest that declares nothing
    pub fn empty(manifest: impl Into<PathBuf>, window_days: u64) -> Self {
        Self {
            manifest: manifest.into(),
            window_days,
            checked: 0,
            report: Report::default(),
            failures: Vec::new(),
        }
    }

    /// Names of packages whose lookup failed
    pub fn failed_packages(&self) -> Vec<&str> {
        self.failures.iter().map(|f| f.package.as_str()).collect()
    }
}

/// Runs registry lookups for a manifest and builds the report
pub struct Checker {
    adapter: Box<dyn RegistryAdapter>,
    filter: RecencyFilter,
    concurrency: usize,
    show_progress: bool,
}

impl Checker {
    /// Create a checker around a registry adapter and recency filter
    pub fn new(adapter: Box<dyn RegistryAdapter>, filter: RecencyFilter) -> Self {
        Self {
            adapter,
            filter,
            concurrency: DEFAULT_CONCURRENCY,
            show_progress: false,
        }
    }

    /// Set the maximum number of lookups in flight (at least 1)
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Enable or disable the progress bar
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Look up every dependency of the manifest and collect recent ones.
    ///
    /// Lookups run concurrently, but results are consumed in manifest order,
    /// so rows with equal dates always come out in the same order.
    pub async fn check(&self, manifest: &Manifest) -> CheckOutcome {
        let window_days = self.filter.window_days();
        if manifest.is_empty() {
            return CheckOutcome::empty(&manifest.path, window_days);
        }

        let mut progress = Progress::new(self.show_progress);
        progress.start(manifest.len() as u64, "Checking packages");

        let adapter = self.adapter.as_ref();
        let mut lookups = std::pin::pin!(stream::iter(&manifest.dependencies)
            .map(|dep| async move { (dep, adapter.fetch_record(&dep.name).await) })
            .buffered(self.concurrency));

        let mut rows = Vec::new();
        let mut failures = Vec::new();

        while let Some((dep, result)) = lookups.next().await {
            progress.set_message(&dep.name);
            progress.inc();

            match result {
                Ok(record) => {
                    debug!(
                        "{}: latest {} modified {}",
                        dep.name, record.latest_version, record.last_modified
                    );
                    if let Some(row) = self.filter.row_for(dep, &record) {
                        rows.push(row);
                    }
                }
                Err(error) => {
                    let failure = failure_for(dep, error);
                    progress.suspend(|| warn!("{}", failure));
                    failures.push(failure);
                }
            }
        }
        progress.finish_and_clear();

        CheckOutcome {
            manifest: manifest.path.clone(),
            window_days,
            checked: manifest.len(),
            report: Report::from_rows(rows),
            failures,
        }
    }
}

fn failure_for(dep: &Dependency, error: RegistryError) -> LookupFailure {
    LookupFailure {
        package: dep.name.clone(),
        error,
    }
}
