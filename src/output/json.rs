//! JSON output formatter for machine processing

use crate::checker::CheckOutcome;
use crate::domain::Report;
use crate::manifest::Manifest;
use crate::output::OutputFormatter;
use serde::Serialize;
use std::io::Write;

/// JSON formatter for machine-readable output
#[derive(Debug, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new() -> Self {
        Self
    }
}

/// JSON representation of a check outcome
#[derive(Serialize)]
struct JsonOutput<'a> {
    /// Path to the manifest file
    manifest: String,
    /// Recency window in days
    window_days: u64,
    /// Number of dependencies looked up
    checked: usize,
    /// Packages whose lookup failed
    failed: Vec<&'a str>,
    /// Recently updated packages, newest first
    updates: &'a Report,
}

impl OutputFormatter for JsonFormatter {
    fn format_start(&self, _manifest: &Manifest, _writer: &mut dyn Write) -> std::io::Result<()> {
        Ok(())
    }

    fn format(&self, outcome: &CheckOutcome, writer: &mut dyn Write) -> std::io::Result<()> {
        let output = JsonOutput {
            manifest: outcome.manifest.display().to_string(),
            window_days: outcome.window_days,
            checked: outcome.checked,
            failed: outcome.failed_packages(),
            updates: &outcome.report,
        };

        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)
    }
}
