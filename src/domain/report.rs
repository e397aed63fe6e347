//! Report rows and the sorted report
//!
//! Rows are created only for dependencies that passed the recency filter.

use super::{Dependency, RegistryRecord};
use chrono::NaiveDate;
use serde::Serialize;

/// One recently updated dependency
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    /// Package name
    pub name: String,
    /// Version specifier declared in package.json
    #[serde(rename = "current")]
    pub declared_version: String,
    /// Latest version on the registry
    #[serde(rename = "latest")]
    pub latest_version: String,
    /// UTC calendar day of the last modification
    #[serde(rename = "updated", serialize_with = "serialize_date")]
    pub last_modified: NaiveDate,
}

fn serialize_date<S: serde::Serializer>(date: &NaiveDate, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&date.format("%Y-%m-%d").to_string())
}

impl ReportRow {
    /// Build a row from a declared dependency and its registry record
    pub fn new(dependency: &Dependency, record: &RegistryRecord) -> Self {
        Self {
            name: dependency.name.clone(),
            declared_version: dependency.declared_version.clone(),
            latest_version: record.latest_version.clone(),
            last_modified: record.last_modified.date_naive(),
        }
    }

    /// ISO 8601 date portion, e.g. `2024-05-01`
    pub fn date_string(&self) -> String {
        self.last_modified.format("%Y-%m-%d").to_string()
    }
}

/// Rows sorted newest first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Report {
    rows: Vec<ReportRow>,
}

impl Report {
    /// Sort rows by date descending. The sort is stable, so rows with the
    /// same date keep the order they were collected in.
    pub fn from_rows(mut rows: Vec<ReportRow>) -> Self {
        rows.sort_by(|a, b| b.last_modified.cmp(&a.last_modified));
        Self { rows }
    }

    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}
