//! Core domain models for package-checker
//!
//! This module contains the fundamental types used throughout the application:
//! - Declared dependencies read from package.json
//! - Registry records fetched per package
//! - Report rows and the sorted report

mod dependency;
mod record;
mod report;

pub use dependency::{Dependency, DependencyKind};
pub use record::RegistryRecord;
pub use report::{Report, ReportRow};
