//! package-checker - find recently updated npm packages
//!
//! This library provides the pipeline behind the CLI:
//! - Load and merge dependencies from package.json
//! - Look each one up on the npm registry
//! - Keep those modified within the recency window
//! - Render a sorted report

pub mod checker;
pub mod cli;
pub mod domain;
pub mod error;
pub mod filter;
pub mod logging;
pub mod manifest;
pub mod output;
pub mod progress;
pub mod registry;
