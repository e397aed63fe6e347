//! Registry adapters for fetching package publication metadata
//!
//! This module provides:
//! - HTTP client shared foundation (timeout, User-Agent, status handling)
//! - npm Registry adapter

mod client;
mod npm;

pub use client::{HttpClient, DEFAULT_TIMEOUT};
pub use npm::{NpmAdapter, NPM_REGISTRY_URL};

use crate::domain::RegistryRecord;
use crate::error::RegistryError;
use async_trait::async_trait;

/// Trait for registry adapters
#[async_trait]
pub trait RegistryAdapter: Send + Sync {
    /// Fetch the latest version and last-modified time for a package
    async fn fetch_record(&self, package: &str) -> Result<RegistryRecord, RegistryError>;
}
