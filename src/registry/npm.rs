//! npm Registry adapter
//!
//! Fetches package metadata from the npm registry.
//! API endpoint: https://registry.npmjs.org/{package}

use crate::domain::RegistryRecord;
use crate::error::RegistryError;
use crate::registry::{HttpClient, RegistryAdapter};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// npm registry base URL
pub const NPM_REGISTRY_URL: &str = "https://registry.npmjs.org";

/// npm Registry adapter
pub struct NpmAdapter {
    client: HttpClient,
    base_url: String,
}

/// npm package document (packument), reduced to the fields we read
#[derive(Debug, Deserialize)]
struct NpmPackageResponse {
    /// Timestamps: `created`, `modified` and one entry per version
    #[serde(default)]
    time: Option<NpmTime>,
    /// Distribution tags such as `latest` and `next`
    #[serde(default, rename = "dist-tags")]
    dist_tags: Option<NpmDistTags>,
}

#[derive(Debug, Deserialize)]
struct NpmTime {
    modified: Option<String>,
}

#[derive(Debug, Deserialize)]
struct NpmDistTags {
    latest: Option<String>,
}

impl NpmAdapter {
    /// Create a new npm adapter against the public registry
    pub fn new(client: HttpClient) -> Self {
        Self::with_base_url(client, NPM_REGISTRY_URL)
    }

    /// Create an npm adapter against a custom registry (mirror, proxy, test server)
    pub fn with_base_url(client: HttpClient, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// Build the URL for a package
    fn build_url(&self, package: &str) -> String {
        format!("{}/{}", self.base_url, package)
    }

    fn parse_record(
        package: &str,
        response: NpmPackageResponse,
    ) -> Result<RegistryRecord, RegistryError> {
        let modified = response
            .time
            .and_then(|t| t.modified)
            .ok_or_else(|| RegistryError::invalid_response(package, "missing time.modified"))?;

        let last_modified = modified.parse::<DateTime<Utc>>().map_err(|e| {
            RegistryError::invalid_response(
                package,
                format!("invalid modified timestamp '{}': {}", modified, e),
            )
        })?;

        let latest = response.dist_tags.and_then(|tags| tags.latest);

        Ok(RegistryRecord::new(latest, last_modified))
    }
}

#[async_trait]
impl RegistryAdapter for NpmAdapter {
    async fn fetch_record(&self, package: &str) -> Result<RegistryRecord, RegistryError> {
        let url = self.build_url(package);
        let response: NpmPackageResponse = self.client.get_json(&url, package).await?;
        Self::parse_record(package, response)
    }
}
