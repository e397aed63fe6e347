//! Publication metadata fetched from the registry for one package

use chrono::{DateTime, Utc};

/// Placeholder used when the registry names no `latest` dist-tag
pub const UNKNOWN_VERSION: &str = "unknown";

/// Result of a single successful registry lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryRecord {
    /// Version the registry designates as `latest`
    pub latest_version: String,
    /// When the package document was last modified
    pub last_modified: DateTime<Utc>,
}

impl RegistryRecord {
    /// Create a new record. An empty or missing latest tag becomes `"unknown"`.
    pub fn new(latest_version: Option<String>, last_modified: DateTime<Utc>) -> Self {
        let latest_version = latest_version
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| UNKNOWN_VERSION.to_string());
        Self {
            latest_version,
            last_modified,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_with_latest() {
        let now = Utc::now();
        let record = RegistryRecord::new(Some("1.3.0".to_string()), now);
        assert_eq!(record.latest_version, "1.3.0");
        assert_eq!(record.last_modified, now);
    }

    #[test]
    fn test_record_missing_latest() {
        let record = RegistryRecord::new(None, Utc::now());
        assert_eq!(record.latest_version, "unknown");
    }

    #[test]
    fn test_record_empty_latest() {
        let record = RegistryRecord::new(Some(String::new()), Utc::now());
        assert_eq!(record.latest_version, "unknown");
    }
}
