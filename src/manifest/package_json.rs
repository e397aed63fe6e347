//! package.json parser
//!
//! Handles:
//! - dependencies
//! - devDependencies (override dependencies on name collision)

use crate::domain::{Dependency, DependencyKind};
use indexmap::IndexMap;
use serde::Deserialize;

/// The parts of package.json this tool reads
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PackageJson {
    /// Runtime dependencies; `null` is treated as absent
    #[serde(default)]
    pub dependencies: Option<IndexMap<String, String>>,
    /// Development dependencies; `null` is treated as absent
    #[serde(default, rename = "devDependencies")]
    pub dev_dependencies: Option<IndexMap<String, String>>,
}

impl PackageJson {
    /// Parse package.json content
    pub fn parse(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Merge both groups into one list, last write wins.
    ///
    /// A devDependencies entry replaces a dependencies entry with the same
    /// name but keeps its position.
    pub fn merged_dependencies(&self) -> Vec<Dependency> {
        let mut merged: IndexMap<&str, (&str, DependencyKind)> = IndexMap::new();

        let groups = [
            (&self.dependencies, DependencyKind::Production),
            (&self.dev_dependencies, DependencyKind::Development),
        ];
        for (group, kind) in groups {
            for (name, version) in group.iter().flatten() {
                merged.insert(name.as_str(), (version.as_str(), kind));
            }
        }

        merged
            .into_iter()
            .map(|(name, (version, kind))| Dependency::new(name, version, kind))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Vec<Dependency> {
        PackageJson::parse(content).unwrap().merged_dependencies()
    }

    #[test]
    fn test_parse_simple_dependencies() {
        let deps = parse(
            r#"{
                "dependencies": {
                    "lodash": "^4.17.21",
                    "express": "~4.18.2"
                }
            }"#,
        );
        assert_eq!(deps.len(), 2);
        assert_eq!(deps[0], Dependency::production("lodash", "^4.17.21"));
        assert_eq!(deps[1], Dependency::production("express", "~4.18.2"));
    }

    #[test]
    fn test_parse_dev_dependencies() {
        let deps = parse(
            r#"{
                "dependencies": { "react": "^18.2.0" },
                "devDependencies": { "typescript": "~5.0.0" }
            }"#,
        );
        assert_eq!(
            deps,
            vec![
                Dependency::production("react", "^18.2.0"),
                Dependency::development("typescript", "~5.0.0"),
            ]
        );
    }

    #[test]
    fn test_dev_dependency_wins_on_collision() {
        let deps = parse(
            r#"{
                "dependencies": { "a": "1.0.0", "shared": "^1.0.0", "b": "2.0.0" },
                "devDependencies": { "shared": "^2.0.0", "c": "3.0.0" }
            }"#,
        );
        let names: Vec<_> = deps.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["a", "shared", "b", "c"]);
        assert_eq!(deps[1], Dependency::development("shared", "^2.0.0"));
    }

    #[test]
    fn test_preserves_document_order() {
        let deps = parse(r#"{"dependencies": {"zod": "3", "axios": "1", "moment": "2"}}"#);
        let names: Vec<_> = deps.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["zod", "axios", "moment"]);
    }

    #[test]
    fn test_missing_and_null_groups() {
        assert!(parse(r#"{}"#).is_empty());
        assert!(parse(r#"{"dependencies": null, "devDependencies": null}"#).is_empty());
        assert!(parse(r#"{"dependencies": {}, "devDependencies": {}}"#).is_empty());
    }

    #[test]
    fn test_other_fields_ignored() {
        let deps = parse(
            r#"{
                "name": "app",
                "version": "1.0.0",
                "scripts": { "test": "jest" },
                "peerDependencies": { "react": "*" },
                "dependencies": { "left-pad": "1.0.0" }
            }"#,
        );
        assert_eq!(deps, vec![Dependency::production("left-pad", "1.0.0")]);
    }

    #[test]
    fn test_invalid_shapes_rejected() {
        assert!(PackageJson::parse("not json").is_err());
        assert!(PackageJson::parse(r#""text""#).is_err());
        assert!(PackageJson::parse(r#"{"dependencies": ["lodash"]}"#).is_err());
        assert!(PackageJson::parse(r#"{"dependencies": {"lodash": 4}}"#).is_err());
    }

    #[test]
    fn test_scoped_package_names() {
        let deps = parse(r#"{"devDependencies": {"@types/node": "^20.0.0"}}"#);
        assert_eq!(deps, vec![Dependency::development("@types/node", "^20.0.0")]);
    }
}
