//! Manifest file resolution and parsing
//!
//! This module provides functionality to:
//! - Resolve a user supplied path (file or directory) to a package.json
//! - Read and parse it into the merged list of declared dependencies

mod package_json;

pub use package_json::PackageJson;

use crate::domain::Dependency;
use crate::error::ManifestError;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Conventional manifest filename
pub const MANIFEST_FILENAME: &str = "package.json";

/// A loaded manifest: where it lives and what it declares
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    /// Absolute path the manifest was read from
    pub path: PathBuf,
    /// Merged dependencies in declaration order
    pub dependencies: Vec<Dependency>,
}

impl Manifest {
    /// Returns true if the manifest declares no dependencies at all
    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty()
    }

    pub fn len(&self) -> usize {
        self.dependencies.len()
    }
}

/// Resolve a path to an absolute manifest path.
///
/// Relative paths are joined onto the current working directory and `.` / `..`
/// segments are collapsed. A directory resolves to the `package.json` inside
/// it. Existence is not checked here.
pub fn resolve_manifest_path(path: &Path) -> Result<PathBuf, ManifestError> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        let cwd = std::env::current_dir().map_err(|e| ManifestError::ResolveError {
            path: path.to_path_buf(),
            source: e,
        })?;
        cwd.join(path)
    };
    let absolute = normalize_lexically(&absolute);

    if absolute.is_dir() {
        Ok(absolute.join(MANIFEST_FILENAME))
    } else {
        Ok(absolute)
    }
}

/// Collapse `.` and `..` without touching the filesystem.
///
/// `..` at the root stays at the root. Symlinks are not resolved.
fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

/// Resolve, read and parse the manifest at `path`
pub fn load_manifest(path: &Path) -> Result<Manifest, ManifestError> {
    let resolved = resolve_manifest_path(path)?;
    debug!("Reading manifest {}", resolved.display());

    let content = std::fs::read_to_string(&resolved).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ManifestError::not_found(&resolved),
        _ => ManifestError::read_error(&resolved, e),
    })?;

    let package_json = PackageJson::parse(&content)
        .map_err(|e| ManifestError::parse_error(&resolved, e.to_string()))?;

    Ok(Manifest {
        path: resolved,
        dependencies: package_json.merged_dependencies(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_manifest(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join(MANIFEST_FILENAME);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_resolve_directory_appends_filename() {
        let dir = TempDir::new().unwrap();
        let resolved = resolve_manifest_path(dir.path()).unwrap();
        assert_eq!(resolved, dir.path().join("package.json"));
    }

    #[test]
    fn test_resolve_relative_path_is_absolute() {
        let resolved = resolve_manifest_path(Path::new("does-not-exist/package.json")).unwrap();
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("does-not-exist/package.json"));
    }

    #[test]
    fn test_resolve_collapses_dot_segments() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();

        let dotted = dir.path().join("sub").join("..").join(".").join("package.json");
        let resolved = resolve_manifest_path(&dotted).unwrap();
        assert_eq!(resolved, dir.path().join("package.json"));

        // a dotted path naming a directory still gets package.json appended
        let dotted_dir = dir.path().join("sub").join(".");
        let resolved = resolve_manifest_path(&dotted_dir).unwrap();
        assert_eq!(resolved, dir.path().join("sub").join("package.json"));
    }

    #[test]
    fn test_normalize_lexically() {
        assert_eq!(
            normalize_lexically(Path::new("/a/b/../c/./d")),
            PathBuf::from("/a/c/d")
        );
        assert_eq!(normalize_lexically(Path::new("/../x")), PathBuf::from("/x"));
    }

    #[test]
    fn test_missing_dotted_path_reports_clean_path() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("a").join("..").join("nope.json");

        let err = load_manifest(&missing).unwrap_err();
        let msg = err.to_string();
        assert!(err.is_not_found());
        assert!(msg.contains(&dir.path().join("nope.json").display().to_string()));
        assert!(!msg.contains(".."));
    }

    #[test]
    fn test_load_from_directory() {
        let dir = TempDir::new().unwrap();
        write_manifest(&dir, r#"{"dependencies": {"left-pad": "1.0.0"}}"#);

        let manifest = load_manifest(dir.path()).unwrap();
        assert_eq!(manifest.path, dir.path().join("package.json"));
        assert_eq!(manifest.len(), 1);
        assert_eq!(manifest.dependencies[0].name, "left-pad");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope").join("package.json");

        let err = load_manifest(&missing).unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().contains(&missing.display().to_string()));
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = TempDir::new().unwrap();
        let path = write_manifest(&dir, "{ not json");

        let err = load_manifest(&path).unwrap_err();
        assert!(matches!(err, ManifestError::ParseError { .. }));
    }

    #[test]
    fn test_load_empty_manifest() {
        let dir = TempDir::new().unwrap();
        let path = write_manifest(&dir, r#"{"name": "empty"}"#);

        let manifest = load_manifest(&path).unwrap();
        assert!(manifest.is_empty());
    }
}
