//! Dependency information structures

use std::fmt;

/// Which package.json group a dependency was declared in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencyKind {
    /// `dependencies`
    Production,
    /// `devDependencies`
    Development,
}

/// Represents a declared package dependency
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    /// Package name
    pub name: String,
    /// Version specifier as written in the manifest
    pub declared_version: String,
    /// Group the winning entry came from
    pub kind: DependencyKind,
}

impl Dependency {
    /// Creates a new dependency
    pub fn new(
        name: impl Into<String>,
        declared_version: impl Into<String>,
        kind: DependencyKind,
    ) -> Self {
        Self {
            name: name.into(),
            declared_version: declared_version.into(),
            kind,
        }
    }

    /// Creates a new production dependency
    pub fn production(name: impl Into<String>, declared_version: impl Into<String>) -> Self {
        Self::new(name, declared_version, DependencyKind::Production)
    }

    /// Creates a new development dependency
    pub fn development(name: impl Into<String>, declared_version: impl Into<String>) -> Self {
        Self::new(name, declared_version, DependencyKind::Development)
    }

    /// Returns true if this is a development dependency
    pub fn is_dev(&self) -> bool {
        self.kind == DependencyKind::Development
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dev_marker = if self.is_dev() { " (dev)" } else { "" };
        write!(f, "{}@{}{}", self.name, self.declared_version, dev_marker)
    }
}
