//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ManifestError: Issues locating, reading or parsing package.json
//! - RegistryError: Issues with npm registry communication

use std::path::PathBuf;
use thiserror::Error;

/// Errors related to manifest file operations
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Manifest file not found
    #[error("no package.json found at {path}")]
    NotFound { path: PathBuf },

    /// Manifest file exists but could not be read
    #[error("failed to read manifest file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Contents are not valid JSON or do not have the package.json shape
    #[error("failed to parse JSON in {path}: {message}")]
    ParseError { path: PathBuf, message: String },

    /// The current working directory could not be determined
    #[error("failed to resolve path {path}: {source}")]
    ResolveError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors related to package registry communication
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Registry answered with a non-success status
    #[error("registry returned HTTP {status} for '{package}'")]
    HttpStatus { package: String, status: u16 },

    /// Network request failed
    #[error("failed to fetch '{package}' from registry: {message}")]
    NetworkError { package: String, message: String },

    /// Timeout
    #[error("timeout while fetching '{package}' from registry")]
    Timeout { package: String },

    /// Invalid response from registry
    #[error("invalid registry response for '{package}': {message}")]
    InvalidResponse { package: String, message: String },

    /// The HTTP client itself could not be built
    #[error("failed to create HTTP client: {message}")]
    ClientBuild { message: String },
}

impl ManifestError {
    /// Creates a new NotFound error
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        ManifestError::NotFound { path: path.into() }
    }

    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new ParseError
    pub fn parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ManifestError::ParseError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Returns true if the manifest could not be located or opened
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ManifestError::NotFound { .. } | ManifestError::ReadError { .. }
        )
    }
}

impl RegistryError {
    /// Creates a new HttpStatus error
    pub fn http_status(package: impl Into<String>, status: u16) -> Self {
        RegistryError::HttpStatus {
            package: package.into(),
            status,
        }
    }

    /// Creates a new NetworkError
    pub fn network_error(package: impl Into<String>, message: impl Into<String>) -> Self {
        RegistryError::NetworkError {
            package: package.into(),
            message: message.into(),
        }
    }

    /// Creates a new Timeout error
    pub fn timeout(package: impl Into<String>) -> Self {
        RegistryError::Timeout {
            package: package.into(),
        }
    }

    /// Creates a new InvalidResponse error
    pub fn invalid_response(package: impl Into<String>, message: impl Into<String>) -> Self {
        RegistryError::InvalidResponse {
            package: package.into(),
            message: message.into(),
        }
    }

    /// HTTP status code carried by this error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            RegistryError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
