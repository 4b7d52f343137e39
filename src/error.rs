//! Error types for the core and its surrounding layers.

use std::path::PathBuf;

use thiserror::Error;

/// URL canonicalization failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UrlError {
    /// The URL could not be parsed or percent-decoded.
    #[error("malformed URL {url:?}: {reason}")]
    Malformed {
        /// The input as given.
        url: String,
        /// What went wrong.
        reason: String,
    },
}

/// Code emission failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EmitError {
    /// No backend is registered under this id.
    #[error("unknown backend {id:?} (available: {available})")]
    UnknownBackend {
        /// The requested id.
        id: String,
        /// Comma-separated registered ids.
        available: String,
    },
}

/// Configuration loading failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config {path}: {source}")]
    Read {
        /// Config file path.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The config file is not valid YAML for the expected shape.
    #[error("failed to parse config {path}: {source}")]
    Parse {
        /// Config file path.
        path: PathBuf,
        /// Underlying YAML error.
        source: serde_yaml::Error,
    },
    /// The `.env` file exists but could not be loaded.
    #[error("failed to load .env: {0}")]
    DotEnv(#[from] dotenvy::Error),
}

/// Fixture store failures.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing a fixture file failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// File path.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// A JSON fixture did not match the expected shape.
    #[error("failed to parse {path}: {source}")]
    Json {
        /// File path.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },
    /// A YAML fixture did not match the expected shape.
    #[error("failed to parse {path}: {source}")]
    Yaml {
        /// File path.
        path: PathBuf,
        /// Underlying YAML error.
        source: serde_yaml::Error,
    },
    /// The path is not usable (missing file name, not found in memory, ...).
    #[error("not found: {0}")]
    NotFound(PathBuf),
}
