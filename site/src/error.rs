//! Errors raised by the site build step.

use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading configuration or writing output.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("failed to read config {}: {source}", .path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", .path.display())]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to create output directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File names must be a single, non-empty path component.
    #[error("invalid output file name {0:?}")]
    InvalidFileName(String),
}

pub type Result<T> = std::result::Result<T, SiteError>;
