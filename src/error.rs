//! Error types for site-refs.
//!
//! Per-file scanning never fails; these errors only come out of the
//! surfaces that touch the filesystem or parse configuration.

use std::path::PathBuf;

/// Error type for site scanning and configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The site base is missing or is not a directory.
    #[error("site base is not a directory: {}", .0.display())]
    InvalidBase(PathBuf),

    /// Reading from the filesystem failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Walking the site directory failed.
    #[error("directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),

    /// Scan options could not be parsed.
    #[error("invalid scan options: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type alias for site-refs operations.
pub type Result<T> = std::result::Result<T, Error>;
