//! Error type for host-side operations (config loading, writing prerendered pages).
//!
//! The page itself has no error states; only file and config handling can fail.

use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced by [`crate::SiteConfig::load`] and [`crate::document::write_page`].
#[derive(Debug, Error)]
pub enum LandingError {
    /// Reading or writing a file failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// File the operation targeted
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// A site config file is not valid JSON for [`crate::SiteConfig`].
    #[error("invalid site config {path}: {source}")]
    Config {
        /// Config file that failed to parse
        path: PathBuf,
        /// Parser error, with line and column
        #[source]
        source: serde_json::Error,
    },
}

impl LandingError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
