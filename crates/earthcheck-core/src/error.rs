//! Error types for earthcheck-core

use std::path::PathBuf;

/// Result type for earthcheck-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while auditing a source tree
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A Cargo.toml file is not valid TOML
    ///
    /// This aborts the whole run: a manifest that cannot be parsed is a
    /// real build misconfiguration, not something to skip past.
    #[error("Failed to parse {path}: {source}")]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A manifest declares a cdylib target but names it nowhere
    #[error("cdylib target in {path} has no [lib] name and no [package] name")]
    MissingCrateName { path: PathBuf },

    /// The scan root itself could not be read
    #[error("Cannot read scan root {path}: {source}")]
    RootNotReadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
