//! Error types for dotnet-runtimeconfig

use std::path::PathBuf;

/// Result type for runtime-config operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving a runtime config.
///
/// An absent config is not an error; every variant here is fatal to the
/// detection pass and carries enough detail for the caller to abort with.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// More than one `*.runtimeconfig.json` directly under the app root.
    ///
    /// The message substring `multiple *.runtimeconfig.json files present`
    /// is part of the contract; callers grep for it.
    #[error(
        "multiple *.runtimeconfig.json files present in {}: {}",
        .app_root.display(),
        .candidates.join(", ")
    )]
    AmbiguousConfig {
        app_root: PathBuf,
        candidates: Vec<String>,
    },

    /// The single config failed to decode even after comment stripping.
    #[error("failed to parse runtime config {}: {source}", .path.display())]
    MalformedConfig {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Directory listing, file read, or existence check failed.
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
