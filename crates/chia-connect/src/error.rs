//! Error types for chia-connect.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using the chia-connect [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by chia-connect operations.
///
/// Only credential loading can fail; construction, address formatting, and
/// path resolution are total over their inputs.
#[derive(Debug, Error)]
pub enum Error {
    /// A key or certificate file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    FileAccess {
        /// The path that could not be read, after tilde expansion.
        path: PathBuf,
        /// The underlying filesystem failure.
        #[source]
        source: std::io::Error,
    },
}
