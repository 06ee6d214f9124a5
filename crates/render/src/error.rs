//! Error types for rendering and writing invoices.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while rendering or writing a document.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The renderer configuration cannot produce a usable page.
    #[error("invalid render configuration: {0}")]
    InvalidConfig(String),

    /// Writing the output file failed.
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for renderer operations.
pub type RenderResult<T> = Result<T, RenderError>;
