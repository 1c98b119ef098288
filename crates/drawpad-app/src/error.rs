//! Application errors.

use drawpad_render::RendererError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the host.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Render(#[from] RendererError),
}

/// Result type for application operations.
pub type AppResult<T> = Result<T, AppError>;
