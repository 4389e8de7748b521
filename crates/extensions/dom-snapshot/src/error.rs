//! Snapshot loading errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The snapshot parsed but holds no element nodes.
    #[error("Snapshot contains no elements")]
    Empty,
}
