//! Error types for path synchronization.
//!
//! Split in two layers: `RelocationError` covers filesystem-level failures
//! inside the relocator, `SyncError` is the orchestration surface handed back
//! to the host. Soft conditions (missing file reference, missing variant
//! source, destination overwrite) are absorbed locally and never appear here.

use thiserror::Error;

/// Filesystem-level failure during a single file relocation
#[derive(Debug, Error)]
pub enum RelocationError {
    #[error("I/O failure relocating file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to map store path '{path}' to a filesystem location: {reason}")]
    PathMapping { path: String, reason: String },
}

/// Orchestration-level failure surfaced to the host's mutation pipeline
#[derive(Debug, Error)]
pub enum SyncError {
    #[error(transparent)]
    Relocation(#[from] RelocationError),

    #[error("host failed to persist node {node_id}: {reason}")]
    Persistence { node_id: u64, reason: String },

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
