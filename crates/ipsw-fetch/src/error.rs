//! Error types for ipsw-fetch.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure of a single download. The batch continues with the next record.
#[derive(Debug, Error)]
pub enum TransferError {
    #[error("transfer of {url} failed: {reason}")]
    Network { url: String, reason: String },

    #[error("failed to write {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
}

pub type Result<T> = std::result::Result<T, TransferError>;
