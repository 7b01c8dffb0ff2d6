use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("could not retrieve firmware metadata from {url}: {reason}")]
    Unreachable { url: String, reason: String },

    #[error("malformed firmware metadata: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("no devices could be found in the firmware metadata")]
    NoDevices,
}

pub type Result<T> = std::result::Result<T, MetadataError>;
