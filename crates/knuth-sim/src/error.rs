use knuth_forest::ForestError;
use knuth_hash::HashError;

#[derive(Debug, thiserror::Error)]
pub enum SimError {
    #[error(transparent)]
    Hash(#[from] HashError),
    #[error(transparent)]
    Forest(#[from] ForestError),
    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid input document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown structure kind {0:?}")]
    UnknownKind(String),
    #[error("no structure kind given")]
    MissingKind,
}
