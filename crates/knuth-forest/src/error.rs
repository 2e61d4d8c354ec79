#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ForestError {
    #[error("B-tree minimum degree must be at least 2 with 2t - 1 keys addressable, got {0}")]
    InvalidDegree(usize),
}
