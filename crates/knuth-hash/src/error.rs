#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HashError {
    #[error("invalid hash parameter {name} = {value}: must be at least 1")]
    InvalidParameter { name: &'static str, value: i64 },
    #[error("perfect hashing needs {len} slots but the table has {size}")]
    TableTooSmall { len: usize, size: usize },
}
