use thiserror::Error;

#[derive(Debug, Error)]
pub enum AlignError {
    #[error("Failed to parse timestamp '{0}'")]
    InvalidTimestamp(String),
}
