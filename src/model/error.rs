use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Failed to read model parameter file '{0}'")]
    Read(PathBuf, #[source] std::io::Error),

    #[error("Failed to parse model parameter file '{0}'")]
    Parse(PathBuf, #[source] serde_json::Error),

    #[error("Model parameter '{field}' has wrong shape: expected {expected}, found {found}")]
    Shape {
        field: &'static str,
        expected: usize,
        found: usize,
    },
}
