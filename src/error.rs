use crate::align::AlignError;
use crate::model::ModelError;
use crate::nws::NwsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnowcastError {
    #[error(transparent)]
    Nws(#[from] NwsError),

    #[error(transparent)]
    Align(#[from] AlignError),

    #[error(transparent)]
    Model(#[from] ModelError),
}
