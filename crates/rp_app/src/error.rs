use rp_core::error::{LoadError, SessionError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("no document is open")]
    NothingLoaded,
}
