use thiserror::Error;

#[derive(Debug, Error)]
pub enum DispatchError {
    /// The vehicle could not be reached at all.
    #[error("dispatcher offline: {0}")]
    Offline(String),

    /// The vehicle answered but refused the command.
    #[error("command rejected: {0}")]
    Rejected(String),

    #[error("command encoding error: {0}")]
    Encode(#[from] serde_json::Error),
}

pub type DispatchResult<T> = Result<T, DispatchError>;
