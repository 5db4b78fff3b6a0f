use thiserror::Error;

/// Boundary errors only. Generation itself is total over any well-formed
/// [`Configuration`](crate::Configuration) and never returns these.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
