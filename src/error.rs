use thiserror::Error;

#[derive(Debug, Error)]
pub enum CollectError {
    /// The count prompt got something that is not an integer.
    #[error("invalid wallet count: {input:?}")]
    InvalidCount { input: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
