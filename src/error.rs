use thiserror::Error;

/// Reasons a submitted review is refused. Nothing is stored when one of
/// these is returned.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("a star rating is required")]
    MissingRating,

    #[error("rating {0:?} is not a number")]
    InvalidRating(String),

    #[error("rating {0} is outside 0..=5")]
    RatingOutOfRange(f64),

    #[error("review text is required")]
    MissingText,
}

/// Failures at the storage and network boundaries. These are logged and
/// replaced by a safe default; they never reach the UI.
#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("{0} is not available in this environment")]
    Unavailable(&'static str),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("network error: {0}")]
    Network(String),
}
