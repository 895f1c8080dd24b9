use thiserror::Error;

pub type Result<T> = std::result::Result<T, CardError>;

#[derive(Debug, Error)]
pub enum CardError {
    #[error("Malformed card at index {index}: {reason}")]
    Malformed { index: usize, reason: String },

    #[error("Card collection must be a JSON array")]
    NotAnArray,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CardError {
    pub(crate) fn malformed(index: usize, reason: impl Into<String>) -> Self {
        Self::Malformed {
            index,
            reason: reason.into(),
        }
    }
}
