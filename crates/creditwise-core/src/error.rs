use thiserror::Error;

#[derive(Debug, Error)]
pub enum CreditWiseError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Division by zero in {context}")]
    DivisionByZero { context: String },

    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    #[error("Date error: {0}")]
    DateError(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CreditWiseError {
    fn from(e: serde_json::Error) -> Self {
        CreditWiseError::SerializationError(e.to_string())
    }
}
