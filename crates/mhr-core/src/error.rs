use thiserror::Error;

#[derive(Debug, Error)]
pub enum MhrError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Machine not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for MhrError {
    fn from(e: serde_json::Error) -> Self {
        MhrError::Serialization(e.to_string())
    }
}
