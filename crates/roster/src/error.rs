use results::ResultsError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RosterError>;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Failed to read roster")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse roster JSON")]
    ParseError(#[from] serde_json::Error),

    #[error("Invalid splits for participant '{name}'")]
    InvalidParticipant {
        name: String,
        #[source]
        source: ResultsError,
    },

    #[error("Validation error: {0}")]
    ValidationError(String),
}
