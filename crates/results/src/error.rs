use thiserror::Error;

use crate::models::Discipline;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResultsError {
    #[error("{discipline} time cannot be negative (got {minutes})")]
    InvalidDuration { discipline: Discipline, minutes: i32 },
}

pub type Result<T> = std::result::Result<T, ResultsError>;

impl ResultsError {
    pub fn is_invalid_duration(&self) -> bool {
        matches!(self, ResultsError::InvalidDuration { .. })
    }
}
