use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("Validation failed for {field}: {message}")]
    ValidationError { field: String, message: String },

    #[error("Invalid hazard filter: {0}")]
    InvalidHazardFilter(String),

    #[error("Invalid sort key: {0}")]
    InvalidSortKey(String),

    #[error("Invalid close approach date: {0}")]
    InvalidApproachDate(String),
}

impl DomainError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Name of the offending field, when the error is tied to one
    pub fn field(&self) -> Option<&str> {
        match self {
            DomainError::ValidationError { field, .. } => Some(field),
            DomainError::InvalidHazardFilter(_) => Some("hazard_filter"),
            DomainError::InvalidSortKey(_) => Some("sort_by"),
            DomainError::InvalidApproachDate(_) => Some("close_approach_date"),
        }
    }
}
