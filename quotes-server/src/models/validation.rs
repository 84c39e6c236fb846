//! Validation error types

use std::fmt;

/// Validation error for quote input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is empty when it shouldn't be
    Empty { field: &'static str },

    /// Identifier is zero or negative
    NonPositiveId { id: i32 },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::NonPositiveId { id } => write!(f, "id must be positive, got {}", id),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Reject an empty field. Whitespace is content; only `""` is empty.
pub fn require_non_empty(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(())
}

/// Reject ids that can never name a stored quote.
pub fn require_positive_id(id: i32) -> Result<(), ValidationError> {
    if id <= 0 {
        return Err(ValidationError::NonPositiveId { id });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::Empty { field: "author" };
        assert_eq!(err.to_string(), "author cannot be empty");

        let err = ValidationError::NonPositiveId { id: -3 };
        assert_eq!(err.to_string(), "id must be positive, got -3");
    }

    #[test]
    fn empty_is_rejected_whitespace_is_not() {
        assert!(require_non_empty("author", "").is_err());
        assert!(require_non_empty("author", " ").is_ok());
        assert!(require_non_empty("author", "Plato").is_ok());
    }

    #[test]
    fn ids_must_be_positive() {
        assert_eq!(
            require_positive_id(0),
            Err(ValidationError::NonPositiveId { id: 0 })
        );
        assert!(require_positive_id(-1).is_err());
        assert!(require_positive_id(1).is_ok());
    }
}
