//! Numeric validation helpers shared by the filter criteria and the
//! bounded listing operations.

use crate::domain::errors::DomainError;

/// Validation result type
pub type ValidationResult<T> = Result<T, DomainError>;

/// Common validation utilities
pub struct Validation;

impl Validation {
    /// Validate that a value is within a numeric range (both ends inclusive)
    pub fn validate_range<T: PartialOrd + std::fmt::Display>(
        value: T,
        field_name: &str,
        min: Option<T>,
        max: Option<T>,
    ) -> ValidationResult<()> {
        if let Some(min_val) = min {
            if value < min_val {
                return Err(DomainError::validation(
                    field_name,
                    format!("Value {} is below minimum {}", value, min_val),
                ));
            }
        }

        if let Some(max_val) = max {
            if value > max_val {
                return Err(DomainError::validation(
                    field_name,
                    format!("Value {} exceeds maximum {}", value, max_val),
                ));
            }
        }

        Ok(())
    }

    /// Reject NaN and infinities
    pub fn validate_finite(value: f64, field_name: &str) -> ValidationResult<()> {
        if !value.is_finite() {
            return Err(DomainError::validation(
                field_name,
                "Value must be a finite number",
            ));
        }
        Ok(())
    }

    /// Finite and >= 0
    pub fn validate_non_negative(value: f64, field_name: &str) -> ValidationResult<f64> {
        Self::validate_finite(value, field_name)?;
        Self::validate_range(value, field_name, Some(0.0), None)?;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_range() {
        assert!(Validation::validate_range(10, "limit", Some(10), Some(1000)).is_ok());
        assert!(Validation::validate_range(1000, "limit", Some(10), Some(1000)).is_ok());
        assert!(Validation::validate_range(9, "limit", Some(10), Some(1000)).is_err());
        assert!(Validation::validate_range(1001, "limit", Some(10), Some(1000)).is_err());
        assert!(Validation::validate_range(-5, "limit", None, Some(1000)).is_ok());
    }

    #[test]
    fn test_validate_non_negative() {
        assert_eq!(Validation::validate_non_negative(0.0, "v").unwrap(), 0.0);
        assert_eq!(Validation::validate_non_negative(42.5, "v").unwrap(), 42.5);
        assert!(Validation::validate_non_negative(-0.1, "v").is_err());
        assert!(Validation::validate_non_negative(f64::NAN, "v").is_err());
        assert!(Validation::validate_non_negative(f64::INFINITY, "v").is_err());
    }

    #[test]
    fn test_validation_error_messages() {
        let err = Validation::validate_range(5, "limit", Some(10), Some(1000)).unwrap_err();
        match err {
            DomainError::ValidationError { field, message } => {
                assert_eq!(field, "limit");
                assert!(message.contains("below minimum 10"));
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let err = Validation::validate_finite(f64::NAN, "lunar_max").unwrap_err();
        assert_eq!(err.field(), Some("lunar_max"));
        assert!(err.to_string().contains("finite"));
    }
}
