//! Request validation shared by the use cases
//!
//! Converts transport-level DTOs into validated domain inputs, reporting the
//! first offending field as a `DomainError::ValidationError`.

use validator::{Validate, ValidationErrors};

use crate::application::dto::FilterRequest;
use crate::application::queries::FilterCriteria;
use crate::domain::errors::DomainError;
use crate::domain::validation::Validation;

/// Collapse validator output into one domain error, fields in name order
fn first_field_error(errors: ValidationErrors) -> DomainError {
    let field_errors = errors.field_errors();
    let mut fields: Vec<_> = field_errors.iter().collect();
    fields.sort_by(|a, b| a.0.cmp(b.0));

    match fields.first() {
        Some((field, errs)) => {
            let message = errs
                .iter()
                .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
                .unwrap_or_else(|| "Invalid value".to_string());
            DomainError::validation(field.to_string(), message)
        }
        None => DomainError::validation("request", "Invalid request"),
    }
}

/// Validate a filter request and produce the criteria the builder consumes
pub fn validate_filter_request(request: &FilterRequest) -> Result<FilterCriteria, DomainError> {
    request.validate().map_err(first_field_error)?;

    FilterCriteria::new(
        request.velocity_min,
        request.diameter_min,
        request.lunar_max,
        request.hazard_filter,
        request.sort_by,
        request.limit,
    )
}

/// Resolve an optional row limit against its default and bounds
pub fn validate_limit(
    limit: Option<i64>,
    default: i64,
    min: i64,
    max: i64,
) -> Result<i64, DomainError> {
    let limit = limit.unwrap_or(default);
    Validation::validate_range(limit, "limit", Some(min), Some(max))?;
    Ok(limit)
}
