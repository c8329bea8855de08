//! Error type shared by the query use cases

use thiserror::Error;

use crate::application::ports::StoreError;
use crate::application::queries::CatalogError;
use crate::domain::errors::DomainError;

/// Common error type for catalog, filter, statistics and threat use cases
#[derive(Debug, Error)]
pub enum QueryUseCaseError {
    #[error("Query not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(#[from] DomainError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl From<CatalogError> for QueryUseCaseError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound(name) => QueryUseCaseError::NotFound(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_catalog_error() {
        let err: QueryUseCaseError = CatalogError::NotFound("99. Missing".to_string()).into();
        assert!(matches!(err, QueryUseCaseError::NotFound(ref n) if n == "99. Missing"));
        assert_eq!(err.to_string(), "Query not found: 99. Missing");
    }

    #[test]
    fn test_from_domain_error() {
        let err: QueryUseCaseError = DomainError::validation("limit", "too small").into();
        assert!(matches!(err, QueryUseCaseError::Validation(_)));
        assert!(err.to_string().contains("Validation error"));
    }

    #[test]
    fn test_from_store_error() {
        let err: QueryUseCaseError = StoreError::Database(sqlx::Error::RowNotFound).into();
        assert!(matches!(err, QueryUseCaseError::Store(_)));
        assert!(err.to_string().contains("Store error"));
    }
}
