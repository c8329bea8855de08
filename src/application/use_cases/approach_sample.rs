use std::sync::Arc;

use crate::application::dto::SampleResponse;
use crate::application::errors::QueryUseCaseError;
use crate::application::ports::NeoStore;
use crate::application::validation::validate_limit;

/// Use case: velocity / distance scatter sample
pub struct ApproachSampleUseCase {
    store: Arc<dyn NeoStore>,
}

impl ApproachSampleUseCase {
    pub const DEFAULT_LIMIT: i64 = 500;
    pub const MAX_LIMIT: i64 = 5000;

    pub fn new(store: Arc<dyn NeoStore>) -> Self {
        Self { store }
    }

    #[tracing::instrument(skip(self))]
    pub async fn execute(&self, limit: Option<i64>) -> Result<SampleResponse, QueryUseCaseError> {
        let limit = validate_limit(limit, Self::DEFAULT_LIMIT, 1, Self::MAX_LIMIT)?;
        let points = self.store.approach_sample(limit).await?;

        Ok(SampleResponse {
            total: points.len(),
            limit,
            points,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::ApproachSample;
    use crate::application::ports::MockNeoStore;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn test_default_limit_is_passed_through() {
        let mut mock_store = MockNeoStore::new();
        mock_store
            .expect_approach_sample()
            .with(eq(500))
            .times(1)
            .returning(|_| {
                Ok(vec![ApproachSample {
                    name: "433 Eros".into(),
                    velocity: 21_000.0,
                    distance_ld: 70.0,
                    diameter: 37.0,
                    hazardous: false,
                }])
            });

        let response = ApproachSampleUseCase::new(Arc::new(mock_store))
            .execute(None)
            .await
            .unwrap();

        assert_eq!(response.limit, 500);
        assert_eq!(response.total, 1);
    }

    #[tokio::test]
    async fn test_oversized_limit_is_rejected() {
        let result = ApproachSampleUseCase::new(Arc::new(MockNeoStore::new()))
            .execute(Some(5001))
            .await;
        assert!(matches!(result, Err(QueryUseCaseError::Validation(_))));
    }
}
