use std::sync::Arc;

use tracing::info;

use crate::application::dto::{FilterRequest, FilterResponse, FilterSummary};
use crate::application::errors::QueryUseCaseError;
use crate::application::ports::NeoStore;
use crate::application::queries::FilterQueryBuilder;
use crate::application::validation::validate_filter_request;

/// Use case: ad-hoc approach filter
pub struct FilterApproachesUseCase {
    store: Arc<dyn NeoStore>,
}

impl FilterApproachesUseCase {
    pub fn new(store: Arc<dyn NeoStore>) -> Self {
        Self { store }
    }

    #[tracing::instrument(skip(self))]
    pub async fn execute(&self, request: FilterRequest) -> Result<FilterResponse, QueryUseCaseError> {
        // 1. Validate; out-of-range values are rejected, never clamped
        let criteria = validate_filter_request(&request)?;

        // 2. Build the bound query and run it
        let query = FilterQueryBuilder::build(&criteria);
        let matches = self.store.fetch_matches(&query).await?;

        // 3. Summarize
        let summary = FilterSummary::from_matches(&matches);
        info!(
            rows = matches.len(),
            hazardous = summary.hazardous_count,
            "filter query completed"
        );

        Ok(FilterResponse {
            total: matches.len(),
            limit: criteria.limit(),
            matches,
            summary,
        })
    }
}
