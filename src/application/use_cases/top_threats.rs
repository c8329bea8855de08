use std::sync::Arc;

use tracing::info;

use crate::application::dto::{ThreatDto, ThreatsResponse};
use crate::application::errors::QueryUseCaseError;
use crate::application::ports::NeoStore;
use crate::application::validation::validate_limit;
use crate::domain::value_objects::RiskLevel;

/// Use case: hazardous approaches ranked by threat score
pub struct TopThreatsUseCase {
    store: Arc<dyn NeoStore>,
}

impl TopThreatsUseCase {
    pub const DEFAULT_LIMIT: i64 = 10;
    pub const MAX_LIMIT: i64 = 100;

    pub fn new(store: Arc<dyn NeoStore>) -> Self {
        Self { store }
    }

    #[tracing::instrument(skip(self))]
    pub async fn execute(&self, limit: Option<i64>) -> Result<ThreatsResponse, QueryUseCaseError> {
        let limit = validate_limit(limit, Self::DEFAULT_LIMIT, 1, Self::MAX_LIMIT)?;

        let pairs = self.store.hazardous_approaches_by_threat(limit).await?;

        let threats: Vec<ThreatDto> = pairs
            .into_iter()
            .enumerate()
            .map(|(index, (asteroid, approach))| {
                let threat_score = approach.threat_score(asteroid.estimated_diameter_max_km());
                ThreatDto {
                    rank: index + 1,
                    name: asteroid.name().to_string(),
                    diameter_km: asteroid.estimated_diameter_max_km(),
                    size_category: asteroid.size_category(),
                    velocity_kmph: approach.relative_velocity_kmph(),
                    distance_ld: approach.miss_distance_lunar(),
                    approach_date: approach.close_approach_date(),
                    threat_score,
                    risk_level: RiskLevel::from_score(threat_score),
                }
            })
            .collect();

        info!(rows = threats.len(), limit, "top threats ranked");

        Ok(ThreatsResponse {
            total: threats.len(),
            limit,
            threats,
        })
    }
}
