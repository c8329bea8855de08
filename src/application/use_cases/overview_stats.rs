use std::sync::Arc;

use crate::application::dto::{FeaturedThreat, OverviewStats};
use crate::application::errors::QueryUseCaseError;
use crate::application::ports::NeoStore;

/// Use case: dataset overview statistics
pub struct OverviewStatsUseCase {
    store: Arc<dyn NeoStore>,
}

impl OverviewStatsUseCase {
    pub fn new(store: Arc<dyn NeoStore>) -> Self {
        Self { store }
    }

    #[tracing::instrument(skip(self))]
    pub async fn execute(&self) -> Result<OverviewStats, QueryUseCaseError> {
        let counts = self.store.overview_counts().await?;

        let hazard_rate_percent = if counts.total_asteroids > 0 {
            counts.hazardous_asteroids as f64 / counts.total_asteroids as f64 * 100.0
        } else {
            0.0
        };

        Ok(OverviewStats {
            total_asteroids: counts.total_asteroids,
            total_approaches: counts.total_approaches,
            hazardous_asteroids: counts.hazardous_asteroids,
            hazard_rate_percent,
            largest_hazardous: counts.largest_hazardous.map(|a| FeaturedThreat {
                name: a.name().to_string(),
                diameter_km: a.estimated_diameter_max_km(),
            }),
        })
    }
}
