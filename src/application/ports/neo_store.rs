use async_trait::async_trait;
use thiserror::Error;

use crate::application::dto::{ApproachMatch, ApproachSample};
use crate::application::queries::{ResultSet, SqlQuery};
use crate::domain::entities::{Asteroid, CloseApproach};
#[cfg(test)]
use mockall::{automock, predicate::*};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Decode error: {0}")]
    Decode(String),
}

/// Raw counts behind the overview statistics
#[derive(Debug, Clone, PartialEq)]
pub struct OverviewCounts {
    pub total_asteroids: i64,
    pub total_approaches: i64,
    pub hazardous_asteroids: i64,
    pub largest_hazardous: Option<Asteroid>,
}

/// Port for read-only access to the asteroid / close approach store
#[cfg_attr(test, automock)]
#[async_trait]
pub trait NeoStore: Send + Sync {
    /// Execute any query and return its rows under their column names
    async fn fetch_result_set(&self, query: &SqlQuery) -> Result<ResultSet, StoreError>;

    /// Execute a filter query and decode its rows
    async fn fetch_matches(&self, query: &SqlQuery) -> Result<Vec<ApproachMatch>, StoreError>;

    /// Dataset totals and the largest hazardous asteroid
    async fn overview_counts(&self) -> Result<OverviewCounts, StoreError>;

    /// Hazardous approaches with their asteroid, highest threat score first
    async fn hazardous_approaches_by_threat(
        &self,
        limit: i64,
    ) -> Result<Vec<(Asteroid, CloseApproach)>, StoreError>;

    /// Up to `limit` joined rows for velocity / distance analysis
    async fn approach_sample(&self, limit: i64) -> Result<Vec<ApproachSample>, StoreError>;

    /// Cheap round trip used by readiness checks
    async fn ping(&self) -> Result<(), StoreError>;
}
