use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::errors::DomainError;

/// Close approach entity - one recorded pass of an asteroid near Earth
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CloseApproach {
    neo_reference_id: i64,
    close_approach_date: NaiveDate,
    relative_velocity_kmph: f64,
    miss_distance_km: f64,
    miss_distance_lunar: f64,
    astronomical: f64,
}

impl CloseApproach {
    /// Reconstruct from storage
    pub fn reconstruct(
        neo_reference_id: i64,
        close_approach_date: NaiveDate,
        relative_velocity_kmph: f64,
        miss_distance_km: f64,
        miss_distance_lunar: f64,
        astronomical: f64,
    ) -> Self {
        Self {
            neo_reference_id,
            close_approach_date,
            relative_velocity_kmph,
            miss_distance_km,
            miss_distance_lunar,
            astronomical,
        }
    }

    /// Parse the ISO-8601 date text the store keeps
    pub fn parse_date(value: &str) -> Result<NaiveDate, DomainError> {
        NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
            .map_err(|_| DomainError::InvalidApproachDate(value.to_string()))
    }

    /// `diameter * velocity / lunar distance`, rounded to 2 decimals.
    ///
    /// A lunar distance of zero or less divides by 1 instead.
    pub fn threat_score(&self, diameter_max_km: f64) -> f64 {
        let divisor = if self.miss_distance_lunar > 0.0 {
            self.miss_distance_lunar
        } else {
            1.0
        };
        let raw = diameter_max_km * self.relative_velocity_kmph / divisor;
        (raw * 100.0).round() / 100.0
    }

    // Getters
    pub fn neo_reference_id(&self) -> i64 {
        self.neo_reference_id
    }

    pub fn close_approach_date(&self) -> NaiveDate {
        self.close_approach_date
    }

    pub fn relative_velocity_kmph(&self) -> f64 {
        self.relative_velocity_kmph
    }

    pub fn miss_distance_km(&self) -> f64 {
        self.miss_distance_km
    }

    pub fn miss_distance_lunar(&self) -> f64 {
        self.miss_distance_lunar
    }

    pub fn astronomical(&self) -> f64 {
        self.astronomical
    }
}
