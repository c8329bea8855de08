use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::application::queries::{CatalogEntry, FilterCriteria, ResultSet};
use crate::domain::value_objects::{HazardFilter, RiskLevel, SizeCategory, SortKey};

/// DTO for a catalog listing entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CatalogEntryDto {
    pub name: String,
    pub slug: String,
    pub description: String,
    /// SQL text, only present when a single entry is requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sql: Option<String>,
}

impl CatalogEntryDto {
    pub fn summary(entry: &CatalogEntry) -> Self {
        Self {
            name: entry.name.to_string(),
            slug: entry.slug.to_string(),
            description: entry.description.to_string(),
            sql: None,
        }
    }

    pub fn detailed(entry: &CatalogEntry) -> Self {
        Self {
            sql: Some(entry.sql.trim().to_string()),
            ..Self::summary(entry)
        }
    }
}

/// DTO for a catalog query execution
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QueryResultResponse {
    pub name: String,
    pub slug: String,
    pub row_count: usize,
    #[serde(flatten)]
    pub result: ResultSet,
}

fn finite(value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::new("finite").with_message("Value must be a finite number".into()))
    }
}

fn default_lunar_max() -> f64 {
    FilterCriteria::DEFAULT_LUNAR_MAX
}

fn default_limit() -> i64 {
    FilterCriteria::DEFAULT_LIMIT
}

/// DTO for the ad-hoc approach filter. Omitted fields take the dashboard
/// defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct FilterRequest {
    /// Minimum relative velocity in km/h (inclusive)
    #[serde(default)]
    #[validate(
        range(min = 0.0, message = "velocity_min must be >= 0"),
        custom(function = "finite")
    )]
    pub velocity_min: f64,
    /// Minimum estimated maximum diameter in km (inclusive)
    #[serde(default)]
    #[validate(
        range(min = 0.0, message = "diameter_min must be >= 0"),
        custom(function = "finite")
    )]
    pub diameter_min: f64,
    /// Maximum miss distance in lunar distances (inclusive)
    #[serde(default = "default_lunar_max")]
    #[validate(
        range(min = 0.0, message = "lunar_max must be >= 0"),
        custom(function = "finite")
    )]
    pub lunar_max: f64,
    #[serde(default)]
    pub hazard_filter: HazardFilter,
    #[serde(default)]
    pub sort_by: SortKey,
    /// Maximum rows returned (10-1000)
    #[serde(default = "default_limit")]
    #[validate(range(min = 10, max = 1000, message = "limit must be between 10 and 1000"))]
    pub limit: i64,
}

impl Default for FilterRequest {
    fn default() -> Self {
        Self {
            velocity_min: 0.0,
            diameter_min: 0.0,
            lunar_max: default_lunar_max(),
            hazard_filter: HazardFilter::All,
            sort_by: SortKey::Velocity,
            limit: default_limit(),
        }
    }
}

/// One approach matching a filter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ApproachMatch {
    pub name: String,
    pub date: NaiveDate,
    pub velocity: f64,
    pub distance_ld: f64,
    pub diameter: f64,
    /// "Yes" or "No"
    pub hazardous: String,
}

impl ApproachMatch {
    pub fn is_hazardous(&self) -> bool {
        self.hazardous == "Yes"
    }
}

/// Aggregates over a filter result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FilterSummary {
    pub avg_velocity: Option<f64>,
    pub avg_distance_ld: Option<f64>,
    pub hazardous_count: usize,
}

impl FilterSummary {
    pub fn from_matches(matches: &[ApproachMatch]) -> Self {
        let count = matches.len();
        let mean = |sum: f64| (count > 0).then(|| sum / count as f64);

        Self {
            avg_velocity: mean(matches.iter().map(|m| m.velocity).sum()),
            avg_distance_ld: mean(matches.iter().map(|m| m.distance_ld).sum()),
            hazardous_count: matches.iter().filter(|m| m.is_hazardous()).count(),
        }
    }
}

/// DTO for filter response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FilterResponse {
    pub matches: Vec<ApproachMatch>,
    pub total: usize,
    pub limit: i64,
    pub summary: FilterSummary,
}

/// Name and size of the largest hazardous asteroid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FeaturedThreat {
    pub name: String,
    pub diameter_km: f64,
}

/// DTO for dataset overview statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OverviewStats {
    pub total_asteroids: i64,
    pub total_approaches: i64,
    pub hazardous_asteroids: i64,
    /// Hazardous share of all asteroids, in percent (0 when empty)
    pub hazard_rate_percent: f64,
    pub largest_hazardous: Option<FeaturedThreat>,
}

/// One ranked hazardous approach
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ThreatDto {
    pub rank: usize,
    pub name: String,
    pub diameter_km: f64,
    pub size_category: SizeCategory,
    pub velocity_kmph: f64,
    pub distance_ld: f64,
    pub approach_date: NaiveDate,
    pub threat_score: f64,
    pub risk_level: RiskLevel,
}

/// DTO for top threats response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ThreatsResponse {
    pub threats: Vec<ThreatDto>,
    pub total: usize,
    pub limit: i64,
}

/// One point of the velocity / distance scatter sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ApproachSample {
    pub name: String,
    pub velocity: f64,
    pub distance_ld: f64,
    pub diameter: f64,
    pub hazardous: bool,
}

/// DTO for approach sample response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SampleResponse {
    pub points: Vec<ApproachSample>,
    pub total: usize,
    pub limit: i64,
}
