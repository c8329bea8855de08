use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::errors::DomainError;

/// Column a filter result is ranked by (always descending)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, ToSchema)]
pub enum SortKey {
    /// Relative velocity in km/h
    #[default]
    Velocity,
    /// Miss distance in lunar distances
    Distance,
    /// Maximum estimated diameter in km
    Diameter,
}

impl SortKey {
    /// Fully qualified column in the approach/asteroid join
    pub fn column(&self) -> &'static str {
        match self {
            SortKey::Velocity => "c.relative_velocity_kmph",
            SortKey::Distance => "c.miss_distance_lunar",
            SortKey::Diameter => "a.estimated_diameter_max_km",
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortKey::Velocity => write!(f, "velocity"),
            SortKey::Distance => write!(f, "distance"),
            SortKey::Diameter => write!(f, "diameter"),
        }
    }
}

impl std::str::FromStr for SortKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "velocity" => Ok(SortKey::Velocity),
            "distance" => Ok(SortKey::Distance),
            "diameter" => Ok(SortKey::Diameter),
            _ => Err(DomainError::InvalidSortKey(s.to_string())),
        }
    }
}
