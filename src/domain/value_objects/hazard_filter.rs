use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::errors::DomainError;

/// Which side of the potentially-hazardous classification to keep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, ToSchema)]
pub enum HazardFilter {
    #[default]
    All,
    HazardousOnly,
    NonHazardousOnly,
}

impl HazardFilter {
    /// Stored flag value the filter pins, `None` for `All`
    pub fn flag(&self) -> Option<i64> {
        match self {
            HazardFilter::All => None,
            HazardFilter::HazardousOnly => Some(1),
            HazardFilter::NonHazardousOnly => Some(0),
        }
    }

    pub fn matches(&self, hazardous: bool) -> bool {
        match self {
            HazardFilter::All => true,
            HazardFilter::HazardousOnly => hazardous,
            HazardFilter::NonHazardousOnly => !hazardous,
        }
    }
}

impl std::fmt::Display for HazardFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HazardFilter::All => write!(f, "all"),
            HazardFilter::HazardousOnly => write!(f, "hazardous"),
            HazardFilter::NonHazardousOnly => write!(f, "non-hazardous"),
        }
    }
}

impl std::str::FromStr for HazardFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['_', ' '], "-").as_str() {
            "all" => Ok(HazardFilter::All),
            "hazardous" | "hazardous-only" | "hazardousonly" => Ok(HazardFilter::HazardousOnly),
            "non-hazardous" | "non-hazardous-only" | "nonhazardousonly" => {
                Ok(HazardFilter::NonHazardousOnly)
            }
            _ => Err(DomainError::InvalidHazardFilter(s.to_string())),
        }
    }
}
