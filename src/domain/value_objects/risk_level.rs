use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Banding of a threat score; upper bounds are inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
pub enum RiskLevel {
    /// score <= 100
    Low,
    /// 100 < score <= 500
    Medium,
    /// 500 < score <= 1000
    High,
    /// score > 1000
    Critical,
}

impl RiskLevel {
    pub fn from_score(score: f64) -> Self {
        if score <= 100.0 {
            RiskLevel::Low
        } else if score <= 500.0 {
            RiskLevel::Medium
        } else if score <= 1000.0 {
            RiskLevel::High
        } else {
            RiskLevel::Critical
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "Low"),
            RiskLevel::Medium => write!(f, "Medium"),
            RiskLevel::High => write!(f, "High"),
            RiskLevel::Critical => write!(f, "Critical"),
        }
    }
}
