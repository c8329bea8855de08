use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Fixed diameter buckets, lower bound inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum SizeCategory {
    /// < 0.1 km
    Tiny,
    /// [0.1, 0.5) km
    Small,
    /// [0.5, 1.0) km
    Medium,
    /// >= 1.0 km
    Large,
}

impl SizeCategory {
    pub const ALL: [SizeCategory; 4] = [
        SizeCategory::Tiny,
        SizeCategory::Small,
        SizeCategory::Medium,
        SizeCategory::Large,
    ];

    pub fn from_diameter_km(diameter_km: f64) -> Self {
        if diameter_km < 0.1 {
            SizeCategory::Tiny
        } else if diameter_km < 0.5 {
            SizeCategory::Small
        } else if diameter_km < 1.0 {
            SizeCategory::Medium
        } else {
            SizeCategory::Large
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SizeCategory::Tiny => "Tiny",
            SizeCategory::Small => "Small",
            SizeCategory::Medium => "Medium",
            SizeCategory::Large => "Large",
        }
    }
}

impl std::fmt::Display for SizeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for SizeCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Invalid size category: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries_are_half_open() {
        assert_eq!(SizeCategory::from_diameter_km(0.0), SizeCategory::Tiny);
        assert_eq!(SizeCategory::from_diameter_km(0.099), SizeCategory::Tiny);
        assert_eq!(SizeCategory::from_diameter_km(0.1), SizeCategory::Small);
        assert_eq!(SizeCategory::from_diameter_km(0.499), SizeCategory::Small);
        assert_eq!(SizeCategory::from_diameter_km(0.5), SizeCategory::Medium);
        assert_eq!(SizeCategory::from_diameter_km(0.999), SizeCategory::Medium);
        assert_eq!(SizeCategory::from_diameter_km(1.0), SizeCategory::Large);
        assert_eq!(SizeCategory::from_diameter_km(37.0), SizeCategory::Large);
    }

    #[test]
    fn test_labels_parse_back() {
        for category in SizeCategory::ALL {
            assert_eq!(category.label().parse::<SizeCategory>().unwrap(), category);
        }
        assert!("Huge".parse::<SizeCategory>().is_err());
    }
}
