use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::value_objects::SizeCategory;

/// Asteroid entity - one row of the `asteroids` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Asteroid {
    id: i64,
    name: String,
    estimated_diameter_max_km: f64,
    absolute_magnitude_h: f64,
    is_potentially_hazardous: bool,
}

impl Asteroid {
    /// Reconstruct from storage
    pub fn reconstruct(
        id: i64,
        name: String,
        estimated_diameter_max_km: f64,
        absolute_magnitude_h: f64,
        is_potentially_hazardous: bool,
    ) -> Self {
        Self {
            id,
            name,
            estimated_diameter_max_km,
            absolute_magnitude_h,
            is_potentially_hazardous,
        }
    }

    pub fn size_category(&self) -> SizeCategory {
        SizeCategory::from_diameter_km(self.estimated_diameter_max_km)
    }

    // Getters
    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn estimated_diameter_max_km(&self) -> f64 {
        self.estimated_diameter_max_km
    }

    pub fn absolute_magnitude_h(&self) -> f64 {
        self.absolute_magnitude_h
    }

    pub fn is_potentially_hazardous(&self) -> bool {
        self.is_potentially_hazardous
    }
}
