use crate::domain::errors::DomainError;
use crate::domain::validation::{Validation, ValidationResult};
use crate::domain::value_objects::{HazardFilter, SortKey};

use super::sql::{SqlParam, SqlQuery};

/// Validated inputs of an ad-hoc approach filter.
///
/// Construction fails instead of clamping when a value is out of range, so
/// a `FilterCriteria` in hand is always safe to turn into a query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterCriteria {
    velocity_min: f64,
    diameter_min: f64,
    lunar_max: f64,
    hazard_filter: HazardFilter,
    sort_by: SortKey,
    limit: i64,
}

impl FilterCriteria {
    pub const MIN_LIMIT: i64 = 10;
    pub const MAX_LIMIT: i64 = 1000;
    pub const DEFAULT_LIMIT: i64 = 100;
    pub const DEFAULT_LUNAR_MAX: f64 = 50.0;

    pub fn new(
        velocity_min: f64,
        diameter_min: f64,
        lunar_max: f64,
        hazard_filter: HazardFilter,
        sort_by: SortKey,
        limit: i64,
    ) -> ValidationResult<Self> {
        let velocity_min = Validation::validate_non_negative(velocity_min, "velocity_min")?;
        let diameter_min = Validation::validate_non_negative(diameter_min, "diameter_min")?;
        let lunar_max = Validation::validate_non_negative(lunar_max, "lunar_max")?;
        Validation::validate_range(
            limit,
            "limit",
            Some(Self::MIN_LIMIT),
            Some(Self::MAX_LIMIT),
        )?;

        Ok(Self {
            velocity_min,
            diameter_min,
            lunar_max,
            hazard_filter,
            sort_by,
            limit,
        })
    }

    pub fn velocity_min(&self) -> f64 {
        self.velocity_min
    }

    pub fn diameter_min(&self) -> f64 {
        self.diameter_min
    }

    pub fn lunar_max(&self) -> f64 {
        self.lunar_max
    }

    pub fn hazard_filter(&self) -> HazardFilter {
        self.hazard_filter
    }

    pub fn sort_by(&self) -> SortKey {
        self.sort_by
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            velocity_min: 0.0,
            diameter_min: 0.0,
            lunar_max: Self::DEFAULT_LUNAR_MAX,
            hazard_filter: HazardFilter::All,
            sort_by: SortKey::Velocity,
            limit: Self::DEFAULT_LIMIT,
        }
    }
}

/// SQL fragments for the approach filter
pub struct FilterQueryBuilder;

impl FilterQueryBuilder {
    /// Columns returned for every matching approach
    pub const APPROACH_SELECT: &'static str = r#"
        SELECT a.name,
               c.close_approach_date AS date,
               c.relative_velocity_kmph AS velocity,
               c.miss_distance_lunar AS distance_ld,
               a.estimated_diameter_max_km AS diameter,
               CASE WHEN a.is_potentially_hazardous_asteroid = 1 THEN 'Yes' ELSE 'No' END AS hazardous
        FROM asteroids a
        JOIN close_approach c ON a.id = c.neo_reference_id
    "#;

    /// Range predicates; bounds are inclusive
    pub const RANGE_WHERE: &'static str = "WHERE c.relative_velocity_kmph >= ? \
         AND a.estimated_diameter_max_km >= ? \
         AND c.miss_distance_lunar <= ?";

    /// Build the parameterized query for `criteria`.
    ///
    /// Only the ORDER BY column is spliced into the text, and it comes from
    /// the closed `SortKey` set; every value is a bound parameter.
    pub fn build(criteria: &FilterCriteria) -> SqlQuery {
        let mut params = vec![
            SqlParam::Real(criteria.velocity_min),
            SqlParam::Real(criteria.diameter_min),
            SqlParam::Real(criteria.lunar_max),
        ];

        let hazard_where = match criteria.hazard_filter.flag() {
            Some(flag) => {
                params.push(SqlParam::Integer(flag));
                "AND a.is_potentially_hazardous_asteroid = ?"
            }
            None => "",
        };
        params.push(SqlParam::Integer(criteria.limit));

        let sql = format!(
            "{} {} {} ORDER BY {} DESC, a.name ASC, c.close_approach_date ASC LIMIT ?",
            Self::APPROACH_SELECT.trim(),
            Self::RANGE_WHERE,
            hazard_where,
            criteria.sort_by.column(),
        );

        SqlQuery::with_params(sql, params)
    }

    /// Validate raw inputs and build in one step
    pub fn from_inputs(
        velocity_min: f64,
        diameter_min: f64,
        lunar_max: f64,
        hazard_filter: HazardFilter,
        sort_by: SortKey,
        limit: i64,
    ) -> Result<SqlQuery, DomainError> {
        let criteria = FilterCriteria::new(
            velocity_min,
            diameter_min,
            lunar_max,
            hazard_filter,
            sort_by,
            limit,
        )?;
        Ok(Self::build(&criteria))
    }
}
