//! Property-based tests using proptest
//!
//! Invariants of the filter builder, the request validation and the
//! score / bucket helpers that must hold for every input.

use chrono::NaiveDate;
use proptest::prelude::*;

use neo_analytics::application::dto::FilterRequest;
use neo_analytics::application::queries::{FilterCriteria, FilterQueryBuilder, SqlParam};
use neo_analytics::application::validation::validate_filter_request;
use neo_analytics::domain::entities::CloseApproach;
use neo_analytics::domain::value_objects::{HazardFilter, RiskLevel, SizeCategory, SortKey};

/// Strategy for hazard filters
fn hazard_strategy() -> impl Strategy<Value = HazardFilter> {
    prop_oneof![
        Just(HazardFilter::All),
        Just(HazardFilter::HazardousOnly),
        Just(HazardFilter::NonHazardousOnly)
    ]
}

/// Strategy for sort keys
fn sort_strategy() -> impl Strategy<Value = SortKey> {
    prop_oneof![
        Just(SortKey::Velocity),
        Just(SortKey::Distance),
        Just(SortKey::Diameter)
    ]
}

/// Strategy for valid filter requests
fn valid_request_strategy() -> impl Strategy<Value = FilterRequest> {
    (
        0.0f64..200_000.0,
        0.0f64..50.0,
        0.0f64..500.0,
        hazard_strategy(),
        sort_strategy(),
        FilterCriteria::MIN_LIMIT..=FilterCriteria::MAX_LIMIT,
    )
        .prop_map(
            |(velocity_min, diameter_min, lunar_max, hazard_filter, sort_by, limit)| {
                FilterRequest {
                    velocity_min,
                    diameter_min,
                    lunar_max,
                    hazard_filter,
                    sort_by,
                    limit,
                }
            },
        )
}

fn approach(velocity: f64, lunar: f64) -> CloseApproach {
    CloseApproach::reconstruct(
        1,
        NaiveDate::from_ymd_opt(2030, 1, 1).unwrap(),
        velocity,
        lunar * 384_400.0,
        lunar,
        lunar * 0.00257,
    )
}

proptest! {
    #[test]
    fn valid_requests_build_fully_bound_queries(request in valid_request_strategy()) {
        let criteria = validate_filter_request(&request).unwrap();
        let query = FilterQueryBuilder::build(&criteria);

        prop_assert_eq!(query.placeholder_count(), query.params().len());
        prop_assert_eq!(query.params().last(), Some(&SqlParam::Integer(request.limit)));
        prop_assert!(query.sql().contains(request.sort_by.column()));
    }

    #[test]
    fn sql_text_depends_only_on_hazard_and_sort(
        a in valid_request_strategy(),
        b in valid_request_strategy(),
    ) {
        let b = FilterRequest { hazard_filter: a.hazard_filter, sort_by: a.sort_by, ..b };
        let qa = FilterQueryBuilder::build(&validate_filter_request(&a).unwrap());
        let qb = FilterQueryBuilder::build(&validate_filter_request(&b).unwrap());
        prop_assert_eq!(qa.sql(), qb.sql());
    }

    #[test]
    fn limits_outside_range_are_rejected(
        limit in prop_oneof![i64::MIN..FilterCriteria::MIN_LIMIT, (FilterCriteria::MAX_LIMIT + 1)..i64::MAX]
    ) {
        let request = FilterRequest { limit, ..Default::default() };
        let err = validate_filter_request(&request).unwrap_err();
        prop_assert_eq!(err.field(), Some("limit"));
    }

    #[test]
    fn negative_bounds_are_rejected(value in -1.0e9f64..-1.0e-9) {
        for request in [
            FilterRequest { velocity_min: value, ..Default::default() },
            FilterRequest { diameter_min: value, ..Default::default() },
            FilterRequest { lunar_max: value, ..Default::default() },
        ] {
            prop_assert!(validate_filter_request(&request).is_err());
        }
    }

    #[test]
    fn threat_score_is_finite_and_non_negative(
        diameter in 0.0f64..100.0,
        velocity in 0.0f64..300_000.0,
        lunar in prop_oneof![Just(0.0f64), 0.0f64..1000.0],
    ) {
        let score = approach(velocity, lunar).threat_score(diameter);
        prop_assert!(score.is_finite());
        prop_assert!(score >= 0.0);
    }

    #[test]
    fn risk_level_is_monotonic(a in 0.0f64..1.0e6, b in 0.0f64..1.0e6) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(RiskLevel::from_score(low) <= RiskLevel::from_score(high));
    }

    #[test]
    fn every_diameter_has_exactly_one_bucket(diameter in 0.0f64..2000.0) {
        let category = SizeCategory::from_diameter_km(diameter);
        let (lower, upper) = match category {
            SizeCategory::Tiny => (f64::NEG_INFINITY, 0.1),
            SizeCategory::Small => (0.1, 0.5),
            SizeCategory::Medium => (0.5, 1.0),
            SizeCategory::Large => (1.0, f64::INFINITY),
        };
        prop_assert!(diameter >= lower && diameter < upper);
    }
}

#[test]
fn bucket_boundaries_belong_to_upper_bucket() {
    assert_eq!(SizeCategory::from_diameter_km(0.1), SizeCategory::Small);
    assert_eq!(SizeCategory::from_diameter_km(0.5), SizeCategory::Medium);
    assert_eq!(SizeCategory::from_diameter_km(1.0), SizeCategory::Large);
}
