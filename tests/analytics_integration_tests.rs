//! Filter, statistics, threat ranking and sampling against SQLite

use std::sync::Arc;

use sqlx::SqlitePool;

use neo_analytics::application::dto::{ApproachMatch, FilterRequest};
use neo_analytics::application::errors::QueryUseCaseError;
use neo_analytics::application::ports::NeoStore;
use neo_analytics::application::use_cases::{
    ApproachSampleUseCase, FilterApproachesUseCase, OverviewStatsUseCase, TopThreatsUseCase,
};
use neo_analytics::domain::value_objects::{HazardFilter, RiskLevel, SortKey};
use neo_analytics::infrastructure::persistence::SqliteNeoStore;

fn store(pool: &SqlitePool) -> Arc<dyn NeoStore> {
    Arc::new(SqliteNeoStore::new(pool.clone()))
}

async fn filter(pool: &SqlitePool, request: FilterRequest) -> Vec<ApproachMatch> {
    FilterApproachesUseCase::new(store(pool))
        .execute(request)
        .await
        .unwrap()
        .matches
}

fn sort_value(m: &ApproachMatch, key: SortKey) -> f64 {
    match key {
        SortKey::Velocity => m.velocity,
        SortKey::Distance => m.distance_ld,
        SortKey::Diameter => m.diameter,
    }
}

#[sqlx::test(migrations = "./migrations", fixtures("scenario"))]
async fn scenario_filter_returns_only_fast_approach(pool: SqlitePool) {
    let matches = filter(
        &pool,
        FilterRequest {
            velocity_min: 50_000.0,
            diameter_min: 0.0,
            lunar_max: 50.0,
            hazard_filter: HazardFilter::All,
            sort_by: SortKey::Velocity,
            limit: 10,
        },
    )
    .await;

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].name, "(2002 BB)");
    assert_eq!(matches[0].velocity, 60_000.0);
    assert_eq!(matches[0].date.to_string(), "2024-02-20");
    assert_eq!(matches[0].hazardous, "Yes");
}

#[sqlx::test(migrations = "./migrations", fixtures("neo_sample"))]
async fn lunar_bound_is_inclusive(pool: SqlitePool) {
    let matches = filter(&pool, FilterRequest::default()).await;

    assert_eq!(matches.len(), 10);
    assert!(matches
        .iter()
        .any(|m| m.name == "(2011 AG5)" && m.distance_ld == 50.0));
    assert!(matches.iter().all(|m| m.distance_ld <= 50.0));
}

#[sqlx::test(migrations = "./migrations", fixtures("neo_sample"))]
async fn hazard_filter_is_respected(pool: SqlitePool) {
    let hazardous = filter(
        &pool,
        FilterRequest {
            hazard_filter: HazardFilter::HazardousOnly,
            ..Default::default()
        },
    )
    .await;
    assert_eq!(hazardous.len(), 8);
    assert!(hazardous.iter().all(ApproachMatch::is_hazardous));

    let safe = filter(
        &pool,
        FilterRequest {
            hazard_filter: HazardFilter::NonHazardousOnly,
            ..Default::default()
        },
    )
    .await;
    assert_eq!(safe.len(), 2);
    assert!(safe.iter().all(|m| !m.is_hazardous()));

    let all = filter(&pool, FilterRequest::default()).await;
    assert_eq!(all.len(), hazardous.len() + safe.len());
}

#[sqlx::test(migrations = "./migrations", fixtures("neo_sample"))]
async fn results_descend_by_sort_key_within_limit(pool: SqlitePool) {
    for key in [SortKey::Velocity, SortKey::Distance, SortKey::Diameter] {
        let matches = filter(
            &pool,
            FilterRequest {
                lunar_max: 1000.0,
                sort_by: key,
                limit: 10,
                ..Default::default()
            },
        )
        .await;

        assert_eq!(matches.len(), 10, "{:?}", key);
        assert!(
            matches
                .windows(2)
                .all(|w| sort_value(&w[0], key) >= sort_value(&w[1], key)),
            "{:?} not descending",
            key
        );
    }
}

#[sqlx::test(migrations = "./migrations", fixtures("neo_sample"))]
async fn ties_break_by_name_then_date(pool: SqlitePool) {
    let matches = filter(
        &pool,
        FilterRequest {
            lunar_max: 1000.0,
            sort_by: SortKey::Diameter,
            limit: 1000,
            ..Default::default()
        },
    )
    .await;

    let apophis_dates: Vec<String> = matches
        .iter()
        .filter(|m| m.name == "99942 Apophis")
        .map(|m| m.date.to_string())
        .collect();
    assert_eq!(
        apophis_dates,
        vec!["2013-01-09", "2021-03-06", "2029-04-13", "2036-03-27", "2044-09-03"]
    );
}

#[sqlx::test(migrations = "./migrations", fixtures("neo_sample"))]
async fn filter_summary_matches_rows(pool: SqlitePool) {
    let response = FilterApproachesUseCase::new(store(&pool))
        .execute(FilterRequest {
            velocity_min: 80_000.0,
            ..Default::default()
        })
        .await
        .unwrap();

    // (2001 FO32), (2023 DW), (2019 OK)
    assert_eq!(response.total, 3);
    assert_eq!(response.summary.hazardous_count, 2);
    assert_eq!(response.summary.avg_velocity, Some(302_000.0 / 3.0));
}

#[sqlx::test(migrations = "./migrations", fixtures("scenario"))]
async fn limit_below_minimum_is_rejected(pool: SqlitePool) {
    let result = FilterApproachesUseCase::new(store(&pool))
        .execute(FilterRequest {
            limit: 5,
            ..Default::default()
        })
        .await;

    match result {
        Err(QueryUseCaseError::Validation(e)) => assert_eq!(e.field(), Some("limit")),
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[sqlx::test(migrations = "./migrations", fixtures("neo_sample"))]
async fn overview_statistics(pool: SqlitePool) {
    let stats = OverviewStatsUseCase::new(store(&pool)).execute().await.unwrap();

    assert_eq!(stats.total_asteroids, 8);
    assert_eq!(stats.total_approaches, 15);
    assert_eq!(stats.hazardous_asteroids, 4);
    assert_eq!(stats.hazard_rate_percent, 50.0);

    let largest = stats.largest_hazardous.unwrap();
    assert_eq!(largest.name, "(2001 FO32)");
    assert_eq!(largest.diameter_km, 0.5);
}

#[sqlx::test(migrations = "./migrations", fixtures("neo_sample"))]
async fn threats_ranked_by_score(pool: SqlitePool) {
    let response = TopThreatsUseCase::new(store(&pool)).execute(None).await.unwrap();

    assert_eq!(response.total, 9);
    let names: Vec<&str> = response.threats.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(&names[..3], &["99942 Apophis", "(2001 FO32)", "(2023 DW)"]);

    assert_eq!(response.threats[0].threat_score, 97_500.0);
    assert_eq!(response.threats[0].risk_level, RiskLevel::Critical);
    assert_eq!(response.threats[2].threat_score, 4_500.0);
    assert!(response
        .threats
        .windows(2)
        .all(|w| w[0].threat_score >= w[1].threat_score));
    assert_eq!(response.threats.last().unwrap().risk_level, RiskLevel::Low);
}

#[sqlx::test(migrations = "./migrations", fixtures("neo_sample"))]
async fn approach_sample_honours_limit(pool: SqlitePool) {
    let use_case = ApproachSampleUseCase::new(store(&pool));

    let all = use_case.execute(None).await.unwrap();
    assert_eq!(all.total, 15);
    assert_eq!(all.points.iter().filter(|p| p.hazardous).count(), 9);

    let few = use_case.execute(Some(3)).await.unwrap();
    assert_eq!(few.points.len(), 3);
    assert_eq!(few.points[0].name, "1036 Ganymed");
}

#[sqlx::test(migrations = "./migrations")]
async fn empty_dataset_statistics(pool: SqlitePool) {
    let stats = OverviewStatsUseCase::new(store(&pool)).execute().await.unwrap();
    assert_eq!(stats.hazard_rate_percent, 0.0);
    assert!(stats.largest_hazardous.is_none());

    let response = FilterApproachesUseCase::new(store(&pool))
        .execute(FilterRequest::default())
        .await
        .unwrap();
    assert_eq!(response.total, 0);
    assert_eq!(response.summary.avg_velocity, None);
}
