use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::api::handlers::{
    filter_handler, get_query_handler, health_handler, list_queries_handler, readiness_handler,
    run_query_handler, sample_handler, stats_handler, threats_handler,
};
use crate::api::middleware::cors::create_cors_layer;
use crate::api::openapi::swagger_ui;
use crate::application::ports::NeoStore;
use crate::application::use_cases::{
    ApproachSampleUseCase, FilterApproachesUseCase, OverviewStatsUseCase, RunCatalogQueryUseCase,
    TopThreatsUseCase,
};
use crate::config::Config;

/// Application state container
pub struct AppState {
    pub store: Arc<dyn NeoStore>,
    pub catalog_use_case: Arc<RunCatalogQueryUseCase>,
    pub filter_use_case: Arc<FilterApproachesUseCase>,
    pub stats_use_case: Arc<OverviewStatsUseCase>,
    pub threats_use_case: Arc<TopThreatsUseCase>,
    pub sample_use_case: Arc<ApproachSampleUseCase>,
    pub config: Config,
}

/// Create router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    let catalog_state = Arc::clone(&state.catalog_use_case);

    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/health/ready",
            get(readiness_handler).with_state(Arc::clone(&state.store)),
        )
        .route(
            "/v1/queries",
            get(list_queries_handler).with_state(Arc::clone(&catalog_state)),
        )
        .route(
            "/v1/queries/{slug}",
            get(get_query_handler).with_state(Arc::clone(&catalog_state)),
        )
        .route(
            "/v1/queries/{slug}/results",
            get(run_query_handler).with_state(catalog_state),
        )
        .route(
            "/v1/approaches/filter",
            post(filter_handler).with_state(state.filter_use_case),
        )
        .route(
            "/v1/approaches/sample",
            get(sample_handler).with_state(state.sample_use_case),
        )
        .route("/v1/stats", get(stats_handler).with_state(state.stats_use_case))
        .route(
            "/v1/threats",
            get(threats_handler).with_state(state.threats_use_case),
        )
        .merge(swagger_ui())
        .layer(CompressionLayer::new())
        .layer(create_cors_layer(state.config.cors_allow_origin.as_deref()))
        .layer(TraceLayer::new_for_http())
}
