use axum::{extract::State, response::Json};
use std::sync::Arc;

use crate::api::errors::ApiError;
use crate::application::dto::OverviewStats;
use crate::application::use_cases::OverviewStatsUseCase;

/// GET /v1/stats
#[utoipa::path(
    get,
    path = "/v1/stats",
    tag = "approaches",
    responses(
        (status = 200, description = "Dataset overview", body = OverviewStats),
        (status = 500, description = "Store failure")
    )
)]
pub async fn stats_handler(
    State(use_case): State<Arc<OverviewStatsUseCase>>,
) -> Result<Json<OverviewStats>, ApiError> {
    Ok(Json(use_case.execute().await?))
}
