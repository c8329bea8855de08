use axum::{
    extract::{Query, State},
    response::Json,
};
use std::sync::Arc;

use super::LimitQuery;
use crate::api::errors::ApiError;
use crate::application::dto::ThreatsResponse;
use crate::application::use_cases::TopThreatsUseCase;

/// GET /v1/threats
/// Hazardous approaches ranked by threat score
#[utoipa::path(
    get,
    path = "/v1/threats",
    tag = "approaches",
    params(
        ("limit" = Option<i64>, Query, description = "Number of threats (default: 10, 1-100)")
    ),
    responses(
        (status = 200, description = "Ranked threats", body = ThreatsResponse),
        (status = 422, description = "Limit out of range"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn threats_handler(
    State(use_case): State<Arc<TopThreatsUseCase>>,
    Query(query): Query<LimitQuery>,
) -> Result<Json<ThreatsResponse>, ApiError> {
    Ok(Json(use_case.execute(query.limit).await?))
}
