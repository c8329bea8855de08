use axum::{
    extract::{Query, State},
    response::Json,
};
use std::sync::Arc;

use super::LimitQuery;
use crate::api::errors::ApiError;
use crate::application::dto::SampleResponse;
use crate::application::use_cases::ApproachSampleUseCase;

/// GET /v1/approaches/sample
/// Velocity / distance points for scatter analysis
#[utoipa::path(
    get,
    path = "/v1/approaches/sample",
    tag = "approaches",
    params(
        ("limit" = Option<i64>, Query, description = "Number of points (default: 500, 1-5000)")
    ),
    responses(
        (status = 200, description = "Sample points", body = SampleResponse),
        (status = 422, description = "Limit out of range"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn sample_handler(
    State(use_case): State<Arc<ApproachSampleUseCase>>,
    Query(query): Query<LimitQuery>,
) -> Result<Json<SampleResponse>, ApiError> {
    Ok(Json(use_case.execute(query.limit).await?))
}
