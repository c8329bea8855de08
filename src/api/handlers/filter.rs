use axum::{extract::State, response::Json};
use std::sync::Arc;

use crate::api::errors::ApiError;
use crate::application::dto::{FilterRequest, FilterResponse};
use crate::application::use_cases::FilterApproachesUseCase;

/// POST /v1/approaches/filter
/// Ad-hoc approach filter; omitted fields take their defaults
#[utoipa::path(
    post,
    path = "/v1/approaches/filter",
    tag = "approaches",
    request_body = FilterRequest,
    responses(
        (status = 200, description = "Matching approaches", body = FilterResponse),
        (status = 422, description = "Filter input out of range"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn filter_handler(
    State(use_case): State<Arc<FilterApproachesUseCase>>,
    Json(request): Json<FilterRequest>,
) -> Result<Json<FilterResponse>, ApiError> {
    let response = use_case.execute(request).await?;
    Ok(Json(response))
}
