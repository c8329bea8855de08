use axum::{
    extract::{Path, State},
    response::Json,
};
use std::sync::Arc;

use crate::api::errors::ApiError;
use crate::application::dto::{CatalogEntryDto, QueryResultResponse};
use crate::application::use_cases::RunCatalogQueryUseCase;

/// GET /v1/queries
/// List the catalog in display order
#[utoipa::path(
    get,
    path = "/v1/queries",
    tag = "queries",
    responses(
        (status = 200, description = "Catalog entries", body = Vec<CatalogEntryDto>)
    )
)]
pub async fn list_queries_handler(
    State(use_case): State<Arc<RunCatalogQueryUseCase>>,
) -> Json<Vec<CatalogEntryDto>> {
    Json(use_case.list())
}

/// GET /v1/queries/{slug}
/// One catalog entry including its SQL text
#[utoipa::path(
    get,
    path = "/v1/queries/{slug}",
    tag = "queries",
    params(
        ("slug" = String, Path, description = "Catalog entry slug, e.g. closer-than-moon")
    ),
    responses(
        (status = 200, description = "Catalog entry", body = CatalogEntryDto),
        (status = 404, description = "Unknown query")
    )
)]
pub async fn get_query_handler(
    State(use_case): State<Arc<RunCatalogQueryUseCase>>,
    Path(slug): Path<String>,
) -> Result<Json<CatalogEntryDto>, ApiError> {
    Ok(Json(use_case.describe(&slug)?))
}

/// GET /v1/queries/{slug}/results
/// Execute a catalog query
#[utoipa::path(
    get,
    path = "/v1/queries/{slug}/results",
    tag = "queries",
    params(
        ("slug" = String, Path, description = "Catalog entry slug")
    ),
    responses(
        (status = 200, description = "Query result rows", body = QueryResultResponse),
        (status = 404, description = "Unknown query"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn run_query_handler(
    State(use_case): State<Arc<RunCatalogQueryUseCase>>,
    Path(slug): Path<String>,
) -> Result<Json<QueryResultResponse>, ApiError> {
    let response = use_case.execute_by_slug(&slug).await?;
    Ok(Json(response))
}
