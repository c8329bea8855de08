use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::handlers::health::{HealthResponse, ReadinessResponse};
use crate::api::handlers::LimitQuery;
use crate::application::dto::{
    ApproachMatch, ApproachSample, CatalogEntryDto, FeaturedThreat, FilterRequest,
    FilterResponse, FilterSummary, OverviewStats, QueryResultResponse, SampleResponse, ThreatDto,
    ThreatsResponse,
};
use crate::application::queries::{CellValue, ResultSet};
use crate::domain::value_objects::{HazardFilter, RiskLevel, SizeCategory, SortKey};

/// OpenAPI specification for the NEO analytics API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "NEO Analytics API",
        version = "1.0.0",
        description = "Read-only analytical queries over near-Earth asteroid close approaches"
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(
        crate::api::handlers::health::health_handler,
        crate::api::handlers::health::readiness_handler,
        crate::api::handlers::queries::list_queries_handler,
        crate::api::handlers::queries::get_query_handler,
        crate::api::handlers::queries::run_query_handler,
        crate::api::handlers::filter::filter_handler,
        crate::api::handlers::stats::stats_handler,
        crate::api::handlers::threats::threats_handler,
        crate::api::handlers::sample::sample_handler,
    ),
    components(
        schemas(
            HealthResponse,
            ReadinessResponse,
            LimitQuery,
            CatalogEntryDto,
            QueryResultResponse,
            ResultSet,
            CellValue,
            FilterRequest,
            FilterResponse,
            FilterSummary,
            ApproachMatch,
            HazardFilter,
            SortKey,
            OverviewStats,
            FeaturedThreat,
            ThreatDto,
            ThreatsResponse,
            RiskLevel,
            SizeCategory,
            ApproachSample,
            SampleResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "queries", description = "Predefined analytical query catalog"),
        (name = "approaches", description = "Filtering, ranking and statistics over close approaches")
    )
)]
pub struct ApiDoc;

/// Create the Swagger UI route
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi())
}
