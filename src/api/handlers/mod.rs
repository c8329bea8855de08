pub mod filter;
pub mod health;
pub mod queries;
pub mod sample;
pub mod stats;
pub mod threats;

use serde::Deserialize;
use utoipa::ToSchema;

pub use filter::filter_handler;
pub use health::{health_handler, readiness_handler};
pub use queries::{get_query_handler, list_queries_handler, run_query_handler};
pub use sample::sample_handler;
pub use stats::stats_handler;
pub use threats::threats_handler;

/// `?limit=` query string shared by the ranked endpoints
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct LimitQuery {
    pub limit: Option<i64>,
}
