mod approach_sample;
mod filter_approaches;
mod overview_stats;
mod run_catalog_query;
mod top_threats;

pub use approach_sample::ApproachSampleUseCase;
pub use filter_approaches::FilterApproachesUseCase;
pub use overview_stats::OverviewStatsUseCase;
pub use run_catalog_query::RunCatalogQueryUseCase;
pub use top_threats::TopThreatsUseCase;
