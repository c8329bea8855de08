mod hazard_filter;
mod risk_level;
mod size_category;
mod sort_key;

pub use hazard_filter::HazardFilter;
pub use risk_level::RiskLevel;
pub use size_category::SizeCategory;
pub use sort_key::SortKey;
