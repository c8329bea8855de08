//! # NEO Analytics - Near-Earth Object Query Service
//!
//! A read-only analytical service over a SQLite dataset of near-Earth
//! asteroids and their recorded close approaches to Earth, built on Clean
//! Architecture principles.
//!
//! ## Architecture Layers
//!
//! - **Domain**: Core types (entities, value objects, domain errors)
//! - **Application**: Query catalog, filter builder, use cases and ports
//! - **Infrastructure**: SQLite adapter for the `NeoStore` port
//! - **API**: HTTP handlers, router and OpenAPI document
//!
//! ## Key Features
//!
//! - Fixed catalog of twenty named analytical queries
//! - Validated, parameterized approach filter
//! - Overview statistics, threat ranking and scatter sample
//!
//! ## Example Usage
//!
//! ```no_run
//! use neo_analytics::application::queries::{FilterCriteria, FilterQueryBuilder, QueryCatalog};
//!
//! let catalog = QueryCatalog::new();
//! let sql = catalog.get_query("3. Top 10 Fastest Asteroids").unwrap();
//! assert!(sql.contains("LIMIT 10"));
//!
//! let query = FilterQueryBuilder::build(&FilterCriteria::default());
//! assert_eq!(query.placeholder_count(), query.params().len());
//! ```

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

// Re-export key types explicitly to avoid ambiguity
pub use api::errors as api_errors;
pub use application::builder::ApplicationBuilder;
pub use application::{dto, ports, queries, use_cases};
pub use config::Config;
pub use domain::errors as domain_errors;
pub use domain::{entities, value_objects};
