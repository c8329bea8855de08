//! Query construction: the fixed analytical catalog, the ad-hoc filter
//! builder, and the store-neutral query/result types they share.

mod catalog;
mod filter;
mod result_set;
mod sql;

pub use catalog::{CatalogEntry, CatalogError, QueryCatalog};
pub use filter::{FilterCriteria, FilterQueryBuilder};
pub use result_set::{CellValue, ResultSet};
pub use sql::{SqlParam, SqlQuery};
