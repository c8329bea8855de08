use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info};

use crate::application::dto::{CatalogEntryDto, QueryResultResponse};
use crate::application::errors::QueryUseCaseError;
use crate::application::ports::NeoStore;
use crate::application::queries::{CatalogEntry, QueryCatalog, ResultSet};

/// Use case: list, describe and execute catalog queries
pub struct RunCatalogQueryUseCase {
    store: Arc<dyn NeoStore>,
    catalog: QueryCatalog,
}

impl RunCatalogQueryUseCase {
    pub fn new(store: Arc<dyn NeoStore>) -> Self {
        Self {
            store,
            catalog: QueryCatalog::new(),
        }
    }

    /// All entries in declaration order, without SQL text
    pub fn list(&self) -> Vec<CatalogEntryDto> {
        self.catalog.entries().map(CatalogEntryDto::summary).collect()
    }

    /// One entry including its SQL text
    pub fn describe(&self, slug: &str) -> Result<CatalogEntryDto, QueryUseCaseError> {
        let entry = self.catalog.find_by_slug(slug)?;
        Ok(CatalogEntryDto::detailed(entry))
    }

    /// Execute the query registered under `name`
    #[tracing::instrument(skip(self))]
    pub async fn execute(&self, name: &str) -> Result<ResultSet, QueryUseCaseError> {
        let entry = self.catalog.get_entry(name)?;
        self.run(entry).await
    }

    /// Execute the query registered under `slug`
    #[tracing::instrument(skip(self))]
    pub async fn execute_by_slug(&self, slug: &str) -> Result<QueryResultResponse, QueryUseCaseError> {
        let entry = self.catalog.find_by_slug(slug)?;
        let result = self.run(entry).await?;

        Ok(QueryResultResponse {
            name: entry.name.to_string(),
            slug: entry.slug.to_string(),
            row_count: result.len(),
            result,
        })
    }

    async fn run(&self, entry: &CatalogEntry) -> Result<ResultSet, QueryUseCaseError> {
        let started = Instant::now();
        debug!(query = entry.name, "executing catalog query");

        let result = self.store.fetch_result_set(&entry.query()).await?;

        info!(
            query = entry.name,
            rows = result.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "catalog query completed"
        );
        Ok(result)
    }
}
