use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::info;

use crate::api::router::AppState;
use crate::application::{
    ports::NeoStore,
    use_cases::{
        ApproachSampleUseCase, FilterApproachesUseCase, OverviewStatsUseCase,
        RunCatalogQueryUseCase, TopThreatsUseCase,
    },
};
use crate::config::Config;
use crate::infrastructure::persistence::SqliteNeoStore;

/// Application builder for clean dependency injection and setup
pub struct ApplicationBuilder {
    config: Config,
    pool: Option<SqlitePool>,
    store: Option<Arc<dyn NeoStore>>,
}

impl ApplicationBuilder {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            pool: None,
            store: None,
        }
    }

    /// Open the SQLite pool with retry logic
    pub async fn with_database(mut self) -> Result<Self, Box<dyn std::error::Error>> {
        info!("Connecting to database: {}", self.config.database_url);

        let options = SqliteConnectOptions::from_str(&self.config.database_url)?
            .read_only(self.config.db_read_only)
            .create_if_missing(!self.config.db_read_only);

        let mut retries = 3;
        let mut delay = Duration::from_secs(1);
        let pool = loop {
            match SqlitePoolOptions::new()
                .max_connections(self.config.db_max_connections)
                .acquire_timeout(Duration::from_secs(self.config.db_acquire_timeout_secs))
                .connect_with(options.clone())
                .await
            {
                Ok(pool) => break pool,
                Err(e) if retries > 0 => {
                    retries -= 1;
                    tracing::warn!(
                        "Database connection failed, retrying in {:?} ({} retries left): {}",
                        delay,
                        retries,
                        e
                    );
                    tokio::time::sleep(delay).await;
                    delay *= 2;
                }
                Err(e) => {
                    tracing::error!("Failed to connect to database after retries: {}", e);
                    return Err(Box::new(e));
                }
            }
        };

        info!(
            "Database pool configured: max={}, acquire_timeout={}s, read_only={}",
            self.config.db_max_connections,
            self.config.db_acquire_timeout_secs,
            self.config.db_read_only
        );

        // A read-only handle cannot migrate; writable setups get the schema
        if !self.config.db_read_only {
            info!("Running database migrations");
            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to run migrations: {}", e);
                    e
                })?;
        }

        self.pool = Some(pool);
        Ok(self)
    }

    /// Use an already opened pool (tests, embedding)
    pub fn with_pool(mut self, pool: SqlitePool) -> Self {
        self.pool = Some(pool);
        self
    }

    /// Use a ready-made store instead of the SQLite adapter
    pub fn with_store(mut self, store: Arc<dyn NeoStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Build application state with all use cases
    pub fn build(self) -> Result<AppState, Box<dyn std::error::Error>> {
        let store: Arc<dyn NeoStore> = match self.store {
            Some(store) => store,
            None => {
                let pool = self.pool.ok_or("Database pool not initialized")?;
                Arc::new(SqliteNeoStore::new(pool))
            }
        };

        let catalog_use_case = Arc::new(RunCatalogQueryUseCase::new(Arc::clone(&store)));
        let filter_use_case = Arc::new(FilterApproachesUseCase::new(Arc::clone(&store)));
        let stats_use_case = Arc::new(OverviewStatsUseCase::new(Arc::clone(&store)));
        let threats_use_case = Arc::new(TopThreatsUseCase::new(Arc::clone(&store)));
        let sample_use_case = Arc::new(ApproachSampleUseCase::new(Arc::clone(&store)));

        info!("Application layer initialized");

        Ok(AppState {
            store,
            catalog_use_case,
            filter_use_case,
            stats_use_case,
            threats_use_case,
            sample_use_case,
            config: self.config,
        })
    }

    /// Get configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_without_pool_fails() {
        let result = ApplicationBuilder::new(Config::default()).build();
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_writable_database_is_migrated() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            database_url: format!("sqlite://{}", dir.path().join("neo.db").display()),
            db_read_only: false,
            ..Default::default()
        };

        let builder = ApplicationBuilder::new(config).with_database().await.unwrap();
        let state = builder.build().unwrap();

        let stats = state.stats_use_case.execute().await.unwrap();
        assert_eq!(stats.total_asteroids, 0);
        assert_eq!(stats.hazard_rate_percent, 0.0);
    }

    #[tokio::test]
    async fn test_read_only_database_rejects_writes() {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}", dir.path().join("neo.db").display());

        let writable = Config {
            database_url: url.clone(),
            db_read_only: false,
            ..Default::default()
        };
        ApplicationBuilder::new(writable).with_database().await.unwrap();

        let read_only = Config {
            database_url: url,
            ..Default::default()
        };
        let builder = ApplicationBuilder::new(read_only).with_database().await.unwrap();
        let pool = builder.pool.clone().unwrap();

        let insert = sqlx::query(
            "INSERT INTO asteroids (id, name, estimated_diameter_max_km, absolute_magnitude_h, \
             is_potentially_hazardous_asteroid) VALUES (1, 'x', 0.1, 20.0, 0)",
        )
        .execute(&pool)
        .await;
        assert!(insert.is_err());
    }
}
