use std::str::FromStr;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use neo_analytics::application::dto::FilterRequest;
use neo_analytics::application::ports::NeoStore;
use neo_analytics::application::queries::{CatalogEntry, FilterCriteria, QueryCatalog};
use neo_analytics::application::use_cases::{FilterApproachesUseCase, RunCatalogQueryUseCase};
use neo_analytics::infrastructure::persistence::SqliteNeoStore;
use neo_analytics::value_objects::{HazardFilter, SortKey};

/// Run catalog queries and approach filters against a NEO database
#[derive(Parser)]
#[command(name = "neo-query", version)]
struct Cli {
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite://nasa_neo.db", global = true)]
    database_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List catalog entries in display order
    List,
    /// Print one entry with its SQL
    Show {
        /// Catalog name or slug
        query: String,
    },
    /// Execute one catalog query
    Run {
        /// Catalog name or slug
        query: String,
    },
    /// Filter close approaches
    Filter {
        #[arg(long, default_value_t = 0.0)]
        velocity_min: f64,
        #[arg(long, default_value_t = 0.0)]
        diameter_min: f64,
        #[arg(long, default_value_t = FilterCriteria::DEFAULT_LUNAR_MAX)]
        lunar_max: f64,
        /// all | hazardous | non-hazardous
        #[arg(long, default_value_t = HazardFilter::All)]
        hazard: HazardFilter,
        /// velocity | distance | diameter
        #[arg(long, default_value_t = SortKey::Velocity)]
        sort_by: SortKey,
        #[arg(long, default_value_t = FilterCriteria::DEFAULT_LIMIT)]
        limit: i64,
    },
}

fn resolve(catalog: &QueryCatalog, query: &str) -> anyhow::Result<&'static CatalogEntry> {
    let entry = catalog
        .get_entry(query)
        .or_else(|_| catalog.find_by_slug(query))?;
    Ok(entry)
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn open_store(database_url: &str) -> anyhow::Result<Arc<dyn NeoStore>> {
    let options = SqliteConnectOptions::from_str(database_url)
        .with_context(|| format!("invalid database url {}", database_url))?
        .read_only(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .context("failed to open database")?;
    Ok(Arc::new(SqliteNeoStore::new(pool)))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let catalog = QueryCatalog::new();

    match cli.command {
        Command::List => {
            let entries: Vec<_> = catalog.entries().collect();
            print_json(&entries)?;
        }
        Command::Show { query } => {
            print_json(resolve(&catalog, &query)?)?;
        }
        Command::Run { query } => {
            let entry = resolve(&catalog, &query)?;
            let store = open_store(&cli.database_url).await?;
            let response = RunCatalogQueryUseCase::new(store)
                .execute_by_slug(entry.slug)
                .await?;
            print_json(&response)?;
        }
        Command::Filter {
            velocity_min,
            diameter_min,
            lunar_max,
            hazard,
            sort_by,
            limit,
        } => {
            let request = FilterRequest {
                velocity_min,
                diameter_min,
                lunar_max,
                hazard_filter: hazard,
                sort_by,
                limit,
            };
            let store = open_store(&cli.database_url).await?;
            let response = FilterApproachesUseCase::new(store).execute(request).await?;
            print_json(&response)?;
        }
    }

    Ok(())
}
