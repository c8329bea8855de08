use std::str::FromStr;

use anyhow::Context;
use clap::Parser;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::Row;

use neo_analytics::entities::CloseApproach;

/// Integrity report for a NEO dataset; never modifies the database
#[derive(Parser)]
struct Cli {
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite://nasa_neo.db")]
    database_url: String,

    /// Exit with status 1 when any issue is found
    #[arg(long)]
    strict: bool,

    /// Rows printed per check
    #[arg(long, default_value_t = 20)]
    show: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let options = SqliteConnectOptions::from_str(&cli.database_url)
        .with_context(|| format!("invalid database url {}", cli.database_url))?
        .read_only(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .context("failed to open database")?;

    let mut issues = 0usize;

    // Approaches whose asteroid is missing
    let orphaned = sqlx::query(
        r#"SELECT c.neo_reference_id, c.close_approach_date
           FROM close_approach c
           LEFT JOIN asteroids a ON a.id = c.neo_reference_id
           WHERE a.id IS NULL"#,
    )
    .fetch_all(&pool)
    .await?;

    println!("Orphaned approach rows: {}", orphaned.len());
    for r in orphaned.iter().take(cli.show) {
        let neo_id: i64 = r.try_get("neo_reference_id")?;
        let date: String = r.try_get("close_approach_date")?;
        println!("neo_reference_id: {}, date: {}", neo_id, date);
    }
    issues += orphaned.len();

    // Measurements that cannot be negative
    let negative_approaches = sqlx::query(
        r#"SELECT neo_reference_id, close_approach_date
           FROM close_approach
           WHERE relative_velocity_kmph < 0
              OR miss_distance_km < 0
              OR miss_distance_lunar < 0
              OR astronomical < 0"#,
    )
    .fetch_all(&pool)
    .await?;

    println!("Negative approach measurements: {}", negative_approaches.len());
    for r in negative_approaches.iter().take(cli.show) {
        let neo_id: i64 = r.try_get("neo_reference_id")?;
        let date: String = r.try_get("close_approach_date")?;
        println!("neo_reference_id: {}, date: {}", neo_id, date);
    }
    issues += negative_approaches.len();

    let negative_diameters = sqlx::query(
        r#"SELECT id, name FROM asteroids
           WHERE estimated_diameter_max_km < 0 OR estimated_diameter_min_km < 0"#,
    )
    .fetch_all(&pool)
    .await?;

    println!("Negative diameters: {}", negative_diameters.len());
    for r in negative_diameters.iter().take(cli.show) {
        let id: i64 = r.try_get("id")?;
        let name: String = r.try_get("name")?;
        println!("id: {}, name: {}", id, name);
    }
    issues += negative_diameters.len();

    // Hazard flag must be 0 or 1
    let bad_flags = sqlx::query(
        r#"SELECT id, name FROM asteroids
           WHERE is_potentially_hazardous_asteroid IS NULL
              OR is_potentially_hazardous_asteroid NOT IN (0, 1)"#,
    )
    .fetch_all(&pool)
    .await?;

    println!("Invalid hazard flags: {}", bad_flags.len());
    for r in bad_flags.iter().take(cli.show) {
        let id: i64 = r.try_get("id")?;
        let name: String = r.try_get("name")?;
        println!("id: {}, name: {}", id, name);
    }
    issues += bad_flags.len();

    // Dates the month/year queries cannot bucket
    let dates: Vec<String> =
        sqlx::query_scalar("SELECT DISTINCT close_approach_date FROM close_approach")
            .fetch_all(&pool)
            .await?;
    let bad_dates: Vec<&String> = dates
        .iter()
        .filter(|d| CloseApproach::parse_date(d).is_err())
        .collect();

    println!("Unparsable approach dates: {}", bad_dates.len());
    for d in bad_dates.iter().take(cli.show) {
        println!("date: {:?}", d);
    }
    issues += bad_dates.len();

    println!("Total issues: {}", issues);

    if cli.strict && issues > 0 {
        anyhow::bail!("{} integrity issue(s) found", issues);
    }

    Ok(())
}
