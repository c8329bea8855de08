use std::time::Instant;

use async_trait::async_trait;
use sqlx::query::Query;
use sqlx::sqlite::{SqliteArguments, SqliteRow};
use sqlx::{Column, Executor, FromRow, Row, Sqlite, SqlitePool, Statement, TypeInfo, ValueRef};
use tracing::debug;

use crate::application::dto::{ApproachMatch, ApproachSample};
use crate::application::ports::{NeoStore, OverviewCounts, StoreError};
use crate::application::queries::{CellValue, ResultSet, SqlParam, SqlQuery};
use crate::domain::entities::{Asteroid, CloseApproach};

/// `NeoStore` over the `asteroids` / `close_approach` SQLite tables
pub struct SqliteNeoStore {
    pool: SqlitePool,
}

impl SqliteNeoStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Attach every parameter of `query` in placeholder order
fn bind_params(query: &SqlQuery) -> Query<'_, Sqlite, SqliteArguments<'_>> {
    query
        .params()
        .iter()
        .fold(sqlx::query(query.sql()), |q, param| match *param {
            SqlParam::Integer(value) => q.bind(value),
            SqlParam::Real(value) => q.bind(value),
        })
}

/// Decode one cell by the storage class of the value actually present
fn decode_cell(row: &SqliteRow, index: usize) -> Result<CellValue, StoreError> {
    let raw = row.try_get_raw(index)?;
    if raw.is_null() {
        return Ok(CellValue::Null);
    }
    let type_name = raw.type_info().name().to_ascii_uppercase();

    let cell = match type_name.as_str() {
        "INTEGER" | "INT8" | "BOOLEAN" => CellValue::Integer(row.try_get_unchecked::<i64, _>(index)?),
        "REAL" | "NUMERIC" => CellValue::Real(row.try_get_unchecked::<f64, _>(index)?),
        "TEXT" | "DATE" | "TIME" | "DATETIME" => {
            CellValue::Text(row.try_get_unchecked::<String, _>(index)?)
        }
        other => {
            return Err(StoreError::Decode(format!(
                "unsupported column type {} at index {}",
                other, index
            )))
        }
    };
    Ok(cell)
}

fn parse_date(value: &str) -> Result<chrono::NaiveDate, StoreError> {
    CloseApproach::parse_date(value).map_err(|e| StoreError::Decode(e.to_string()))
}

#[derive(sqlx::FromRow)]
struct MatchRow {
    name: String,
    date: String,
    velocity: f64,
    distance_ld: f64,
    diameter: f64,
    hazardous: String,
}

impl MatchRow {
    fn into_dto(self) -> Result<ApproachMatch, StoreError> {
        Ok(ApproachMatch {
            date: parse_date(&self.date)?,
            name: self.name,
            velocity: self.velocity,
            distance_ld: self.distance_ld,
            diameter: self.diameter,
            hazardous: self.hazardous,
        })
    }
}

#[derive(sqlx::FromRow)]
struct AsteroidRow {
    id: i64,
    name: String,
    estimated_diameter_max_km: f64,
    absolute_magnitude_h: f64,
    is_potentially_hazardous_asteroid: i64,
}

impl AsteroidRow {
    fn into_domain(self) -> Asteroid {
        Asteroid::reconstruct(
            self.id,
            self.name,
            self.estimated_diameter_max_km,
            self.absolute_magnitude_h,
            self.is_potentially_hazardous_asteroid == 1,
        )
    }
}

#[derive(sqlx::FromRow)]
struct ThreatRow {
    id: i64,
    name: String,
    estimated_diameter_max_km: f64,
    absolute_magnitude_h: f64,
    is_potentially_hazardous_asteroid: i64,
    close_approach_date: String,
    relative_velocity_kmph: f64,
    miss_distance_km: f64,
    miss_distance_lunar: f64,
    astronomical: f64,
}

impl ThreatRow {
    fn into_domain(self) -> Result<(Asteroid, CloseApproach), StoreError> {
        let approach = CloseApproach::reconstruct(
            self.id,
            parse_date(&self.close_approach_date)?,
            self.relative_velocity_kmph,
            self.miss_distance_km,
            self.miss_distance_lunar,
            self.astronomical,
        );
        let asteroid = Asteroid::reconstruct(
            self.id,
            self.name,
            self.estimated_diameter_max_km,
            self.absolute_magnitude_h,
            self.is_potentially_hazardous_asteroid == 1,
        );
        Ok((asteroid, approach))
    }
}

#[derive(sqlx::FromRow)]
struct SampleRow {
    name: String,
    velocity: f64,
    distance_ld: f64,
    diameter: f64,
    hazardous: i64,
}

#[async_trait]
impl NeoStore for SqliteNeoStore {
    async fn fetch_result_set(&self, query: &SqlQuery) -> Result<ResultSet, StoreError> {
        let started = Instant::now();
        let rows = bind_params(query).fetch_all(&self.pool).await?;

        let columns: Vec<String> = match rows.first() {
            Some(row) => row.columns().iter().map(|c| c.name().to_string()).collect(),
            // No row to read names from; ask the prepared statement instead
            None => (&self.pool)
                .prepare(query.sql())
                .await?
                .columns()
                .iter()
                .map(|c| c.name().to_string())
                .collect(),
        };

        let mut decoded = Vec::with_capacity(rows.len());
        for row in &rows {
            let cells = (0..columns.len())
                .map(|index| decode_cell(row, index))
                .collect::<Result<Vec<_>, _>>()?;
            decoded.push(cells);
        }

        debug!(
            rows = decoded.len(),
            columns = columns.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "result set fetched"
        );

        Ok(ResultSet::new(columns, decoded))
    }

    async fn fetch_matches(&self, query: &SqlQuery) -> Result<Vec<ApproachMatch>, StoreError> {
        let rows = bind_params(query).fetch_all(&self.pool).await?;

        rows.iter()
            .map(|row| MatchRow::from_row(row)?.into_dto())
            .collect()
    }

    async fn overview_counts(&self) -> Result<OverviewCounts, StoreError> {
        let total_asteroids: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM asteroids")
            .fetch_one(&self.pool)
            .await?;

        let total_approaches: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM close_approach")
            .fetch_one(&self.pool)
            .await?;

        let hazardous_asteroids: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM asteroids WHERE is_potentially_hazardous_asteroid = 1",
        )
        .fetch_one(&self.pool)
        .await?;

        let largest = sqlx::query_as::<_, AsteroidRow>(
            r#"
            SELECT id, name, estimated_diameter_max_km, absolute_magnitude_h,
                   is_potentially_hazardous_asteroid
            FROM asteroids
            WHERE is_potentially_hazardous_asteroid = 1
            ORDER BY estimated_diameter_max_km DESC, name ASC
            LIMIT 1
            "#,
        )
        .fetch_optional(&self.pool)
        .await?;

        Ok(OverviewCounts {
            total_asteroids,
            total_approaches,
            hazardous_asteroids,
            largest_hazardous: largest.map(AsteroidRow::into_domain),
        })
    }

    async fn hazardous_approaches_by_threat(
        &self,
        limit: i64,
    ) -> Result<Vec<(Asteroid, CloseApproach)>, StoreError> {
        let rows = sqlx::query_as::<_, ThreatRow>(
            r#"
            SELECT a.id, a.name, a.estimated_diameter_max_km, a.absolute_magnitude_h,
                   a.is_potentially_hazardous_asteroid,
                   c.close_approach_date, c.relative_velocity_kmph, c.miss_distance_km,
                   c.miss_distance_lunar, c.astronomical
            FROM asteroids a
            JOIN close_approach c ON a.id = c.neo_reference_id
            WHERE a.is_potentially_hazardous_asteroid = 1
            ORDER BY a.estimated_diameter_max_km * c.relative_velocity_kmph
                     / CASE WHEN c.miss_distance_lunar > 0 THEN c.miss_distance_lunar ELSE 1 END DESC,
                     a.name ASC,
                     c.close_approach_date ASC
            LIMIT ?
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(ThreatRow::into_domain).collect()
    }

    async fn approach_sample(&self, limit: i64) -> Result<Vec<ApproachSample>, StoreError> {
        let rows = sqlx::query_as::<_, SampleRow>(
            r#"
            SELECT a.name,
                   c.relative_velocity_kmph AS velocity,
                   c.miss_distance_lunar AS distance_ld,
                   a.estimated_diameter_max_km AS diameter,
                   a.is_potentially_hazardous_asteroid AS hazardous
            FROM asteroids a
            JOIN close_approach c ON a.id = c.neo_reference_id
            ORDER BY c.close_approach_date ASC, a.name ASC
            LIMIT ?
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| ApproachSample {
                name: r.name,
                velocity: r.velocity,
                distance_ld: r.distance_ld,
                diameter: r.diameter,
                hazardous: r.hazardous == 1,
            })
            .collect())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
