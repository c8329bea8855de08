//! Fixed catalog of parameterless analytical queries.
//!
//! Entries are declared once, in display order: the fifteen numbered
//! queries first, then the bonus analyses. Names and SQL text never change
//! at runtime.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;
use thiserror::Error;

use super::sql::SqlQuery;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Query not found: {0}")]
    NotFound(String),
}

/// One registered analytical query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    /// Human-readable label, e.g. "3. Top 10 Fastest Asteroids"
    pub name: &'static str,
    /// URL-safe identifier
    pub slug: &'static str,
    pub description: &'static str,
    pub sql: &'static str,
}

impl CatalogEntry {
    pub fn query(&self) -> SqlQuery {
        SqlQuery::fixed(self.sql)
    }
}

const APPROACH_COUNT_PER_ASTEROID: &str = r#"
SELECT
    a.id AS asteroid_id,
    a.name,
    COUNT(*) AS approach_count
FROM asteroids a
JOIN close_approach c ON a.id = c.neo_reference_id
GROUP BY a.id, a.name
ORDER BY approach_count DESC, a.name ASC
LIMIT 50
"#;

const AVERAGE_VELOCITY_PER_ASTEROID: &str = r#"
SELECT
    a.id AS asteroid_id,
    a.name,
    ROUND(AVG(c.relative_velocity_kmph), 2) AS avg_velocity
FROM asteroids a
JOIN close_approach c ON a.id = c.neo_reference_id
GROUP BY a.id, a.name
ORDER BY avg_velocity DESC, a.name ASC
LIMIT 50
"#;

const TOP_FASTEST_ASTEROIDS: &str = r#"
SELECT
    a.id AS asteroid_id,
    a.name,
    MAX(c.relative_velocity_kmph) AS max_velocity
FROM asteroids a
JOIN close_approach c ON a.id = c.neo_reference_id
GROUP BY a.id, a.name
ORDER BY max_velocity DESC, a.name ASC
LIMIT 10
"#;

const HAZARDOUS_FREQUENT_VISITORS: &str = r#"
SELECT
    a.id AS asteroid_id,
    a.name,
    a.is_potentially_hazardous_asteroid AS hazardous,
    COUNT(*) AS approach_count
FROM asteroids a
JOIN close_approach c ON a.id = c.neo_reference_id
WHERE a.is_potentially_hazardous_asteroid = 1
GROUP BY a.id, a.name
HAVING COUNT(*) > 3
ORDER BY approach_count DESC, a.name ASC
"#;

const BUSIEST_MONTHS: &str = r#"
SELECT
    strftime('%Y-%m', close_approach_date) AS month,
    COUNT(*) AS approach_count
FROM close_approach
GROUP BY strftime('%Y-%m', close_approach_date)
ORDER BY approach_count DESC, month ASC
"#;

const FASTEST_EVER_APPROACH: &str = r#"
SELECT
    a.name,
    c.close_approach_date,
    c.relative_velocity_kmph AS velocity
FROM asteroids a
JOIN close_approach c ON a.id = c.neo_reference_id
ORDER BY c.relative_velocity_kmph DESC
LIMIT 1
"#;

const LARGEST_ASTEROIDS: &str = r#"
SELECT
    id AS asteroid_id,
    name,
    estimated_diameter_max_km AS max_diameter,
    is_potentially_hazardous_asteroid AS hazardous
FROM asteroids
ORDER BY estimated_diameter_max_km DESC, name ASC
LIMIT 50
"#;

const REPEAT_VISITOR_APPROACHES: &str = r#"
SELECT
    a.name,
    c.close_approach_date,
    c.miss_distance_km
FROM asteroids a
JOIN close_approach c ON a.id = c.neo_reference_id
WHERE a.id IN (
    SELECT neo_reference_id
    FROM close_approach
    GROUP BY neo_reference_id
    HAVING COUNT(*) > 1
)
ORDER BY a.name, c.close_approach_date
LIMIT 100
"#;

// The date reported is the one of the row achieving the minimum distance;
// equal distances resolve to the earliest date.
const CLOSEST_APPROACH_PER_ASTEROID: &str = r#"
WITH ranked AS (
    SELECT
        neo_reference_id,
        close_approach_date,
        miss_distance_km,
        ROW_NUMBER() OVER (
            PARTITION BY neo_reference_id
            ORDER BY miss_distance_km ASC, close_approach_date ASC
        ) AS position
    FROM close_approach
)
SELECT
    a.id AS asteroid_id,
    a.name,
    r.close_approach_date,
    r.miss_distance_km AS closest_distance
FROM asteroids a
JOIN ranked r ON a.id = r.neo_reference_id
WHERE r.position = 1
ORDER BY closest_distance ASC, a.name ASC
LIMIT 50
"#;

const HIGH_VELOCITY_APPROACHES: &str = r#"
SELECT
    a.name,
    c.relative_velocity_kmph AS velocity,
    c.close_approach_date
FROM asteroids a
JOIN close_approach c ON a.id = c.neo_reference_id
WHERE c.relative_velocity_kmph > 50000
ORDER BY c.relative_velocity_kmph DESC
LIMIT 100
"#;

const MONTHLY_APPROACH_COUNT: &str = r#"
SELECT
    strftime('%Y-%m', close_approach_date) AS month,
    COUNT(*) AS count
FROM close_approach
GROUP BY strftime('%Y-%m', close_approach_date)
ORDER BY month ASC
"#;

const BRIGHTEST_ASTEROIDS: &str = r#"
SELECT
    id AS asteroid_id,
    name,
    absolute_magnitude_h AS magnitude,
    estimated_diameter_max_km AS size
FROM asteroids
ORDER BY absolute_magnitude_h ASC, name ASC
LIMIT 10
"#;

// Both buckets are always present, even when one of them is empty.
const HAZARD_SPLIT: &str = r#"
SELECT category, count
FROM (
    SELECT 'Hazardous' AS category, COUNT(*) AS count
    FROM asteroids
    WHERE is_potentially_hazardous_asteroid = 1
    UNION ALL
    SELECT 'Non-Hazardous' AS category, COUNT(*) AS count
    FROM asteroids
    WHERE is_potentially_hazardous_asteroid IS NOT 1
)
ORDER BY category ASC
"#;

const INSIDE_LUNAR_ORBIT: &str = r#"
SELECT
    a.name,
    c.close_approach_date,
    c.miss_distance_lunar AS lunar_distance
FROM asteroids a
JOIN close_approach c ON a.id = c.neo_reference_id
WHERE c.miss_distance_lunar < 1
ORDER BY c.miss_distance_lunar ASC
LIMIT 50
"#;

const WITHIN_FIVE_HUNDREDTHS_AU: &str = r#"
SELECT
    a.name,
    c.close_approach_date,
    c.astronomical AS au_distance
FROM asteroids a
JOIN close_approach c ON a.id = c.neo_reference_id
WHERE c.astronomical < 0.05
ORDER BY c.astronomical ASC
LIMIT 50
"#;

const YEARLY_TRENDS: &str = r#"
SELECT
    strftime('%Y', close_approach_date) AS year,
    COUNT(*) AS total_approaches
FROM close_approach
GROUP BY strftime('%Y', close_approach_date)
ORDER BY year ASC
"#;

const AVERAGE_DISTANCE_BY_MONTH: &str = r#"
SELECT
    CAST(strftime('%m', close_approach_date) AS INTEGER) AS month_num,
    CASE strftime('%m', close_approach_date)
        WHEN '01' THEN 'January' WHEN '02' THEN 'February'
        WHEN '03' THEN 'March' WHEN '04' THEN 'April'
        WHEN '05' THEN 'May' WHEN '06' THEN 'June'
        WHEN '07' THEN 'July' WHEN '08' THEN 'August'
        WHEN '09' THEN 'September' WHEN '10' THEN 'October'
        WHEN '11' THEN 'November' WHEN '12' THEN 'December'
    END AS month_name,
    ROUND(AVG(miss_distance_lunar), 2) AS avg_distance_ld
FROM close_approach
GROUP BY strftime('%m', close_approach_date)
ORDER BY month_num ASC
"#;

const MULTIPLE_CLOSE_CALLS: &str = r#"
SELECT
    a.id AS asteroid_id,
    a.name,
    COUNT(*) AS close_calls,
    MIN(c.miss_distance_lunar) AS closest_ld,
    MAX(c.relative_velocity_kmph) AS max_velocity
FROM asteroids a
JOIN close_approach c ON a.id = c.neo_reference_id
WHERE c.miss_distance_lunar < 5
GROUP BY a.id, a.name
HAVING COUNT(*) > 1
ORDER BY close_calls DESC, a.name ASC
LIMIT 20
"#;

const RISK_SCORE_ANALYSIS: &str = r#"
SELECT
    a.name,
    ROUND(
        a.estimated_diameter_max_km * c.relative_velocity_kmph /
        CASE WHEN c.miss_distance_lunar > 0 THEN c.miss_distance_lunar ELSE 1 END,
        2
    ) AS risk_score,
    c.close_approach_date
FROM asteroids a
JOIN close_approach c ON a.id = c.neo_reference_id
WHERE a.is_potentially_hazardous_asteroid = 1
ORDER BY risk_score DESC
LIMIT 20
"#;

const SIZE_CATEGORIES: &str = r#"
SELECT
    CASE
        WHEN estimated_diameter_max_km < 0.1 THEN 'Tiny'
        WHEN estimated_diameter_max_km < 0.5 THEN 'Small'
        WHEN estimated_diameter_max_km < 1.0 THEN 'Medium'
        ELSE 'Large'
    END AS size_category,
    COUNT(*) AS count
FROM asteroids
GROUP BY size_category
ORDER BY count DESC, size_category ASC
"#;

static ENTRIES: [CatalogEntry; 20] = [
    CatalogEntry {
        name: "1. Approach Count Per Asteroid",
        slug: "approach-count-per-asteroid",
        description: "Number of recorded approaches per asteroid, top 50",
        sql: APPROACH_COUNT_PER_ASTEROID,
    },
    CatalogEntry {
        name: "2. Average Velocity Per Asteroid",
        slug: "average-velocity-per-asteroid",
        description: "Mean relative velocity (km/h) per asteroid, top 50",
        sql: AVERAGE_VELOCITY_PER_ASTEROID,
    },
    CatalogEntry {
        name: "3. Top 10 Fastest Asteroids",
        slug: "top-10-fastest-asteroids",
        description: "Highest recorded velocity per asteroid, top 10",
        sql: TOP_FASTEST_ASTEROIDS,
    },
    CatalogEntry {
        name: "4. Hazardous with >3 Approaches",
        slug: "hazardous-with-more-than-3-approaches",
        description: "Potentially hazardous asteroids seen more than three times",
        sql: HAZARDOUS_FREQUENT_VISITORS,
    },
    CatalogEntry {
        name: "5. Month with Most Approaches",
        slug: "month-with-most-approaches",
        description: "Approach counts per calendar month, busiest first",
        sql: BUSIEST_MONTHS,
    },
    CatalogEntry {
        name: "6. Fastest Ever Approach",
        slug: "fastest-ever-approach",
        description: "The single fastest recorded approach",
        sql: FASTEST_EVER_APPROACH,
    },
    CatalogEntry {
        name: "7. Sorted by Max Diameter",
        slug: "sorted-by-max-diameter",
        description: "Largest asteroids by estimated maximum diameter, top 50",
        sql: LARGEST_ASTEROIDS,
    },
    CatalogEntry {
        name: "8. Approaches Getting Closer",
        slug: "approaches-getting-closer",
        description: "Approach history of asteroids with more than one approach",
        sql: REPEAT_VISITOR_APPROACHES,
    },
    CatalogEntry {
        name: "9. Closest Approach Per Asteroid",
        slug: "closest-approach-per-asteroid",
        description: "Minimum miss distance (km) per asteroid and its date, top 50",
        sql: CLOSEST_APPROACH_PER_ASTEROID,
    },
    CatalogEntry {
        name: "10. High Velocity (>50k km/h)",
        slug: "high-velocity-approaches",
        description: "Approaches faster than 50,000 km/h, top 100",
        sql: HIGH_VELOCITY_APPROACHES,
    },
    CatalogEntry {
        name: "11. Monthly Approach Count",
        slug: "monthly-approach-count",
        description: "Approach counts per calendar month, chronological",
        sql: MONTHLY_APPROACH_COUNT,
    },
    CatalogEntry {
        name: "12. Highest Brightness",
        slug: "highest-brightness",
        description: "Brightest asteroids (lowest absolute magnitude), top 10",
        sql: BRIGHTEST_ASTEROIDS,
    },
    CatalogEntry {
        name: "13. Hazardous vs Non-Hazardous",
        slug: "hazardous-vs-non-hazardous",
        description: "Asteroid counts split by hazard classification",
        sql: HAZARD_SPLIT,
    },
    CatalogEntry {
        name: "14. Closer Than Moon (<1 LD)",
        slug: "closer-than-moon",
        description: "Approaches inside one lunar distance, closest first",
        sql: INSIDE_LUNAR_ORBIT,
    },
    CatalogEntry {
        name: "15. Within 0.05 AU",
        slug: "within-0-05-au",
        description: "Approaches within 0.05 astronomical units, closest first",
        sql: WITHIN_FIVE_HUNDREDTHS_AU,
    },
    CatalogEntry {
        name: "BONUS: Year-over-Year Trends",
        slug: "year-over-year-trends",
        description: "Total approaches per calendar year",
        sql: YEARLY_TRENDS,
    },
    CatalogEntry {
        name: "BONUS: Avg Distance by Month",
        slug: "avg-distance-by-month",
        description: "Average lunar miss distance per month of the year",
        sql: AVERAGE_DISTANCE_BY_MONTH,
    },
    CatalogEntry {
        name: "BONUS: Multiple Close Calls",
        slug: "multiple-close-calls",
        description: "Asteroids with several approaches inside 5 lunar distances",
        sql: MULTIPLE_CLOSE_CALLS,
    },
    CatalogEntry {
        name: "BONUS: Risk Score Analysis",
        slug: "risk-score-analysis",
        description: "Hazardous approaches ranked by diameter x velocity / distance",
        sql: RISK_SCORE_ANALYSIS,
    },
    CatalogEntry {
        name: "BONUS: Size Categories",
        slug: "size-categories",
        description: "Asteroid counts per diameter bucket",
        sql: SIZE_CATEGORIES,
    },
];

static BY_NAME: Lazy<HashMap<&'static str, &'static CatalogEntry>> =
    Lazy::new(|| ENTRIES.iter().map(|e| (e.name, e)).collect());

static BY_SLUG: Lazy<HashMap<&'static str, &'static CatalogEntry>> =
    Lazy::new(|| ENTRIES.iter().map(|e| (e.slug, e)).collect());

/// Read-only access to the registered queries
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryCatalog;

impl QueryCatalog {
    pub fn new() -> Self {
        Self
    }

    /// Registered names in declaration order. The iterator is lazy and can be
    /// cloned to restart from the beginning.
    pub fn list_query_names(&self) -> impl Iterator<Item = &'static str> + Clone {
        ENTRIES.iter().map(|e| e.name)
    }

    pub fn entries(&self) -> impl Iterator<Item = &'static CatalogEntry> + Clone {
        ENTRIES.iter()
    }

    pub fn len(&self) -> usize {
        ENTRIES.len()
    }

    pub fn is_empty(&self) -> bool {
        ENTRIES.is_empty()
    }

    /// Exact SQL text registered under `name`
    pub fn get_query(&self, name: &str) -> Result<&'static str, CatalogError> {
        self.get_entry(name).map(|e| e.sql)
    }

    pub fn get_entry(&self, name: &str) -> Result<&'static CatalogEntry, CatalogError> {
        BY_NAME
            .get(name)
            .copied()
            .ok_or_else(|| CatalogError::NotFound(name.to_string()))
    }

    pub fn find_by_slug(&self, slug: &str) -> Result<&'static CatalogEntry, CatalogError> {
        BY_SLUG
            .get(slug)
            .copied()
            .ok_or_else(|| CatalogError::NotFound(slug.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_in_declaration_order() {
        let catalog = QueryCatalog::new();
        let names: Vec<_> = catalog.list_query_names().collect();

        assert_eq!(names.len(), 20);
        for (i, name) in names.iter().take(15).enumerate() {
            assert!(
                name.starts_with(&format!("{}. ", i + 1)),
                "entry {} is out of order: {}",
                i,
                name
            );
        }
        assert!(names[15..].iter().all(|n| n.starts_with("BONUS: ")));
        assert_eq!(names[15], "BONUS: Year-over-Year Trends");
        assert_eq!(names[19], "BONUS: Size Categories");
    }

    #[test]
    fn test_listing_is_restartable_and_stable() {
        let catalog = QueryCatalog::new();
        let names = catalog.list_query_names();
        let first: Vec<_> = names.clone().collect();
        let second: Vec<_> = names.collect();
        let third: Vec<_> = catalog.list_query_names().collect();

        assert_eq!(first, second);
        assert_eq!(first, third);
    }

    #[test]
    fn test_get_query_returns_registered_text() {
        let catalog = QueryCatalog::new();
        let sql = catalog.get_query("3. Top 10 Fastest Asteroids").unwrap();
        assert_eq!(sql, TOP_FASTEST_ASTEROIDS);
        assert!(sql.contains("MAX(c.relative_velocity_kmph)"));
        assert!(sql.contains("LIMIT 10"));
    }

    #[test]
    fn test_unknown_name_is_not_found() {
        let catalog = QueryCatalog::new();
        assert_eq!(
            catalog.get_query("16. Does Not Exist"),
            Err(CatalogError::NotFound("16. Does Not Exist".to_string()))
        );
        // Lookup is exact, not fuzzy
        assert!(catalog.get_query("3. top 10 fastest asteroids").is_err());
    }

    #[test]
    fn test_names_and_slugs_are_unique() {
        let catalog = QueryCatalog::new();
        let names: HashSet<_> = catalog.entries().map(|e| e.name).collect();
        let slugs: HashSet<_> = catalog.entries().map(|e| e.slug).collect();
        assert_eq!(names.len(), catalog.len());
        assert_eq!(slugs.len(), catalog.len());
        assert!(slugs
            .iter()
            .all(|s| s.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')));
    }

    #[test]
    fn test_slug_resolves_to_same_entry() {
        let catalog = QueryCatalog::new();
        for entry in catalog.entries() {
            assert_eq!(catalog.find_by_slug(entry.slug).unwrap(), entry);
            assert_eq!(catalog.get_entry(entry.name).unwrap(), entry);
        }
        assert!(matches!(
            catalog.find_by_slug("nope"),
            Err(CatalogError::NotFound(_))
        ));
    }

    #[test]
    fn test_catalog_queries_take_no_parameters() {
        let catalog = QueryCatalog::new();
        for entry in catalog.entries() {
            let query = entry.query();
            assert!(query.params().is_empty());
            assert_eq!(query.placeholder_count(), 0, "{} has placeholders", entry.name);
        }
    }

    #[test]
    fn test_risk_score_guards_zero_distance() {
        let sql = QueryCatalog::new()
            .get_query("BONUS: Risk Score Analysis")
            .unwrap();
        assert!(sql.contains("CASE WHEN c.miss_distance_lunar > 0 THEN c.miss_distance_lunar ELSE 1 END"));
        assert!(sql.contains("is_potentially_hazardous_asteroid = 1"));
    }
}
