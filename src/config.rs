#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    // Database connection pool settings
    pub db_max_connections: u32,
    pub db_acquire_timeout_secs: u64,
    /// Open the database with `mode=ro`; the service never writes
    pub db_read_only: bool,
    /// Allowed CORS origin; any origin when unset
    pub cors_allow_origin: Option<String>,
    /// Emit JSON log lines instead of the human format
    pub log_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite://nasa_neo.db".to_string(),
            listen_addr: "0.0.0.0:8080".to_string(),
            db_max_connections: 5,
            db_acquire_timeout_secs: 30,
            db_read_only: true,
            cors_allow_origin: None,
            log_json: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            database_url: std::env::var("DATABASE_URL").unwrap_or(defaults.database_url),
            listen_addr: std::env::var("LISTEN_ADDR").unwrap_or(defaults.listen_addr),
            db_max_connections: std::env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.db_max_connections),
            db_acquire_timeout_secs: std::env::var("DB_ACQUIRE_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.db_acquire_timeout_secs),
            db_read_only: std::env::var("DB_READ_ONLY")
                .ok()
                .and_then(|s| parse_flag("DB_READ_ONLY", &s))
                .unwrap_or(defaults.db_read_only),
            cors_allow_origin: std::env::var("CORS_ALLOW_ORIGIN")
                .ok()
                .filter(|s| !s.trim().is_empty()),
            log_json: std::env::var("LOG_FORMAT")
                .map(|s| s.eq_ignore_ascii_case("json"))
                .unwrap_or(defaults.log_json),
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if !self.database_url.starts_with("sqlite:") {
            return Err("DATABASE_URL must start with sqlite:".to_string());
        }

        if self.listen_addr.is_empty() {
            return Err("LISTEN_ADDR cannot be empty".to_string());
        }

        if self.db_max_connections < 1 || self.db_max_connections > 100 {
            return Err("DB_MAX_CONNECTIONS must be between 1 and 100".to_string());
        }

        if self.db_acquire_timeout_secs == 0 {
            return Err("DB_ACQUIRE_TIMEOUT_SECS must be at least 1 second".to_string());
        }

        Ok(())
    }
}

/// Accept the usual boolean spellings; anything else is logged and ignored
fn parse_flag(name: &str, value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => {
            tracing::warn!("Ignoring unrecognized {} value {:?}, using default", name, value);
            None
        }
    }
}
