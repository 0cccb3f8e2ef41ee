use std::{net::SocketAddr, time::Duration};

use axum::http::HeaderValue;
use env_helpers::{get_env, get_env_default};

pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub database_url: String,
    /// Browser origins allowed to call the API (comma-separated `CORS_ORIGINS`).
    pub cors_origins: Vec<HeaderValue>,
    pub db_max_connections: u32,
    pub db_acquire_timeout: Duration,
    /// Upper bound for a single store call made while serving a request.
    pub store_timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let bind_addr: SocketAddr =
            get_env_default("BIND_ADDR", SocketAddr::from(([0, 0, 0, 0], 5000)));
        let database_url: String = get_env("DATABASE_URL");
        let cors_origins = parse_origins(&get_env_default(
            "CORS_ORIGINS",
            String::from("http://localhost:3000"),
        ));
        let db_max_connections: u32 = get_env_default("DB_MAX_CONNECTIONS", 5);
        let db_acquire_timeout_secs: u64 = get_env_default("DB_ACQUIRE_TIMEOUT_SECS", 5);
        let store_timeout_ms: u64 = get_env_default("STORE_TIMEOUT_MS", 5_000);

        Self {
            bind_addr,
            database_url,
            cors_origins,
            db_max_connections,
            db_acquire_timeout: Duration::from_secs(db_acquire_timeout_secs),
            store_timeout: Duration::from_millis(store_timeout_ms),
        }
    }
}

/// Splits a comma-separated origin list. Blank items and values that are not
/// valid header values are dropped with a warning.
pub fn parse_origins(raw: &str) -> Vec<HeaderValue> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter_map(|s| match HeaderValue::from_str(s) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = s, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect()
}
