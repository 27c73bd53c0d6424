//! Configuration module for the Pulse backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::workflow;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Pre-shared key for admin endpoints (required in production)
    pub admin_psk: Option<String>,
    /// Path to SQLite database file
    pub db_path: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Vote threshold applied when approval omits an explicit one
    pub default_vote_threshold: i64,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let admin_psk = env::var("PULSE_ADMIN_PSK").ok();

        let db_path = env::var("PULSE_DB_PATH")
            .unwrap_or_else(|_| "./data/pulse.sqlite".to_string())
            .into();

        let bind_addr = env::var("PULSE_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()
            .expect("Invalid PULSE_BIND_ADDR format");

        let log_level = env::var("PULSE_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let default_vote_threshold = env::var("PULSE_DEFAULT_VOTE_THRESHOLD")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|&t| workflow::threshold_in_range(t))
            .unwrap_or(workflow::FALLBACK_VOTE_THRESHOLD);

        Self {
            admin_psk,
            db_path,
            bind_addr,
            log_level,
            default_vote_threshold,
        }
    }
}
