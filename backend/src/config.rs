//! Process configuration, read once from the environment at startup.
//!
//! Every value has a default; a missing variable is logged at `info`, a value
//! that does not parse is logged at `warn` and replaced by the default.

use crate::rate_limit::RateLimitConfig;
use log::{info, warn};
use std::{env, fmt::Display, path::PathBuf, str::FromStr, time::Duration};

pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_path: PathBuf,
    pub public_dir: PathBuf,
    pub rate_limit: RateLimitConfig,
}

impl Config {
    pub fn load() -> Self {
        Self {
            host: try_load("HOST", "0.0.0.0".to_string()),
            port: try_load("PORT", 3000),
            database_path: PathBuf::from(try_load("LEADS_DB_PATH", "db/bondback.db".to_string())),
            public_dir: PathBuf::from(try_load("PUBLIC_DIR", "public".to_string())),
            rate_limit: RateLimitConfig {
                window: Duration::from_secs(try_load("RATE_LIMIT_WINDOW_SECS", 900)),
                max_submissions: try_load("RATE_LIMIT_MAX", 10),
                sweep_interval: Duration::from_secs(try_load("RATE_LIMIT_SWEEP_SECS", 1800)),
            },
        }
    }
}

fn try_load<T>(key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|e| {
            warn!("Invalid {key} value {raw:?}: {e}, using default: {default}");
            default
        }),
        Err(_) => {
            info!("{key} not set, using default: {default}");
            default
        }
    }
}
