use std::str::FromStr;

use anyhow::{bail, Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Default `min_score` for batch requests that omit one (0 – 100).
    pub default_min_score: f64,
    /// Upper bound on job postings per batch request.
    pub max_batch_jobs: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            default_min_score: 0.0,
            max_batch_jobs: 500,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();

        let config = Config {
            port: parse_or(&lookup, "PORT", defaults.port)?,
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
            default_min_score: parse_or(&lookup, "MATCH_MIN_SCORE", defaults.default_min_score)?,
            max_batch_jobs: parse_or(&lookup, "MAX_BATCH_JOBS", defaults.max_batch_jobs)?,
        };

        if !(0.0..=100.0).contains(&config.default_min_score) {
            bail!(
                "MATCH_MIN_SCORE must be between 0 and 100, got {}",
                config.default_min_score
            );
        }
        if config.max_batch_jobs == 0 {
            bail!("MAX_BATCH_JOBS must be greater than 0");
        }

        Ok(config)
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has invalid value '{raw}'")),
        None => Ok(default),
    }
}
