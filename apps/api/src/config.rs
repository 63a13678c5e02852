use anyhow::{Context, Result};

const DEFAULT_MAX_DESCRIPTION_CHARS: usize = 20_000;
const DEFAULT_MAX_BATCH_SIZE: usize = 25;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Fixed seed for scorer jitter. Unset means fresh entropy per analysis.
    pub analysis_seed: Option<u64>,
    pub max_description_chars: usize,
    pub max_batch_size: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            analysis_seed: optional_env("ANALYSIS_SEED")?
                .map(|v| v.parse::<u64>())
                .transpose()
                .context("ANALYSIS_SEED must be an unsigned integer")?,
            max_description_chars: parse_or("MAX_DESCRIPTION_CHARS", DEFAULT_MAX_DESCRIPTION_CHARS)?,
            max_batch_size: parse_or("MAX_BATCH_SIZE", DEFAULT_MAX_BATCH_SIZE)?,
        })
    }
}

fn optional_env(key: &str) -> Result<Option<String>> {
    match std::env::var(key) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(value.trim().to_string())),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(e).with_context(|| format!("Environment variable '{key}' is not valid unicode")),
    }
}

fn parse_or(key: &str, default: usize) -> Result<usize> {
    let Some(raw) = optional_env(key)? else {
        return Ok(default);
    };
    let value = raw
        .parse::<usize>()
        .with_context(|| format!("{key} must be a positive integer"))?;
    anyhow::ensure!(value > 0, "{key} must be greater than zero");
    Ok(value)
}
