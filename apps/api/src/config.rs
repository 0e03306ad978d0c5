use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Startup fails if `API_KEY` is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub gemini_model: String,
    pub gemini_api_base: String,
    pub llm_timeout_secs: u64,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            api_key: require_env("API_KEY")?,
            gemini_model: std::env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| crate::llm_client::DEFAULT_MODEL.to_string()),
            gemini_api_base: std::env::var("GEMINI_API_BASE")
                .unwrap_or_else(|_| crate::llm_client::DEFAULT_API_BASE.to_string()),
            llm_timeout_secs: parse_timeout(
                &std::env::var("LLM_TIMEOUT_SECS").unwrap_or_else(|_| "60".to_string()),
            )?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    let value =
        std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))?;
    if value.trim().is_empty() {
        anyhow::bail!("Required environment variable '{key}' is empty");
    }
    Ok(value)
}

/// Parses `LLM_TIMEOUT_SECS`. Zero is rejected.
fn parse_timeout(value: &str) -> Result<u64> {
    let secs = value
        .trim()
        .parse::<u64>()
        .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?;
    if secs == 0 {
        anyhow::bail!("LLM_TIMEOUT_SECS must be at least 1 second");
    }
    Ok(secs)
}
