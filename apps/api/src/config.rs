use anyhow::{Context, Result};

/// Placeholder value shipped in `.env.example`; treated the same as an unset key.
const API_KEY_PLACEHOLDER: &str = "your_gemini_api_key_here";

const DEFAULT_GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";

/// Application configuration loaded from environment variables.
/// Every variable is optional; a missing `GEMINI_API_KEY` disables AI enhancement.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: Option<String>,
    pub gemini_api_url: String,
    pub gemini_model: String,
    pub enhancement_timeout_secs: u64,
    pub enhancement_max_retries: u32,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: usable_api_key(std::env::var("GEMINI_API_KEY").ok()),
            gemini_api_url: std::env::var("GEMINI_API_URL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_API_URL.to_string()),
            gemini_model: std::env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string()),
            enhancement_timeout_secs: parse_timeout_secs(
                &std::env::var("ENHANCEMENT_TIMEOUT_SECS").unwrap_or_else(|_| "30".to_string()),
            )?,
            enhancement_max_retries: std::env::var("ENHANCEMENT_MAX_RETRIES")
                .unwrap_or_else(|_| "3".to_string())
                .parse::<u32>()
                .context("ENHANCEMENT_MAX_RETRIES must be a whole number")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// A zero timeout would fail every provider call, so it is rejected.
fn parse_timeout_secs(raw: &str) -> Result<u64> {
    let secs = raw
        .trim()
        .parse::<u64>()
        .context("ENHANCEMENT_TIMEOUT_SECS must be a whole number of seconds")?;
    anyhow::ensure!(secs > 0, "ENHANCEMENT_TIMEOUT_SECS must be at least 1 second");
    Ok(secs)
}

/// Filters out blank keys and the documentation placeholder.
fn usable_api_key(raw: Option<String>) -> Option<String> {
    raw.map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty() && k != API_KEY_PLACEHOLDER)
}
