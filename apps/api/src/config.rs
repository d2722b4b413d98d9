use anyhow::{bail, Context, Result};

use crate::llm_client::{DEFAULT_BASE_URL, DEFAULT_MODEL};

/// Application configuration loaded from environment variables.
/// Startup halts if the model credential is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub openrouter_api_key: String,
    pub openrouter_base_url: String,
    pub openrouter_model: String,
    /// Where the latest evaluation report is written (overwritten each run).
    pub evaluation_output: String,
    pub max_upload_bytes: usize,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. `from_env` passes the
    /// process environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let optional = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Ok(Config {
            openrouter_api_key: require(&lookup, "OPENROUTER_API_KEY")?,
            openrouter_base_url: optional("OPENROUTER_BASE_URL", DEFAULT_BASE_URL),
            openrouter_model: optional("OPENROUTER_MODEL", DEFAULT_MODEL),
            evaluation_output: optional("EVALUATION_OUTPUT", "evaluation.md"),
            max_upload_bytes: optional("MAX_UPLOAD_BYTES", "10485760")
                .parse::<usize>()
                .context("MAX_UPLOAD_BYTES must be a byte count")?,
            port: optional("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: optional("RUST_LOG", "info"),
        })
    }
}

fn require<F>(lookup: &F, key: &str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        Some(_) => bail!("Required environment variable '{key}' is empty"),
        None => bail!("Required environment variable '{key}' is not set"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_missing_api_key_is_fatal() {
        let err = Config::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(err.to_string().contains("OPENROUTER_API_KEY"));
    }

    #[test]
    fn test_blank_api_key_is_fatal() {
        let err = Config::from_lookup(lookup_from(&[("OPENROUTER_API_KEY", "   ")])).unwrap_err();
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn test_defaults_applied() {
        let config = Config::from_lookup(lookup_from(&[("OPENROUTER_API_KEY", "sk-test")])).unwrap();
        assert_eq!(config.openrouter_api_key, "sk-test");
        assert_eq!(config.openrouter_base_url, DEFAULT_BASE_URL);
        assert_eq!(config.openrouter_model, DEFAULT_MODEL);
        assert_eq!(config.evaluation_output, "evaluation.md");
        assert_eq!(config.max_upload_bytes, 10 * 1024 * 1024);
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    fn test_overrides_and_bad_port() {
        let config = Config::from_lookup(lookup_from(&[
            ("OPENROUTER_API_KEY", "sk-test"),
            ("OPENROUTER_MODEL", "meta-llama/llama-3-8b-instruct"),
            ("EVALUATION_OUTPUT", "out/report.md"),
            ("PORT", "9000"),
        ]))
        .unwrap();
        assert_eq!(config.openrouter_model, "meta-llama/llama-3-8b-instruct");
        assert_eq!(config.evaluation_output, "out/report.md");
        assert_eq!(config.port, 9000);

        let err = Config::from_lookup(lookup_from(&[
            ("OPENROUTER_API_KEY", "sk-test"),
            ("PORT", "not-a-port"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }
}
