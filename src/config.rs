use anyhow::{Result, anyhow};
use std::time::Duration;
use tracing::debug;

/// Timeout applied to every outbound HTTP call.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// User-Agent header sent on every outbound HTTP call.
pub const USER_AGENT: &str = "fxnotify/0.1";

pub const SOURCE_CURRENCY: &str = "USD";
pub const TARGET_CURRENCY: &str = "AUD";

pub const ENV_API_KEY: &str = "TRANSFERWISE_API_KEY";
pub const ENV_WEBHOOK_URL: &str = "SLACK_WEBHOOK_URL";
pub const ENV_RATES_BASE_URL: &str = "TRANSFERWISE_BASE_URL";

pub const DEFAULT_RATES_BASE_URL: &str = "https://api.transferwise.com";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_key: String,
    pub webhook_url: String,
    pub rates_base_url: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        debug!("Loading config from process environment");
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from an arbitrary variable source, so tests can pass
    /// a closure over a map instead of mutating the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(ENV_API_KEY)
            .ok_or_else(|| anyhow!("Missing required environment variable: {ENV_API_KEY}"))?;
        let webhook_url = lookup(ENV_WEBHOOK_URL)
            .ok_or_else(|| anyhow!("Missing required environment variable: {ENV_WEBHOOK_URL}"))?;
        let rates_base_url =
            lookup(ENV_RATES_BASE_URL).unwrap_or_else(|| DEFAULT_RATES_BASE_URL.to_string());

        debug!("Successfully loaded config");
        Ok(AppConfig {
            api_key,
            webhook_url,
            rates_base_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_load_with_required_vars() {
        let env = vars(&[
            (ENV_API_KEY, "test-key"),
            (ENV_WEBHOOK_URL, "https://hooks.slack.com/services/T00/B00/XXX"),
        ]);

        let config = AppConfig::from_lookup(|name| env.get(name).cloned()).unwrap();
        assert_eq!(config.api_key, "test-key");
        assert_eq!(
            config.webhook_url,
            "https://hooks.slack.com/services/T00/B00/XXX"
        );
        assert_eq!(config.rates_base_url, DEFAULT_RATES_BASE_URL);
    }

    #[test]
    fn test_missing_api_key() {
        let env = vars(&[(ENV_WEBHOOK_URL, "https://hooks.slack.com/services/X")]);

        let result = AppConfig::from_lookup(|name| env.get(name).cloned());
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().to_string(),
            format!("Missing required environment variable: {ENV_API_KEY}")
        );
    }

    #[test]
    fn test_missing_webhook_url() {
        let env = vars(&[(ENV_API_KEY, "test-key")]);

        let result = AppConfig::from_lookup(|name| env.get(name).cloned());
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().to_string(),
            format!("Missing required environment variable: {ENV_WEBHOOK_URL}")
        );
    }

    #[test]
    fn test_base_url_override() {
        let env = vars(&[
            (ENV_API_KEY, "test-key"),
            (ENV_WEBHOOK_URL, "https://hooks.slack.com/services/X"),
            (ENV_RATES_BASE_URL, "http://localhost:8080"),
        ]);

        let config = AppConfig::from_lookup(|name| env.get(name).cloned()).unwrap();
        assert_eq!(config.rates_base_url, "http://localhost:8080");
    }
}
