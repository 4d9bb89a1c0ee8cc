use std::{env, time::Duration};

use anyhow::{anyhow, Result};
use dotenv::dotenv;
use serde::Serialize;
use tracing::debug;

pub const DEFAULT_API_URL: &str = "http://localhost:5000";

#[derive(Debug, Clone, Serialize)]
pub struct Config {
    // Customer service
    pub api_base_url: String,
    pub request_timeout: Option<Duration>,

    // Local fixture server
    pub fixture_host: String,
    pub fixture_port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();
        let config = Self::from_vars(|key| env::var(key).ok())?;
        debug!(
            api_base_url = %config.api_base_url,
            fixture_address = %config.fixture_address(),
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base_url = lookup("CUSTOMERS_API_URL")
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let request_timeout = match lookup("REQUEST_TIMEOUT_SECS") {
            Some(raw) if !raw.trim().is_empty() => {
                let secs = raw.trim().parse::<u64>().map_err(|_| {
                    anyhow!("REQUEST_TIMEOUT_SECS must be a whole number of seconds, got {raw:?}")
                })?;
                Some(Duration::from_secs(secs))
            }
            _ => None,
        };

        let fixture_host = lookup("FIXTURE_HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let fixture_port = lookup("FIXTURE_PORT")
            .unwrap_or_else(|| "5000".to_string())
            .trim()
            .parse::<u16>()
            .map_err(|_| anyhow!("FIXTURE_PORT must be a valid port number"))?;

        Ok(Config {
            api_base_url,
            request_timeout,
            fixture_host,
            fixture_port,
        })
    }

    pub fn fixture_address(&self) -> String {
        format!("{}:{}", self.fixture_host, self.fixture_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.api_base_url, DEFAULT_API_URL);
        assert_eq!(config.request_timeout, None);
        assert_eq!(config.fixture_address(), "127.0.0.1:5000");
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("CUSTOMERS_API_URL", "http://crm.internal:8080"),
            ("REQUEST_TIMEOUT_SECS", "5"),
            ("FIXTURE_HOST", "0.0.0.0"),
            ("FIXTURE_PORT", "9000"),
        ])
        .unwrap();

        assert_eq!(config.api_base_url, "http://crm.internal:8080");
        assert_eq!(config.request_timeout, Some(Duration::from_secs(5)));
        assert_eq!(config.fixture_address(), "0.0.0.0:9000");
    }

    #[test]
    fn rejects_bad_numbers() {
        let err = config_from(&[("REQUEST_TIMEOUT_SECS", "soon")]).unwrap_err();
        assert!(err.to_string().contains("REQUEST_TIMEOUT_SECS"));

        let err = config_from(&[("FIXTURE_PORT", "70000")]).unwrap_err();
        assert!(err.to_string().contains("FIXTURE_PORT"));
    }
}
