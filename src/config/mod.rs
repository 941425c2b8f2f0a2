//! Configuration management

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Env prefix for overrides (`WSC_WEBHOOK__BASE_URL`, ...).
const ENV_PREFIX: &str = "WSC";
const DEFAULT_BASE_URL: &str = "https://n8nprod.ifpvps.com/webhook";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub webhook: WebhookConfig,
}

/// Where the webhook automation backend lives.
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl WebhookConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// Directory searched for `config.{toml,json,yaml}`.
pub fn get_config_dir() -> PathBuf {
    std::env::var_os("WSC_CONFIG_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}

pub fn load_config() -> Result<Config> {
    load_config_from(&get_config_dir())
}

pub fn load_config_from(config_dir: &std::path::Path) -> Result<Config> {
    let config = ::config::Config::builder()
        // Start with defaults
        .set_default("webhook.base_url", DEFAULT_BASE_URL)?
        .set_default("webhook.timeout_secs", DEFAULT_TIMEOUT_SECS)?
        // Load from config file if it exists
        .add_source(
            ::config::File::with_name(&config_dir.join("config").to_string_lossy())
                .required(false),
        )
        // Override with environment variables (WSC_WEBHOOK__BASE_URL, etc.)
        .add_source(
            ::config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let config: Config = config.try_deserialize()?;

    url::Url::parse(&config.webhook.base_url)
        .with_context(|| format!("invalid webhook.base_url: {}", config.webhook.base_url))?;
    if config.webhook.timeout_secs == 0 {
        anyhow::bail!("webhook.timeout_secs must be greater than zero");
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        std::env::remove_var("WSC_WEBHOOK__BASE_URL");
        std::env::remove_var("WSC_WEBHOOK__TIMEOUT_SECS");
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(dir.path()).unwrap();
        assert_eq!(config.webhook.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.webhook.timeout(), Duration::from_secs(10));
    }

    #[test]
    #[serial]
    fn test_file_source() {
        clear_env();
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("config.toml"),
            "[webhook]\nbase_url = \"http://localhost:5678/webhook\"\ntimeout_secs = 3\n",
        )
        .unwrap();
        let config = load_config_from(dir.path()).unwrap();
        assert_eq!(config.webhook.base_url, "http://localhost:5678/webhook");
        assert_eq!(config.webhook.timeout_secs, 3);
    }

    #[test]
    #[serial]
    fn test_env_overrides_file() {
        clear_env();
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("config.toml"),
            "[webhook]\nbase_url = \"http://localhost:5678/webhook\"\n",
        )
        .unwrap();
        std::env::set_var("WSC_WEBHOOK__BASE_URL", "http://n8n.internal/webhook");
        let config = load_config_from(dir.path());
        clear_env();
        assert_eq!(
            config.unwrap().webhook.base_url,
            "http://n8n.internal/webhook"
        );
    }

    #[test]
    #[serial]
    fn test_invalid_base_url_rejected() {
        clear_env();
        std::env::set_var("WSC_WEBHOOK__BASE_URL", "not a url");
        let dir = tempfile::tempdir().unwrap();
        let result = load_config_from(dir.path());
        clear_env();
        assert!(result.is_err());
    }
}
