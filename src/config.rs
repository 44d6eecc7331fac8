use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::clients::nba::DEFAULT_BASE_URL;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,

    pub api: ApiConfig,

    pub storage: StorageConfig,

    pub pipeline: PipelineConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub log_level: String,

    /// Emit logs as JSON lines instead of human-readable text.
    pub log_json: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_json: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,

    /// Request timeout in seconds (default: 120)
    pub request_timeout_seconds: u64,

    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_seconds: 120,
            user_agent: "courtside/0.1".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Objects are files under `root_path/bucket`.
    #[default]
    Local,
    /// Objects are uploaded with `PUT {endpoint_url}/{bucket}/{key}`.
    Http,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: StorageBackend,

    pub bucket: String,

    pub root_path: String,

    /// Base URL of the S3-compatible gateway; required by the `http` backend.
    pub endpoint_url: Option<String>,

    /// Bearer token sent with uploads, if the gateway requires one.
    #[serde(skip_serializing)]
    pub auth_token: Option<String>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::Local,
            bucket: "nba-stats".to_string(),
            root_path: "./data".to_string(),
            endpoint_url: None,
            auth_token: None,
        }
    }
}

impl StorageConfig {
    /// Base URL used by the `http` backend, without a trailing slash.
    #[must_use]
    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint_url
            .as_deref()
            .map(|url| url.trim().trim_end_matches('/'))
            .filter(|url| !url.is_empty())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Keep player rows whose `teamId` is empty (free agents, retired players).
    pub include_unassigned_players: bool,
}

impl Config {
    /// Loads `.env`, the config file at `path` (defaults when `None`), then
    /// environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let _ = dotenvy::dotenv();

        let mut config = match path {
            Some(path) => Self::load_from_path(path)?,
            None => Self::default(),
        };

        config.apply_env_overrides(|name| std::env::var(name).ok());
        Ok(config)
    }

    /// The explicit path if given, else the first existing search path.
    #[must_use]
    pub fn resolve_path(explicit: Option<&Path>) -> Option<PathBuf> {
        match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => Self::config_paths().into_iter().find(|path| path.exists()),
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Overrides taken from the environment, looked up through `var`.
    pub fn apply_env_overrides<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(bucket) = var("BUCKET") {
            self.storage.bucket = bucket;
        }
        if let Some(url) = var("COURTSIDE_API_BASE_URL") {
            self.api.base_url = url;
        }
        if let Some(token) = var("COURTSIDE_STORAGE_TOKEN") {
            self.storage.auth_token = Some(token);
        }
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        info!("Config saved to: {}", path.display());
        Ok(())
    }

    fn config_paths() -> Vec<PathBuf> {
        let mut paths = vec![];

        paths.push(Self::default_config_path());

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("courtside").join("config.toml"));
        }

        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".courtside").join("config.toml"));
        }

        paths
    }

    #[must_use]
    pub fn default_config_path() -> PathBuf {
        PathBuf::from("config.toml")
    }

    pub fn create_default_if_missing(path: &Path) -> Result<bool> {
        if path.exists() {
            Ok(false)
        } else {
            Self::default().save_to_path(path)?;
            info!("Created default config file: {}", path.display());
            Ok(true)
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.api.base_url.trim().is_empty() {
            anyhow::bail!("API base URL cannot be empty");
        }

        url::Url::parse(&self.api.base_url)
            .with_context(|| format!("Invalid API base URL: {}", self.api.base_url))?;

        if self.api.request_timeout_seconds == 0 {
            anyhow::bail!("Request timeout must be > 0");
        }

        if self.storage.bucket.trim().is_empty() {
            anyhow::bail!("Storage bucket cannot be empty");
        }

        if self.storage.backend == StorageBackend::Http {
            let Some(endpoint) = self.storage.endpoint() else {
                anyhow::bail!("storage.endpoint_url is required for the http backend");
            };
            url::Url::parse(endpoint)
                .with_context(|| format!("Invalid storage endpoint: {endpoint}"))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "http://data.nba.net/data/10s/");
        assert_eq!(config.api.request_timeout_seconds, 120);
        assert_eq!(config.storage.backend, StorageBackend::Local);
        assert!(!config.pipeline.include_unassigned_players);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("[general]"));
        assert!(toml_str.contains("[api]"));
        assert!(toml_str.contains("[storage]"));
        assert!(toml_str.contains("backend = \"local\""));
    }

    #[test]
    fn test_config_deserialization() {
        let toml_str = r#"
            [general]
            log_level = "debug"

            [storage]
            backend = "http"
            endpoint_url = "http://localhost:9000"

            [pipeline]
            include_unassigned_players = true
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.log_level, "debug");
        assert_eq!(config.storage.backend, StorageBackend::Http);
        assert!(config.pipeline.include_unassigned_players);

        assert_eq!(config.storage.bucket, "nba-stats");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        config.apply_env_overrides(|name| match name {
            "BUCKET" => Some("stats-bucket".to_string()),
            "COURTSIDE_STORAGE_TOKEN" => Some("secret".to_string()),
            _ => None,
        });

        assert_eq!(config.storage.bucket, "stats-bucket");
        assert_eq!(config.storage.auth_token.as_deref(), Some("secret"));
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_storage_endpoint() {
        let mut storage = StorageConfig::default();
        assert_eq!(storage.endpoint(), None);

        storage.endpoint_url = Some("http://localhost:9000/".to_string());
        assert_eq!(storage.endpoint(), Some("http://localhost:9000"));

        storage.endpoint_url = Some("  ".to_string());
        assert_eq!(storage.endpoint(), None);
    }

    #[test]
    fn test_resolve_path() {
        let explicit = Path::new("/tmp/courtside-explicit.toml");
        assert_eq!(
            Config::resolve_path(Some(explicit)),
            Some(explicit.to_path_buf())
        );

        let dir = std::env::temp_dir().join(format!("courtside-config-{}", uuid::Uuid::new_v4()));
        let path = dir.join("config.toml");
        assert!(Config::create_default_if_missing(&path).unwrap());
        assert!(!Config::create_default_if_missing(&path).unwrap());

        let config = Config::load(Config::resolve_path(Some(&path)).as_deref()).unwrap();
        assert_eq!(config.general.log_level, "info");

        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn test_validate() {
        let mut config = Config::default();
        config.storage.backend = StorageBackend::Http;
        assert!(config.validate().is_err());

        config.storage.endpoint_url = Some("not a url".to_string());
        assert!(config.validate().is_err());

        config.storage.endpoint_url = Some("http://localhost:9000".to_string());
        assert!(config.validate().is_ok());

        config.api.request_timeout_seconds = 0;
        assert!(config.validate().is_err());

        config.api.request_timeout_seconds = 30;
        config.storage.bucket = String::new();
        assert!(config.validate().is_err());
    }
}
