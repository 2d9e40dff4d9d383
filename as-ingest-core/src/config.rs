use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::error::ConfigError;

/// TOML table holding all ingestor settings.
pub const CONFIG_SECTION: &str = "alphasense";

/// Keys that must be present in the `[alphasense]` table.
const REQUIRED_KEYS: &[&str] = &[
    "username",
    "password",
    "api_key",
    "client_id",
    "client_secret",
    "auth_url",
    "ingestion_base_url",
];

/// Credentials and endpoint URLs, loaded once per invocation and immutable
/// thereafter (except for environment overrides applied at the CLI boundary).
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub username: String,
    pub password: String,
    pub api_key: String,
    pub client_id: String,
    pub client_secret: String,
    pub auth_url: String,
    pub ingestion_base_url: String,
}

impl Config {
    /// Parse the `[alphasense]` table of a TOML config file.
    ///
    /// All missing required keys are reported in a single error rather than
    /// one at a time.
    pub fn load(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let doc: toml::Value = raw.parse()?;
        let section = doc.get(CONFIG_SECTION).ok_or(ConfigError::MissingSection)?;

        let missing: Vec<String> = REQUIRED_KEYS
            .iter()
            .filter(|key| section.get(**key).is_none())
            .map(|key| key.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(ConfigError::MissingFields(missing));
        }

        let config: Config = section.clone().try_into()?;
        Ok(config)
    }

    /// Log a summary of the loaded configuration, omitting secrets.
    pub fn trace_loaded(&self) {
        info!(
            username = %self.username,
            auth_url = %self.auth_url,
            ingestion_base_url = %self.ingestion_base_url,
            "Loaded config"
        );
        debug!(client_id = %self.client_id, "OAuth client credentials present");
    }
}
