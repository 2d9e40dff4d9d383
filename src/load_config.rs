//! Config loading for the CLI: TOML parsing plus environment secret injection.
//!
//! `Config::load` in the core crate owns file parsing and validation; this
//! module layers the environment on top so secrets can stay out of the config
//! file. A `.env` file is loaded by `main` before this runs.

use std::env;
use std::path::Path;
use tracing::{error, info};

use as_ingest_core::config::Config;
use as_ingest_core::error::ConfigError;

/// Load the config file at `path` and apply `ALPHASENSE_*` env overrides for
/// credential fields.
pub fn load_config(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    info!(config_path = %path.display(), "Loading configuration");

    let mut config = match Config::load(path) {
        Ok(config) => {
            info!(config_path = %path.display(), "Configuration parsed");
            config
        }
        Err(e) => {
            error!(error = %e, config_path = %path.display(), "Failed to load configuration");
            return Err(e);
        }
    };

    apply_env_overrides(&mut config);
    Ok(config)
}

fn apply_env_overrides(config: &mut Config) {
    override_from_env("ALPHASENSE_USERNAME", &mut config.username);
    override_from_env("ALPHASENSE_PASSWORD", &mut config.password);
    override_from_env("ALPHASENSE_API_KEY", &mut config.api_key);
    override_from_env("ALPHASENSE_CLIENT_ID", &mut config.client_id);
    override_from_env("ALPHASENSE_CLIENT_SECRET", &mut config.client_secret);
}

fn override_from_env(var: &str, field: &mut String) {
    if let Ok(value) = env::var(var) {
        info!(var, "Overriding config field from environment");
        *field = value;
    }
}
