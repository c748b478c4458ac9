// Configuration module
// Author: kelexine (https://github.com/kelexine)

mod models;

pub use models::*;

use crate::error::{LulimiError, Result};
use config::{Config, Environment, File};
use std::path::{Path, PathBuf};

impl AppConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. CLI arguments (highest, applied by the caller)
    /// 2. Environment variables
    /// 3. Config file
    /// 4. Defaults (lowest)
    ///
    /// An explicit `path` must exist; the default path is optional. The
    /// result is not validated, since CLI overrides may still change it.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(p) => File::from(p).required(true),
            None => File::from(Self::default_config_path()).required(false),
        };

        let config = Config::builder()
            // Start with defaults
            .add_source(Config::try_from(&Self::default())?)
            .add_source(file)
            // Override with environment variables, e.g. LULIMI_SERVER__PORT=9000
            .add_source(
                Environment::with_prefix("LULIMI")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| LulimiError::Config(e.to_string()))?;

        let config: AppConfig = config
            .try_deserialize()
            .map_err(|e| LulimiError::Config(e.to_string()))?;

        Ok(config)
    }

    /// Reject combinations that cannot produce a working adapter.
    pub fn validate(&self) -> Result<()> {
        if self.inference.backend == InferenceBackend::Http && self.inference.endpoint.trim().is_empty() {
            return Err(LulimiError::Config(
                "inference.endpoint is required for the http backend".to_string(),
            ));
        }
        if self.inference.timeout_seconds == 0 {
            return Err(LulimiError::Config(
                "inference.timeout_seconds must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    fn default_config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".lulimi")
            .join("config.toml")
    }
}
