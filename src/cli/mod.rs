// CLI module for lulimi
// Author: kelexine (https://github.com/kelexine)

use crate::config::{AppConfig, InferenceBackend};
use crate::error::Result;
use clap::Parser;
use std::path::PathBuf;

/// lulimi - Zambian language translation API with English pivot routing
#[derive(Parser, Debug)]
#[command(name = "lulimi", version, about, long_about = None)]
pub struct Args {
    /// Path to a TOML config file (default: ~/.lulimi/config.toml if present)
    #[arg(short, long, env = "LULIMI_CONFIG")]
    pub config: Option<PathBuf>,

    /// Address to bind, overrides server.host
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on, overrides server.port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Inference backend (simulated, http), overrides inference.backend
    #[arg(long)]
    pub backend: Option<InferenceBackend>,
}

impl Args {
    /// Load configuration, apply overrides, then validate the merged result.
    pub fn resolve_config(&self) -> Result<AppConfig> {
        let mut config = AppConfig::load(self.config.as_deref())?;
        self.apply(&mut config);
        config.validate()?;
        Ok(config)
    }

    /// Apply command-line overrides on top of loaded configuration.
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(backend) = self.backend {
            config.inference.backend = backend;
        }
    }
}
