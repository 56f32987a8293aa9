// File: api/src/config/manager.rs
use super::Config;
use anyhow::{anyhow, Result};
use std::sync::Arc;
use tokio::fs;
use tracing::{debug, info, warn};

use crate::constants::defaults::PORT_ENV_VAR;

pub struct ConfigManager {
    current_config: Arc<Config>,
}

impl ConfigManager {
    pub async fn new(config_dir: String) -> Result<Self> {
        let config = Self::load_configuration(&config_dir).await?;
        Ok(Self {
            current_config: Arc::new(config),
        })
    }

    pub fn get_current_config(&self) -> Arc<Config> {
        self.current_config.clone()
    }

    async fn load_configuration(config_dir: &str) -> Result<Config> {
        let main_config_path = format!("{}/main.toml", config_dir);
        let main_config_content = fs::read_to_string(&main_config_path)
            .await
            .map_err(|e| anyhow!("Failed to read main config {}: {}", main_config_path, e))?;

        let config: Config = toml::from_str(&main_config_content)
            .map_err(|e| anyhow!("Failed to parse main config: {}", e))?;

        let port_override = std::env::var(PORT_ENV_VAR).ok();
        let config = apply_port_override(config, port_override.as_deref())?;

        let export_dir = config.export_dir();
        let export_dir_exists = fs::metadata(&export_dir)
            .await
            .map(|meta| meta.is_dir())
            .unwrap_or(false);
        if !export_dir_exists {
            warn!(
                "Export directory {} does not exist yet, snapshot requests will fail until it does",
                export_dir.display()
            );
        }

        info!(
            "Loaded configuration: network {}, export directory {}, listening on {}:{}",
            config.network,
            export_dir.display(),
            config.host,
            config.port
        );

        Ok(config)
    }
}

fn apply_port_override(mut config: Config, port_override: Option<&str>) -> Result<Config> {
    if let Some(raw) = port_override {
        let port = raw
            .trim()
            .parse::<u16>()
            .map_err(|e| anyhow!("Invalid {} value '{}': {}", PORT_ENV_VAR, raw, e))?;
        debug!("Port overridden by {}: {}", PORT_ENV_VAR, port);
        config.port = port;
    }
    Ok(config)
}
