use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, ConfigError};

/// Random jokes and a counter, in the terminal.
#[derive(Debug, Parser)]
#[command(name = "jokebox", version, about)]
pub struct Cli {
    /// Config file to use instead of the default location.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the jokes API base URL.
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Override the request timeout.
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u32>,

    /// Write diagnostic logs to this file.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Load the config file (default or `--config`) and apply CLI overrides.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        self.apply_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(base_url) = &self.base_url {
            config.api.base_url = base_url.clone();
        }
        if let Some(timeout) = self.timeout {
            config.api.timeout_seconds = timeout;
        }
        if let Some(log_file) = &self.log_file {
            config.logging.file = Some(log_file.clone());
        }
    }
}
