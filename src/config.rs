//! Viewer configuration persisted to a YAML file.

use std::{fs, time::Duration};

use color_eyre::eyre::{Result, eyre};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::ui::colors::Theme;

/// Default cadence for data refreshes.
pub const DEFAULT_REFRESH_INTERVAL: &str = "1s";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub theme: String,
    pub refresh_interval: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: Theme::Blue.to_string(),
            refresh_interval: DEFAULT_REFRESH_INTERVAL.to_string(),
        }
    }
}

impl Config {
    /// Parses the configured refresh interval (humantime syntax, e.g.
    /// `500ms`, `2s`).
    pub fn interval(&self) -> Result<Duration> {
        humantime::parse_duration(&self.refresh_interval).map_err(|e| {
            eyre!(
                "invalid refresh interval {}: {}",
                self.refresh_interval,
                e
            )
        })
    }
}

/// Persists and retrieves configuration from a YAML file.
#[derive(Builder)]
#[builder(setter(into), build_fn(private, name = "_build"))]
pub struct ConfigManager {
    /// The path to the config file
    path: String,
    #[builder(setter(skip))]
    config: Config,
}

impl ConfigManagerBuilder {
    pub fn build(&self) -> Result<ConfigManager> {
        let mut manager = self._build()?;

        match fs::File::open(&manager.path) {
            Ok(file) => {
                manager.config = match serde_yaml::from_reader(file) {
                    Ok(config) => config,
                    Err(e) => {
                        log::warn!(
                            "failed to parse config file, using defaults: {}",
                            e
                        );
                        Config::default()
                    }
                };
                Ok(manager)
            }
            Err(_) => {
                manager.config = Config::default();
                manager.write()?;
                Ok(manager)
            }
        }
    }
}

impl ConfigManager {
    /// Returns a new instance of ConfigManagerBuilder.
    pub fn builder() -> ConfigManagerBuilder {
        ConfigManagerBuilder::default()
    }

    /// Returns the current configuration.
    pub fn get(&self) -> Config {
        self.config.clone()
    }

    fn write(&self) -> Result<()> {
        let file = fs::File::create(&self.path)?;
        serde_yaml::to_writer(file, &self.config)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "./config_tests.rs"]
mod tests;
