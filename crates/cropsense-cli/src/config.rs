//! Configuration file management.
//!
//! The config file supplies the selectable crop list, the initial selection,
//! the simulator interval and the advisor thresholds.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use cropsense_core::{Advisor, SimulatorOptions, ThresholdConfig, UNKNOWN_CROP};

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Crops the user can pick from
    #[serde(default = "default_crops")]
    pub crops: Vec<String>,

    /// Crop selected on startup (defaults to the first crop)
    #[serde(default)]
    pub default_crop: Option<String>,

    /// Seconds between simulated readings
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,

    /// Default output format
    #[serde(default)]
    pub format: Option<String>,

    /// Disable colored output
    #[serde(default)]
    pub no_color: bool,

    /// Advisor thresholds
    #[serde(default)]
    pub thresholds: ThresholdConfig,
}

fn default_crops() -> Vec<String> {
    ["Tomato", "Wheat", "Rice", "Corn", "Potato", "Lettuce"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_interval_secs() -> u64 {
    2
}

impl Default for Config {
    fn default() -> Self {
        Self {
            crops: default_crops(),
            default_crop: None,
            interval_secs: default_interval_secs(),
            format: None,
            no_color: false,
            thresholds: ThresholdConfig::default(),
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("cropsense")
            .join("config.toml")
    }

    /// Load config from file, or return default if not found
    pub fn load() -> Self {
        let path = Self::path();
        if path.exists() {
            match Self::load_from(&path) {
                Ok(config) => return config,
                Err(e) => {
                    tracing::warn!("Ignoring config file: {:#}", e);
                }
            }
        }
        Self::default()
    }

    /// Load config from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        config
            .thresholds
            .validate()
            .with_context(|| format!("Invalid thresholds in config: {}", path.display()))?;
        Ok(config)
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path())
    }

    /// Save config to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }

    /// Crop selected on startup.
    ///
    /// Uses `default_crop` when set, then the first listed crop, then `Unknown`.
    pub fn initial_crop(&self) -> String {
        self.default_crop
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .or_else(|| self.crops.iter().map(|c| c.trim()).find(|c| !c.is_empty()))
            .unwrap_or(UNKNOWN_CROP)
            .to_string()
    }

    /// Crop list with blank entries removed and the initial crop included.
    pub fn crop_choices(&self) -> Vec<String> {
        let mut crops: Vec<String> = self
            .crops
            .iter()
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .collect();
        let initial = self.initial_crop();
        if !crops.contains(&initial) {
            crops.insert(0, initial);
        }
        crops
    }

    /// Simulator options derived from the config.
    pub fn simulator_options(&self) -> SimulatorOptions {
        SimulatorOptions::with_interval(Duration::from_secs(self.interval_secs))
    }

    /// Advisor using the configured thresholds.
    pub fn advisor(&self) -> Advisor {
        Advisor::new(self.thresholds)
    }

    /// Set a config value by key.
    ///
    /// Supported keys: `crops` (comma-separated), `default_crop`,
    /// `interval_secs`, `format`, `no_color` and `thresholds.<field>`.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "crops" => {
                let crops: Vec<String> = value
                    .split(',')
                    .map(|c| c.trim().to_string())
                    .filter(|c| !c.is_empty())
                    .collect();
                if crops.is_empty() {
                    bail!("crops must list at least one crop");
                }
                self.crops = crops;
            }
            "default_crop" => self.default_crop = Some(value.trim().to_string()),
            "interval_secs" => {
                let secs: u64 = value
                    .parse()
                    .with_context(|| format!("Invalid interval: {value}"))?;
                if secs == 0 {
                    bail!("interval_secs must be > 0");
                }
                self.interval_secs = secs;
            }
            "format" => match value {
                "text" | "json" | "csv" => self.format = Some(value.to_string()),
                _ => bail!("Invalid format: {value} (expected text, json or csv)"),
            },
            "no_color" => {
                self.no_color = value
                    .parse()
                    .with_context(|| format!("Invalid boolean: {value}"))?;
            }
            _ => {
                let Some(field) = key.strip_prefix("thresholds.") else {
                    bail!("Unknown config key: {key}");
                };
                let number: f32 = value
                    .parse()
                    .with_context(|| format!("Invalid number: {value}"))?;
                let mut thresholds = self.thresholds;
                match field {
                    "humidity_min" => thresholds.humidity_min = number,
                    "humidity_max" => thresholds.humidity_max = number,
                    "temperature_min" => thresholds.temperature_min = number,
                    "temperature_max" => thresholds.temperature_max = number,
                    "sunlight_min" => thresholds.sunlight_min = number,
                    _ => bail!("Unknown threshold: {field}"),
                }
                thresholds.validate()?;
                self.thresholds = thresholds;
            }
        }
        Ok(())
    }

    /// Reset a config value to its default.
    pub fn unset(&mut self, key: &str) -> Result<()> {
        let defaults = Config::default();
        match key {
            "crops" => self.crops = defaults.crops,
            "default_crop" => self.default_crop = None,
            "interval_secs" => self.interval_secs = defaults.interval_secs,
            "format" => self.format = None,
            "no_color" => self.no_color = false,
            "thresholds" => self.thresholds = defaults.thresholds,
            _ => bail!("Unknown config key: {key}"),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.crops[0], "Tomato");
        assert_eq!(config.interval_secs, 2);
        assert_eq!(config.initial_crop(), "Tomato");
        assert_eq!(config.thresholds, ThresholdConfig::default());
        assert_eq!(
            config.simulator_options().interval,
            Duration::from_secs(2)
        );
    }

    #[test]
    fn test_empty_file_gives_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file() {
        let config: Config = toml::from_str(
            r#"
            crops = ["Barley", "Oats"]
            default_crop = "Oats"

            [thresholds]
            humidity_min = 40.0
            "#,
        )
        .unwrap();

        assert_eq!(config.crops, vec!["Barley", "Oats"]);
        assert_eq!(config.initial_crop(), "Oats");
        assert_eq!(config.thresholds.humidity_min, 40.0);
        assert_eq!(config.thresholds.humidity_max, 80.0);
        assert_eq!(config.interval_secs, 2);
    }

    #[test]
    fn test_initial_crop_fallbacks() {
        let mut config = Config {
            crops: vec![" ".to_string(), "Rice".to_string()],
            ..Config::default()
        };
        assert_eq!(config.initial_crop(), "Rice");

        config.default_crop = Some(String::new());
        assert_eq!(config.initial_crop(), "Rice");

        config.crops.clear();
        assert_eq!(config.initial_crop(), UNKNOWN_CROP);
    }

    #[test]
    fn test_crop_choices_include_initial() {
        let config = Config {
            crops: vec!["Rice".to_string(), "".to_string()],
            default_crop: Some("Millet".to_string()),
            ..Config::default()
        };
        assert_eq!(config.crop_choices(), vec!["Millet", "Rice"]);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.set("crops", "Barley, Oats").unwrap();
        config.set("thresholds.sunlight_min", "150").unwrap();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.crops, vec!["Barley", "Oats"]);
        assert_eq!(loaded.thresholds.sunlight_min, 150.0);
    }

    #[test]
    fn test_load_invalid_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "crops = 12").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn test_load_rejects_invalid_thresholds() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        fs::write(&path, "[thresholds]\nhumidity_min = 95.0\nhumidity_max = 10.0\n").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Invalid thresholds"));

        fs::write(&path, "[thresholds]\nsunlight_min = nan\n").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = Config::default();
        assert!(config.set("interval_secs", "0").is_err());
        assert!(config.set("interval_secs", "soon").is_err());
        assert!(config.set("format", "xml").is_err());
        assert!(config.set("crops", " , ").is_err());
        assert!(config.set("thresholds.co2", "5").is_err());
        assert!(config.set("thresholds.humidity_min", "95").is_err());
        assert!(config.set("colour", "true").is_err());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_set_and_unset() {
        let mut config = Config::default();
        config.set("default_crop", "Corn").unwrap();
        config.set("no_color", "true").unwrap();
        config.set("format", "json").unwrap();
        assert_eq!(config.initial_crop(), "Corn");
        assert!(config.no_color);

        config.unset("default_crop").unwrap();
        config.unset("no_color").unwrap();
        config.unset("format").unwrap();
        assert_eq!(config, Config::default());
        assert!(config.unset("nope").is_err());
    }
}
