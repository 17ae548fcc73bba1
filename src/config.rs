use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::utils::price::PricingRules;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Configuration loading failed: {0}")]
    Load(#[from] ConfigError),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    #[serde(default = "default_marketplace")]
    pub marketplace: String,
    #[serde(default)]
    pub pricing: PricingRules,
}

fn default_marketplace() -> String {
    "BeresinAja".to_string()
}

impl Settings {
    /// Loads `config.toml` (or the given path). Without an explicit path a
    /// broken or missing file falls back to the built-in tariff.
    pub fn load(config_path: &Option<String>) -> Result<Self, SettingsError> {
        let default = Self::default();

        match Self::load_from_file(config_path) {
            Ok(settings) => Ok(settings),
            Err(err) if config_path.is_none() => {
                warn!("Could not read config file: {err}. Using default configuration.",);
                Ok(default)
            }
            Err(err) => Err(err),
        }
    }

    fn load_from_file(config_path: &Option<String>) -> Result<Self, SettingsError> {
        let path = config_path.as_deref().unwrap_or("config.toml");
        let required = config_path.is_some();

        let config = Config::builder()
            .add_source(File::with_name(path).required(required))
            .build()?
            .try_deserialize::<Settings>()?;

        Ok(config)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            marketplace: default_marketplace(),
            pricing: PricingRules::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn partial_file_keeps_default_tariff() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "marketplace = \"Kampus Print\"\n\n[pricing]\nadmin_fee = 2000\n\n[pricing.express]\nmultiplier = 2.0\nadjustment = 1.0"
        )
        .unwrap();

        let path = Some(file.path().to_string_lossy().to_string());
        let settings = Settings::load(&path).unwrap();

        assert_eq!(settings.marketplace, "Kampus Print");
        assert_eq!(settings.pricing.admin_fee, 2000);
        assert_eq!(settings.pricing.express.multiplier, 2.0);
        assert_eq!(settings.pricing.binding_hardcover_fee, 20000);
        assert_eq!(settings.pricing.economy.multiplier, 0.8);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = Some(dir.path().join("absent.toml").to_string_lossy().to_string());
        assert!(Settings::load(&path).is_err());
    }
}
