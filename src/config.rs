//! Configuration for pos-dashboard
//!
//! Config stored at: ~/.config/pos-dashboard/config.toml

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{Error, Result};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Password gating the upload page. The shipped default is a
    /// placeholder; deployments set their own in config.toml.
    #[serde(default = "default_admin_password")]
    pub admin_password: String,

    /// Directory where accepted uploads are archived verbatim.
    #[serde(default = "default_upload_dir")]
    pub upload_dir: PathBuf,

    /// EPKM threshold pre-filled when the app starts.
    #[serde(default = "default_threshold")]
    pub default_threshold: f64,
}

fn default_admin_password() -> String {
    "set-a-password".to_string()
}

fn default_upload_dir() -> PathBuf {
    PathBuf::from("uploaded_files")
}

fn default_threshold() -> f64 {
    30.0
}

impl Default for Config {
    fn default() -> Self {
        Self {
            admin_password: default_admin_password(),
            upload_dir: default_upload_dir(),
            default_threshold: default_threshold(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::Config("no platform config directory".to_string()))?
            .join("pos-dashboard");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load config from file, or fall back to defaults when absent.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let config: Config =
                toml::from_str(&content).map_err(|e| Error::Config(e.to_string()))?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))?;
        std::fs::write(&path, content)?;
        Ok(())
    }

    /// Check an operator-entered password against the configured secret.
    pub fn verify_password(&self, input: &str) -> Result<()> {
        if input == self.admin_password {
            Ok(())
        } else {
            Err(Error::Auth)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrong_password_is_rejected() {
        let config = Config::default();
        assert!(matches!(
            config.verify_password("not-the-password"),
            Err(Error::Auth)
        ));
        assert!(matches!(config.verify_password(""), Err(Error::Auth)));
    }

    #[test]
    fn configured_password_is_accepted() {
        let config = Config {
            admin_password: "depot-42".to_string(),
            ..Config::default()
        };
        assert!(config.verify_password("depot-42").is_ok());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: Config = toml::from_str("admin_password = \"x\"").unwrap();
        assert_eq!(config.upload_dir, PathBuf::from("uploaded_files"));
        assert_eq!(config.default_threshold, 30.0);
    }
}
