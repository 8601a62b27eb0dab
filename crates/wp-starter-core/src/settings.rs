//! User settings loaded from an optional YAML file
//!
//! Lookup order: explicit path (`--config`), then the path in
//! `WP_STARTER_CONFIG`, then built-in defaults. Every field is optional.
//!
//! ```yaml
//! wp_config:
//!   db_name: wordpress_db
//!   db_user: root
//!   db_password: root
//!   db_host: localhost
//! env_defaults:
//!   db_name: wordpress
//!   wp_home: http://localhost:8000
//! salt_length: 64
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable naming a settings file
pub const SETTINGS_ENV: &str = "WP_STARTER_CONFIG";

/// Shortest salt WordPress keys are generated with
pub const MIN_SALT_LENGTH: usize = 64;

/// Database values passed to `wp config create`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WpConfigDefaults {
    pub db_name: String,
    pub db_user: String,
    pub db_password: String,
    pub db_host: String,
}

impl Default for WpConfigDefaults {
    fn default() -> Self {
        Self {
            db_name: "wordpress_db".to_string(),
            db_user: "root".to_string(),
            db_password: "root".to_string(),
            db_host: "localhost".to_string(),
        }
    }
}

/// Defaults offered by the `.env` prompts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvDefaults {
    pub db_name: String,
    pub db_user: String,
    pub db_password: String,
    pub db_host: String,
    pub wp_home: String,
}

impl Default for EnvDefaults {
    fn default() -> Self {
        Self {
            db_name: "wordpress".to_string(),
            db_user: "root".to_string(),
            db_password: String::new(),
            db_host: "localhost".to_string(),
            wp_home: "http://localhost:8000".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarterSettings {
    pub wp_config: WpConfigDefaults,
    pub env_defaults: EnvDefaults,
    pub salt_length: usize,
}

impl Default for StarterSettings {
    fn default() -> Self {
        Self {
            wp_config: WpConfigDefaults::default(),
            env_defaults: EnvDefaults::default(),
            salt_length: MIN_SALT_LENGTH,
        }
    }
}

impl StarterSettings {
    /// Load settings from `path`, falling back to `WP_STARTER_CONFIG`, then defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let from_env = std::env::var_os(SETTINGS_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        match path.map(Path::to_path_buf).or(from_env) {
            Some(path) => Self::from_file(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {}", path.display()))?;
        Self::from_yaml(&content)
            .with_context(|| format!("Invalid settings file {}", path.display()))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        // An empty document deserializes to unit, not to a struct
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let settings: Self = serde_yaml::from_str(content).context("Failed to parse settings")?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<()> {
        if self.salt_length < MIN_SALT_LENGTH {
            anyhow::bail!(
                "salt_length must be at least {} (got {})",
                MIN_SALT_LENGTH,
                self.salt_length
            );
        }
        Ok(())
    }
}
