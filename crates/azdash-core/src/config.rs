use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{DashboardError, DashboardResult};

/// Top-level config file structure. Every field is optional in the file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub api: ApiConfig,
    /// Where the theme preference is kept. `~` and `$VARS` are expanded.
    #[serde(default = "default_preferences_file")]
    pub preferences_file: String,
    #[serde(default = "default_notification_ttl", with = "humantime_serde")]
    pub notification_ttl: Duration,
    #[serde(default = "default_tick_rate", with = "humantime_serde")]
    pub tick_rate: Duration,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            preferences_file: default_preferences_file(),
            notification_ttl: default_notification_ttl(),
            tick_rate: default_tick_rate(),
        }
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_preferences_file() -> String {
    "~/.config/azdash/preferences.yaml".to_string()
}

fn default_notification_ttl() -> Duration {
    Duration::from_secs(5)
}

fn default_tick_rate() -> Duration {
    Duration::from_millis(100)
}

impl DashboardConfig {
    pub fn from_file(path: &Path) -> DashboardResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| DashboardError::Config(format!("Cannot read {}: {e}", path.display())))?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> DashboardResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
            .map_err(|e| DashboardError::Config(format!("Invalid YAML: {e}")))
    }

    pub fn preferences_path(&self) -> DashboardResult<PathBuf> {
        shellexpand::full(&self.preferences_file)
            .map(|expanded| PathBuf::from(expanded.as_ref()))
            .map_err(|e| {
                DashboardError::Config(format!(
                    "Cannot expand preferences_file {}: {e}",
                    self.preferences_file
                ))
            })
    }
}
