use std::path::{Path, PathBuf};
use std::sync::Arc;

use azdash_api::{HttpGateway, ResourceGateway};
use azdash_core::config::DashboardConfig;
use azdash_core::theme::FileThemeStore;
use azdash_tui::TuiOptions;

const DEFAULT_CONFIG: &str = "~/.config/azdash/config.yaml";

/// Resolved configuration shared by every command.
pub struct Context {
    pub config: DashboardConfig,
}

impl Context {
    /// An explicit `--config` must exist; the default location is optional.
    pub fn load(path: Option<&Path>, api_url: Option<String>) -> anyhow::Result<Self> {
        let mut config = match path {
            Some(path) => DashboardConfig::from_file(path)?,
            None => match default_config_path() {
                Some(path) if path.exists() => DashboardConfig::from_file(&path)?,
                _ => DashboardConfig::default(),
            },
        };
        if let Some(url) = api_url {
            config.api.base_url = url;
        }
        tracing::debug!(base_url = %config.api.base_url, "configuration resolved");
        Ok(Self { config })
    }

    pub fn gateway(&self) -> anyhow::Result<Arc<dyn ResourceGateway>> {
        Ok(Arc::new(HttpGateway::from_config(&self.config.api)?))
    }

    pub fn theme_store(&self) -> anyhow::Result<FileThemeStore> {
        Ok(FileThemeStore::new(self.config.preferences_path()?))
    }

    pub fn tui_options(&self) -> anyhow::Result<TuiOptions> {
        Ok(TuiOptions {
            gateway: self.gateway()?,
            store: Box::new(self.theme_store()?),
            notification_ttl: self.config.notification_ttl,
            tick_rate: self.config.tick_rate,
        })
    }
}

fn default_config_path() -> Option<PathBuf> {
    shellexpand::full(DEFAULT_CONFIG)
        .ok()
        .map(|p| PathBuf::from(p.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn api_url_flag_overrides_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "api:\n  base_url: http://from-file:5000").unwrap();

        let ctx = Context::load(Some(file.path()), None).unwrap();
        assert_eq!(ctx.config.api.base_url, "http://from-file:5000");

        let ctx = Context::load(Some(file.path()), Some("http://flag:8080".into())).unwrap();
        assert_eq!(ctx.config.api.base_url, "http://flag:8080");
    }

    #[test]
    fn explicit_missing_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Context::load(Some(&dir.path().join("nope.yaml")), None).is_err());
    }
}
