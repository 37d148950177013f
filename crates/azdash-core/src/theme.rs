use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{DashboardError, DashboardResult};

/// Storage key for the theme preference.
pub const THEME_KEY: &str = "theme";
const DARK_MARKER: &str = "dark";
const LIGHT_MARKER: &str = "light";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => LIGHT_MARKER,
            Self::Dark => DARK_MARKER,
        }
    }

    /// Only the exact dark marker selects dark; everything else is light.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some(DARK_MARKER) => Self::Dark,
            _ => Self::Light,
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Key-value storage for client preferences.
pub trait ThemeStore: Send {
    fn load(&self, key: &str) -> DashboardResult<Option<String>>;

    /// Overwrites any previous value for `key`.
    fn store(&mut self, key: &str, value: &str) -> DashboardResult<()>;
}

impl<T: ThemeStore + ?Sized> ThemeStore for Box<T> {
    fn load(&self, key: &str) -> DashboardResult<Option<String>> {
        (**self).load(key)
    }

    fn store(&mut self, key: &str, value: &str) -> DashboardResult<()> {
        (**self).store(key, value)
    }
}

/// Preferences kept in a YAML map on disk.
pub struct FileThemeStore {
    path: PathBuf,
}

impl FileThemeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> DashboardResult<BTreeMap<String, String>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => {
                return Err(DashboardError::Storage(format!(
                    "Cannot read {}: {e}",
                    self.path.display()
                )))
            }
        };
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_yaml::from_str(&content).map_err(|e| {
            DashboardError::Storage(format!("Invalid preferences in {}: {e}", self.path.display()))
        })
    }
}

impl ThemeStore for FileThemeStore {
    fn load(&self, key: &str) -> DashboardResult<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn store(&mut self, key: &str, value: &str) -> DashboardResult<()> {
        // A corrupt file is replaced rather than blocking the write.
        let mut entries = self.read_all().unwrap_or_default();
        entries.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                DashboardError::Storage(format!("Cannot create {}: {e}", parent.display()))
            })?;
        }
        let yaml = serde_yaml::to_string(&entries)
            .map_err(|e| DashboardError::Storage(e.to_string()))?;
        std::fs::write(&self.path, yaml).map_err(|e| {
            DashboardError::Storage(format!("Cannot write {}: {e}", self.path.display()))
        })
    }
}

/// In-process store; nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryThemeStore {
    entries: BTreeMap<String, String>,
}

impl MemoryThemeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self, key: &str) -> DashboardResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn store(&mut self, key: &str, value: &str) -> DashboardResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_exact_dark_marker_selects_dark() {
        assert_eq!(ThemePreference::from_stored(Some("dark")), ThemePreference::Dark);
        assert_eq!(ThemePreference::from_stored(Some("Dark")), ThemePreference::Light);
        assert_eq!(ThemePreference::from_stored(Some("")), ThemePreference::Light);
        assert_eq!(ThemePreference::from_stored(None), ThemePreference::Light);
    }

    #[test]
    fn toggle_is_symmetric() {
        assert_eq!(ThemePreference::Light.toggled(), ThemePreference::Dark);
        assert_eq!(ThemePreference::Light.toggled().toggled(), ThemePreference::Light);
    }

    #[test]
    fn file_store_reads_missing_file_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileThemeStore::new(dir.path().join("prefs.yaml"));
        assert_eq!(store.load(THEME_KEY).unwrap(), None);
    }

    #[test]
    fn file_store_overwrites_and_keeps_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("prefs.yaml");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "layout: compact\ntheme: light\n").unwrap();

        let mut store = FileThemeStore::new(&path);
        store.store(THEME_KEY, "dark").unwrap();

        let reopened = FileThemeStore::new(&path);
        assert_eq!(reopened.load(THEME_KEY).unwrap().as_deref(), Some("dark"));
        assert_eq!(reopened.load("layout").unwrap().as_deref(), Some("compact"));
    }

    #[test]
    fn file_store_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a").join("b").join("prefs.yaml");
        let mut store = FileThemeStore::new(&path);
        store.store(THEME_KEY, "light").unwrap();
        assert!(path.exists());
    }
}
