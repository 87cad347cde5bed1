// Application settings
// Loaded from ~/.config/gridfill/settings.json

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Re-fill watcher tunables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WatcherSettings {
    /// Debounce window between a qualifying mutation batch and the re-fill.
    pub debounce_ms: u64,

    /// Re-fill budget for one observation session.
    pub max_retries: u32,

    /// Absolute cap on one observation session, measured from its start.
    pub expiry_secs: u64,
}

impl Default for WatcherSettings {
    fn default() -> Self {
        Self {
            debounce_ms: 300, // collapse one render burst into one re-fill
            max_retries: 10,
            expiry_secs: 30,
        }
    }
}

impl WatcherSettings {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn expiry(&self) -> Duration {
        Duration::from_secs(self.expiry_secs)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub watcher: WatcherSettings,
}

impl Settings {
    /// Get the settings file path: `~/.config/gridfill/settings.json`
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("gridfill");
        config_dir.join("settings.json")
    }

    /// Load settings, falling back to defaults on a missing or malformed
    /// file. A bad settings file must never keep a fill from running.
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    eprintln!("Error parsing {}: {}", path.display(), e);
                    eprintln!("Using default settings");
                    Self::default()
                }
            },
            Err(e) => {
                eprintln!("Error reading {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| e.to_string())?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| e.to_string())?;
        fs::write(path, json).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let settings = WatcherSettings::default();
        assert_eq!(settings.debounce(), Duration::from_millis(300));
        assert_eq!(settings.max_retries, 10);
        assert_eq!(settings.expiry(), Duration::from_secs(30));
    }

    #[test]
    fn partial_json_keeps_defaults_for_the_rest() {
        let settings: Settings =
            serde_json::from_str(r#"{"watcher": {"max_retries": 3}}"#).unwrap();
        assert_eq!(settings.watcher.max_retries, 3);
        assert_eq!(settings.watcher.debounce_ms, 300);
        assert_eq!(settings.watcher.expiry_secs, 30);
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let mut settings = Settings::default();
        settings.watcher.debounce_ms = 150;
        settings.save_to(&path).unwrap();

        let loaded = Settings::load_from(&path);
        assert_eq!(loaded, settings);
    }

    #[test]
    fn missing_and_malformed_files_fall_back() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        assert_eq!(Settings::load_from(&missing), Settings::default());

        let bad = dir.path().join("bad.json");
        fs::write(&bad, "{not json").unwrap();
        assert_eq!(Settings::load_from(&bad), Settings::default());
    }
}
