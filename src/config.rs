//! Application configuration.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_DIR: &str = ".restaurant-viewer";
const CONFIG_FILE: &str = "config.json";

/// Polling interval per view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshIntervals {
    pub home: Duration,
    pub dashboard: Duration,
    pub staff: Duration,
}

impl Default for RefreshIntervals {
    fn default() -> Self {
        Config::default().refresh_intervals()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// API base URL. Falls back to the local environment when unset.
    pub api_url: Option<String>,
    pub home_refresh_secs: u64,
    pub dashboard_refresh_secs: u64,
    pub staff_refresh_secs: u64,
    pub with_background_color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: None,
            home_refresh_secs: 5,
            dashboard_refresh_secs: 5,
            staff_refresh_secs: 3,
            with_background_color: true,
        }
    }
}

impl Config {
    /// Loads configuration from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, std::io::Error> {
        let buf = fs::read(path)?;
        let config: Config = serde_json::from_slice(&buf)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }

    /// Loads the configuration file if one exists, otherwise returns the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, std::io::Error> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Saves the configuration to a JSON file at the given path.
    ///
    /// Directories will be created if they don't exist. This method overwrites existing files.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Serialization failed: {}", e),
            )
        })?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Removes the configuration file. A missing file is not an error.
    pub fn clear(path: &Path) -> Result<(), std::io::Error> {
        if !path.ends_with(CONFIG_FILE) {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("Path must end with {}", CONFIG_FILE),
            ));
        }
        if !path.exists() {
            return Ok(());
        }
        fs::remove_file(path)
    }

    /// Refresh intervals, with zero values clamped to one second.
    pub fn refresh_intervals(&self) -> RefreshIntervals {
        let secs = |value: u64| Duration::from_secs(value.max(1));
        RefreshIntervals {
            home: secs(self.home_refresh_secs),
            dashboard: secs(self.dashboard_refresh_secs),
            staff: secs(self.staff_refresh_secs),
        }
    }
}

/// Fields to change in a stored configuration. `None` leaves a field as it is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigUpdate {
    pub api_url: Option<String>,
    pub home_refresh_secs: Option<u64>,
    pub dashboard_refresh_secs: Option<u64>,
    pub staff_refresh_secs: Option<u64>,
    pub with_background_color: Option<bool>,
}

impl ConfigUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Apply the given fields. An empty API URL clears the stored one.
    pub fn apply(self, config: &mut Config) {
        if let Some(url) = self.api_url {
            let url = url.trim().to_string();
            config.api_url = if url.is_empty() { None } else { Some(url) };
        }
        if let Some(secs) = self.home_refresh_secs {
            config.home_refresh_secs = secs;
        }
        if let Some(secs) = self.dashboard_refresh_secs {
            config.dashboard_refresh_secs = secs;
        }
        if let Some(secs) = self.staff_refresh_secs {
            config.staff_refresh_secs = secs;
        }
        if let Some(enabled) = self.with_background_color {
            config.with_background_color = enabled;
        }
    }
}

/// Location of the configuration file under the user's home directory.
pub fn get_config_path() -> Result<PathBuf, std::io::Error> {
    let home = home::home_dir().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    Ok(home.join(CONFIG_DIR).join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    // Loading a saved configuration file should return the same configuration.
    fn test_load_recovers_saved_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = Config {
            api_url: Some("http://10.0.0.2:8000".to_string()),
            staff_refresh_secs: 10,
            ..Config::default()
        };
        config.save(&path).unwrap();

        let loaded_config = Config::load_from_file(&path).unwrap();
        assert_eq!(config, loaded_config);
    }

    #[test]
    // Saving a configuration should create directories if they don't exist.
    fn test_save_creates_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nonexistent_dir").join("config.json");

        let result = Config::default().save(&path);

        assert!(result.is_ok(), "Failed to save config");
        assert!(path.parent().unwrap().exists());
    }

    #[test]
    // Fields missing from the file take their default values.
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"dashboard_refresh_secs": 8}"#).unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.dashboard_refresh_secs, 8);
        assert_eq!(config.home_refresh_secs, 5);
        assert_eq!(config.staff_refresh_secs, 3);
        assert!(config.with_background_color);
    }

    #[test]
    fn test_load_or_default_without_file() {
        let dir = tempdir().unwrap();
        let config = Config::load_or_default(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    // Loading an invalid JSON file should return an error.
    fn test_load_rejects_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("invalid_config.json");

        let mut file = File::create(&path).unwrap();
        writeln!(file, "invalid json").unwrap();

        assert!(Config::load_from_file(&path).is_err());
    }

    #[test]
    fn test_clear_removes_file_and_tolerates_missing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        Config::default().save(&path).unwrap();

        Config::clear(&path).unwrap();
        assert!(!path.exists());
        assert!(Config::clear(&path).is_ok());
        assert!(Config::clear(&dir.path().join("other.json")).is_err());
    }

    #[test]
    fn test_update_only_touches_given_fields() {
        let mut config = Config {
            api_url: Some("http://old:8000".to_string()),
            ..Config::default()
        };
        ConfigUpdate {
            staff_refresh_secs: Some(10),
            with_background_color: Some(false),
            ..ConfigUpdate::default()
        }
        .apply(&mut config);

        assert_eq!(config.api_url.as_deref(), Some("http://old:8000"));
        assert_eq!(config.staff_refresh_secs, 10);
        assert_eq!(config.home_refresh_secs, 5);
        assert!(!config.with_background_color);

        ConfigUpdate {
            api_url: Some(" ".to_string()),
            ..ConfigUpdate::default()
        }
        .apply(&mut config);
        assert_eq!(config.api_url, None);
        assert!(ConfigUpdate::default().is_empty());
    }

    #[test]
    fn test_refresh_intervals() {
        let intervals = Config::default().refresh_intervals();
        assert_eq!(intervals.home, Duration::from_secs(5));
        assert_eq!(intervals.dashboard, Duration::from_secs(5));
        assert_eq!(intervals.staff, Duration::from_secs(3));

        let config = Config {
            home_refresh_secs: 0,
            ..Config::default()
        };
        assert_eq!(config.refresh_intervals().home, Duration::from_secs(1));
    }
}
