use crate::theme::PaletteType;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";
pub const DEFAULT_DEBOUNCE_MS: u64 = 800;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub endpoint: String,
    pub debounce_ms: u64,
    pub timeout_secs: u64,
    pub theme: PaletteType,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            theme: PaletteType::CatppuccinMocha,
        }
    }
}

impl Config {
    /// Loads `~/.config/sift/config.toml`, falling back to defaults.
    #[must_use]
    pub fn load() -> Self {
        match get_config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Self::default();
        }

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to read config");
                return Self::default();
            }
        };

        match toml::from_str::<Config>(&content) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "loaded config");
                config
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "malformed config");
                Self::default()
            }
        }
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

pub fn config_dir() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".config");
        path.push("sift");
        path
    })
}

pub fn get_config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml"));
        assert_eq!(config, Config::default());
        assert_eq!(config.debounce(), Duration::from_millis(800));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "debounce_ms = 250").unwrap();
        writeln!(file, "theme = \"nord\"").unwrap();

        let config = Config::load_from(file.path());
        assert_eq!(config.debounce_ms, 250);
        assert_eq!(config.theme, PaletteType::Nord);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_malformed_file_is_default() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "debounce_ms = \"soon\"").unwrap();
        assert_eq!(Config::load_from(file.path()), Config::default());
    }
}
