use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::app_dirs::AppDirs;
use crate::error::{BoardError, BoardResult};
use crate::signal::DEFAULT_HISTORY;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub focus_minutes: u32,
    pub signal_interval_ms: u64,
    pub timer_interval_ms: u64,
    /// Redraw/poll interval of the UI loop
    pub frame_ms: u64,
    pub history: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            focus_minutes: 25,
            signal_interval_ms: 50,
            timer_interval_ms: 1_000,
            frame_ms: 100,
            history: DEFAULT_HISTORY,
        }
    }
}

impl Config {
    pub fn focus_secs(&self) -> u32 {
        self.focus_minutes.saturating_mul(60)
    }

    pub fn validate(&self) -> BoardResult<()> {
        let invalid = |field: &'static str, reason: &'static str| -> BoardResult<()> {
            Err(BoardError::InvalidSetting { field, reason })
        };

        if self.focus_minutes == 0 {
            return invalid("focus_minutes", "must be at least 1");
        }
        if self.signal_interval_ms == 0 {
            return invalid("signal_interval_ms", "must be at least 1");
        }
        if self.timer_interval_ms == 0 {
            return invalid("timer_interval_ms", "must be at least 1");
        }
        if self.frame_ms == 0 {
            return invalid("frame_ms", "must be at least 1");
        }
        if self.history == 0 {
            return invalid("history", "must hold at least one sample");
        }
        Ok(())
    }
}

pub trait ConfigStore {
    fn load(&self) -> Config;
    fn save(&self, cfg: &Config) -> BoardResult<()>;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    pub fn new() -> Self {
        Self {
            path: AppDirs::config_path(),
        }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    /// Missing or malformed files fall back to defaults.
    fn load(&self) -> Config {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(_) => return Config::default(),
        };
        match serde_json::from_slice::<Config>(&bytes) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::warn!("ignoring config {}: {e}", self.path.display());
                Config::default()
            }
        }
    }

    fn save(&self, cfg: &Config) -> BoardResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(cfg)?;
        fs::write(&self.path, data)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use tempfile::tempdir;

    #[test]
    fn default_config_is_valid() {
        let cfg = Config::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.focus_secs(), 1500);
        assert_eq!(cfg.history, 100);
    }

    #[test]
    fn save_and_load_custom_config() {
        let dir = tempdir().unwrap();
        let store = FileConfigStore::with_path(dir.path().join("nested").join("config.json"));
        let cfg = Config {
            focus_minutes: 50,
            signal_interval_ms: 20,
            timer_interval_ms: 500,
            frame_ms: 33,
            history: 240,
        };
        store.save(&cfg).unwrap();
        assert_eq!(store.load(), cfg);
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempdir().unwrap();
        let store = FileConfigStore::with_path(dir.path().join("absent.json"));
        assert_eq!(store.load(), Config::default());
    }

    #[test]
    fn malformed_file_loads_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, b"{ not json").unwrap();
        assert_eq!(FileConfigStore::with_path(&path).load(), Config::default());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, br#"{ "focus_minutes": 45 }"#).unwrap();

        let cfg = FileConfigStore::with_path(&path).load();
        assert_eq!(cfg.focus_minutes, 45);
        assert_eq!(cfg.signal_interval_ms, 50);
        assert_eq!(cfg.history, 100);
    }

    #[test]
    fn validate_rejects_zero_values() {
        let cfg = Config {
            focus_minutes: 0,
            ..Config::default()
        };
        assert_matches!(
            cfg.validate(),
            Err(BoardError::InvalidSetting {
                field: "focus_minutes",
                ..
            })
        );

        let cfg = Config {
            history: 0,
            ..Config::default()
        };
        assert_matches!(
            cfg.validate(),
            Err(BoardError::InvalidSetting {
                field: "history",
                ..
            })
        );

        let cfg = Config {
            signal_interval_ms: 0,
            ..Config::default()
        };
        assert!(cfg.validate().is_err());
    }
}
