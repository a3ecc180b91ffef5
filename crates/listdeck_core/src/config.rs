//! Application configuration.
//!
//! # Responsibility
//! - Load settings from a TOML file, defaulting every missing field.
//! - Apply per-run overrides from the command line.
//! - Resolve empty path/level settings to platform defaults.
//!
//! # Invariants
//! - A missing config file is not an error; it yields defaults.
//! - `pass_mark` stays within the marks range after validation.

use crate::analytics::PASS_MARK;
use crate::logging::default_log_level;
use crate::model::student::{MAX_MARKS, MIN_MARKS};
use crate::remote::DEFAULT_ENDPOINT;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

const APP_DIR_NAME: &str = "listdeck";
const CONFIG_FILE_NAME: &str = "config.toml";
const DB_FILE_NAME: &str = "listdeck.sqlite3";
const LOG_DIR_NAME: &str = "logs";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: io::Error },
    Parse(toml::de::Error),
    Serialize(toml::ser::Error),
    Invalid(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid config file: {err}"),
            Self::Serialize(err) => write!(f, "failed to serialize config: {err}"),
            Self::Invalid(message) => write!(f, "invalid config value: {message}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::Serialize(err) => Some(err),
            Self::Invalid(_) => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// SQLite file; empty means `<data dir>/listdeck/listdeck.sqlite3`.
    pub db_path: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `trace|debug|info|warn|error`; empty means the build-mode default.
    pub level: String,
    /// Absolute log directory; empty means `<data dir>/listdeck/logs`.
    pub dir: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub pass_mark: f64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            pass_mark: PASS_MARK,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    pub endpoint: String,
    pub timeout_secs: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
    pub dashboard: DashboardConfig,
    pub remote: RemoteConfig,
}

/// Per-run values from the command line. `None` keeps the file value.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub db_path: Option<PathBuf>,
    pub log_level: Option<String>,
    pub log_dir: Option<PathBuf>,
}

impl AppConfig {
    /// `<config dir>/listdeck`, e.g. `~/.config/listdeck` on Linux.
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR_NAME)
    }

    /// `<data dir>/listdeck`, e.g. `~/.local/share/listdeck` on Linux.
    pub fn data_dir() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR_NAME)
    }

    pub fn default_path() -> PathBuf {
        Self::config_dir().join(CONFIG_FILE_NAME)
    }

    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::Serialize)
    }

    /// Loads `path`, or defaults when the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match read_source(path)? {
            Some(source) => Self::from_toml(&source),
            None => Ok(Self::default()),
        }
    }

    /// Loads `path` like [`AppConfig::load_from`], except that invalid values
    /// are reset to their defaults instead of rejecting the whole file.
    ///
    /// Returns the config and one message per reset key.
    pub fn load_repaired(path: &Path) -> Result<(Self, Vec<String>), ConfigError> {
        let Some(source) = read_source(path)? else {
            return Ok((Self::default(), Vec::new()));
        };
        let mut config: Self = toml::from_str(&source).map_err(ConfigError::Parse)?;
        let rejected = config.repair();
        Ok((config, rejected))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        match pass_mark_problem(self.dashboard.pass_mark)
            .or_else(|| endpoint_problem(&self.remote.endpoint))
        {
            Some(message) => Err(ConfigError::Invalid(message)),
            None => Ok(()),
        }
    }

    /// Resets each invalid field to its default and reports it.
    pub fn repair(&mut self) -> Vec<String> {
        let mut rejected = Vec::new();
        if let Some(message) = pass_mark_problem(self.dashboard.pass_mark) {
            rejected.push(message);
            self.dashboard.pass_mark = DashboardConfig::default().pass_mark;
        }
        if let Some(message) = endpoint_problem(&self.remote.endpoint) {
            rejected.push(message);
            self.remote.endpoint = RemoteConfig::default().endpoint;
        }
        rejected
    }

    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(db_path) = &overrides.db_path {
            self.storage.db_path = db_path.display().to_string();
        }
        if let Some(level) = &overrides.log_level {
            self.logging.level.clone_from(level);
        }
        if let Some(dir) = &overrides.log_dir {
            self.logging.dir = dir.display().to_string();
        }
    }

    pub fn resolved_db_path(&self) -> PathBuf {
        non_empty_path(&self.storage.db_path).unwrap_or_else(|| Self::data_dir().join(DB_FILE_NAME))
    }

    pub fn resolved_log_dir(&self) -> PathBuf {
        non_empty_path(&self.logging.dir).unwrap_or_else(|| Self::data_dir().join(LOG_DIR_NAME))
    }

    pub fn resolved_log_level(&self) -> String {
        let level = self.logging.level.trim();
        if level.is_empty() {
            default_log_level().to_string()
        } else {
            level.to_string()
        }
    }

    pub fn remote_timeout(&self) -> Duration {
        Duration::from_secs(self.remote.timeout_secs)
    }
}

fn read_source(path: &Path) -> Result<Option<String>, ConfigError> {
    match fs::read_to_string(path) {
        Ok(source) => Ok(Some(source)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(ConfigError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn pass_mark_problem(pass_mark: f64) -> Option<String> {
    (!pass_mark.is_finite() || !(MIN_MARKS..=MAX_MARKS).contains(&pass_mark)).then(|| {
        format!("dashboard.pass_mark must be within {MIN_MARKS}..={MAX_MARKS}, got {pass_mark}")
    })
}

fn endpoint_problem(endpoint: &str) -> Option<String> {
    endpoint
        .trim()
        .is_empty()
        .then(|| "remote.endpoint cannot be empty".to_string())
}

fn non_empty_path(value: &str) -> Option<PathBuf> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| PathBuf::from(trimmed))
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, ConfigError, ConfigOverrides};
    use std::path::PathBuf;

    #[test]
    fn empty_source_yields_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.dashboard.pass_mark, 40.0);
        assert_eq!(config.remote.endpoint, "https://randomuser.me/api/");
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = AppConfig::from_toml("[dashboard]\npass_mark = 50\n").unwrap();
        assert_eq!(config.dashboard.pass_mark, 50.0);
        assert_eq!(config.remote.timeout_secs, 30);
    }

    #[test]
    fn out_of_range_pass_mark_is_rejected() {
        let err = AppConfig::from_toml("[dashboard]\npass_mark = 140.0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn repair_resets_only_invalid_keys() {
        let mut config: AppConfig = toml::from_str(
            "[logging]\nlevel = \"warn\"\n[dashboard]\npass_mark = 140.0\n[remote]\nendpoint = \" \"\n",
        )
        .unwrap();

        let rejected = config.repair();
        assert_eq!(rejected.len(), 2);
        assert!(rejected[0].starts_with("dashboard.pass_mark"));
        assert!(rejected[1].starts_with("remote.endpoint"));
        assert_eq!(config.dashboard.pass_mark, 40.0);
        assert_eq!(config.remote.endpoint, "https://randomuser.me/api/");
        assert_eq!(config.logging.level, "warn");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn overrides_replace_file_values() {
        let mut config = AppConfig::from_toml("[logging]\nlevel = \"warn\"\n").unwrap();
        config.apply_overrides(&ConfigOverrides {
            db_path: Some(PathBuf::from("/tmp/custom.sqlite3")),
            log_level: Some("debug".to_string()),
            log_dir: None,
        });
        assert_eq!(config.resolved_log_level(), "debug");
        assert_eq!(
            config.resolved_db_path(),
            PathBuf::from("/tmp/custom.sqlite3")
        );
    }
}
