//! TOML configuration file.
//!
//! A single optional file (`verdant.toml` by default) holds the window
//! settings at its top level and one table per program-specific section:
//!
//! ```toml
//! title = "Grass"
//! width = 1280
//! msaa_samples = 1
//! log_level = "debug"
//!
//! [grass]
//! blade_count = 20000
//! ```
//!
//! A missing file means "all defaults". A file that exists but does not
//! parse is an error.
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::builder::AppConfig;

pub const DEFAULT_CONFIG_PATH: &str = "verdant.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read `{path}`")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse `{path}`")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("msaa_samples must be 1 or 4, got {0}")]
    InvalidMsaa(u32),
}

/// Parsed contents of the configuration file.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    path: PathBuf,
    table: toml::Table,
    found: bool,
}

impl ConfigFile {
    /// Reads `path`, falling back to an empty table when it does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(text) => Self::parse(path, &text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self {
                path: path.to_path_buf(),
                table: toml::Table::new(),
                found: false,
            }),
            Err(source) => Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Parses `text` as if it had been read from `path`.
    pub fn parse(path: impl AsRef<Path>, text: &str) -> Result<Self, ConfigError> {
        let path = path.as_ref().to_path_buf();
        let table = text.parse::<toml::Table>().map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })?;
        Ok(Self {
            path,
            table,
            found: true,
        })
    }

    /// Whether the file existed on disk.
    #[inline]
    pub fn found(&self) -> bool {
        self.found
    }

    /// Whether the top level of the file sets `key`.
    pub fn has_key(&self, key: &str) -> bool {
        self.table.contains_key(key)
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Window/runner settings from the top level of the file.
    pub fn app(&self) -> Result<AppConfig, ConfigError> {
        let config: AppConfig = self.deserialize(toml::Value::Table(self.table.clone()))?;
        config.validate()?;
        Ok(config)
    }

    /// Deserialises table `name`, or returns `T::default()` when absent.
    pub fn section<T: DeserializeOwned + Default>(&self, name: &str) -> Result<T, ConfigError> {
        match self.table.get(name) {
            Some(value) => self.deserialize(value.clone()),
            None => Ok(T::default()),
        }
    }

    fn deserialize<T: DeserializeOwned>(&self, value: toml::Value) -> Result<T, ConfigError> {
        value.try_into().map_err(|source| ConfigError::Parse {
            path: self.path.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Default, PartialEq, Deserialize)]
    #[serde(default)]
    struct Extra {
        count: usize,
    }

    #[test]
    fn missing_file_gives_defaults() {
        let file = ConfigFile::load("definitely/not/here/verdant.toml").unwrap();
        assert!(!file.found());
        assert_eq!(file.app().unwrap(), AppConfig::default());
        assert_eq!(file.section::<Extra>("extra").unwrap(), Extra::default());
    }

    #[test]
    fn partial_file_overrides_only_given_keys() {
        let file = ConfigFile::parse(
            "verdant.toml",
            "title = \"Test\"\nvsync = false\n\n[extra]\ncount = 7\n",
        )
        .unwrap();
        let app = file.app().unwrap();
        assert_eq!(app.title, "Test");
        assert!(!app.vsync);
        assert_eq!(app.width, AppConfig::default().width);
        assert!(file.has_key("title"));
        assert!(!file.has_key("width"));
        assert_eq!(file.section::<Extra>("extra").unwrap().count, 7);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let err = ConfigFile::parse("verdant.toml", "title = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn wrong_type_is_an_error() {
        let file = ConfigFile::parse("verdant.toml", "width = \"wide\"").unwrap();
        assert!(matches!(file.app(), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn unsupported_msaa_is_rejected() {
        let file = ConfigFile::parse("verdant.toml", "msaa_samples = 3").unwrap();
        assert!(matches!(file.app(), Err(ConfigError::InvalidMsaa(3))));
    }

    #[test]
    fn log_level_parses_case_insensitively() {
        let file = ConfigFile::parse("verdant.toml", "log_level = \"DEBUG\"").unwrap();
        assert_eq!(file.app().unwrap().log_level, log::LevelFilter::Debug);
    }
}
