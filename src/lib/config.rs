use crate::literal::ReportMode;
use crate::syntax::DataModel;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub mode: ReportMode,
    pub data_model: DataModel,
    /// Treat warnings as failures when computing the exit status.
    pub deny_warnings: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            mode: ReportMode::default(),
            data_model: DataModel::default(),
            deny_warnings: false,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl Config {
    pub const FILE_NAME: &'static str = "portlit.yml";

    pub fn from_yaml(yaml: &str) -> Result<Config, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Config::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        let yaml = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&yaml)
    }

    /// Loads `portlit.yml` from `dir` if present, defaults otherwise.
    pub fn discover(dir: &Path) -> Result<Config, ConfigError> {
        let path = dir.join(Self::FILE_NAME);
        if path.is_file() {
            info!("Using configuration {}", path.display());
            Self::load(&path)
        } else {
            Ok(Config::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.mode, ReportMode::FirstMatch);
        assert_eq!(config.data_model, DataModel::LP64);
        assert!(!config.deny_warnings);
    }

    #[test]
    fn empty_document_is_default() {
        assert_eq!(Config::from_yaml("").unwrap(), Config::default());
    }

    #[test]
    fn partial_document() {
        let config = Config::from_yaml("mode: all-reasons\n").unwrap();
        assert_eq!(config.mode, ReportMode::AllReasons);
        assert_eq!(config.data_model, DataModel::LP64);
    }

    #[test]
    fn full_document() {
        let config =
            Config::from_yaml("mode: first-match\ndata_model: ilp32\ndeny_warnings: true\n")
                .unwrap();
        assert_eq!(
            config,
            Config {
                mode: ReportMode::FirstMatch,
                data_model: DataModel::ILP32,
                deny_warnings: true,
            }
        );
    }

    #[test]
    fn rejects_unknown_mode() {
        let error = Config::from_yaml("mode: loud\n").unwrap_err();
        assert!(matches!(error, ConfigError::Yaml(_)));
    }

    #[test]
    fn missing_file() {
        let error = Config::load(Path::new("/nonexistent/portlit.yml")).unwrap_err();
        assert!(error.to_string().starts_with("failed to read /nonexistent/portlit.yml"));
    }
}
