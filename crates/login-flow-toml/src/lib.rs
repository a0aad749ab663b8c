#![doc = include_str!("../README.md")]

use login_flow::screen::ValidationMode;
use login_flow::{LanguageCode, UnknownLanguage};
use serde::{Deserialize, Serialize};
use std::env;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name looked up in the working directory when no path is given.
pub const CONFIG_FILE: &str = "login-flow.toml";

/// Environment variable overriding `preferences_path`.
pub const PREFERENCES_ENV: &str = "LOGIN_FLOW_PREFERENCES";

const DEFAULT_PREFERENCES_PATH: &str = ".login-flow/preferences.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found.
    #[error("configuration file '{}' not found", .0.display())]
    NotFound(PathBuf),
    /// Failed to read configuration file.
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] io::Error),
    /// Failed to parse configuration file.
    #[error("Failed to parse configuration file: {0}")]
    ParseError(#[from] toml::de::Error),
    /// The fallback language is not one of the supported languages.
    #[error("Invalid fallback language '{name}'")]
    InvalidFallbackLanguage {
        name: String,
        #[source]
        source: UnknownLanguage,
    },
}

/// The configuration for `login-flow`.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Language used when no preference is stored (e.g., "en").
    #[serde(default = "default_fallback_language")]
    pub fallback_language: String,
    /// Where the language preference is kept.
    #[serde(default = "default_preferences_path")]
    pub preferences_path: PathBuf,
    /// When form errors are recomputed.
    #[serde(default)]
    pub validation: ValidationMode,
    /// File receiving logs while the interactive screen is up.
    #[serde(default)]
    pub log_file: Option<PathBuf>,
    /// Directory relative paths are resolved against.
    #[serde(skip)]
    base_dir: PathBuf,
}

fn default_fallback_language() -> String {
    LanguageCode::default().to_string()
}

fn default_preferences_path() -> PathBuf {
    PathBuf::from(DEFAULT_PREFERENCES_PATH)
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            fallback_language: default_fallback_language(),
            preferences_path: default_preferences_path(),
            validation: ValidationMode::default(),
            log_file: None,
            base_dir: PathBuf::from("."),
        }
    }
}

impl AppConfig {
    /// Reads the configuration from a path.
    pub fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let content = fs_err::read_to_string(path)?;
        let mut config: AppConfig = toml::from_str(&content)?;
        config.base_dir = path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf);

        tracing::debug!("Loaded configuration from '{}'", path.display());
        Ok(config)
    }

    /// Reads `explicit` if given, otherwise `login-flow.toml` in `dir` when present.
    ///
    /// A missing default file yields the default configuration rooted at `dir`.
    pub fn load(explicit: Option<&Path>, dir: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::read_from_path(path);
        }

        let candidate = dir.join(CONFIG_FILE);
        if candidate.exists() {
            return Self::read_from_path(candidate);
        }

        Ok(Self {
            base_dir: dir.to_path_buf(),
            ..Self::default()
        })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Returns the configured fallback language as a [`LanguageCode`].
    pub fn fallback_language_code(&self) -> Result<LanguageCode, ConfigError> {
        self.fallback_language
            .parse()
            .map_err(|source| ConfigError::InvalidFallbackLanguage {
                name: self.fallback_language.clone(),
                source,
            })
    }

    /// Location of the preferences file.
    ///
    /// `explicit` wins over the environment, which wins over the file.
    pub fn preferences_path(&self, explicit: Option<&Path>) -> PathBuf {
        if let Some(path) = explicit {
            return path.to_path_buf();
        }
        if let Some(path) = env::var_os(PREFERENCES_ENV).filter(|value| !value.is_empty()) {
            return PathBuf::from(path);
        }
        self.resolve(&self.preferences_path)
    }

    pub fn log_file_path(&self) -> Option<PathBuf> {
        self.log_file.as_deref().map(|path| self.resolve(path))
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }
}
