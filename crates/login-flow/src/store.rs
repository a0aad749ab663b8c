//! Persistence of the chosen UI language under a single key.

use crate::locale::LanguageCode;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::io::{self, Write as _};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

/// The key the language tag is stored under.
pub const PREFERENCE_KEY: &str = "LANG";

#[derive(Debug, Error)]
pub enum StoreError {
    /// The preferences file could not be read or written.
    #[error("Failed to access preferences at '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The preference could not be serialized.
    #[error("Failed to encode preferences: {0}")]
    Encode(#[from] toml::ser::Error),
    /// The backing storage refuses writes.
    #[error("Preference storage is unavailable")]
    Unavailable,
}

/// Durable storage for the language preference.
///
/// Reads never fail: a missing, unreadable or unrecognized value is reported
/// as `None` and the caller falls back to the default language.
pub trait LocaleStore: Send + Sync {
    fn get(&self) -> Option<LanguageCode>;
    fn set(&self, code: LanguageCode) -> Result<(), StoreError>;
}

#[derive(Debug, Default, Deserialize, Serialize)]
struct PreferencesFile {
    #[serde(rename = "LANG", default, skip_serializing_if = "Option::is_none")]
    lang: Option<String>,
}

/// A [`LocaleStore`] backed by a TOML file.
#[derive(Clone, Debug)]
pub struct FileLocaleStore {
    path: PathBuf,
}

impl FileLocaleStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Option<String>, String> {
        let content = match fs_err::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.to_string()),
        };
        let file: PreferencesFile = toml::from_str(&content).map_err(|err| err.to_string())?;
        Ok(file.lang)
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl LocaleStore for FileLocaleStore {
    fn get(&self) -> Option<LanguageCode> {
        match self.read() {
            Ok(Some(tag)) => match tag.parse() {
                Ok(code) => Some(code),
                Err(err) => {
                    tracing::warn!("Ignoring stored {}: {}", PREFERENCE_KEY, err);
                    None
                },
            },
            Ok(None) => None,
            Err(err) => {
                tracing::warn!(
                    "Could not read preferences from '{}': {}",
                    self.path.display(),
                    err
                );
                None
            },
        }
    }

    fn set(&self, code: LanguageCode) -> Result<(), StoreError> {
        let content = toml::to_string(&PreferencesFile {
            lang: Some(code.as_str().to_string()),
        })?;

        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs_err::create_dir_all(parent).map_err(|err| self.io_error(err))?;

        // A uniquely named sibling, so concurrent writers never share a staging file.
        let mut staging = NamedTempFile::new_in(parent).map_err(|err| self.io_error(err))?;
        staging
            .write_all(content.as_bytes())
            .map_err(|err| self.io_error(err))?;
        staging
            .persist(&self.path)
            .map_err(|err| self.io_error(err.error))?;

        tracing::debug!("Stored {} = {} in '{}'", PREFERENCE_KEY, code, self.path.display());
        Ok(())
    }
}

/// A [`LocaleStore`] that lives only as long as the process.
#[derive(Debug, Default)]
pub struct MemoryLocaleStore {
    value: Mutex<Option<LanguageCode>>,
    unavailable: bool,
}

impl MemoryLocaleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(code: LanguageCode) -> Self {
        Self {
            value: Mutex::new(Some(code)),
            unavailable: false,
        }
    }

    /// A store whose writes always fail.
    pub fn unavailable() -> Self {
        Self {
            value: Mutex::new(None),
            unavailable: true,
        }
    }
}

impl LocaleStore for MemoryLocaleStore {
    fn get(&self) -> Option<LanguageCode> {
        *self.value.lock()
    }

    fn set(&self, code: LanguageCode) -> Result<(), StoreError> {
        if self.unavailable {
            return Err(StoreError::Unavailable);
        }
        *self.value.lock() = Some(code);
        Ok(())
    }
}
