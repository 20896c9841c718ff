//! User settings loaded from TOML.

use crate::i18n::Locale;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};
use xo_engine::Mode;

/// File looked up in the working directory when no path is given.
pub const DEFAULT_SETTINGS_FILE: &str = "strictly_xo.toml";

/// Game preferences. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Display language at startup.
    locale: Locale,

    /// Board size at startup.
    mode: Mode,

    /// Where the terminal UI writes its log.
    log_file: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            mode: Mode::default(),
            log_file: PathBuf::from("strictly_xo.log"),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read settings file: {}", e)))?;

        let settings = Self::from_toml(&content)?;
        info!(locale = %settings.locale, mode = %settings.mode, "Settings loaded");
        Ok(settings)
    }

    /// Parses settings from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))
    }

    /// Loads `path` if given, else [`DEFAULT_SETTINGS_FILE`] when present,
    /// else defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_SETTINGS_FILE).exists() => {
                Self::from_file(DEFAULT_SETTINGS_FILE)
            }
            None => {
                debug!("No settings file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Applies command-line overrides.
    #[instrument(skip(self))]
    pub fn with_overrides(mut self, mode: Option<Mode>, locale: Option<Locale>) -> Self {
        if let Some(mode) = mode {
            self.mode = mode;
        }
        if let Some(locale) = locale {
            self.locale = locale;
        }
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
