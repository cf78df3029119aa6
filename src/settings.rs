//! Layered settings: optional file, then `HEALTH_DASHBOARD_*` environment
//! variables. Command-line overrides are applied by the binary.

use std::path::{Path, PathBuf};
use std::time::Duration;

use config::{Config, Environment, File, Map};
use serde::Deserialize;
use thiserror::Error;

use crate::data::HealthRecord;
use crate::ui::ThemeMode;

/// Prefix for environment overrides, e.g. `HEALTH_DASHBOARD_THEME=light`.
pub const ENV_PREFIX: &str = "HEALTH_DASHBOARD";

/// Errors raised while loading settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to load configuration: {0}")]
    Config(#[from] config::ConfigError),

    #[error("tick_rate_ms must be greater than zero")]
    InvalidTickRate,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Log destination. The TUI owns stdout, so interactive runs only log
    /// when this is set.
    pub file: Option<PathBuf>,
    /// Filter used when `RUST_LOG` is unset.
    pub level: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            file: None,
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub theme: ThemeMode,
    /// Event poll timeout for the interactive loop.
    pub tick_rate_ms: u64,
    pub log: LogSettings,
    /// Data shown on screen. Sections left out keep the built-in values.
    pub dashboard: HealthRecord,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: ThemeMode::default(),
            tick_rate_ms: 250,
            log: LogSettings::default(),
            dashboard: HealthRecord::default(),
        }
    }
}

impl Settings {
    /// Load settings from an optional file plus the environment.
    ///
    /// A path that is given must exist; its format follows the extension.
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        Self::load_with_env(path, None)
    }

    /// Like [`Settings::load`], reading `vars` in place of the process
    /// environment when given.
    fn load_with_env(
        path: Option<&Path>,
        vars: Option<Map<String, String>>,
    ) -> Result<Self, SettingsError> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }
        let settings: Settings = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(vars),
            )
            .build()?
            .try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), SettingsError> {
        if self.tick_rate_ms == 0 {
            return Err(SettingsError::InvalidTickRate);
        }
        Ok(())
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}
