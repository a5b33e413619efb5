//! Configuration loading and management.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use ot_core::{GridLayout, Schedule, TrackerConfig, TrackerError};
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Tracking constants: lookahead, lookback, language aliases, grid width.
    pub tracker: TrackerConfig,

    /// Slot definitions (`"HH:MM-HH:MM"`), laid out according to `layout`.
    pub slots: Vec<Vec<String>>,

    /// Whether `slots` has a row per day or a row per slot.
    pub layout: GridLayout,

    /// Leading log lines to skip before scanning (column headers).
    pub header_rows: usize,
}

impl Default for Config {
    fn default() -> Self {
        let row = |interval: &str| vec![interval.to_string(), interval.to_string()];
        Self {
            tracker: TrackerConfig::default(),
            slots: vec![row("08:00-09:00"), row("09:00-10:00")],
            layout: GridLayout::SlotMajor,
            header_rows: 1,
        }
    }
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (OT_*, nested keys split on `__`)
        figment = figment.merge(Env::prefixed("OT_").split("__"));

        figment.extract()
    }

    /// Builds a fresh, zero-count schedule from the slot definitions.
    pub fn schedule(&self) -> Result<Schedule, TrackerError> {
        Schedule::from_definitions(&self.slots, self.layout, self.tracker.grid_shape())
    }
}

/// Returns the platform-specific config directory for ot.
///
/// On Linux: `~/.config/ot`
pub fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("ot"))
}
