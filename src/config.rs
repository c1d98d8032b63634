//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/standup/standup.toml`
//! 3. Environment variables: `STANDUP_*` prefix
//!
//! Command line flags override all of these.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;
use crate::domain::{expand_env_vars, ShuffleMode};

/// Raw settings for intermediate parsing (`None` means "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub shuffle: Option<ShuffleMode>,
    pub team_file: Option<PathBuf>,
    pub numbered: Option<bool>,
}

/// Unified configuration for standup.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Shuffle mode when `--shuffle` is not given
    pub shuffle: ShuffleMode,
    /// Team file when `--filename` is not given
    pub team_file: Option<PathBuf>,
    /// Prefix names with their position
    pub numbered: bool,
}

/// Get the XDG config directory for standup.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "standup").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("standup.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

impl Settings {
    /// Load settings from the XDG config file and `STANDUP_*` variables.
    pub fn load() -> Result<Self, ApplicationError> {
        Self::load_from(global_config_path().as_deref())
    }

    /// Load settings with an explicit global config file.
    ///
    /// A missing file is skipped; an unreadable or malformed one is an error.
    pub fn load_from(global_path: Option<&Path>) -> Result<Self, ApplicationError> {
        Self::load_layers(global_path, None)
    }

    /// Like [`Settings::load_from`], but reads `STANDUP_*` overrides from
    /// `vars` instead of the process environment.
    pub fn load_with_env(
        global_path: Option<&Path>,
        vars: HashMap<String, String>,
    ) -> Result<Self, ApplicationError> {
        Self::load_layers(global_path, Some(vars))
    }

    fn load_layers(
        global_path: Option<&Path>,
        vars: Option<HashMap<String, String>>,
    ) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(path) = global_path {
            if path.exists() {
                let raw = load_raw_settings(path)?;
                current = current.merge_with(&raw);
            }
        }

        current = Self::apply_env_overrides(current, vars)?;
        current.expand_paths();

        Ok(current)
    }

    /// Overlay values win if specified, otherwise keep base.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            shuffle: overlay.shuffle.unwrap_or(self.shuffle),
            team_file: overlay
                .team_file
                .clone()
                .or_else(|| self.team_file.clone()),
            numbered: overlay.numbered.unwrap_or(self.numbered),
        }
    }

    /// Apply STANDUP_* variables as explicit overrides.
    ///
    /// Keys are flat (`STANDUP_TEAM_FILE` is `team_file`). `vars` replaces the
    /// process environment when given.
    fn apply_env_overrides(
        mut settings: Self,
        vars: Option<HashMap<String, String>>,
    ) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("STANDUP")
                    .prefix_separator("_")
                    .source(vars),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("shuffle") {
            settings.shuffle = val.parse()?;
        }
        if let Ok(val) = config.get_string("team_file") {
            settings.team_file = Some(PathBuf::from(val));
        }
        if let Ok(val) = config.get_bool("numbered") {
            settings.numbered = val;
        }

        Ok(settings)
    }

    /// Expand `~`, `$VAR` and `${VAR}` in the team file path.
    fn expand_paths(&mut self) {
        if let Some(path) = &self.team_file {
            let expanded = expand_env_vars(path.to_string_lossy().as_ref());
            self.team_file = Some(PathBuf::from(expanded));
        }
    }
}
