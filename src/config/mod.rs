//! Layered configuration
//!
//! Built-in defaults, then the user config file, then the repository config
//! file, then command-line flags. Later layers win key by key.

mod storage;

pub use storage::{REPO_CONFIG_FILE, load_config_file, repo_config_path, user_config_path};

use crate::error::{Error, Result};
use crate::types::BuildSettings;
use serde::Deserialize;

/// One config file, every key optional
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    /// Remote to fetch from
    pub remote: Option<String>,
    /// Base branch
    pub base: Option<String>,
    /// Target branch
    pub target: Option<String>,
    /// Build check settings
    pub build: BuildFile,
}

/// `[build]` table
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct BuildFile {
    /// Program followed by its arguments
    pub command: Option<Vec<String>>,
    /// Show the build's output on the terminal
    pub show_output: Option<bool>,
}

impl ConfigFile {
    /// Overlay `other` on top of `self`
    #[must_use]
    pub fn layer(self, other: Self) -> Self {
        Self {
            remote: other.remote.or(self.remote),
            base: other.base.or(self.base),
            target: other.target.or(self.target),
            build: BuildFile {
                command: other.build.command.or(self.build.command),
                show_output: other.build.show_output.or(self.build.show_output),
            },
        }
    }
}

/// Fully resolved settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Remote to fetch from
    pub remote: String,
    /// Base branch
    pub base: String,
    /// Target branch
    pub target: String,
    /// Build check
    pub build: BuildSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            remote: "origin".to_string(),
            base: "master".to_string(),
            target: "dev".to_string(),
            build: BuildSettings::default(),
        }
    }
}

impl Config {
    /// Fill the defaults in from a (layered) config file
    pub fn resolve(file: ConfigFile) -> Result<Self> {
        let defaults = Self::default();
        let build = BuildSettings {
            command: file.build.command.unwrap_or(defaults.build.command),
            show_output: file.build.show_output.unwrap_or(defaults.build.show_output),
        };
        if build.command.is_empty() || build.command[0].trim().is_empty() {
            return Err(Error::Config("build command must not be empty".to_string()));
        }

        Ok(Self {
            remote: non_empty("remote", file.remote)?.unwrap_or(defaults.remote),
            base: non_empty("base", file.base)?.unwrap_or(defaults.base),
            target: non_empty("target", file.target)?.unwrap_or(defaults.target),
            build,
        })
    }
}

fn non_empty(key: &str, value: Option<String>) -> Result<Option<String>> {
    match value {
        Some(v) if v.trim().is_empty() => Err(Error::Config(format!("{key} must not be empty"))),
        other => Ok(other),
    }
}

/// Split a command-line build command on whitespace
pub fn parse_build_command(raw: &str) -> Vec<String> {
    raw.split_whitespace().map(String::from).collect()
}
