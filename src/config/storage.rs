//! Config file locations and loading

use super::ConfigFile;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory name under the platform config dir
const CONFIG_DIR: &str = "premerge";

/// User config filename
const USER_CONFIG_FILE: &str = "config.toml";

/// Repository config filename, looked up in the repository root
pub const REPO_CONFIG_FILE: &str = ".premerge.toml";

/// Path of the user config file, if the platform has a config dir
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(USER_CONFIG_FILE))
}

/// Path of the repository config file
pub fn repo_config_path(repo_root: &Path) -> PathBuf {
    repo_root.join(REPO_CONFIG_FILE)
}

/// Load one config file.
///
/// Returns an empty `ConfigFile` if the file doesn't exist.
pub fn load_config_file(path: &Path) -> Result<ConfigFile> {
    if !path.exists() {
        return Ok(ConfigFile::default());
    }

    let content = fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("failed to read {}: {e}", path.display())))?;

    toml::from_str(&content)
        .map_err(|e| Error::Config(format!("failed to parse {}: {e}", path.display())))
}
