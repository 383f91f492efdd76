//! Utility functions for locating tsgen's files

use camino::Utf8PathBuf;
use directories::ProjectDirs;

/// Default settings file (`<config dir>/tsgen/config.yaml`)
///
/// Returns `None` when the platform has no config directory or its path is
/// not valid UTF-8.
pub fn default_config_path() -> Option<Utf8PathBuf> {
    let dirs = ProjectDirs::from("", "", "tsgen")?;
    let config_dir = Utf8PathBuf::from_path_buf(dirs.config_dir().to_path_buf()).ok()?;
    Some(config_dir.join("config.yaml"))
}

/// Current directory as a UTF-8 path
pub fn current_dir() -> anyhow::Result<Utf8PathBuf> {
    let cwd = std::env::current_dir()?;
    Utf8PathBuf::from_path_buf(cwd)
        .map_err(|p| anyhow::anyhow!("Current directory is not valid UTF-8: {}", p.display()))
}
