//! Default locations of the ssh config file and key directory

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AppError, Result};

const SSH_DIR: &str = ".ssh";
const CONFIG_FILE: &str = "config";

/// Get the user's home directory
pub fn get_home_dir() -> Result<PathBuf> {
    dirs::home_dir().ok_or(AppError::NoHomeDir)
}

/// Get `~/.ssh`, where keys live
pub fn get_ssh_dir() -> Result<PathBuf> {
    Ok(get_home_dir()?.join(SSH_DIR))
}

/// Get `~/.ssh/config`
pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_ssh_dir()?.join(CONFIG_FILE))
}

/// Ensure a directory exists
pub fn ensure_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

/// Ensure the directory containing `path` exists
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => ensure_dir(parent),
        _ => Ok(()),
    }
}
