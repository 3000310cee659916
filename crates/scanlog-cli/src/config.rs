//! Host configuration for the scanlog CLI.
//!
//! This is CLI-level configuration (where the data directory lives),
//! distinct from the operator [`scanlog_core::settings::Settings`]
//! which are domain data persisted inside that directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ScanlogConfig {
    #[serde(default)]
    pub storage: StorageSection,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct StorageSection {
    /// Data directory override.
    pub path: Option<String>,
}

/// Load the host config; a missing file means defaults throughout.
pub fn load_config() -> anyhow::Result<ScanlogConfig> {
    let path = default_config_path()?;
    if !path.exists() {
        return Ok(ScanlogConfig::default());
    }
    read_config(&path)
}

pub fn read_config(path: &Path) -> anyhow::Result<ScanlogConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn default_data_dir() -> anyhow::Result<PathBuf> {
    xdg_data_dir()
}

fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("scanlog"));
        }
    }
    Ok(home_dir()?.join(".config").join("scanlog"))
}

fn xdg_data_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_DATA_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("scanlog"));
        }
    }
    Ok(home_dir()?.join(".local").join("share").join("scanlog"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}
