use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Global configuration loaded from `~/.config/shelver/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShelverConfig {
    /// File suffixes the crawler picks up, matched case-sensitively.
    pub extensions: Vec<String>,
    /// Name of the run log written under the destination root.
    pub log_file_name: String,
}

impl Default for ShelverConfig {
    fn default() -> Self {
        Self {
            extensions: vec!["epub".to_string(), "mobi".to_string()],
            log_file_name: "shelver.log".to_string(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("shelver")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
///
/// Returns the path of the file when it was created by this call, so the
/// caller can report it once logging is up.
pub fn load_or_init() -> Result<(ShelverConfig, Option<PathBuf>)> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = write_default(&path)?;
        return Ok((default_cfg, Some(path)));
    }

    Ok((load_from_path(&path)?, None))
}

fn write_default(path: &Path) -> Result<ShelverConfig> {
    let default_cfg = ShelverConfig::default();
    let toml = toml::to_string_pretty(&default_cfg)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, toml)
        .with_context(|| format!("failed to write default config {}", path.display()))?;
    Ok(default_cfg)
}

/// Load configuration from an explicit file, which must exist.
pub fn load_from_path(path: &Path) -> Result<ShelverConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let cfg: ShelverConfig =
        toml::from_str(&data).with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}
