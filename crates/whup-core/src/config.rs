use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Uploader configuration loaded from `~/.config/whup/config.toml`.
///
/// All three fields are required and must be non-empty. They are fixed for
/// the lifetime of an `Uploader`; changing the destination means building a
/// new one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UploaderConfig {
    /// Root endpoint of the storage service, e.g. `http://localhost:50070/webhdfs/v1`.
    pub base_url: String,
    /// Username presented as the acting principal (`user.name` query parameter).
    pub user: String,
    /// Path segment appended to `base_url`, e.g. `/tmp`.
    pub output_directory: String,
}

impl Default for UploaderConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:50070/webhdfs/v1".to_string(),
            user: "hdfs".to_string(),
            output_directory: "/tmp".to_string(),
        }
    }
}

impl UploaderConfig {
    /// Checks that every field is non-empty. Reports the first offender.
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            anyhow::bail!("base_url must be non-empty");
        }
        if self.user.trim().is_empty() {
            anyhow::bail!("user must be non-empty");
        }
        if self.output_directory.trim().is_empty() {
            anyhow::bail!("output_directory must be non-empty");
        }
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("whup")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<UploaderConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = UploaderConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: UploaderConfig = toml::from_str(&data)?;
    Ok(cfg)
}
