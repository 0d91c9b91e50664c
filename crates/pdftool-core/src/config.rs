use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default log file, relative to the working directory.
pub const DEFAULT_LOG_FILE: &str = "pdf_tool_log_file.log";

/// Global configuration loaded from `~/.config/pdftool/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfToolConfig {
    /// Seconds allowed for establishing a connection.
    pub connect_timeout_secs: u64,
    /// Seconds allowed for a whole request, body included. 0 disables the limit.
    pub request_timeout_secs: u64,
    /// Maximum redirects followed per request.
    pub max_redirections: u32,
    /// `User-Agent` sent with every request.
    pub user_agent: String,
    /// Append-only log file; relative paths are resolved against the working directory.
    pub log_file: PathBuf,
}

impl Default for PdfToolConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 15,
            request_timeout_secs: 300,
            max_redirections: 10,
            user_agent: concat!("pdftool/", env!("CARGO_PKG_VERSION")).to_string(),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("pdftool")
        .context("cannot locate the XDG config directory")?;
    xdg_dirs
        .place_config_file("config.toml")
        .context("cannot create the pdftool config directory")
}

/// Configuration plus whether a default file was just written for it.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: PdfToolConfig,
    /// Set when no file existed and a default one was created here.
    pub created: Option<PathBuf>,
}

/// Load configuration from the XDG config dir, creating a default file if none exists.
pub fn load_or_init() -> Result<LoadedConfig> {
    load_or_init_at(&config_path()?)
}

/// Load configuration from `path`, creating a default file there if none exists.
pub fn load_or_init_at(path: &Path) -> Result<LoadedConfig> {
    if path.exists() {
        return Ok(LoadedConfig {
            config: load_from(path)?,
            created: None,
        });
    }

    let default_cfg = PdfToolConfig::default();
    let toml = toml::to_string_pretty(&default_cfg).context("failed to serialize default config")?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create config directory {}", parent.display()))?;
    }
    fs::write(path, toml)
        .with_context(|| format!("failed to write default config {}", path.display()))?;
    Ok(LoadedConfig {
        config: default_cfg,
        created: Some(path.to_path_buf()),
    })
}

/// Load configuration from an explicit file. Missing keys take their defaults.
pub fn load_from(path: &Path) -> Result<PdfToolConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let cfg: PdfToolConfig =
        toml::from_str(&data).with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}
