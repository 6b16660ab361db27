use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// User-level configuration, read from `<config_dir>/ticketflow/config.toml`.
///
/// Every field has a default; a missing file is not an error, a malformed
/// one is.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UserConfig {
    /// Where ticket and session files live. Defaults to the platform data
    /// directory.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// How long toasts stay on screen, in milliseconds.
    #[serde(default = "default_toast_ms")]
    pub toast_ms: u64,
    /// Pause between the signup success toast and the dashboard transition.
    #[serde(default = "default_signup_delay_ms")]
    pub signup_delay_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            toast_ms: default_toast_ms(),
            signup_delay_ms: default_signup_delay_ms(),
        }
    }
}

const fn default_toast_ms() -> u64 {
    3000
}

const fn default_signup_delay_ms() -> u64 {
    1500
}

pub fn load_user_config() -> Result<UserConfig> {
    let Some(config_dir) = dirs::config_dir() else {
        return Ok(UserConfig::default());
    };
    load_user_config_from(&config_dir.join("ticketflow/config.toml"))
}

fn load_user_config_from(path: &Path) -> Result<UserConfig> {
    if !path.exists() {
        return Ok(UserConfig::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    toml::from_str::<UserConfig>(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))
}

impl UserConfig {
    /// The directory the file backend stores its keys under: the configured
    /// override, or `<data_dir>/ticketflow`, or `.ticketflow` in the current
    /// directory when the platform has no data dir.
    pub fn resolve_data_dir(&self) -> PathBuf {
        if let Some(dir) = &self.data_dir {
            return dir.clone();
        }
        dirs::data_dir().map_or_else(
            || PathBuf::from(".ticketflow"),
            |base| base.join("ticketflow"),
        )
    }
}
