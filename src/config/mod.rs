//! Configuration management
//!
//! Settings live in `<gallery home>/config.yaml`. The gallery home is
//! `$GALLERY_HOME` when set, otherwise `~/.gallery`. A missing file means
//! all defaults.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::capture::Platform;

/// Environment variable overriding the gallery home directory.
pub const HOME_ENV: &str = "GALLERY_HOME";

/// Keys accepted by `get` and `set`.
pub const CONFIG_KEYS: &[&str] = &[
    "platform",
    "database_path",
    "dictation_locale",
    "clear_gallery_on_sign_out",
    "use_keyring",
];

/// Returns the directory holding config, database and session files.
pub fn gallery_home() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    Ok(dirs::home_dir()
        .context("Could not find home directory")?
        .join(".gallery"))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Which capture/dictation capabilities to use
    pub platform: Platform,

    /// Overrides `<gallery home>/gallery.db`
    pub database_path: Option<PathBuf>,

    /// Locale passed to the dictation provider
    pub dictation_locale: String,

    /// Delete the gallery when signing out
    pub clear_gallery_on_sign_out: bool,

    /// Store the session profile in the OS keychain
    pub use_keyring: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            platform: Platform::Native,
            database_path: None,
            dictation_locale: "en-US".to_string(),
            clear_gallery_on_sign_out: false,
            use_keyring: true,
        }
    }
}

impl Config {
    /// Loads the config file, falling back to defaults if it does not exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_saphyr::from_str(&contents)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Writes the config file, creating the gallery home if needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let yaml = serde_saphyr::to_string(self).context("Failed to serialize config")?;
        fs::write(path, yaml).with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(gallery_home()?.join("config.yaml"))
    }

    /// The database file to open.
    pub fn database_path(&self) -> Result<PathBuf> {
        match &self.database_path {
            Some(path) => Ok(path.clone()),
            None => crate::storage::db::default_db_path(),
        }
    }

    /// Returns a setting as display text.
    pub fn get(&self, key: &str) -> Result<String> {
        let value = match key {
            "platform" => self.platform.to_string(),
            "database_path" => self
                .database_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
            "dictation_locale" => self.dictation_locale.clone(),
            "clear_gallery_on_sign_out" => self.clear_gallery_on_sign_out.to_string(),
            "use_keyring" => self.use_keyring.to_string(),
            _ => bail!(
                "Unknown config key '{key}'. Valid keys: {}",
                CONFIG_KEYS.join(", ")
            ),
        };
        Ok(value)
    }

    /// Parses and applies a setting. An empty `database_path` resets it.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "platform" => self.platform = value.parse()?,
            "database_path" => {
                self.database_path = if value.trim().is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                }
            }
            "dictation_locale" => {
                if value.trim().is_empty() {
                    bail!("dictation_locale must not be empty");
                }
                self.dictation_locale = value.trim().to_string();
            }
            "clear_gallery_on_sign_out" => self.clear_gallery_on_sign_out = parse_bool(key, value)?,
            "use_keyring" => self.use_keyring = parse_bool(key, value)?,
            _ => bail!(
                "Unknown config key '{key}'. Valid keys: {}",
                CONFIG_KEYS.join(", ")
            ),
        }
        Ok(())
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        other => bail!("{key} expects true or false, got '{other}'"),
    }
}
