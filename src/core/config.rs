// src/core/config.rs
use crate::core::constants::{
    CONFIG_ENV, CONFIG_FILE, DEFAULT_BOT_NAME, DEFAULT_LEFT_WIDTH, DEFAULT_PREFIX,
    DEFAULT_UTC_OFFSET_HOURS, FALLBACK_LABEL, MAX_LEFT_WIDTH, MIN_LEFT_WIDTH,
};
use crate::core::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

// TOML Configuration Structure
#[derive(Debug, Default, Serialize, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    general: Option<GeneralConfig>,
    #[serde(default)]
    menu: Option<MenuConfigToml>,
    #[serde(default)]
    identity: Option<IdentityConfigToml>,
    #[serde(default)]
    tags: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeneralConfig {
    #[serde(default = "default_bot_name")]
    bot_name: String,
    #[serde(default = "default_prefix")]
    prefix: String,
    #[serde(default = "default_log_level")]
    log_level: String,
    #[serde(default = "default_utc_offset")]
    utc_offset_hours: i32,
}

#[derive(Debug, Serialize, Deserialize)]
struct MenuConfigToml {
    #[serde(default = "default_left_width")]
    left_width: usize,
    #[serde(default = "default_fallback_label")]
    fallback_label: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct IdentityConfigToml {
    #[serde(default)]
    bot_jid: Option<String>,
    #[serde(default)]
    parent_jid: Option<String>,
}

// Default Functions
fn default_bot_name() -> String {
    DEFAULT_BOT_NAME.into()
}
fn default_prefix() -> String {
    DEFAULT_PREFIX.into()
}
fn default_log_level() -> String {
    "info".into()
}
fn default_utc_offset() -> i32 {
    DEFAULT_UTC_OFFSET_HOURS
}
fn default_left_width() -> usize {
    DEFAULT_LEFT_WIDTH
}
fn default_fallback_label() -> String {
    FALLBACK_LABEL.into()
}

// Main Configuration Structures
#[derive(Debug, Clone)]
pub struct Config {
    config_path: Option<String>,
    pub bot_name: String,
    pub prefix: String,
    pub log_level: String,
    pub utc_offset_hours: i32,
    pub menu: MenuConfig,
    pub identity: IdentityConfig,
    /// Overrides and additions to the built-in category labels.
    pub tag_labels: BTreeMap<String, String>,
}

#[derive(Debug, Clone)]
pub struct MenuConfig {
    pub left_width: usize,
    pub fallback_label: String,
}

#[derive(Debug, Clone, Default)]
pub struct IdentityConfig {
    pub bot_jid: Option<String>,
    pub parent_jid: Option<String>,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            left_width: DEFAULT_LEFT_WIDTH,
            fallback_label: FALLBACK_LABEL.into(),
        }
    }
}

impl Config {
    /// `$CHATCMD_CONFIG`, then `./chatcmd.toml`, then built-in defaults.
    /// Logs nothing; call [`Config::log_startup`] once a logger is installed.
    pub async fn load() -> Result<Self> {
        for path in Self::config_paths() {
            if path.exists() {
                return Self::from_file(&path).await;
            }
        }
        Ok(Self::default())
    }

    pub fn config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            paths.push(PathBuf::from(path));
        }
        paths.push(PathBuf::from(CONFIG_FILE));
        paths
    }

    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = tokio::fs::read_to_string(&path)
            .await
            .map_err(AppError::Io)?;
        let mut config = Self::parse(&content)?;
        config.config_path = Some(path.as_ref().to_string_lossy().into_owned());
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(content)?;
        let defaults = Self::default();

        let (bot_name, prefix, log_level, utc_offset_hours) = match file.general {
            Some(g) => (
                g.bot_name,
                Self::clamp_prefix(g.prefix),
                g.log_level,
                Self::clamp_i32(g.utc_offset_hours, -12, 14, DEFAULT_UTC_OFFSET_HOURS),
            ),
            None => (
                defaults.bot_name,
                defaults.prefix,
                defaults.log_level,
                defaults.utc_offset_hours,
            ),
        };

        let menu = file.menu.map_or_else(MenuConfig::default, |m| MenuConfig {
            left_width: Self::clamp(m.left_width, MIN_LEFT_WIDTH, MAX_LEFT_WIDTH, DEFAULT_LEFT_WIDTH),
            fallback_label: m.fallback_label,
        });

        let identity = file
            .identity
            .map_or_else(IdentityConfig::default, |i| IdentityConfig {
                bot_jid: i.bot_jid,
                parent_jid: i.parent_jid,
            });

        Ok(Self {
            config_path: None,
            bot_name,
            prefix,
            log_level,
            utc_offset_hours,
            menu,
            identity,
            tag_labels: file.tags.unwrap_or_default(),
        })
    }

    pub fn config_path(&self) -> Option<&str> {
        self.config_path.as_deref()
    }

    // Helper methods
    fn clamp(value: usize, min: usize, max: usize, default: usize) -> usize {
        if value < min || value > max {
            default
        } else {
            value
        }
    }

    fn clamp_i32(value: i32, min: i32, max: i32, default: i32) -> i32 {
        if value < min || value > max {
            default
        } else {
            value
        }
    }

    /// A blank prefix would turn every chat line into a command.
    fn clamp_prefix(prefix: String) -> String {
        if prefix.trim().is_empty() {
            DEFAULT_PREFIX.into()
        } else {
            prefix
        }
    }

    pub fn log_startup(&self) {
        log::info!("{} v{}", self.bot_name, crate::core::constants::VERSION);
        if self.config_path.is_none() {
            log::debug!("No config file found, using defaults");
        }
        log::info!(
            "Config: {} (prefix '{}', {} tag labels)",
            self.config_path().unwrap_or("<defaults>"),
            self.prefix,
            self.tag_labels.len()
        );
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_path: None,
            bot_name: DEFAULT_BOT_NAME.into(),
            prefix: DEFAULT_PREFIX.into(),
            log_level: "info".into(),
            utc_offset_hours: DEFAULT_UTC_OFFSET_HOURS,
            menu: MenuConfig::default(),
            identity: IdentityConfig::default(),
            tag_labels: BTreeMap::new(),
        }
    }
}
