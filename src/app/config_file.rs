//! Configuration file loading and parsing
//!
//! Loads configuration from `~/.config/petview/config.toml`

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::{RootBackPolicy, Tab};

/// Main configuration file structure
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    /// General settings
    pub general: GeneralConfig,
    /// Tab and back stack settings
    pub navigation: NavigationConfig,
    /// UI display settings
    pub ui: UiConfig,
}

/// General application settings
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Show the welcome page on launch
    pub show_start: bool,
    /// JSON file with pets to load instead of the sample data
    pub data_file: Option<PathBuf>,
    /// Write logs to this file
    pub log_file: Option<PathBuf>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            show_start: true,
            data_file: None,
            log_file: None,
        }
    }
}

/// Navigation settings
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Tabs shown in the tab bar, in order
    pub tabs: Vec<Tab>,
    /// Tab active on launch
    pub default_tab: Tab,
    /// Back at a tab's root: "ignore" or "exit"
    pub back_at_root: RootBackPolicy,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            tabs: Tab::ALL.to_vec(),
            default_tab: Tab::Home,
            back_at_root: RootBackPolicy::Ignore,
        }
    }
}

/// UI display settings
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Show the back stack breadcrumb in the status bar
    pub show_breadcrumb: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_breadcrumb: true,
        }
    }
}

impl ConfigFile {
    /// Get the config directory path (~/.config/petview)
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("petview"))
    }

    /// Get the config file path (~/.config/petview/config.toml)
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("config.toml"))
    }

    /// Load configuration from file
    ///
    /// Returns default config if file doesn't exist or can't be parsed. In
    /// the latter case the second value describes the problem; it is
    /// reported by the caller once logging is set up.
    pub fn load() -> (Self, Option<String>) {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_or_default(&path),
            _ => (Self::default(), None),
        }
    }

    /// Load `path`, falling back to defaults with a warning
    pub fn load_or_default(path: &Path) -> (Self, Option<String>) {
        match Self::load_from(path) {
            Ok(config) => (config, None),
            Err(e) => (
                Self::default(),
                Some(format!("ignoring {}: {}", path.display(), e)),
            ),
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: ConfigFile = toml::from_str(&content)?;
        Ok(config)
    }
}
