/// Configuration system: TOML-based with defaults that reproduce the stock demo.
/// Config file: `~/.config/gtk4-demo/config.toml`

use regex::Regex;
use serde::Deserialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

pub const DEFAULT_APP_ID: &str = "com.example.gtk4_app";
const MAX_APP_ID_LEN: usize = 255;

static APP_ID_ELEMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_-][A-Za-z0-9_-]*$").unwrap()
});

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub app: AppConfig,
    pub window: WindowConfig,
    pub button: ButtonConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: i32,
    pub height: i32,
    pub margin: i32,
    pub spacing: i32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ButtonConfig {
    pub label: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app: AppConfig::default(),
            window: WindowConfig::default(),
            button: ButtonConfig::default(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { id: DEFAULT_APP_ID.into() }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Simple GTK4 App".into(),
            width: 300,
            height: 200,
            margin: 12,
            spacing: 12,
        }
    }
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self { label: "Hello GTK4!".into() }
    }
}

impl Config {
    /// Config file path: `~/.config/gtk4-demo/config.toml`
    pub fn path() -> PathBuf {
        dirs_path().join("config.toml")
    }

    /// Load config from file, falling back to defaults.
    pub fn load() -> Self {
        Self::load_from(&Self::path())
    }

    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => {
                log::debug!("Loaded config from {}", path.display());
                Self::from_str(&contents)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Self::default(),
            Err(e) => {
                log::warn!("Cannot read config {}, using defaults: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Parse config from TOML string. Invalid TOML yields the defaults.
    pub fn from_str(s: &str) -> Self {
        toml::from_str(s).unwrap_or_else(|e| {
            log::warn!("Invalid config, using defaults: {}", e);
            Self::default()
        })
    }

    /// Replace values GTK would reject with their defaults.
    pub fn validated(mut self) -> Self {
        if !is_valid_app_id(&self.app.id) {
            log::warn!("Invalid application id {:?}, using {}", self.app.id, DEFAULT_APP_ID);
            self.app.id = DEFAULT_APP_ID.into();
        }
        let defaults = WindowConfig::default();
        if self.window.width <= 0 || self.window.height <= 0 {
            log::warn!(
                "Invalid window size {}x{}, using {}x{}",
                self.window.width, self.window.height, defaults.width, defaults.height
            );
            self.window.width = defaults.width;
            self.window.height = defaults.height;
        }
        if self.window.margin < 0 {
            self.window.margin = defaults.margin;
        }
        if self.window.spacing < 0 {
            self.window.spacing = defaults.spacing;
        }
        self
    }
}

/// Check an application id against the GApplication naming rules:
/// reverse-domain, at least two elements, none starting with a digit.
pub fn is_valid_app_id(id: &str) -> bool {
    if id.is_empty() || id.len() > MAX_APP_ID_LEN {
        return false;
    }
    let elements: Vec<&str> = id.split('.').collect();
    elements.len() >= 2 && elements.iter().all(|e| APP_ID_ELEMENT_RE.is_match(e))
}

fn dirs_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(home).join(".config").join("gtk4-demo")
}
