//! TOML-based configuration persistence for the monitor application.
//!
//! Reads and writes `AppConfig` to the platform-appropriate config file:
//! - Windows:  `%APPDATA%\PenTrace\config.toml`
//! - Linux:    `~/.config/pentrace/config.toml`
//! - macOS:    `~/Library/Application Support/PenTrace/config.toml`
//!
//! # Serde default values
//!
//! Fields annotated with `#[serde(default = "some_fn")]` use the return value
//! of `some_fn()` when the field is absent from the TOML file.  This allows
//! the app to work correctly on first run (before a config file exists) and
//! when upgrading from an older config file that is missing newer fields.

use std::path::PathBuf;

use pentrace_core::{OutputRegion, TabletArea};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,

    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config could not be serialized to TOML.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

// ── Config schema types ───────────────────────────────────────────────────────

/// Top-level application configuration stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    pub monitor: MonitorConfig,
    pub screen: ScreenConfig,
    pub tablet: TabletConfig,
}

/// General monitor behaviour settings and toggle defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonitorConfig {
    /// Schema version string – bump when breaking changes are introduced.
    #[serde(default = "default_version")]
    pub version: String,
    /// `tracing` log level: `"error"`, `"warn"`, `"info"`, `"debug"`, `"trace"`.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Whether mapped input drives the system pointer at startup.
    #[serde(default = "default_true")]
    pub moves_cursor: bool,
    /// Whether the output region is constrained to the window at startup.
    #[serde(default)]
    pub constrain_to_window: bool,
    /// Whether only the left half of the surface is mapped at startup.
    #[serde(default)]
    pub use_left_half: bool,
    /// Whether the surface starts split into two contexts.
    #[serde(default)]
    pub split_tablet: bool,
}

/// Desktop and window rectangles in screen coordinates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScreenConfig {
    /// Desktop width in pixels.
    #[serde(default = "default_desktop_width")]
    pub desktop_width: f64,
    /// Desktop height in pixels.
    #[serde(default = "default_desktop_height")]
    pub desktop_height: f64,
    /// Top-left corner of the monitored window.
    #[serde(default = "default_window_x")]
    pub window_x: f64,
    #[serde(default = "default_window_y")]
    pub window_y: f64,
    /// Window size in pixels.
    #[serde(default = "default_window_width")]
    pub window_width: f64,
    #[serde(default = "default_window_height")]
    pub window_height: f64,
}

impl ScreenConfig {
    /// The full desktop as an output region anchored at the origin.
    pub fn desktop_region(&self) -> OutputRegion {
        OutputRegion::from_size(self.desktop_width, self.desktop_height)
    }

    /// The monitored window as an output region.
    pub fn window_region(&self) -> OutputRegion {
        OutputRegion::new(
            self.window_x,
            self.window_y,
            self.window_x + self.window_width,
            self.window_y + self.window_height,
        )
    }
}

/// Fallback tablet sensing rectangle, used until a device reports its own.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TabletConfig {
    #[serde(default)]
    pub min_x: f64,
    #[serde(default)]
    pub min_y: f64,
    /// Defaults match a common large tablet surface in device counts.
    #[serde(default = "default_tablet_max_x")]
    pub max_x: f64,
    #[serde(default = "default_tablet_max_y")]
    pub max_y: f64,
}

impl TabletConfig {
    pub fn area(&self) -> TabletArea {
        TabletArea::new(self.min_x, self.min_y, self.max_x, self.max_y)
    }
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_version() -> String {
    "1.0".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_true() -> bool {
    true
}
fn default_desktop_width() -> f64 {
    1920.0
}
fn default_desktop_height() -> f64 {
    1080.0
}
fn default_window_x() -> f64 {
    300.0
}
fn default_window_y() -> f64 {
    200.0
}
fn default_window_width() -> f64 {
    640.0
}
fn default_window_height() -> f64 {
    480.0
}
fn default_tablet_max_x() -> f64 {
    31496.0
}
fn default_tablet_max_y() -> f64 {
    19685.0
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            monitor: MonitorConfig::default(),
            screen: ScreenConfig::default(),
            tablet: TabletConfig::default(),
        }
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            log_level: default_log_level(),
            moves_cursor: default_true(),
            constrain_to_window: false,
            use_left_half: false,
            split_tablet: false,
        }
    }
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            desktop_width: default_desktop_width(),
            desktop_height: default_desktop_height(),
            window_x: default_window_x(),
            window_y: default_window_y(),
            window_width: default_window_width(),
            window_height: default_window_height(),
        }
    }
}

impl Default for TabletConfig {
    fn default() -> Self {
        Self {
            min_x: 0.0,
            min_y: 0.0,
            max_x: default_tablet_max_x(),
            max_y: default_tablet_max_y(),
        }
    }
}

// ── Config repository ─────────────────────────────────────────────────────────

/// Determines the platform-appropriate directory for the config file.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] when the platform config base
/// directory cannot be determined from the environment.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    platform_config_dir().ok_or(ConfigError::NoPlatformConfigDir)
}

/// Resolves the full path to the config file.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] if the base directory cannot be
/// determined.
pub fn config_file_path() -> Result<PathBuf, ConfigError> {
    Ok(config_dir()?.join("config.toml"))
}

/// Loads `AppConfig` from disk, returning `AppConfig::default()` if the file
/// does not yet exist.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors other than "not found",
/// and [`ConfigError::Parse`] if the TOML is malformed.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let path = config_file_path()?;

    match std::fs::read_to_string(&path) {
        Ok(content) => {
            let cfg: AppConfig = toml::from_str(&content)?;
            Ok(cfg)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(AppConfig::default()),
        Err(e) => Err(ConfigError::Io { path, source: e }),
    }
}

/// Persists `config` to disk.
///
/// Creates the config directory and file if they do not exist.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system failures or
/// [`ConfigError::Serialize`] if serialization fails.
pub fn save_config(config: &AppConfig) -> Result<(), ConfigError> {
    let path = config_file_path()?;

    // Ensure directory exists before writing.
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|source| ConfigError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let content = toml::to_string_pretty(config)?;
    std::fs::write(&path, content).map_err(|source| ConfigError::Io {
        path: path.clone(),
        source,
    })?;
    Ok(())
}

/// Resolves the platform config base directory plus the `PenTrace` subdirectory.
fn platform_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        // %APPDATA% e.g. C:\Users\<user>\AppData\Roaming
        std::env::var_os("APPDATA").map(|p| PathBuf::from(p).join("PenTrace"))
    }

    #[cfg(target_os = "linux")]
    {
        // XDG_CONFIG_HOME or ~/.config
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
        Some(base.join("pentrace"))
    }

    #[cfg(target_os = "macos")]
    {
        // ~/Library/Application Support/PenTrace
        std::env::var_os("HOME").map(|h| {
            PathBuf::from(h)
                .join("Library")
                .join("Application Support")
                .join("PenTrace")
        })
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        // Fallback for unsupported platforms.
        None
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
