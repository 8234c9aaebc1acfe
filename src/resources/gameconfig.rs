//! Dashboard configuration resource.
//!
//! Settings are loaded from an INI configuration file, with safe defaults for
//! startup when the file is missing.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 200
//! height = 200
//! target_fps = 60
//!
//! [server]
//! base_url = http://127.0.0.1:8000
//! poll_interval_secs = 61
//! timeout_secs = 10
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

const DEFAULT_WINDOW_WIDTH: u32 = 200;
const DEFAULT_WINDOW_HEIGHT: u32 = 200;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_POLL_INTERVAL_SECS: u32 = 61;
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Window and server settings for one dashboard instance.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Canvas width in pixels.
    pub window_width: u32,
    /// Canvas height in pixels.
    pub window_height: u32,
    /// Target frames per second for the render loop.
    pub target_fps: u32,
    /// Server base URL without a trailing slash.
    pub base_url: String,
    /// Seconds between periodic status polls.
    pub poll_interval_secs: u32,
    /// Per-request network timeout in seconds.
    pub timeout_secs: u64,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            base_url: DEFAULT_BASE_URL.to_string(),
            poll_interval_secs: DEFAULT_POLL_INTERVAL_SECS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }

        // [server] section
        if let Some(url) = config.get("server", "base_url") {
            self.base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(secs) = config.getuint("server", "poll_interval_secs").ok().flatten() {
            self.poll_interval_secs = secs as u32;
        }
        if let Some(secs) = config.getuint("server", "timeout_secs").ok().flatten() {
            self.timeout_secs = secs;
        }

        info!(
            "Loaded config: {}x{} window, fps={}, server={}, poll every {}s",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.base_url,
            self.poll_interval_secs
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_safe() {
        let config = GameConfig::new();
        assert_eq!(config.window_width, 200);
        assert_eq!(config.window_height, 200);
        assert_eq!(config.poll_interval_secs, 61);
        assert!(!config.base_url.ends_with('/'));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let mut config = GameConfig::with_path("./does-not-exist.ini");
        assert!(config.load_from_file().is_err());
        // Defaults survive the failed load.
        assert_eq!(config.target_fps, 60);
    }
}
