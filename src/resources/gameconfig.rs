//! Game configuration.
//!
//! Settings are loaded from an INI file; missing file or missing keys fall
//! back to safe defaults so the game always starts.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 480
//! height = 640
//! target_fps = 120
//!
//! [game]
//! tick_ms = 30
//!
//! [assets]
//! sprites_image = ./assets/img/sprites.png
//! sprites_data = ./assets/data/sprites.json
//! enemies = ./assets/data/enemies.json
//! level = ./assets/data/level1.json
//! ```

use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 480;
const DEFAULT_WINDOW_HEIGHT: u32 = 640;
const DEFAULT_TARGET_FPS: u32 = 120;
const DEFAULT_TICK_MS: u32 = 30;
const DEFAULT_SPRITES_IMAGE: &str = "./assets/img/sprites.png";
const DEFAULT_SPRITES_DATA: &str = "./assets/data/sprites.json";
const DEFAULT_ENEMIES: &str = "./assets/data/enemies.json";
const DEFAULT_LEVEL: &str = "./assets/data/level1.json";
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Window, timing, and asset-path settings.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Window (and playfield) width in pixels.
    pub window_width: u32,
    /// Window (and playfield) height in pixels.
    pub window_height: u32,
    /// Target frames per second for the host loop.
    pub target_fps: u32,
    /// Fixed simulation tick length in milliseconds.
    pub tick_ms: u32,
    /// Path to the packed sprite-sheet image.
    pub sprites_image: String,
    /// Path to the atlas JSON describing the sheet.
    pub sprites_data: String,
    /// Path to the enemy blueprint JSON.
    pub enemies: String,
    /// Path to the level timeline JSON.
    pub level: String,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            tick_ms: DEFAULT_TICK_MS,
            sprites_image: DEFAULT_SPRITES_IMAGE.to_string(),
            sprites_data: DEFAULT_SPRITES_DATA.to_string(),
            enemies: DEFAULT_ENEMIES.to_string(),
            level: DEFAULT_LEVEL.to_string(),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a configuration with a custom config file path.
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

        // [game] section
        if let Some(tick) = config.getuint("game", "tick_ms").ok().flatten() {
            self.tick_ms = tick as u32;
        }

        // [assets] section
        if let Some(path) = config.get("assets", "sprites_image") {
            self.sprites_image = path;
        }
        if let Some(path) = config.get("assets", "sprites_data") {
            self.sprites_data = path;
        }
        if let Some(path) = config.get("assets", "enemies") {
            self.enemies = path;
        }
        if let Some(path) = config.get("assets", "level") {
            self.level = path;
        }

        info!(
            "Loaded config: {}x{} window, fps={}, tick={}ms",
            self.window_width, self.window_height, self.target_fps, self.tick_ms
        );

        Ok(())
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }

    /// Fixed tick length in seconds.
    pub fn tick_seconds(&self) -> f32 {
        self.tick_ms as f32 / 1000.0
    }
}
