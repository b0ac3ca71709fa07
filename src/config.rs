// Configuration module for reading Snake.toml
//
// The file only carries ambient settings: where to listen, how the snake looks,
// and whether decisions are written to the debug log. None of it changes how
// moves are chosen.

use log::warn;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Port used when neither `PORT` nor Snake.toml provides one
pub const DEFAULT_PORT: u16 = 8080;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub appearance: AppearanceConfig,
    #[serde(default)]
    pub debug: DebugConfig,
}

/// HTTP listener settings
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig { port: DEFAULT_PORT }
    }
}

/// Cosmetic values returned from /start
#[derive(Debug, Deserialize, Clone)]
pub struct AppearanceConfig {
    pub color: String,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        AppearanceConfig {
            color: "#000000".to_string(),
        }
    }
}

/// Debug decision log configuration
#[derive(Debug, Deserialize, Clone)]
pub struct DebugConfig {
    pub enabled: bool,
    pub log_file_path: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        DebugConfig {
            enabled: false,
            log_file_path: "battlesnake_debug.jsonl".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file
    ///
    /// # Arguments
    /// * `path` - Path to the Snake.toml configuration file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let contents = fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, String> {
        toml::from_str(contents).map_err(|e| format!("Failed to parse config file: {}", e))
    }

    /// Loads default configuration from Snake.toml in the project root
    pub fn load_default() -> Result<Self, String> {
        Self::from_file("Snake.toml")
    }

    /// Hardcoded fallback; should match Snake.toml
    pub fn default_hardcoded() -> Self {
        Config {
            server: ServerConfig::default(),
            appearance: AppearanceConfig::default(),
            debug: DebugConfig::default(),
        }
    }

    /// Attempts to load from file, falls back to hardcoded defaults on error
    pub fn load_or_default() -> Self {
        Self::load_default().unwrap_or_else(|e| {
            warn!("Could not load Snake.toml ({}), using hardcoded defaults", e);
            Self::default_hardcoded()
        })
    }

    /// Resolves the listen port from the value of the `PORT` environment
    /// variable, falling back to the configured port when it is absent or invalid
    pub fn listen_port(&self, env_port: Option<&str>) -> u16 {
        match env_port {
            Some(raw) => match raw.trim().parse::<u16>() {
                Ok(port) => port,
                Err(e) => {
                    warn!(
                        "Ignoring invalid PORT value '{}' ({}), using {}",
                        raw, e, self.server.port
                    );
                    self.server.port
                }
            },
            None => self.server.port,
        }
    }
}
