use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;

pub const CONFIG_PATH: &str = "Config.toml";

#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct DisplayConfig {
    pub color: bool,
    pub unicode: bool,
    pub hints: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: true,
            unicode: true,
            hints: true,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct LogConfig {
    pub verbose: bool,
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "failed to read config: {}", e),
            ConfigError::Parse(e) => write!(f, "failed to parse config: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl AppConfig {
    /// Reads `Config.toml` if present, falls back to defaults otherwise, then
    /// applies `HOTSEAT_*` environment overrides.
    pub fn load() -> Self {
        let mut config = if Path::new(CONFIG_PATH).exists() {
            match Self::load_from(CONFIG_PATH) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("{}, using defaults", e);
                    Self::default()
                }
            }
        } else {
            eprintln!("Config.toml not found, using defaults");
            Self::default()
        };

        config.merge_env();

        eprintln!("----------------------------------------");
        eprintln!("Hotseat Chess Configuration:");
        eprintln!(
            "  Display: color={}, unicode={}, hints={}",
            config.display.color, config.display.unicode, config.display.hints
        );
        eprintln!("  Verbose Log: {}", config.log.verbose);
        eprintln!("----------------------------------------");

        config
    }

    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(ConfigError::Parse)
    }

    fn merge_env(&mut self) {
        if let Some(val) = env_flag("HOTSEAT_DISPLAY_COLOR") {
            self.display.color = val;
        }
        if let Some(val) = env_flag("HOTSEAT_DISPLAY_UNICODE") {
            self.display.unicode = val;
        }
        if let Some(val) = env_flag("HOTSEAT_DISPLAY_HINTS") {
            self.display.hints = val;
        }
        if let Some(val) = env_flag("HOTSEAT_LOG_VERBOSE") {
            self.log.verbose = val;
        }
    }
}

fn env_flag(key: &str) -> Option<bool> {
    let val = std::env::var(key).ok()?;
    match val.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
