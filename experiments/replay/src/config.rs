use std::fmt;
use std::path::PathBuf;

pub const LANDMARKS_ENV: &str = "AIRSHAPE_LANDMARKS";
pub const FRAMES_DIR_ENV: &str = "AIRSHAPE_FRAMES_DIR";
pub const LOG_DIR_ENV: &str = "AIRSHAPE_LOG_DIR";
pub const WIDTH_ENV: &str = "AIRSHAPE_WIDTH";
pub const HEIGHT_ENV: &str = "AIRSHAPE_HEIGHT";
pub const WINDOW_ENV: &str = "AIRSHAPE_WINDOW";

const DEFAULT_LANDMARKS: &str = "recordings/landmarks.jsonl";
const DEFAULT_WIDTH: usize = 640;
const DEFAULT_HEIGHT: usize = 480;

#[derive(Debug, PartialEq)]
pub struct ConfigError {
    pub key: &'static str,
    pub value: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid value {:?} for {}", self.value, self.key)
    }
}

impl std::error::Error for ConfigError {}

/// Replay settings, read from `AIRSHAPE_*` environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplayConfig {
    pub landmarks: PathBuf,
    /// When set, every rendered frame is written here as PNG.
    pub frames_dir: Option<PathBuf>,
    /// When set, logs go to a daily file in this directory instead of stdout.
    pub log_dir: Option<PathBuf>,
    pub width: usize,
    pub height: usize,
    pub window: bool,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            landmarks: PathBuf::from(DEFAULT_LANDMARKS),
            frames_dir: None,
            log_dir: None,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            window: true,
        }
    }
}

impl ReplayConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(path) = lookup(LANDMARKS_ENV) {
            config.landmarks = PathBuf::from(path);
        }
        config.frames_dir = lookup(FRAMES_DIR_ENV).filter(|s| !s.is_empty()).map(PathBuf::from);
        config.log_dir = lookup(LOG_DIR_ENV).filter(|s| !s.is_empty()).map(PathBuf::from);
        if let Some(value) = lookup(WIDTH_ENV) {
            config.width = parse_dimension(WIDTH_ENV, &value)?;
        }
        if let Some(value) = lookup(HEIGHT_ENV) {
            config.height = parse_dimension(HEIGHT_ENV, &value)?;
        }
        if let Some(value) = lookup(WINDOW_ENV) {
            config.window = parse_flag(WINDOW_ENV, &value)?;
        }
        Ok(config)
    }
}

pub fn parse_dimension(key: &'static str, value: &str) -> Result<usize, ConfigError> {
    match value.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError {
            key,
            value: value.to_string(),
        }),
    }
}

pub fn parse_flag(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError {
            key,
            value: value.to_string(),
        }),
    }
}
