//! Configuration management

use crate::domain::{ComposeMode, Label, MilestoneThresholds, Mood};
use crate::domain::milestones::{THEME_THRESHOLD, TONE_THRESHOLD};
use crate::error::{CompassError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Environment variable naming the config file
pub const CONFIG_ENV: &str = "INNERCOMPASS_CONFIG";

/// Keys accepted by `innercompass config`
pub const CONFIG_KEYS: &[&str] = &[
    "compose_mode",
    "theme_threshold",
    "tone_threshold",
    "seed",
    "default_mood",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub compose_mode: ComposeMode,
    pub theme_threshold: usize,
    pub tone_threshold: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub default_mood: Mood,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            compose_mode: ComposeMode::Conversational,
            theme_threshold: THEME_THRESHOLD,
            tone_threshold: TONE_THRESHOLD,
            seed: None,
            default_mood: Mood::Unspecified,
        }
    }
}

impl Config {
    /// Resolve the config file: explicit path first, then `INNERCOMPASS_CONFIG`.
    pub fn locate(explicit: Option<&Path>) -> Option<PathBuf> {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from))
    }

    /// Load the located config, or defaults when no file is configured.
    /// A configured path that does not exist is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match Self::locate(explicit) {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Config::default()),
        }
    }

    /// Load config from a TOML file
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                CompassError::Config(format!("Config file not found: {}", path.display()))
            } else {
                CompassError::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| CompassError::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;

        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Write a new config file, refusing to overwrite an existing one
    pub fn create_at(&self, path: &Path) -> Result<()> {
        if path.exists() {
            return Err(CompassError::Config(format!(
                "Refusing to overwrite existing config: {}",
                path.display()
            )));
        }
        self.save_to_path(path)
    }

    /// Write config to `path`
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CompassError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, contents)?;

        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.theme_threshold == 0 || self.tone_threshold == 0 {
            return Err(CompassError::Config(
                "Milestone thresholds must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn thresholds(&self) -> MilestoneThresholds {
        MilestoneThresholds {
            theme: self.theme_threshold,
            tone: self.tone_threshold,
        }
    }

    /// Get a single config value as text
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "compose_mode" => Ok(self.compose_mode.to_string()),
            "theme_threshold" => Ok(self.theme_threshold.to_string()),
            "tone_threshold" => Ok(self.tone_threshold.to_string()),
            "seed" => Ok(self
                .seed
                .map(|s| s.to_string())
                .unwrap_or_else(|| "none".to_string())),
            "default_mood" => Ok(self.default_mood.label().to_string()),
            _ => Err(CompassError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: {}",
                key,
                CONFIG_KEYS.join(", ")
            ))),
        }
    }

    /// Set a single config value from text
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "compose_mode" => {
                self.compose_mode = ComposeMode::from_str(value).map_err(CompassError::Config)?;
            }
            "theme_threshold" => self.theme_threshold = parse_threshold(key, value)?,
            "tone_threshold" => self.tone_threshold = parse_threshold(key, value)?,
            "seed" => {
                self.seed = match value {
                    "none" => None,
                    _ => Some(value.parse().map_err(|_| {
                        CompassError::Config(format!("Invalid seed: '{}'", value))
                    })?),
                };
            }
            "default_mood" => self.default_mood = Mood::from_label(value),
            _ => {
                return Err(CompassError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: {}",
                    key,
                    CONFIG_KEYS.join(", ")
                )))
            }
        }
        Ok(())
    }
}

fn parse_threshold(key: &str, value: &str) -> Result<usize> {
    match value.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(CompassError::Config(format!(
            "Invalid value for {}: '{}' (expected a positive integer)",
            key, value
        ))),
    }
}
