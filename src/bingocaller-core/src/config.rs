//! Configuration module for loading TOML config files.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::caller_mode::CallerMode;
use crate::calls::SPOKEN_PLACEHOLDER;
use crate::error::BingoError;

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub caller: CallerConfig,
    pub speech: SpeechConfig,
    pub phrases: PhrasesConfig,
}

/// Round defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CallerConfig {
    pub mode: CallerMode,
    /// Seconds between automatic calls; 0 means calls are manual.
    pub auto_call_secs: u64,
    /// Fixed seed for reproducible draws and phrases.
    pub seed: Option<u64>,
}

/// Which speech backend announces the calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeechBackend {
    #[default]
    None,
    /// An external TTS program such as `espeak` or `say`.
    Command,
    /// kokoro-tiny synthesis, recorded to a WAV file.
    Kokoro,
}

impl std::str::FromStr for SpeechBackend {
    type Err = BingoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" | "off" => Ok(SpeechBackend::None),
            "command" => Ok(SpeechBackend::Command),
            "kokoro" => Ok(SpeechBackend::Kokoro),
            other => Err(BingoError::ConfigError(format!(
                "Unknown speech backend '{}'. Expected one of: none, command, kokoro",
                other
            ))),
        }
    }
}

/// Speech configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SpeechConfig {
    pub backend: SpeechBackend,
    pub program: String,
    pub args: Vec<String>,
    pub voice: String,
    pub rate: f32,
    pub record_path: Option<PathBuf>,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            backend: SpeechBackend::None,
            program: "espeak".to_string(),
            args: Vec::new(),
            voice: "af_sky".to_string(),
            rate: 1.0,
            record_path: None,
        }
    }
}

/// Phrase template overrides. Empty lists keep the built-in phrases.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PhrasesConfig {
    pub kid_friendly: Vec<String>,
    pub pirate: Vec<String>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, BingoError> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| BingoError::ConfigError(format!("Failed to read config: {}", e)))?;

        let config = Self::from_str(&content)?;
        info!(path = %path.as_ref().display(), "loaded configuration");
        Ok(config)
    }

    /// Load configuration from string content.
    pub fn from_str(content: &str) -> Result<Self, BingoError> {
        let config: Config = toml::from_str(content)
            .map_err(|e| BingoError::ConfigError(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that would produce broken prompts or audio.
    pub fn validate(&self) -> Result<(), BingoError> {
        for template in self.phrases.kid_friendly.iter().chain(&self.phrases.pirate) {
            if !template.contains(SPOKEN_PLACEHOLDER) {
                return Err(BingoError::ConfigError(format!(
                    "Phrase template '{}' is missing the {} placeholder",
                    template, SPOKEN_PLACEHOLDER
                )));
            }
        }

        if !(self.speech.rate.is_finite() && self.speech.rate > 0.0) {
            return Err(BingoError::ConfigError(format!(
                "Speech rate must be a positive number, got {}",
                self.speech.rate
            )));
        }

        if self.speech.backend == SpeechBackend::Command && self.speech.program.trim().is_empty() {
            return Err(BingoError::ConfigError(
                "Speech backend 'command' requires a program".to_string(),
            ));
        }

        if self.speech.backend == SpeechBackend::Kokoro && self.speech.record_path.is_none() {
            return Err(BingoError::ConfigError(
                "Speech backend 'kokoro' records to a WAV file and requires record_path".to_string(),
            ));
        }

        Ok(())
    }
}

/// Default configuration embedded in the binary.
pub fn default_config() -> Config {
    Config::default()
}
