use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Text-to-speech settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechConfig {
    pub enabled: bool,
    /// Language tag ("en-US") or a synthesizer voice name ("Samantha")
    pub voice: String,
    /// Words per minute
    pub rate: u32,
    /// Synthesizer binary to use instead of the platform default.
    /// Receives `args` followed by the text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    /// Arguments for `command`. `{voice}` and `{rate}` are replaced with
    /// the values above, e.g. `["-l", "{voice}", "-r", "{rate}"]`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            voice: "en-US".into(),
            rate: 175,
            command: None,
            args: Vec::new(),
        }
    }
}

/// Top-level application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub speech: SpeechConfig,
    /// Speak the screen prompt (or recipe details) when a screen opens.
    pub speak_on_enter: bool,
    /// Chime when a step timer runs out.
    pub timer_chime: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            speech: SpeechConfig::default(),
            speak_on_enter: true,
            timer_chime: true,
        }
    }
}

impl Config {
    /// Directory: ~/.config/voice-chef/
    fn dir() -> PathBuf {
        let mut p = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        p.push("voice-chef");
        p
    }

    pub fn default_path() -> PathBuf {
        Self::dir().join("config.json")
    }

    /// Load from `path`, returning defaults if the file is missing or invalid.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(data) => serde_json::from_str(&data).unwrap_or_else(|e| {
                log::warn!("Ignoring invalid config {}: {e}", path.display());
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Persist to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let data = serde_json::to_string_pretty(self)?;
        fs::write(path, data)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load(&dir.path().join("absent.json"));
        assert_eq!(config, Config::default());
        assert_eq!(config.speech.voice, "en-US");
        assert!(config.speak_on_enter);
    }

    #[test]
    fn invalid_json_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(Config::load(&path), Config::default());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "speech": { "rate": 140 }, "timer_chime": false }"#).unwrap();
        let config = Config::load(&path);
        assert_eq!(config.speech.rate, 140);
        assert!(config.speech.enabled);
        assert!(!config.timer_chime);
        assert!(config.speak_on_enter);
    }

    #[test]
    fn save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = Config {
            speech: SpeechConfig {
                enabled: false,
                voice: "it-IT".into(),
                rate: 150,
                command: Some("spd-say".into()),
                args: vec!["-l".into(), "{voice}".into()],
            },
            speak_on_enter: false,
            timer_chime: false,
        };
        config.save(&path).unwrap();
        assert_eq!(Config::load(&path), config);
    }
}
