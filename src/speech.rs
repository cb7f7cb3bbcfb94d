use std::process::{Command, Stdio};
use std::sync::Mutex;

use crate::config::SpeechConfig;

/// Where spoken prompts go. Fire and forget: implementations must not block
/// on playback, and report failures through the log only.
pub trait SpeechOutput {
    fn speak(&self, text: &str);
}

/// Speaks through the platform synthesizer: `say` on macOS,
/// `espeak-ng` elsewhere, or the command set in the config.
#[derive(Debug, Clone)]
pub struct SystemSpeech {
    program: String,
    args: Vec<String>,
}

impl SystemSpeech {
    pub fn new(config: &SpeechConfig) -> Self {
        let (program, args) = synth_command(config);
        log::info!("Speech output via {program}");
        Self { program, args }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

fn synth_command(config: &SpeechConfig) -> (String, Vec<String>) {
    match config.command {
        Some(ref program) => (program.clone(), custom_args(config)),
        None => {
            let synth = Synth::platform();
            (synth.program().to_string(), synth.args(config))
        }
    }
}

/// `{voice}` and `{rate}` in the configured arguments take the config values.
fn custom_args(config: &SpeechConfig) -> Vec<String> {
    let rate = config.rate.to_string();
    config
        .args
        .iter()
        .map(|arg| arg.replace("{voice}", &config.voice).replace("{rate}", &rate))
        .collect()
}

/// Built-in synthesizers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Synth {
    Say,
    Espeak,
}

impl Synth {
    fn platform() -> Self {
        if cfg!(target_os = "macos") {
            Synth::Say
        } else {
            Synth::Espeak
        }
    }

    fn program(self) -> &'static str {
        match self {
            Synth::Say => "say",
            Synth::Espeak => "espeak-ng",
        }
    }

    fn args(self, config: &SpeechConfig) -> Vec<String> {
        let rate = config.rate.to_string();
        match self {
            // `say -v` wants a voice name; a language tag keeps the system voice
            Synth::Say if is_language_tag(&config.voice) => vec!["-r".to_string(), rate],
            Synth::Say => vec![
                "-v".to_string(),
                config.voice.clone(),
                "-r".to_string(),
                rate,
            ],
            Synth::Espeak => vec![
                "-v".to_string(),
                config.voice.to_lowercase(),
                "-s".to_string(),
                rate,
            ],
        }
    }
}

/// "en", "en-US", "pt_BR": a short lowercase primary subtag. Voice names
/// such as "Samantha" or "Alice" are capitalized.
fn is_language_tag(voice: &str) -> bool {
    let primary = voice.split(['-', '_']).next().unwrap_or_default();
    (2..=3).contains(&primary.len()) && primary.chars().all(|c| c.is_ascii_lowercase())
}

impl SpeechOutput for SystemSpeech {
    fn speak(&self, text: &str) {
        let program = self.program.clone();
        let args = self.args.clone();
        let text = text.to_string();

        std::thread::spawn(move || {
            let result = Command::new(&program)
                .args(&args)
                .arg(&text)
                .stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .status();
            match result {
                Ok(status) if status.success() => {}
                Ok(status) => log::warn!("{program} exited with status {status}"),
                Err(e) => log::warn!("Failed to spawn {program}: {e}"),
            }
        });
    }
}

/// Drops every utterance. Used with `--mute` or when speech is disabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct MutedSpeech;

impl SpeechOutput for MutedSpeech {
    fn speak(&self, text: &str) {
        log::info!("(muted) {text}");
    }
}

/// Keeps utterances in memory.
#[derive(Debug, Default)]
pub struct MemorySpeech {
    spoken: Mutex<Vec<String>>,
}

impl MemorySpeech {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spoken(&self) -> Vec<String> {
        self.spoken.lock().map(|s| s.clone()).unwrap_or_default()
    }

    pub fn last(&self) -> Option<String> {
        self.spoken.lock().ok().and_then(|s| s.last().cloned())
    }

    pub fn clear(&self) {
        if let Ok(mut s) = self.spoken.lock() {
            s.clear();
        }
    }
}

impl SpeechOutput for MemorySpeech {
    fn speak(&self, text: &str) {
        if let Ok(mut s) = self.spoken.lock() {
            s.push(text.to_string());
        }
    }
}

impl<T: SpeechOutput + ?Sized> SpeechOutput for std::sync::Arc<T> {
    fn speak(&self, text: &str) {
        (**self).speak(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_speech_records_in_order() {
        let speech = MemorySpeech::new();
        speech.speak("one");
        speech.speak("two");
        assert_eq!(speech.spoken(), vec!["one", "two"]);
        assert_eq!(speech.last().as_deref(), Some("two"));

        speech.clear();
        assert!(speech.spoken().is_empty());
    }

    #[test]
    fn configured_command_wins() {
        let config = SpeechConfig {
            command: Some("festival-say".into()),
            ..SpeechConfig::default()
        };
        let speech = SystemSpeech::new(&config);
        assert_eq!(speech.program(), "festival-say");
        assert!(speech.args().is_empty());
    }

    #[test]
    fn configured_command_gets_voice_and_rate() {
        let config = SpeechConfig {
            voice: "it-IT".into(),
            rate: 150,
            command: Some("spd-say".into()),
            args: vec!["-l".into(), "{voice}".into(), "-r".into(), "{rate}".into()],
            ..SpeechConfig::default()
        };
        let speech = SystemSpeech::new(&config);
        assert_eq!(speech.program(), "spd-say");
        assert_eq!(speech.args(), ["-l", "it-IT", "-r", "150"]);
    }

    #[test]
    fn espeak_gets_voice_and_rate() {
        let args = Synth::Espeak.args(&SpeechConfig::default());
        assert_eq!(args, ["-v", "en-us", "-s", "175"]);
    }

    #[test]
    fn say_gets_named_voice() {
        let config = SpeechConfig {
            voice: "Samantha".into(),
            rate: 160,
            ..SpeechConfig::default()
        };
        assert_eq!(Synth::Say.args(&config), ["-v", "Samantha", "-r", "160"]);
    }

    #[test]
    fn say_keeps_system_voice_for_language_tags() {
        assert_eq!(Synth::Say.args(&SpeechConfig::default()), ["-r", "175"]);
        assert!(is_language_tag("pt_BR"));
        assert!(is_language_tag("de"));
        assert!(!is_language_tag("Alice"));
    }

    #[test]
    fn platform_synth_is_used_without_command() {
        let speech = SystemSpeech::new(&SpeechConfig::default());
        assert_eq!(speech.program(), Synth::platform().program());
    }
}
