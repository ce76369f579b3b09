//! Spoken playback of companion replies.
use std::fmt;

use bevy::{
    log::{info, warn},
    prelude::Resource,
};

/// Voice parameters applied to every utterance.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeechSettings {
    pub enabled: bool,
    pub rate: f32,
    pub pitch: f32,
    pub locale: String,
}

impl SpeechSettings {
    pub fn utterance(&self, text: impl Into<String>) -> Utterance {
        Utterance {
            text: text.into(),
            rate: self.rate,
            pitch: self.pitch,
            locale: self.locale.clone(),
        }
    }
}

impl Default for SpeechSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            rate: 1.0,
            pitch: 1.2,
            locale: "en-US".to_string(),
        }
    }
}

/// One line handed to a speech sink.
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub text: String,
    pub rate: f32,
    pub pitch: f32,
    pub locale: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeechError {
    EmptyUtterance,
    /// No platform speech engine could be started.
    Unavailable { message: String },
    #[cfg_attr(not(feature = "native_speech"), allow(dead_code))]
    Rejected { message: String },
}

impl fmt::Display for SpeechError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyUtterance => write!(f, "nothing to say"),
            Self::Unavailable { message } => write!(f, "speech engine unavailable: {}", message),
            Self::Rejected { message } => write!(f, "speech sink rejected utterance: {}", message),
        }
    }
}

impl std::error::Error for SpeechError {}

/// Platform speech backends implement this.
pub trait SpeechSink: Send + Sync {
    fn name(&self) -> &'static str;

    fn speak(&self, utterance: &Utterance) -> Result<(), SpeechError>;
}

/// Default sink: writes utterances to the log under the `speech` target.
#[derive(Debug, Default)]
pub struct LogSpeechSink;

impl SpeechSink for LogSpeechSink {
    fn name(&self) -> &'static str {
        "log"
    }

    fn speak(&self, utterance: &Utterance) -> Result<(), SpeechError> {
        if utterance.text.trim().is_empty() {
            return Err(SpeechError::EmptyUtterance);
        }

        info!(
            target: "speech",
            "[{} rate {:.1} pitch {:.1}] {}",
            utterance.locale,
            utterance.rate,
            utterance.pitch,
            utterance.text
        );
        Ok(())
    }
}

/// Sink currently receiving replies.
#[derive(Resource)]
pub struct ActiveSpeechSink(Box<dyn SpeechSink>);

impl ActiveSpeechSink {
    pub fn new(sink: Box<dyn SpeechSink>) -> Self {
        Self(sink)
    }

    pub fn name(&self) -> &'static str {
        self.0.name()
    }

    pub fn speak(&self, utterance: &Utterance) -> Result<(), SpeechError> {
        self.0.speak(utterance)
    }
}

impl ActiveSpeechSink {
    /// Starts the platform speech engine, falling back to the log sink when it is unavailable.
    pub fn platform_default() -> Self {
        match start_platform_sink() {
            Ok(sink) => Self::new(sink),
            Err(err) => {
                warn!(
                    target: "speech",
                    "{}. Companion replies will be logged instead of spoken.", err
                );
                Self::default()
            }
        }
    }
}

impl Default for ActiveSpeechSink {
    fn default() -> Self {
        Self::new(Box::new(LogSpeechSink))
    }
}

#[cfg(feature = "native_speech")]
fn start_platform_sink() -> Result<Box<dyn SpeechSink>, SpeechError> {
    let sink = super::native_speech::NativeSpeechSink::start()?;
    Ok(Box::new(sink))
}

#[cfg(not(feature = "native_speech"))]
fn start_platform_sink() -> Result<Box<dyn SpeechSink>, SpeechError> {
    Err(SpeechError::Unavailable {
        message: "built without the native_speech feature".to_string(),
    })
}

/// Maps a relative voice factor (1.0 = engine default) into the engine's supported range.
#[cfg_attr(not(feature = "native_speech"), allow(dead_code))]
pub fn scale_voice_parameter(factor: f32, normal: f32, min: f32, max: f32) -> f32 {
    let (low, high) = if min <= max { (min, max) } else { (max, min) };
    (normal * factor).clamp(low, high)
}

/// Compares BCP 47 style tags, treating `_` and `-` alike and ignoring case.
#[cfg_attr(not(feature = "native_speech"), allow(dead_code))]
pub fn locale_matches(voice_language: &str, locale: &str) -> bool {
    let normalize = |tag: &str| tag.trim().replace('_', "-").to_ascii_lowercase();
    normalize(voice_language) == normalize(locale)
}
