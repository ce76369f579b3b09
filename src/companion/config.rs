use bevy::prelude::*;
use serde::Deserialize;

use crate::core::config::load_or_default;

use super::{speech::SpeechSettings, trivia::TriviaCalendar};

const CONFIG_PATH: &str = "config/companion.toml";

#[derive(Debug, Clone, Deserialize, Default)]
struct RawCompanionConfig {
    #[serde(default)]
    speech: RawSpeechSection,
    #[serde(default)]
    panel: RawPanelSection,
    #[serde(default)]
    trivia: RawTriviaSection,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawTriviaSection {
    /// Pins the trivia rotation to one day of the month; unset follows the local calendar.
    fixed_day: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawSpeechSection {
    enabled: bool,
    rate: f32,
    pitch: f32,
    locale: String,
}

impl Default for RawSpeechSection {
    fn default() -> Self {
        let defaults = SpeechSettings::default();
        Self {
            enabled: defaults.enabled,
            rate: defaults.rate,
            pitch: defaults.pitch,
            locale: defaults.locale,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawPanelSection {
    visible_on_start: bool,
}

impl Default for RawPanelSection {
    fn default() -> Self {
        Self {
            visible_on_start: true,
        }
    }
}

/// Runtime companion configuration derived from `config/companion.toml`.
#[derive(Resource, Debug, Clone)]
pub struct CompanionSettings {
    pub speech: SpeechSettings,
    pub panel_visible_on_start: bool,
    pub calendar: TriviaCalendar,
}

impl CompanionSettings {
    pub fn load_or_default() -> Self {
        load_or_default::<RawCompanionConfig>(CONFIG_PATH).into()
    }
}

impl Default for CompanionSettings {
    fn default() -> Self {
        RawCompanionConfig::default().into()
    }
}

impl From<RawCompanionConfig> for CompanionSettings {
    fn from(value: RawCompanionConfig) -> Self {
        let defaults = SpeechSettings::default();
        let speech = value.speech;
        let locale = speech.locale.trim();

        Self {
            speech: SpeechSettings {
                enabled: speech.enabled,
                rate: if speech.rate > 0.0 {
                    speech.rate
                } else {
                    defaults.rate
                },
                pitch: if speech.pitch > 0.0 {
                    speech.pitch
                } else {
                    defaults.pitch
                },
                locale: if locale.is_empty() {
                    defaults.locale
                } else {
                    locale.to_string()
                },
            },
            panel_visible_on_start: value.panel.visible_on_start,
            calendar: match value.trivia.fixed_day {
                Some(day) => TriviaCalendar::Fixed(day),
                None => TriviaCalendar::Local,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::parse_toml;

    #[test]
    fn overrides_and_fallbacks() {
        let raw: RawCompanionConfig = parse_toml(
            "inline",
            r#"
[speech]
rate = 0.0
pitch = 0.9
locale = ""

[panel]
visible_on_start = false
"#,
        )
        .expect("valid companion config");
        let settings = CompanionSettings::from(raw);

        assert_eq!(settings.speech.rate, 1.0);
        assert_eq!(settings.speech.pitch, 0.9);
        assert_eq!(settings.speech.locale, "en-US");
        assert!(settings.speech.enabled);
        assert!(!settings.panel_visible_on_start);
        assert_eq!(settings.calendar, TriviaCalendar::Local);
    }

    #[test]
    fn fixed_trivia_day_pins_the_calendar() {
        let raw: RawCompanionConfig = parse_toml(
            "inline",
            r#"
[trivia]
fixed_day = 12
"#,
        )
        .expect("valid companion config");
        let settings = CompanionSettings::from(raw);

        assert_eq!(settings.calendar, TriviaCalendar::Fixed(12));
        assert_eq!(settings.calendar.day_of_month(), 12);
    }
}
