use bevy::prelude::*;
use serde::Deserialize;

use crate::core::config::load_or_default;

use super::components::{ControlCommand, ReleasePolicy};

const CONFIG_PATH: &str = "config/controls.toml";

/// Cells in the on-screen control pad (3 x 3).
pub const PAD_CELLS: usize = 9;

const DEFAULT_PAD: [&str; PAD_CELLS] = [
    "pitch-up",
    "forward",
    "pitch-down",
    "left",
    "",
    "right",
    "yaw-left",
    "backward",
    "yaw-right",
];

#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
enum RawReleasePolicy {
    #[default]
    MatchingPress,
    Unconditional,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawControlsConfig {
    release_policy: RawReleasePolicy,
    keyboard_enabled: bool,
    pad: Vec<String>,
}

impl Default for RawControlsConfig {
    fn default() -> Self {
        Self {
            release_policy: RawReleasePolicy::default(),
            keyboard_enabled: true,
            pad: DEFAULT_PAD.iter().map(|token| token.to_string()).collect(),
        }
    }
}

/// Runtime control configuration derived from `config/controls.toml`.
#[derive(Resource, Debug, Clone)]
pub struct ControlSettings {
    pub release_policy: ReleasePolicy,
    pub keyboard_enabled: bool,
    /// Row-major pad layout; `None` cells render as spacers.
    pub pad: [Option<ControlCommand>; PAD_CELLS],
}

impl ControlSettings {
    pub fn load_or_default() -> Self {
        load_or_default::<RawControlsConfig>(CONFIG_PATH).into()
    }
}

impl Default for ControlSettings {
    fn default() -> Self {
        RawControlsConfig::default().into()
    }
}

impl From<RawControlsConfig> for ControlSettings {
    fn from(value: RawControlsConfig) -> Self {
        let release_policy = match value.release_policy {
            RawReleasePolicy::MatchingPress => ReleasePolicy::MatchingPress,
            RawReleasePolicy::Unconditional => ReleasePolicy::Unconditional,
        };

        let tokens: Vec<&str> = if value.pad.len() == PAD_CELLS {
            value.pad.iter().map(String::as_str).collect()
        } else {
            warn!(
                "{} lists {} pad cells, expected {}. Using the default layout.",
                CONFIG_PATH,
                value.pad.len(),
                PAD_CELLS
            );
            DEFAULT_PAD.to_vec()
        };

        let mut pad = [None; PAD_CELLS];
        for (cell, token) in pad.iter_mut().zip(tokens) {
            *cell = ControlCommand::from_token(token);
            if cell.is_none() && !token.trim().is_empty() {
                debug!("Unknown pad command '{}' rendered as a spacer", token);
            }
        }

        Self {
            release_policy,
            keyboard_enabled: value.keyboard_enabled,
            pad,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controls::components::{PitchCommand, TranslationCommand, YawCommand};
    use crate::core::config::parse_toml;

    #[test]
    fn default_pad_matches_original_layout() {
        let settings = ControlSettings::default();
        assert_eq!(settings.release_policy, ReleasePolicy::MatchingPress);
        assert_eq!(
            settings.pad[0],
            Some(ControlCommand::Pitch(PitchCommand::Up))
        );
        assert_eq!(
            settings.pad[1],
            Some(ControlCommand::Translate(TranslationCommand::Forward))
        );
        assert_eq!(settings.pad[4], None);
        assert_eq!(settings.pad[8], Some(ControlCommand::Yaw(YawCommand::Right)));
    }

    #[test]
    fn parses_policy_and_unknown_tokens() {
        let raw: RawControlsConfig = parse_toml(
            "inline",
            r#"
release_policy = "unconditional"
keyboard_enabled = false
pad = ["forward", "hover", "", "", "", "", "", "", "backward"]
"#,
        )
        .expect("valid controls config");
        let settings = ControlSettings::from(raw);

        assert_eq!(settings.release_policy, ReleasePolicy::Unconditional);
        assert!(!settings.keyboard_enabled);
        assert_eq!(settings.pad[1], None);
        assert_eq!(
            settings.pad[8],
            Some(ControlCommand::Translate(TranslationCommand::Backward))
        );
    }

    #[test]
    fn wrong_pad_length_uses_default_layout() {
        let raw = RawControlsConfig {
            pad: vec!["forward".to_string()],
            ..Default::default()
        };
        let settings = ControlSettings::from(raw);
        assert_eq!(settings.pad, ControlSettings::default().pad);
    }
}
