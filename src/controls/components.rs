//! Discrete locomotion commands and the per-slot input state.
use std::fmt;

use bevy::prelude::*;

/// Translation relative to the current view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TranslationCommand {
    Forward,
    Backward,
    Left,
    Right,
}

/// Horizontal look rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YawCommand {
    Left,
    Right,
}

/// Vertical look rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PitchCommand {
    Up,
    Down,
}

/// The three independent slots of [`InputState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlSlot {
    Translation,
    Yaw,
    Pitch,
}

/// One of the eight command channels exposed by the input surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlCommand {
    Translate(TranslationCommand),
    Yaw(YawCommand),
    Pitch(PitchCommand),
}

impl ControlCommand {
    pub const ALL: [ControlCommand; 8] = [
        Self::Translate(TranslationCommand::Forward),
        Self::Translate(TranslationCommand::Backward),
        Self::Translate(TranslationCommand::Left),
        Self::Translate(TranslationCommand::Right),
        Self::Yaw(YawCommand::Left),
        Self::Yaw(YawCommand::Right),
        Self::Pitch(PitchCommand::Up),
        Self::Pitch(PitchCommand::Down),
    ];

    pub fn slot(self) -> ControlSlot {
        match self {
            Self::Translate(_) => ControlSlot::Translation,
            Self::Yaw(_) => ControlSlot::Yaw,
            Self::Pitch(_) => ControlSlot::Pitch,
        }
    }

    pub const fn token(self) -> &'static str {
        match self {
            Self::Translate(TranslationCommand::Forward) => "forward",
            Self::Translate(TranslationCommand::Backward) => "backward",
            Self::Translate(TranslationCommand::Left) => "left",
            Self::Translate(TranslationCommand::Right) => "right",
            Self::Yaw(YawCommand::Left) => "yaw-left",
            Self::Yaw(YawCommand::Right) => "yaw-right",
            Self::Pitch(PitchCommand::Up) => "pitch-up",
            Self::Pitch(PitchCommand::Down) => "pitch-down",
        }
    }

    /// Parses a command token. Unknown tokens mean "no command".
    pub fn from_token(token: &str) -> Option<Self> {
        let token = token.trim();
        Self::ALL
            .into_iter()
            .find(|command| command.token().eq_ignore_ascii_case(token))
    }
}

impl fmt::Display for ControlCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// How a press-end event clears its slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReleasePolicy {
    /// Clear only when the slot still holds the released command.
    #[default]
    MatchingPress,
    /// Clear the slot whatever it currently holds.
    Unconditional,
}

/// Currently held commands, at most one per slot. Last press wins.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub translation: Option<TranslationCommand>,
    pub yaw: Option<YawCommand>,
    pub pitch: Option<PitchCommand>,
}

impl InputState {
    pub fn press_start(&mut self, command: ControlCommand) {
        match command {
            ControlCommand::Translate(value) => self.translation = Some(value),
            ControlCommand::Yaw(value) => self.yaw = Some(value),
            ControlCommand::Pitch(value) => self.pitch = Some(value),
        }
    }

    pub fn press_end(&mut self, command: ControlCommand, policy: ReleasePolicy) {
        if policy == ReleasePolicy::MatchingPress && !self.holds(command) {
            return;
        }
        self.clear(command.slot());
    }

    pub fn clear(&mut self, slot: ControlSlot) {
        match slot {
            ControlSlot::Translation => self.translation = None,
            ControlSlot::Yaw => self.yaw = None,
            ControlSlot::Pitch => self.pitch = None,
        }
    }

    pub fn holds(&self, command: ControlCommand) -> bool {
        match command {
            ControlCommand::Translate(value) => self.translation == Some(value),
            ControlCommand::Yaw(value) => self.yaw == Some(value),
            ControlCommand::Pitch(value) => self.pitch == Some(value),
        }
    }

    pub fn is_idle(&self) -> bool {
        *self == Self::default()
    }
}

/// Set while a text field owns the keyboard; suspends keyboard locomotion presses.
#[derive(Resource, Debug, Default)]
pub struct KeyboardCapture {
    pub captured: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    const FORWARD: ControlCommand = ControlCommand::Translate(TranslationCommand::Forward);
    const LEFT: ControlCommand = ControlCommand::Translate(TranslationCommand::Left);

    #[test]
    fn tokens_parse_case_insensitively() {
        for command in ControlCommand::ALL {
            assert_eq!(ControlCommand::from_token(command.token()), Some(command));
        }
        assert_eq!(
            ControlCommand::from_token(" Pitch-UP "),
            Some(ControlCommand::Pitch(PitchCommand::Up))
        );
        assert_eq!(ControlCommand::from_token("jump"), None);
        assert_eq!(ControlCommand::from_token(""), None);
    }

    #[test]
    fn last_press_wins_within_a_slot() {
        let mut state = InputState::default();
        state.press_start(FORWARD);
        state.press_start(LEFT);
        state.press_start(ControlCommand::Yaw(YawCommand::Right));

        assert_eq!(state.translation, Some(TranslationCommand::Left));
        assert_eq!(state.yaw, Some(YawCommand::Right));
        assert_eq!(state.pitch, None);
    }

    #[test]
    fn matching_release_ignores_stale_release() {
        let mut state = InputState::default();
        state.press_start(FORWARD);
        state.press_start(LEFT);
        state.press_end(FORWARD, ReleasePolicy::MatchingPress);
        assert_eq!(state.translation, Some(TranslationCommand::Left));

        state.press_end(LEFT, ReleasePolicy::MatchingPress);
        assert!(state.is_idle());
    }

    #[test]
    fn unconditional_release_clears_newer_press() {
        let mut state = InputState::default();
        state.press_start(FORWARD);
        state.press_start(LEFT);
        state.press_end(FORWARD, ReleasePolicy::Unconditional);

        assert_eq!(state.translation, None);
    }

    #[test]
    fn release_only_touches_its_own_slot() {
        let mut state = InputState::default();
        state.press_start(FORWARD);
        state.press_start(ControlCommand::Pitch(PitchCommand::Down));
        state.press_end(ControlCommand::Yaw(YawCommand::Left), ReleasePolicy::Unconditional);

        assert_eq!(state.translation, Some(TranslationCommand::Forward));
        assert_eq!(state.pitch, Some(PitchCommand::Down));
    }
}
