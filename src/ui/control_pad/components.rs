// src/ui/control_pad/components.rs
//
// Components for the on-screen control pad.

use bevy::prelude::*;

use crate::controls::components::{ControlCommand, PitchCommand, TranslationCommand, YawCommand};

/// Marker for the pad's grid node.
#[derive(Component, Debug)]
pub struct ControlPad;

/// One pad button. `held` remembers whether the last interaction was a press.
#[derive(Component, Debug)]
pub struct PadButton {
    pub command: ControlCommand,
    pub held: bool,
}

impl PadButton {
    pub fn new(command: ControlCommand) -> Self {
        Self {
            command,
            held: false,
        }
    }
}

/// Short caption drawn on a pad button.
pub fn pad_label(command: ControlCommand) -> &'static str {
    match command {
        ControlCommand::Translate(TranslationCommand::Forward) => "Fwd",
        ControlCommand::Translate(TranslationCommand::Backward) => "Back",
        ControlCommand::Translate(TranslationCommand::Left) => "Left",
        ControlCommand::Translate(TranslationCommand::Right) => "Right",
        ControlCommand::Yaw(YawCommand::Left) => "Turn L",
        ControlCommand::Yaw(YawCommand::Right) => "Turn R",
        ControlCommand::Pitch(PitchCommand::Up) => "Look ^",
        ControlCommand::Pitch(PitchCommand::Down) => "Look v",
    }
}
