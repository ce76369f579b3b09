// src/ui/control_pad/plugin.rs
//
// Plugin registration for the on-screen control pad.

use bevy::prelude::*;

use crate::core::plugin::FrameSet;

use super::systems::{handle_pad_buttons, spawn_control_pad};

pub struct ControlPadPlugin;

impl Plugin for ControlPadPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_control_pad)
            .add_systems(Update, handle_pad_buttons.in_set(FrameSet::Input));
    }
}
