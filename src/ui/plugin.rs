// src/ui/plugin.rs
//
// UiPlugin groups the HUD, control pad, and chat panel plugins.

use bevy::prelude::*;

use super::{
    chat_panel::ChatPanelPlugin, control_pad::ControlPadPlugin,
    coordinate_hud::CoordinateHudPlugin,
};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        info!("UiPlugin registered");

        app.add_plugins((CoordinateHudPlugin, ControlPadPlugin, ChatPanelPlugin));
    }
}
