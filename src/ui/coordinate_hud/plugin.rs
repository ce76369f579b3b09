// src/ui/coordinate_hud/plugin.rs
//
// Plugin registration for the coordinate HUD.

use bevy::prelude::*;

use crate::core::plugin::FrameSet;

use super::systems::{refresh_coordinate_hud, spawn_coordinate_hud};

pub struct CoordinateHudPlugin;

impl Plugin for CoordinateHudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_coordinate_hud)
            .add_systems(Update, refresh_coordinate_hud.in_set(FrameSet::Present));
    }
}
