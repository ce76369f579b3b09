//! WorldPlugin composes lights, the starfield, billboards, and ambience.
use bevy::prelude::*;

use crate::core::plugin::FrameSet;

use super::{
    config::WorldSettings,
    sprites::{face_billboards_to_camera, spawn_billboards},
    starfield::{follow_camera_with_starfield, spawn_starfield},
    systems::{reveal_loaded_textures, spawn_lighting, start_ambience},
};

pub struct WorldPlugin {
    settings: WorldSettings,
}

impl WorldPlugin {
    pub fn new(settings: WorldSettings) -> Self {
        Self { settings }
    }
}

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        info!(
            "World configured: {} stars, ambience {}",
            self.settings.starfield.count,
            self.settings.ambience.music.as_deref().unwrap_or("off")
        );

        app.insert_resource(self.settings.clone())
            .add_systems(
                Startup,
                (spawn_lighting, spawn_starfield, spawn_billboards, start_ambience),
            )
            .add_systems(
                Update,
                (
                    face_billboards_to_camera,
                    follow_camera_with_starfield,
                    reveal_loaded_textures,
                )
                    .in_set(FrameSet::Present),
            );
    }
}
