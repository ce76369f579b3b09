//! CameraPlugin registers the controller and keeps the engine camera in sync.
use bevy::prelude::*;

use crate::core::plugin::FrameSet;

use super::{
    controller::{CameraConfig, CameraController},
    state::DisplayCoordinates,
    systems::{advance_explorer_camera, spawn_explorer_camera},
};

pub struct CameraPlugin {
    config: CameraConfig,
}

impl CameraPlugin {
    pub fn new(config: CameraConfig) -> Self {
        Self { config }
    }
}

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        info!(
            "Camera configured: speed {:.2}/step, rotation {:.3} rad/step, spawn {}",
            self.config.speed, self.config.rotation_step, self.config.spawn
        );

        app.insert_resource(CameraController::new(self.config.clone()))
            .init_resource::<DisplayCoordinates>()
            .add_systems(Startup, spawn_explorer_camera)
            .add_systems(Update, advance_explorer_camera.in_set(FrameSet::Motion));
    }
}
