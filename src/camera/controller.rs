//! Per-frame camera integrator driven by the held input commands.
use bevy::prelude::*;

use crate::controls::components::{InputState, PitchCommand, TranslationCommand, YawCommand};

use super::state::{CameraState, DisplayCoordinates, PITCH_LIMIT};

/// Tunables for the explorer camera.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraConfig {
    /// World units moved per step.
    pub speed: f32,
    /// Radians turned per step.
    pub rotation_step: f32,
    pub spawn: Vec3,
    pub fov_degrees: f32,
    pub far_plane: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            speed: 0.5,
            rotation_step: 0.02,
            spawn: Vec3::new(0.0, 120.0, 10.0),
            fov_degrees: 100.0,
            far_plane: 5_000.0,
        }
    }
}

/// Result of one controller step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraFrame {
    pub state: CameraState,
    pub display: DisplayCoordinates,
}

/// Owns the camera state; `None` until the first step resets it to the spawn point.
#[derive(Resource, Debug)]
pub struct CameraController {
    config: CameraConfig,
    state: Option<CameraState>,
}

impl CameraController {
    pub fn new(config: CameraConfig) -> Self {
        Self {
            config,
            state: None,
        }
    }

    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    pub fn state(&self) -> Option<&CameraState> {
        self.state.as_ref()
    }

    pub fn is_initialized(&self) -> bool {
        self.state.is_some()
    }

    /// Resets to the spawn point on the first call only; later calls return the live state.
    pub fn initialize(&mut self) -> &mut CameraState {
        let spawn = self.config.spawn;
        self.state.get_or_insert_with(|| CameraState::at_spawn(spawn))
    }

    /// Integrates one frame. `frame_scale` is `1.0` for per-frame stepping.
    pub fn advance(&mut self, input: &InputState, frame_scale: f32) -> CameraFrame {
        let speed = self.config.speed * frame_scale;
        let step = self.config.rotation_step * frame_scale;
        let state = self.initialize();

        let local = match input.translation {
            Some(TranslationCommand::Forward) => Vec3::new(0.0, 0.0, -speed),
            Some(TranslationCommand::Backward) => Vec3::new(0.0, 0.0, speed),
            Some(TranslationCommand::Left) => Vec3::new(-speed, 0.0, 0.0),
            Some(TranslationCommand::Right) => Vec3::new(speed, 0.0, 0.0),
            None => Vec3::ZERO,
        };

        let height = state.position.y;
        state.position += state.rotation() * local;
        state.position.y = height;

        match input.yaw {
            Some(YawCommand::Left) => state.yaw += step,
            Some(YawCommand::Right) => state.yaw -= step,
            None => {}
        }

        match input.pitch {
            Some(PitchCommand::Up) => state.pitch -= step,
            Some(PitchCommand::Down) => state.pitch += step,
            None => {}
        }
        state.pitch = state.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);

        let state = *state;
        CameraFrame {
            state,
            display: state.display_coordinates(),
        }
    }
}
