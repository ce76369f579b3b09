//! Owned camera state and its HUD projection.
use std::f32::consts::FRAC_PI_2;

use bevy::prelude::*;

/// Pitch is clamped to `[-PITCH_LIMIT, PITCH_LIMIT]`.
pub const PITCH_LIMIT: f32 = FRAC_PI_2;

/// HUD coordinates are shown relative to the spawn height and depth.
pub const DISPLAY_OFFSET_Y: f32 = 120.0;
pub const DISPLAY_OFFSET_Z: f32 = 10.0;

/// Position and orientation of the explorer. No roll is modelled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
}

impl CameraState {
    pub fn at_spawn(spawn: Vec3) -> Self {
        Self {
            position: spawn,
            yaw: 0.0,
            pitch: 0.0,
        }
    }

    /// Orientation as pitch about X followed by yaw about Y, in the intrinsic XYZ order
    /// the scene has always used.
    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.pitch, self.yaw, 0.0)
    }

    pub fn apply_to(&self, transform: &mut Transform) {
        transform.translation = self.position;
        transform.rotation = self.rotation();
    }

    pub fn display_coordinates(&self) -> DisplayCoordinates {
        DisplayCoordinates::from_position(self.position)
    }
}

/// Read-only projection of the camera position for the coordinate HUD.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Default)]
pub struct DisplayCoordinates {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl DisplayCoordinates {
    /// `(round(x), round(y, 2) - 120, |round(z, 2)| - 10)`.
    pub fn from_position(position: Vec3) -> Self {
        Self {
            x: position.x.round(),
            y: round_hundredths(position.y) - DISPLAY_OFFSET_Y,
            z: round_hundredths(position.z).abs() - DISPLAY_OFFSET_Z,
        }
    }

    pub fn x_label(&self) -> String {
        format!("{:.0}", self.x)
    }

    pub fn y_label(&self) -> String {
        format!("{:.2}", self.y)
    }

    pub fn z_label(&self) -> String {
        format!("{:.2}", self.z)
    }
}

fn round_hundredths(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_point_reads_as_origin_except_depth() {
        let coords = DisplayCoordinates::from_position(Vec3::new(0.0, 120.0, 10.0));
        assert_eq!(coords.x_label(), "0");
        assert_eq!(coords.y_label(), "0.00");
        assert_eq!(coords.z_label(), "0.00");
    }

    #[test]
    fn depth_offset_applies_after_absolute_value() {
        let coords = DisplayCoordinates::from_position(Vec3::new(0.0, 120.0, 5.0));
        assert_eq!(coords.z_label(), "-5.00");

        let behind_origin = DisplayCoordinates::from_position(Vec3::new(0.0, 120.0, -25.0));
        assert_eq!(behind_origin.z_label(), "15.00");
    }

    #[test]
    fn x_rounds_to_whole_units() {
        let coords = DisplayCoordinates::from_position(Vec3::new(12.6, 120.0, 10.0));
        assert_eq!(coords.x_label(), "13");

        let coords = DisplayCoordinates::from_position(Vec3::new(-7.2, 120.0, 10.0));
        assert_eq!(coords.x_label(), "-7");
    }

    #[test]
    fn y_keeps_two_decimals() {
        let coords = DisplayCoordinates::from_position(Vec3::new(0.0, 121.256, 10.0));
        assert_eq!(coords.y_label(), "1.26");
    }

    #[test]
    fn identity_orientation_at_rest() {
        let state = CameraState::at_spawn(Vec3::new(0.0, 120.0, 10.0));
        assert!(state.rotation().abs_diff_eq(Quat::IDENTITY, 1e-6));

        let mut transform = Transform::default();
        state.apply_to(&mut transform);
        assert_eq!(transform.translation, Vec3::new(0.0, 120.0, 10.0));
    }
}
