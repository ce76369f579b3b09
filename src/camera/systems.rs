//! Systems for the camera module.
use bevy::prelude::*;

use crate::{controls::components::InputState, core::plugin::FrameClock};

use super::{components::ExplorerCamera, controller::CameraController, state::DisplayCoordinates};

/// Spawns the engine camera at the configured spawn point.
pub fn spawn_explorer_camera(mut commands: Commands, controller: Res<CameraController>) {
    let config = controller.config();

    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: config.fov_degrees.to_radians(),
            far: config.far_plane,
            ..default()
        }),
        Transform::from_translation(config.spawn),
        ExplorerCamera,
        Name::new("Explorer Camera"),
    ));
}

/// Steps the controller once and copies its state into the engine camera.
pub fn advance_explorer_camera(
    clock: Res<FrameClock>,
    input: Res<InputState>,
    mut controller: ResMut<CameraController>,
    mut display: ResMut<DisplayCoordinates>,
    mut cameras: Query<&mut Transform, With<ExplorerCamera>>,
) {
    if controller.is_initialized() && input.is_idle() {
        return;
    }

    let first_step = !controller.is_initialized();
    let frame = controller.advance(&input, clock.frame_scale());
    *display = frame.display;

    if first_step {
        info!("Explorer camera initialised at {}", frame.state.position);
    }

    for mut transform in cameras.iter_mut() {
        frame.state.apply_to(&mut transform);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        camera::controller::CameraConfig, controls::components::TranslationCommand,
    };

    #[test]
    fn engine_camera_follows_controller() {
        let mut app = App::new();
        app.insert_resource(FrameClock::default())
            .insert_resource(InputState {
                translation: Some(TranslationCommand::Forward),
                ..Default::default()
            })
            .insert_resource(CameraController::new(CameraConfig::default()))
            .init_resource::<DisplayCoordinates>()
            .add_systems(Update, advance_explorer_camera);

        let camera = app
            .world_mut()
            .spawn((Transform::default(), ExplorerCamera))
            .id();

        for _ in 0..4 {
            app.update();
        }

        let transform = app.world().get::<Transform>(camera).expect("camera transform");
        assert_eq!(transform.translation, Vec3::new(0.0, 120.0, 8.0));
        assert_eq!(
            app.world().resource::<DisplayCoordinates>().z_label(),
            "-2.00"
        );

        *app.world_mut().resource_mut::<InputState>() = InputState::default();
        app.update();

        let transform = app.world().get::<Transform>(camera).expect("camera transform");
        assert_eq!(transform.translation, Vec3::new(0.0, 120.0, 8.0));
        assert_eq!(
            app.world().resource::<DisplayCoordinates>().z_label(),
            "-2.00"
        );
    }

    #[test]
    fn idle_first_frame_still_places_the_camera() {
        let mut app = App::new();
        app.insert_resource(FrameClock::default())
            .init_resource::<InputState>()
            .insert_resource(CameraController::new(CameraConfig::default()))
            .init_resource::<DisplayCoordinates>()
            .add_systems(Update, advance_explorer_camera);

        let camera = app
            .world_mut()
            .spawn((Transform::default(), ExplorerCamera))
            .id();
        app.update();

        assert!(app.world().resource::<CameraController>().is_initialized());
        let transform = app.world().get::<Transform>(camera).expect("camera transform");
        assert_eq!(transform.translation, Vec3::new(0.0, 120.0, 10.0));
    }
}
