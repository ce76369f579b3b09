//! World-anchored billboard sprites: celestial bodies, the flag, and distant structures.
use bevy::prelude::*;

use crate::camera::controller::CameraController;

use super::components::{Billboard, PendingTexture};

/// Immutable placement of one billboard.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteDescriptor {
    pub texture: &'static str,
    pub position: Vec3,
    pub size: Vec2,
}

impl SpriteDescriptor {
    const fn new(texture: &'static str, position: Vec3, size: Vec2) -> Self {
        Self {
            texture,
            position,
            size,
        }
    }
}

pub const SPRITE_CATALOGUE: [SpriteDescriptor; 8] = [
    SpriteDescriptor::new(
        "textures/earth.png",
        Vec3::new(150.0, 290.0, -800.0),
        Vec2::new(150.0, 150.0),
    ),
    SpriteDescriptor::new(
        "textures/sun.png",
        Vec3::new(-400.0, 390.0, -800.0),
        Vec2::new(90.0, 90.0),
    ),
    SpriteDescriptor::new(
        "textures/body1.png",
        Vec3::new(-200.0, 70.0, -300.0),
        Vec2::new(200.0, 100.0),
    ),
    SpriteDescriptor::new(
        "textures/body1.png",
        Vec3::new(-200.0, 30.0, -1000.0),
        Vec2::new(200.0, 100.0),
    ),
    SpriteDescriptor::new(
        "textures/body1.png",
        Vec3::new(-200.0, 70.0, 300.0),
        Vec2::new(200.0, 100.0),
    ),
    SpriteDescriptor::new(
        "textures/solar.png",
        Vec3::new(200.0, 66.0, -400.0),
        Vec2::new(80.0, 40.0),
    ),
    SpriteDescriptor::new(
        "textures/solar.png",
        Vec3::new(1200.0, 20.0, -400.0),
        Vec2::new(80.0, 40.0),
    ),
    SpriteDescriptor::new(
        "textures/flag.png",
        Vec3::new(0.0, 66.0, -400.0),
        Vec2::new(90.0, 150.0),
    ),
];

/// Full billboarding: the sprite takes the camera's orientation; position and scale stay put.
pub fn face_camera(sprite: Transform, camera_rotation: Quat) -> Transform {
    Transform {
        rotation: camera_rotation,
        ..sprite
    }
}

/// Spawns every catalogue sprite hidden until its texture has loaded.
pub fn spawn_billboards(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for descriptor in SPRITE_CATALOGUE {
        let texture: Handle<Image> = asset_server.load(descriptor.texture);

        commands.spawn((
            Mesh3d(meshes.add(Rectangle::new(descriptor.size.x, descriptor.size.y))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color_texture: Some(texture.clone()),
                alpha_mode: AlphaMode::Blend,
                unlit: true,
                double_sided: true,
                cull_mode: None,
                ..default()
            })),
            Transform::from_translation(descriptor.position),
            Visibility::Hidden,
            Billboard,
            PendingTexture::new(texture, descriptor.texture),
            Name::new(format!("Billboard {}", descriptor.texture)),
        ));
    }

    info!("Spawned {} billboard sprites", SPRITE_CATALOGUE.len());
}

/// Rotates every billboard to the camera's current orientation.
pub fn face_billboards_to_camera(
    controller: Res<CameraController>,
    mut billboards: Query<&mut Transform, With<Billboard>>,
) {
    let Some(state) = controller.state() else {
        return;
    };
    let rotation = state.rotation();

    for mut transform in billboards.iter_mut() {
        *transform = face_camera(*transform, rotation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::controller::CameraConfig;
    use crate::controls::components::{InputState, PitchCommand, YawCommand};

    #[test]
    fn facing_only_changes_rotation() {
        let sprite = Transform::from_xyz(150.0, 290.0, -800.0).with_scale(Vec3::splat(2.0));
        let rotation = Quat::from_euler(EulerRot::XYZ, 0.3, -1.1, 0.0);

        let faced = face_camera(sprite, rotation);
        assert_eq!(faced.translation, sprite.translation);
        assert_eq!(faced.scale, sprite.scale);
        assert_eq!(faced.rotation, rotation);
    }

    #[test]
    fn catalogue_sizes_are_positive() {
        for descriptor in SPRITE_CATALOGUE {
            assert!(descriptor.size.x > 0.0 && descriptor.size.y > 0.0);
        }
    }

    #[test]
    fn billboards_track_camera_orientation() {
        let mut controller = CameraController::new(CameraConfig::default());
        controller.advance(
            &InputState {
                yaw: Some(YawCommand::Left),
                pitch: Some(PitchCommand::Down),
                ..Default::default()
            },
            1.0,
        );
        let expected = controller.state().expect("initialised").rotation();

        let mut app = App::new();
        app.insert_resource(controller)
            .add_systems(Update, face_billboards_to_camera);
        let sprite = app
            .world_mut()
            .spawn((Transform::from_xyz(0.0, 66.0, -400.0), Billboard))
            .id();

        app.update();

        let transform = app.world().get::<Transform>(sprite).expect("sprite transform");
        assert_eq!(transform.rotation, expected);
        assert_eq!(transform.translation, Vec3::new(0.0, 66.0, -400.0));
    }
}
