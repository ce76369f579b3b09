//! Systems for the terrain module.
use bevy::{
    image::{
        ImageAddressMode, ImageFilterMode, ImageLoaderSettings, ImageSampler,
        ImageSamplerDescriptor,
    },
    math::Affine2,
    prelude::*,
};

use crate::{
    camera::controller::CameraController,
    world::components::{Ground, PendingTexture},
};

use super::tiling::GroundTiler;

const GROUND_ANISOTROPY: u16 = 16;

/// Spawns the single textured ground plane, hidden until the texture is ready.
pub fn spawn_ground(
    mut commands: Commands,
    tiler: Res<GroundTiler>,
    asset_server: Res<AssetServer>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let config = tiler.config();
    let extent = tiler.extent();

    let texture: Handle<Image> = asset_server.load_with_settings(
        config.texture.clone(),
        |settings: &mut ImageLoaderSettings| {
            settings.sampler = ImageSampler::Descriptor(ImageSamplerDescriptor {
                address_mode_u: ImageAddressMode::Repeat,
                address_mode_v: ImageAddressMode::Repeat,
                mag_filter: ImageFilterMode::Linear,
                min_filter: ImageFilterMode::Linear,
                mipmap_filter: ImageFilterMode::Linear,
                anisotropy_clamp: GROUND_ANISOTROPY,
                ..default()
            });
        },
    );

    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(extent, extent))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color_texture: Some(texture.clone()),
            uv_transform: Affine2::from_scale(Vec2::splat(config.repeat as f32)),
            perceptual_roughness: 1.0,
            metallic: 0.0,
            double_sided: true,
            cull_mode: None,
            ..default()
        })),
        Transform::from_translation(tiler.reposition(Vec3::ZERO)),
        Visibility::Hidden,
        Ground,
        PendingTexture::new(texture, "ground"),
        Name::new("Ground"),
    ));
}

/// Snaps the ground plane to the tile under the camera.
pub fn reposition_ground(
    tiler: Res<GroundTiler>,
    controller: Res<CameraController>,
    mut ground: Query<&mut Transform, With<Ground>>,
) {
    let Some(state) = controller.state() else {
        return;
    };
    let origin = tiler.reposition(state.position);
    debug_assert!(
        tiler.covers(origin, state.position),
        "camera left the seam-free region of the ground plane"
    );

    for mut transform in ground.iter_mut() {
        if transform.translation != origin {
            trace!("Ground re-centred at ({:.0}, {:.0})", origin.x, origin.z);
            transform.translation = origin;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        camera::controller::CameraConfig,
        controls::components::{InputState, TranslationCommand},
        terrain::tiling::GroundConfig,
    };

    #[test]
    fn ground_snaps_when_crossing_a_tile_edge() {
        let mut controller = CameraController::new(CameraConfig {
            speed: 300.0,
            ..Default::default()
        });
        controller.advance(
            &InputState {
                translation: Some(TranslationCommand::Forward),
                ..Default::default()
            },
            1.0,
        );

        let mut app = App::new();
        app.insert_resource(GroundTiler::new(GroundConfig::default()))
            .insert_resource(controller)
            .add_systems(Update, reposition_ground);
        let ground = app
            .world_mut()
            .spawn((Transform::default(), Ground))
            .id();

        app.update();

        let transform = app.world().get::<Transform>(ground).expect("ground transform");
        assert_eq!(transform.translation, Vec3::new(0.0, 0.0, -500.0));
    }
}
