//! Seeded star shell surrounding the explorer.
use std::f32::consts::TAU;

use bevy::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::camera::controller::CameraController;

use super::{
    components::StarfieldRoot,
    config::{StarfieldConfig, WorldSettings},
};

/// One star: offset from the shell centre and its radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub offset: Vec3,
    pub size: f32,
}

/// Scatters `config.count` stars uniformly over directions, in `[radius, radius + depth]`.
pub fn scatter_stars(config: &StarfieldConfig) -> Vec<Star> {
    let mut rng = StdRng::seed_from_u64(config.seed);

    (0..config.count)
        .map(|_| {
            let z: f32 = rng.gen_range(-1.0..=1.0);
            let theta: f32 = rng.gen_range(0.0..TAU);
            let ring = (1.0 - z * z).max(0.0).sqrt();
            let direction = Vec3::new(ring * theta.cos(), z, ring * theta.sin());
            let distance = config.radius + config.depth * rng.gen::<f32>();

            Star {
                offset: direction * distance,
                size: config.star_size * rng.gen_range(0.5..1.5),
            }
        })
        .collect()
}

pub fn spawn_starfield(
    mut commands: Commands,
    settings: Res<WorldSettings>,
    controller: Res<CameraController>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let stars = scatter_stars(&settings.starfield);
    let mesh = meshes.add(Sphere::new(1.0));
    let material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        unlit: true,
        ..default()
    });

    commands
        .spawn((
            Transform::from_translation(controller.config().spawn),
            Visibility::default(),
            StarfieldRoot,
            Name::new("Starfield"),
        ))
        .with_children(|parent| {
            for star in &stars {
                parent.spawn((
                    Mesh3d(mesh.clone()),
                    MeshMaterial3d(material.clone()),
                    Transform::from_translation(star.offset).with_scale(Vec3::splat(star.size)),
                ));
            }
        });

    info!(
        "Starfield scattered {} stars (radius {:.0}, depth {:.0})",
        stars.len(),
        settings.starfield.radius,
        settings.starfield.depth
    );
}

/// Keeps the star shell centred on the camera.
pub fn follow_camera_with_starfield(
    controller: Res<CameraController>,
    mut roots: Query<&mut Transform, With<StarfieldRoot>>,
) {
    let Some(state) = controller.state() else {
        return;
    };

    for mut transform in roots.iter_mut() {
        transform.translation = state.position;
    }
}
