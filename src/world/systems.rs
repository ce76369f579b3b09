//! Scene setup systems: lighting, ambience, and texture-gated visibility.
use bevy::{
    asset::LoadState,
    audio::{PlaybackSettings, Volume},
    prelude::*,
};

use super::{
    components::{PendingTexture, PrimarySun},
    config::WorldSettings,
};

/// Black sky, dim ambient fill, and one shadow-casting sun.
pub fn spawn_lighting(mut commands: Commands, settings: Res<WorldSettings>) {
    let lighting = &settings.lighting;

    commands.insert_resource(ClearColor(Color::BLACK));
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: lighting.ambient_brightness,
        ..default()
    });

    commands.spawn((
        DirectionalLight {
            illuminance: lighting.sun_illuminance,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_translation(lighting.sun_position).looking_at(Vec3::ZERO, Vec3::Y),
        PrimarySun,
        Name::new("Sun Light"),
    ));
}

/// Starts the looping background track, if one is configured.
pub fn start_ambience(
    mut commands: Commands,
    settings: Res<WorldSettings>,
    asset_server: Res<AssetServer>,
) {
    let Some(path) = settings.ambience.music.clone() else {
        debug!("No ambience track configured");
        return;
    };

    commands.spawn((
        AudioPlayer::new(asset_server.load(path.clone())),
        PlaybackSettings::LOOP.with_volume(Volume::Linear(settings.ambience.volume)),
        Name::new("Ambience"),
    ));
    info!("Ambience track queued: {}", path);
}

/// What to do with a hidden entity whose texture is still pending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextureGate {
    Wait,
    Reveal,
    Abandon { reason: String },
}

impl TextureGate {
    pub fn decide(loaded_with_dependencies: bool, state: &LoadState) -> Self {
        if loaded_with_dependencies {
            return Self::Reveal;
        }
        match state {
            LoadState::Failed(err) => Self::Abandon {
                reason: err.to_string(),
            },
            _ => Self::Wait,
        }
    }
}

/// Reveals entities once their texture is ready. A failed load keeps them hidden.
pub fn reveal_loaded_textures(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut pending: Query<(Entity, &PendingTexture, &mut Visibility)>,
) {
    for (entity, texture, mut visibility) in pending.iter_mut() {
        let id = texture.handle.id();
        let gate = TextureGate::decide(
            asset_server.is_loaded_with_dependencies(id),
            &asset_server.load_state(id),
        );

        match gate {
            TextureGate::Wait => {}
            TextureGate::Reveal => {
                *visibility = Visibility::Inherited;
                commands.entity(entity).remove::<PendingTexture>();
                debug!("Texture ready, showing {}", texture.label);
            }
            TextureGate::Abandon { reason } => {
                warn!(
                    "Texture for {} failed to load ({}). Leaving it hidden.",
                    texture.label, reason
                );
                commands.entity(entity).remove::<PendingTexture>();
            }
        }
    }
}
