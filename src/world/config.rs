//! World configuration loaded from `config/world.toml`.
use bevy::prelude::*;
use serde::Deserialize;

use crate::{
    camera::controller::CameraConfig,
    core::{config::load_or_default, plugin::MotionTiming},
    terrain::tiling::GroundConfig,
};

const CONFIG_PATH: &str = "config/world.toml";
const MIN_GROUND_REPEAT: u32 = 3;
const MAX_STARS: u32 = 50_000;

#[derive(Debug, Clone, Deserialize, Default)]
struct RawWorldConfig {
    #[serde(default)]
    camera: RawCameraSection,
    #[serde(default)]
    timing: RawTimingSection,
    #[serde(default)]
    ground: RawGroundSection,
    #[serde(default)]
    starfield: RawStarfieldSection,
    #[serde(default)]
    ambience: RawAmbienceSection,
    #[serde(default)]
    lighting: RawLightingSection,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawCameraSection {
    speed: f32,
    rotation_step: f32,
    spawn: [f32; 3],
    fov_degrees: f32,
    far_plane: f32,
}

impl Default for RawCameraSection {
    fn default() -> Self {
        let defaults = CameraConfig::default();
        Self {
            speed: defaults.speed,
            rotation_step: defaults.rotation_step,
            spawn: defaults.spawn.to_array(),
            fov_degrees: defaults.fov_degrees,
            far_plane: defaults.far_plane,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
enum RawTimingMode {
    #[default]
    PerFrame,
    ReferenceRate,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawTimingSection {
    mode: RawTimingMode,
    reference_hz: f32,
}

impl Default for RawTimingSection {
    fn default() -> Self {
        Self {
            mode: RawTimingMode::PerFrame,
            reference_hz: 60.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawGroundSection {
    tile_size: f32,
    repeat: u32,
    texture: String,
    height: f32,
}

impl Default for RawGroundSection {
    fn default() -> Self {
        let defaults = GroundConfig::default();
        Self {
            tile_size: defaults.tile_size,
            repeat: defaults.repeat,
            texture: defaults.texture,
            height: defaults.height,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawStarfieldSection {
    radius: f32,
    depth: f32,
    count: u32,
    star_size: f32,
    seed: u64,
}

impl Default for RawStarfieldSection {
    fn default() -> Self {
        Self {
            radius: 400.0,
            depth: 100.0,
            count: 10_000,
            star_size: 0.6,
            seed: 7,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawAmbienceSection {
    music: String,
    volume: f32,
}

impl Default for RawAmbienceSection {
    fn default() -> Self {
        Self {
            music: "audio/bg-music.ogg".to_string(),
            volume: 0.6,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawLightingSection {
    ambient_brightness: f32,
    sun_illuminance: f32,
    sun_position: [f32; 3],
}

impl Default for RawLightingSection {
    fn default() -> Self {
        Self {
            ambient_brightness: 120.0,
            sun_illuminance: 10_000.0,
            sun_position: [10.0, 20.0, 10.0],
        }
    }
}

/// Star shell parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct StarfieldConfig {
    pub radius: f32,
    pub depth: f32,
    pub count: u32,
    pub star_size: f32,
    pub seed: u64,
}

/// Looping background track; `None` disables it.
#[derive(Debug, Clone, PartialEq)]
pub struct AmbienceConfig {
    pub music: Option<String>,
    pub volume: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LightingConfig {
    pub ambient_brightness: f32,
    pub sun_illuminance: f32,
    pub sun_position: Vec3,
}

/// Runtime world configuration.
#[derive(Resource, Debug, Clone)]
pub struct WorldSettings {
    pub camera: CameraConfig,
    pub timing: MotionTiming,
    pub ground: GroundConfig,
    pub starfield: StarfieldConfig,
    pub ambience: AmbienceConfig,
    pub lighting: LightingConfig,
}

impl WorldSettings {
    pub fn load_or_default() -> Self {
        load_or_default::<RawWorldConfig>(CONFIG_PATH).into()
    }
}

impl Default for WorldSettings {
    fn default() -> Self {
        RawWorldConfig::default().into()
    }
}

fn positive_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        fallback
    }
}

impl From<RawWorldConfig> for WorldSettings {
    fn from(value: RawWorldConfig) -> Self {
        let camera_defaults = CameraConfig::default();
        let ground_defaults = GroundConfig::default();
        let star_defaults = RawStarfieldSection::default();

        let camera = CameraConfig {
            speed: positive_or(value.camera.speed, camera_defaults.speed),
            rotation_step: positive_or(value.camera.rotation_step, camera_defaults.rotation_step),
            spawn: Vec3::from_array(value.camera.spawn),
            fov_degrees: positive_or(value.camera.fov_degrees, camera_defaults.fov_degrees)
                .min(179.0),
            far_plane: positive_or(value.camera.far_plane, camera_defaults.far_plane),
        };

        let timing = match value.timing.mode {
            RawTimingMode::PerFrame => MotionTiming::PerFrame,
            RawTimingMode::ReferenceRate => MotionTiming::reference_rate(value.timing.reference_hz),
        };

        let ground = GroundConfig {
            tile_size: positive_or(value.ground.tile_size, ground_defaults.tile_size),
            repeat: value.ground.repeat.max(MIN_GROUND_REPEAT),
            texture: value.ground.texture,
            height: value.ground.height,
        };

        let starfield = StarfieldConfig {
            radius: positive_or(value.starfield.radius, star_defaults.radius),
            depth: value.starfield.depth.max(0.0),
            count: value.starfield.count.min(MAX_STARS),
            star_size: positive_or(value.starfield.star_size, star_defaults.star_size),
            seed: value.starfield.seed,
        };

        let music = value.ambience.music.trim();
        let ambience = AmbienceConfig {
            music: (!music.is_empty()).then(|| music.to_string()),
            volume: value.ambience.volume.clamp(0.0, 1.0),
        };

        let lighting = LightingConfig {
            ambient_brightness: value.lighting.ambient_brightness.max(0.0),
            sun_illuminance: value.lighting.sun_illuminance.max(0.0),
            sun_position: Vec3::from_array(value.lighting.sun_position),
        };

        Self {
            camera,
            timing,
            ground,
            starfield,
            ambience,
            lighting,
        }
    }
}
