//! Tile index function and the ground tiler resource.
use bevy::prelude::*;

/// Ground plane parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct GroundConfig {
    /// Side of one texture repeat, in world units.
    pub tile_size: f32,
    /// Texture repeats per side of the plane. At least 3.
    pub repeat: u32,
    pub texture: String,
    pub height: f32,
}

impl Default for GroundConfig {
    fn default() -> Self {
        Self {
            tile_size: 500.0,
            repeat: 100,
            texture: "textures/moon.png".to_string(),
            height: 0.0,
        }
    }
}

/// Origin of the tile under a position, snapped down to multiples of the tile size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileOrigin {
    pub x: f32,
    pub z: f32,
}

/// Floors `position` onto the tile grid. Flooring keeps boundary crossings deterministic.
pub fn tile_origin(position: Vec3, tile_size: f32) -> TileOrigin {
    TileOrigin {
        x: snap_down(position.x, tile_size),
        z: snap_down(position.z, tile_size),
    }
}

fn snap_down(value: f32, tile_size: f32) -> f32 {
    let origin = (value / tile_size).floor() * tile_size;
    // Subnormal negatives divide to -0.0 and would floor onto the tile above.
    if origin > value {
        origin - tile_size
    } else {
        origin
    }
}

/// Re-centres the single ground plane beneath the camera every frame.
#[derive(Resource, Debug, Clone)]
pub struct GroundTiler {
    config: GroundConfig,
}

impl GroundTiler {
    pub fn new(config: GroundConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GroundConfig {
        &self.config
    }

    /// Side length of the rendered plane.
    pub fn extent(&self) -> f32 {
        self.config.tile_size * self.config.repeat as f32
    }

    /// World position to place the plane at for the given camera position.
    pub fn reposition(&self, camera: Vec3) -> Vec3 {
        let origin = tile_origin(camera, self.config.tile_size);
        Vec3::new(origin.x, self.config.height, origin.z)
    }

    /// Whether `camera` lies in the seam-free inner region of a plane centred at `plane`.
    pub fn covers(&self, plane: Vec3, camera: Vec3) -> bool {
        let inner_half =
            self.config.tile_size * self.config.repeat.saturating_sub(1) as f32 / 2.0;
        (camera.x - plane.x).abs() <= inner_half && (camera.z - plane.z).abs() <= inner_half
    }
}
