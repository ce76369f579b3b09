//! TerrainPlugin keeps one ground plane under the camera.
use bevy::prelude::*;

use crate::core::plugin::FrameSet;

use super::{
    systems::{reposition_ground, spawn_ground},
    tiling::{GroundConfig, GroundTiler},
};

pub struct TerrainPlugin {
    config: GroundConfig,
}

impl TerrainPlugin {
    pub fn new(config: GroundConfig) -> Self {
        Self { config }
    }
}

impl Plugin for TerrainPlugin {
    fn build(&self, app: &mut App) {
        let tiler = GroundTiler::new(self.config.clone());
        info!(
            "Ground configured: tile {:.0}, repeat {}, plane extent {:.0}",
            self.config.tile_size,
            self.config.repeat,
            tiler.extent()
        );

        app.insert_resource(tiler)
            .add_systems(Startup, spawn_ground)
            .add_systems(Update, reposition_ground.in_set(FrameSet::Present));
    }
}
