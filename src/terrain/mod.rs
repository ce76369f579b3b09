//! Terrain module: the infinitely tiled lunar ground.
pub mod plugin;
pub mod systems;
pub mod tiling;

pub use plugin::TerrainPlugin;
