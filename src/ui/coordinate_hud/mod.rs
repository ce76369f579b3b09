// src/ui/coordinate_hud/mod.rs
//
// Coordinate HUD showing the explorer position relative to the spawn point.

pub mod components;
pub mod plugin;
pub mod systems;

pub use plugin::CoordinateHudPlugin;
