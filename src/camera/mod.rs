//! Camera module: orientation state, the per-frame controller, and HUD coordinates.
pub mod components;
pub mod controller;
pub mod plugin;
pub mod state;
pub mod systems;

pub use plugin::CameraPlugin;
