//! World module composing the lunar scene around the explorer camera.
pub mod components;
pub mod config;
pub mod plugin;
pub mod sprites;
pub mod starfield;
pub mod systems;

pub use plugin::WorldPlugin;
