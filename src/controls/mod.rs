//! Controls module: the held-command input state and the bindings that drive it.
pub mod components;
pub mod config;
pub mod plugin;
pub mod systems;

pub use plugin::ControlsPlugin;
