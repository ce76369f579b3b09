// src/ui/control_pad/mod.rs
//
// On-screen locomotion pad driven by mouse or touch press/release.

pub mod components;
pub mod plugin;
pub mod systems;

pub use plugin::ControlPadPlugin;
