//! Core module providing frame timing, frame ordering sets, and config loading.
pub mod config;
pub mod plugin;

pub use plugin::CorePlugin;
