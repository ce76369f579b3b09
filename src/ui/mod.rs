// src/ui/mod.rs
//
// UI module providing screen-space overlays on top of the lunar scene.
//
// Current features:
// - Coordinate HUD (top-left position readout relative to the spawn point)
// - Control pad (bottom-left pointer/touch locomotion buttons)
// - Chat panel (bottom-right companion conversation and input)

pub mod chat_panel;
pub mod control_pad;
pub mod coordinate_hud;
pub mod plugin;

// Re-export the main plugin
pub use plugin::UiPlugin;
