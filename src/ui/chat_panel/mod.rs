// src/ui/chat_panel/mod.rs
//
// Chat panel module: bottom-right companion conversation with a typed input line.

pub mod components;
pub mod plugin;
pub mod systems;

pub use plugin::ChatPanelPlugin;
