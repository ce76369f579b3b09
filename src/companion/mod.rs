//! Companion module: the scripted chat assistant and its spoken replies.
pub mod config;
pub mod events;
#[cfg(feature = "native_speech")]
pub mod native_speech;
pub mod plugin;
pub mod responder;
pub mod speech;
pub mod systems;
pub mod trivia;

pub use plugin::CompanionPlugin;
