//! Components used by the camera module.
use bevy::prelude::*;

/// Marker for the engine camera that mirrors the controller's state every frame.
#[derive(Component, Debug, Default)]
pub struct ExplorerCamera;
