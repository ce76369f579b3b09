//! Components used by the world module.
use bevy::prelude::*;

/// Marker for the ground plane moved by the tiler.
#[derive(Component, Debug, Default)]
pub struct Ground;

/// Marker for the main directional light (the "sun").
#[derive(Component, Debug, Default)]
pub struct PrimarySun;

/// Root of the star shell; follows the camera so the sky reads as infinitely far.
#[derive(Component, Debug, Default)]
pub struct StarfieldRoot;

/// Quad that copies the camera orientation every frame.
#[derive(Component, Debug, Default)]
pub struct Billboard;

/// Entity kept hidden until its texture finishes loading.
#[derive(Component, Debug)]
pub struct PendingTexture {
    pub handle: Handle<Image>,
    pub label: String,
}

impl PendingTexture {
    pub fn new(handle: Handle<Image>, label: impl Into<String>) -> Self {
        Self {
            handle,
            label: label.into(),
        }
    }
}
