use bevy::{prelude::*, window::WindowPlugin};

mod camera;
mod companion;
mod controls;
mod core;
mod terrain;
mod ui;
mod world;

use crate::{
    camera::CameraPlugin, companion::CompanionPlugin, controls::ControlsPlugin,
    core::CorePlugin, terrain::TerrainPlugin, ui::UiPlugin,
    world::{config::WorldSettings, WorldPlugin},
};

fn main() {
    let settings = WorldSettings::load_or_default();

    App::new()
        .add_plugins((
            DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Moonwalk".to_string(),
                    ..default()
                }),
                ..default()
            }),
            CorePlugin::with_timing(settings.timing),
            ControlsPlugin,
            CameraPlugin::new(settings.camera.clone()),
            TerrainPlugin::new(settings.ground.clone()),
            WorldPlugin::new(settings),
            CompanionPlugin,
            UiPlugin, // After CompanionPlugin so the chat panel sees CompanionSettings
        ))
        .run();
}
