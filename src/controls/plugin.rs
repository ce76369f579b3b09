//! Controls plugin wiring the input state and keyboard bindings.
use bevy::prelude::*;

use crate::core::plugin::FrameSet;

use super::{
    components::{InputState, KeyboardCapture, ReleasePolicy},
    config::ControlSettings,
    systems::apply_keyboard_controls,
};

pub struct ControlsPlugin;

impl Plugin for ControlsPlugin {
    fn build(&self, app: &mut App) {
        let settings = ControlSettings::load_or_default();
        info!(
            "Controls configured: release policy {}, keyboard {}",
            match settings.release_policy {
                ReleasePolicy::MatchingPress => "matching-press",
                ReleasePolicy::Unconditional => "unconditional",
            },
            if settings.keyboard_enabled {
                "enabled"
            } else {
                "disabled"
            }
        );

        app.insert_resource(settings)
            .init_resource::<InputState>()
            .init_resource::<KeyboardCapture>()
            .add_systems(Update, apply_keyboard_controls.in_set(FrameSet::Input));
    }
}
