// src/ui/chat_panel/plugin.rs
//
// Plugin registration for the chat panel.

use bevy::prelude::*;

use crate::companion::config::CompanionSettings;
use crate::controls::systems::apply_keyboard_controls;
use crate::core::plugin::FrameSet;

use super::components::{ChatPanelSettings, ChatState};
use super::systems::{
    capture_chat_typing, focus_chat_input, receive_companion_replies, refresh_chat_panel,
    send_chat_draft, spawn_chat_panel, sync_keyboard_capture, toggle_chat_panel,
};

pub struct ChatPanelPlugin;

impl Plugin for ChatPanelPlugin {
    fn build(&self, app: &mut App) {
        let visible = app
            .world()
            .get_resource::<CompanionSettings>()
            .map_or(true, |settings| settings.panel_visible_on_start);

        app.init_resource::<ChatPanelSettings>()
            .insert_resource(ChatState::new(visible))
            .add_systems(Startup, spawn_chat_panel)
            .add_systems(
                Update,
                (
                    toggle_chat_panel,
                    focus_chat_input,
                    capture_chat_typing,
                    send_chat_draft,
                    sync_keyboard_capture,
                )
                    .chain()
                    .in_set(FrameSet::Input)
                    .before(apply_keyboard_controls),
            )
            .add_systems(
                Update,
                (receive_companion_replies, refresh_chat_panel)
                    .chain()
                    .in_set(FrameSet::Present),
            );
    }
}
