// src/ui/chat_panel/systems.rs
//
// Systems for the chat panel: layout, focus, typing, submission, and reply display.

use bevy::{
    ecs::message::{MessageReader, MessageWriter},
    input::keyboard::{Key, KeyboardInput},
    prelude::*,
};

use crate::companion::events::{CompanionQuery, CompanionReply};
use crate::controls::components::KeyboardCapture;

use super::components::{
    ChatInputField, ChatInputText, ChatKey, ChatPanel, ChatPanelSettings, ChatReplyText,
    ChatSendButton, ChatState, ChatToggleButton, ChatToggleLabel,
};

// Visual constants
const BACKGROUND_COLOR: Color = Color::srgba(0.1, 0.1, 0.1, 0.9);
const BORDER_COLOR: Color = Color::srgb(0.3, 0.3, 0.3);
const FOCUSED_BORDER_COLOR: Color = Color::srgb(1.0, 0.9, 0.4);
const FIELD_COLOR: Color = Color::srgba(0.05, 0.05, 0.07, 0.95);
const BUTTON_COLOR: Color = Color::srgba(0.18, 0.18, 0.22, 0.9);
const TEXT_COLOR: Color = Color::WHITE;
const PLACEHOLDER_COLOR: Color = Color::srgb(0.55, 0.55, 0.6);
const NAME_COLOR: Color = Color::srgb(1.0, 0.9, 0.4);

pub const PLACEHOLDER: &str = "Ask me about space...";
const GREETING: &str = "Ask me anything while you walk.";

/// Maps a keystroke onto the chat input, ignoring control characters.
pub fn chat_key(logical_key: &Key, text: Option<&str>) -> Option<ChatKey> {
    match logical_key {
        Key::Enter => Some(ChatKey::Submit),
        Key::Backspace => Some(ChatKey::Backspace),
        Key::Escape => Some(ChatKey::Dismiss),
        _ => text
            .filter(|text| !text.is_empty() && !text.chars().any(char::is_control))
            .map(|text| ChatKey::Text(text.to_string())),
    }
}

fn panel_display(visible: bool) -> Display {
    if visible {
        Display::Flex
    } else {
        Display::None
    }
}

/// Spawns the toggle button and the (possibly hidden) panel in the bottom-right corner.
pub fn spawn_chat_panel(
    mut commands: Commands,
    settings: Res<ChatPanelSettings>,
    state: Res<ChatState>,
) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                bottom: Val::Px(20.0),
                right: Val::Px(settings.right_offset),
                padding: UiRect::axes(Val::Px(14.0), Val::Px(8.0)),
                border: UiRect::all(Val::Px(2.0)),
                ..default()
            },
            Button,
            Interaction::None,
            BackgroundColor(BUTTON_COLOR),
            BorderColor::from(BORDER_COLOR),
            BorderRadius::all(Val::Px(6.0)),
            ZIndex(1000),
            ChatToggleButton,
            Name::new("Chat Toggle"),
        ))
        .with_children(|button| {
            button.spawn((
                Text::new(toggle_caption(state.visible)),
                TextFont {
                    font_size: 15.0,
                    ..default()
                },
                TextColor(TEXT_COLOR),
                ChatToggleLabel,
            ));
        });

    let inner_width = settings.panel_width - settings.padding * 2.0;

    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                bottom: Val::Px(settings.bottom_offset),
                right: Val::Px(settings.right_offset),
                width: Val::Px(settings.panel_width),
                padding: UiRect::all(Val::Px(settings.padding)),
                border: UiRect::all(Val::Px(2.0)),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(8.0),
                display: panel_display(state.visible),
                ..default()
            },
            BackgroundColor(BACKGROUND_COLOR),
            BorderColor::from(BORDER_COLOR),
            ZIndex(1000),
            ChatPanel,
            Name::new("Chat Panel"),
        ))
        .with_children(|panel| {
            panel.spawn((
                Text::new("AI Companion"),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(NAME_COLOR),
            ));

            panel.spawn((
                Text::new(GREETING),
                TextFont {
                    font_size: settings.reply_font_size,
                    ..default()
                },
                TextColor(TEXT_COLOR),
                Node {
                    max_width: Val::Px(inner_width),
                    max_height: Val::Px(settings.reply_max_height),
                    overflow: Overflow::clip(),
                    ..default()
                },
                ChatReplyText,
            ));

            panel
                .spawn(Node {
                    flex_direction: FlexDirection::Row,
                    column_gap: Val::Px(6.0),
                    ..default()
                })
                .with_children(|row| {
                    row.spawn((
                        Node {
                            flex_grow: 1.0,
                            padding: UiRect::axes(Val::Px(8.0), Val::Px(6.0)),
                            border: UiRect::all(Val::Px(1.5)),
                            ..default()
                        },
                        Button,
                        Interaction::None,
                        BackgroundColor(FIELD_COLOR),
                        BorderColor::from(BORDER_COLOR),
                        ChatInputField,
                    ))
                    .with_children(|field| {
                        field.spawn((
                            Text::new(PLACEHOLDER),
                            TextFont {
                                font_size: settings.input_font_size,
                                ..default()
                            },
                            TextColor(PLACEHOLDER_COLOR),
                            ChatInputText,
                        ));
                    });

                    row.spawn((
                        Node {
                            padding: UiRect::axes(Val::Px(10.0), Val::Px(6.0)),
                            border: UiRect::all(Val::Px(1.5)),
                            justify_content: JustifyContent::Center,
                            align_items: AlignItems::Center,
                            ..default()
                        },
                        Button,
                        Interaction::None,
                        BackgroundColor(BUTTON_COLOR),
                        BorderColor::from(BORDER_COLOR),
                        ChatSendButton,
                    ))
                    .with_children(|button| {
                        button.spawn((
                            Text::new("Send"),
                            TextFont {
                                font_size: settings.input_font_size,
                                ..default()
                            },
                            TextColor(TEXT_COLOR),
                        ));
                    });
                });
        });

    info!("Chat panel spawned (visible: {})", state.visible);
}

fn toggle_caption(visible: bool) -> &'static str {
    if visible {
        "Hide chat"
    } else {
        "Chat"
    }
}

/// Shows or hides the panel when the toggle button is clicked.
pub fn toggle_chat_panel(
    mut state: ResMut<ChatState>,
    buttons: Query<&Interaction, (Changed<Interaction>, With<ChatToggleButton>)>,
) {
    for interaction in buttons.iter() {
        if *interaction == Interaction::Pressed {
            state.toggle();
            debug!("Chat panel visible: {}", state.visible);
        }
    }
}

/// Clicking the input field focuses it.
pub fn focus_chat_input(
    mut state: ResMut<ChatState>,
    fields: Query<&Interaction, (Changed<Interaction>, With<ChatInputField>)>,
) {
    for interaction in fields.iter() {
        if *interaction == Interaction::Pressed && state.visible {
            state.focused = true;
        }
    }
}

/// Feeds keystrokes into the draft while the input is focused; Enter submits.
pub fn capture_chat_typing(
    mut keys: MessageReader<KeyboardInput>,
    mut state: ResMut<ChatState>,
    mut queries: MessageWriter<CompanionQuery>,
) {
    for event in keys.read() {
        if !event.state.is_pressed() || !state.focused {
            continue;
        }

        let Some(key) = chat_key(&event.logical_key, event.text.as_deref()) else {
            continue;
        };

        if let Some(text) = state.apply_key(key) {
            info!("Chat query: \"{}\"", text);
            queries.write(CompanionQuery { text });
        }
    }
}

/// The send button submits the draft regardless of focus.
pub fn send_chat_draft(
    mut state: ResMut<ChatState>,
    buttons: Query<&Interaction, (Changed<Interaction>, With<ChatSendButton>)>,
    mut queries: MessageWriter<CompanionQuery>,
) {
    for interaction in buttons.iter() {
        if *interaction != Interaction::Pressed {
            continue;
        }

        let text = state.take_draft();
        info!("Chat query: \"{}\"", text);
        queries.write(CompanionQuery { text });
    }
}

/// Movement keys are suspended while the chat input owns the keyboard.
pub fn sync_keyboard_capture(state: Res<ChatState>, mut capture: ResMut<KeyboardCapture>) {
    let captured = state.visible && state.focused;
    if capture.captured != captured {
        capture.captured = captured;
    }
}

/// Stores the latest companion reply for display.
pub fn receive_companion_replies(
    mut replies: MessageReader<CompanionReply>,
    mut state: ResMut<ChatState>,
) {
    if let Some(reply) = replies.read().last() {
        state.last_reply = Some(reply.reply.clone());
    }
}

/// Mirrors `ChatState` into the panel nodes whenever it changes.
#[allow(clippy::type_complexity)]
pub fn refresh_chat_panel(
    state: Res<ChatState>,
    mut panels: Query<&mut Node, With<ChatPanel>>,
    mut fields: Query<&mut BorderColor, With<ChatInputField>>,
    mut input_texts: Query<
        (&mut Text, &mut TextColor),
        (With<ChatInputText>, Without<ChatReplyText>, Without<ChatToggleLabel>),
    >,
    mut reply_texts: Query<&mut Text, (With<ChatReplyText>, Without<ChatToggleLabel>)>,
    mut toggle_labels: Query<&mut Text, (With<ChatToggleLabel>, Without<ChatInputText>)>,
) {
    if !state.is_changed() {
        return;
    }

    for mut node in panels.iter_mut() {
        node.display = panel_display(state.visible);
    }

    for mut border in fields.iter_mut() {
        *border = BorderColor::from(if state.focused {
            FOCUSED_BORDER_COLOR
        } else {
            BORDER_COLOR
        });
    }

    for (mut text, mut color) in input_texts.iter_mut() {
        if state.draft.is_empty() && !state.focused {
            text.0 = PLACEHOLDER.to_string();
            color.0 = PLACEHOLDER_COLOR;
        } else {
            let cursor = if state.focused { "|" } else { "" };
            text.0 = format!("{}{}", state.draft, cursor);
            color.0 = TEXT_COLOR;
        }
    }

    if let Some(reply) = &state.last_reply {
        for mut text in reply_texts.iter_mut() {
            text.0 = reply.clone();
        }
    }

    for mut text in toggle_labels.iter_mut() {
        text.0 = toggle_caption(state.visible).to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::message::Messages;

    #[test]
    fn named_keys_map_to_editing_actions() {
        assert_eq!(chat_key(&Key::Enter, None), Some(ChatKey::Submit));
        assert_eq!(chat_key(&Key::Backspace, None), Some(ChatKey::Backspace));
        assert_eq!(chat_key(&Key::Escape, None), Some(ChatKey::Dismiss));
    }

    #[test]
    fn printable_text_is_typed_and_control_text_dropped() {
        assert_eq!(
            chat_key(&Key::Space, Some(" ")),
            Some(ChatKey::Text(" ".to_string()))
        );
        assert_eq!(chat_key(&Key::Tab, Some("\t")), None);
        assert_eq!(chat_key(&Key::Shift, None), None);
    }

    fn chat_app(state: ChatState) -> App {
        let mut app = App::new();
        app.insert_resource(state)
            .init_resource::<KeyboardCapture>()
            .add_message::<CompanionQuery>()
            .add_message::<CompanionReply>()
            .add_systems(
                Update,
                (send_chat_draft, sync_keyboard_capture, receive_companion_replies),
            );
        app
    }

    #[test]
    fn focused_input_captures_the_keyboard() {
        let mut app = chat_app(ChatState {
            visible: true,
            focused: true,
            ..Default::default()
        });
        app.update();
        assert!(app.world().resource::<KeyboardCapture>().captured);

        app.world_mut().resource_mut::<ChatState>().toggle();
        app.update();
        assert!(!app.world().resource::<KeyboardCapture>().captured);
    }

    #[test]
    fn send_button_clears_the_draft() {
        let mut app = chat_app(ChatState {
            visible: true,
            draft: "hello moon".to_string(),
            ..Default::default()
        });
        app.world_mut().spawn((Interaction::Pressed, ChatSendButton));
        app.update();

        assert!(app.world().resource::<ChatState>().draft.is_empty());
        let queries = app.world().resource::<Messages<CompanionQuery>>();
        assert_eq!(queries.len(), 1);
    }

    #[test]
    fn send_button_with_empty_draft_still_asks() {
        let mut app = chat_app(ChatState::new(true));
        app.world_mut().spawn((Interaction::Pressed, ChatSendButton));
        app.update();

        let queries = app.world().resource::<Messages<CompanionQuery>>();
        assert_eq!(queries.len(), 1);
    }

    #[test]
    fn latest_reply_is_kept() {
        let mut app = chat_app(ChatState::new(true));
        app.world_mut().write_message(CompanionReply {
            query: "hi".to_string(),
            reply: "Hello, explorer!".to_string(),
        });
        app.update();

        assert_eq!(
            app.world().resource::<ChatState>().last_reply.as_deref(),
            Some("Hello, explorer!")
        );
    }
}
