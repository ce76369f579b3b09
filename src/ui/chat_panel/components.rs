// src/ui/chat_panel/components.rs
//
// Components and resources for the chat panel.

use bevy::prelude::*;

/// Root node of the chat panel (hidden when toggled off).
#[derive(Component, Debug)]
pub struct ChatPanel;

/// Button showing or hiding the panel.
#[derive(Component, Debug)]
pub struct ChatToggleButton;

/// Caption of the toggle button.
#[derive(Component, Debug)]
pub struct ChatToggleLabel;

/// Clickable input box; clicking focuses it.
#[derive(Component, Debug)]
pub struct ChatInputField;

/// Text inside the input box.
#[derive(Component, Debug)]
pub struct ChatInputText;

/// Button submitting the current draft.
#[derive(Component, Debug)]
pub struct ChatSendButton;

/// Text showing the companion's latest reply.
#[derive(Component, Debug)]
pub struct ChatReplyText;

/// Keystrokes the input line understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatKey {
    Text(String),
    Backspace,
    Submit,
    Dismiss,
}

/// Panel visibility, input focus, draft text, and the last reply.
#[derive(Resource, Debug, Default)]
pub struct ChatState {
    pub visible: bool,
    pub focused: bool,
    pub draft: String,
    pub last_reply: Option<String>,
}

impl ChatState {
    pub fn new(visible: bool) -> Self {
        Self {
            visible,
            ..Default::default()
        }
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
        if !self.visible {
            self.focused = false;
        }
    }

    /// Applies one keystroke; returns the query to send when the draft is submitted.
    pub fn apply_key(&mut self, key: ChatKey) -> Option<String> {
        if !self.focused {
            return None;
        }

        match key {
            ChatKey::Text(text) => self.draft.push_str(&text),
            ChatKey::Backspace => {
                self.draft.pop();
            }
            ChatKey::Dismiss => self.focused = false,
            ChatKey::Submit => return Some(self.take_draft()),
        }
        None
    }

    /// Clears the draft and returns it trimmed. A blank draft is still a question:
    /// the companion answers it with its default reply.
    pub fn take_draft(&mut self) -> String {
        let draft = std::mem::take(&mut self.draft);
        draft.trim().to_string()
    }
}

/// Resource containing settings for chat panel layout.
#[derive(Resource, Debug)]
pub struct ChatPanelSettings {
    /// Panel width (pixels).
    pub panel_width: f32,

    /// Maximum height of the reply area (pixels).
    pub reply_max_height: f32,

    /// Padding inside panel (pixels).
    pub padding: f32,

    /// Offset from bottom edge of screen (pixels).
    pub bottom_offset: f32,

    /// Offset from right edge of screen (pixels).
    pub right_offset: f32,

    /// Font size for the reply text (points).
    pub reply_font_size: f32,

    /// Font size for the input line (points).
    pub input_font_size: f32,
}

impl Default for ChatPanelSettings {
    fn default() -> Self {
        Self {
            panel_width: 320.0,
            reply_max_height: 220.0,
            padding: 12.0,
            bottom_offset: 70.0,
            right_offset: 20.0,
            reply_font_size: 15.0,
            input_font_size: 15.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn focused() -> ChatState {
        ChatState {
            visible: true,
            focused: true,
            ..Default::default()
        }
    }

    #[test]
    fn typing_edits_the_draft() {
        let mut state = focused();
        state.apply_key(ChatKey::Text("moon".into()));
        state.apply_key(ChatKey::Text("s".into()));
        state.apply_key(ChatKey::Backspace);
        assert_eq!(state.draft, "moon");
    }

    #[test]
    fn submit_returns_and_clears_the_draft() {
        let mut state = focused();
        state.apply_key(ChatKey::Text("  tell me a joke ".into()));

        assert_eq!(
            state.apply_key(ChatKey::Submit),
            Some("tell me a joke".to_string())
        );
        assert!(state.draft.is_empty());
    }

    #[test]
    fn blank_submit_still_asks() {
        let mut state = focused();
        state.apply_key(ChatKey::Text("   ".into()));
        assert_eq!(state.apply_key(ChatKey::Submit), Some(String::new()));
        assert_eq!(state.apply_key(ChatKey::Submit), Some(String::new()));
    }

    #[test]
    fn unfocused_input_ignores_keys() {
        let mut state = focused();
        state.apply_key(ChatKey::Dismiss);
        state.apply_key(ChatKey::Text("w".into()));
        assert!(state.draft.is_empty());
        assert!(!state.focused);
    }

    #[test]
    fn hiding_the_panel_drops_focus() {
        let mut state = focused();
        state.toggle();
        assert!(!state.visible);
        assert!(!state.focused);

        state.toggle();
        assert!(state.visible);
    }
}
