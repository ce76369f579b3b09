//! Keyboard bindings feeding the input state.
use bevy::prelude::*;

use super::{
    components::{
        ControlCommand, InputState, KeyboardCapture, PitchCommand, TranslationCommand, YawCommand,
    },
    config::ControlSettings,
};

/// Key to command bindings. Arrow keys and WASD share the translation slot.
pub const KEY_BINDINGS: [(KeyCode, ControlCommand); 12] = [
    (KeyCode::KeyW, ControlCommand::Translate(TranslationCommand::Forward)),
    (KeyCode::ArrowUp, ControlCommand::Translate(TranslationCommand::Forward)),
    (KeyCode::KeyS, ControlCommand::Translate(TranslationCommand::Backward)),
    (KeyCode::ArrowDown, ControlCommand::Translate(TranslationCommand::Backward)),
    (KeyCode::KeyA, ControlCommand::Translate(TranslationCommand::Left)),
    (KeyCode::ArrowLeft, ControlCommand::Translate(TranslationCommand::Left)),
    (KeyCode::KeyD, ControlCommand::Translate(TranslationCommand::Right)),
    (KeyCode::ArrowRight, ControlCommand::Translate(TranslationCommand::Right)),
    (KeyCode::KeyQ, ControlCommand::Yaw(YawCommand::Left)),
    (KeyCode::KeyE, ControlCommand::Yaw(YawCommand::Right)),
    (KeyCode::KeyR, ControlCommand::Pitch(PitchCommand::Up)),
    (KeyCode::KeyF, ControlCommand::Pitch(PitchCommand::Down)),
];

/// Translates key presses and releases into press-start / press-end events.
///
/// Releases are still honoured while the keyboard is captured so a key held
/// before focusing the chat input cannot leave a command stuck.
pub fn apply_keyboard_controls(
    keyboard: Res<ButtonInput<KeyCode>>,
    settings: Res<ControlSettings>,
    capture: Res<KeyboardCapture>,
    mut input: ResMut<InputState>,
) {
    if !settings.keyboard_enabled {
        return;
    }

    for (key, command) in KEY_BINDINGS {
        if keyboard.just_released(key) {
            let was_held = input.holds(command);
            input.press_end(command, settings.release_policy);

            // W and ArrowUp share a command; the other key keeps the hold alive.
            if was_held
                && !input.holds(command)
                && !capture.captured
                && bound_key_still_pressed(&keyboard, command)
            {
                input.press_start(command);
            }
        }
        if !capture.captured && keyboard.just_pressed(key) {
            input.press_start(command);
        }
    }
}

fn bound_key_still_pressed(keyboard: &ButtonInput<KeyCode>, command: ControlCommand) -> bool {
    KEY_BINDINGS
        .iter()
        .any(|(key, bound)| *bound == command && keyboard.pressed(*key))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_with_keyboard() -> App {
        let mut app = App::new();
        app.init_resource::<ButtonInput<KeyCode>>()
            .insert_resource(ControlSettings::default())
            .init_resource::<KeyboardCapture>()
            .init_resource::<InputState>()
            .add_systems(Update, apply_keyboard_controls);
        app
    }

    #[test]
    fn press_and_release_drive_input_state() {
        let mut app = app_with_keyboard();

        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::KeyW);
        app.update();
        assert_eq!(
            app.world().resource::<InputState>().translation,
            Some(TranslationCommand::Forward)
        );

        {
            let mut keys = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
            keys.clear();
            keys.release(KeyCode::KeyW);
        }
        app.update();
        assert!(app.world().resource::<InputState>().is_idle());
    }

    #[test]
    fn releasing_one_of_two_forward_keys_keeps_walking() {
        let mut app = app_with_keyboard();

        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::KeyW);
        app.update();

        {
            let mut keys = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
            keys.clear();
            keys.press(KeyCode::ArrowUp);
        }
        app.update();

        {
            let mut keys = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
            keys.clear();
            keys.release(KeyCode::KeyW);
        }
        app.update();
        assert_eq!(
            app.world().resource::<InputState>().translation,
            Some(TranslationCommand::Forward)
        );

        {
            let mut keys = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
            keys.clear();
            keys.release(KeyCode::ArrowUp);
        }
        app.update();
        assert!(app.world().resource::<InputState>().is_idle());
    }

    #[test]
    fn stale_release_does_not_override_a_newer_press() {
        let mut app = app_with_keyboard();

        {
            let mut keys = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
            keys.press(KeyCode::KeyW);
            keys.press(KeyCode::ArrowUp);
        }
        app.update();

        {
            let mut keys = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
            keys.clear();
            keys.press(KeyCode::KeyA);
        }
        app.update();

        {
            let mut keys = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
            keys.clear();
            keys.release(KeyCode::KeyW);
        }
        app.update();
        assert_eq!(
            app.world().resource::<InputState>().translation,
            Some(TranslationCommand::Left)
        );
    }

    #[test]
    fn captured_keyboard_ignores_presses() {
        let mut app = app_with_keyboard();
        app.world_mut().resource_mut::<KeyboardCapture>().captured = true;

        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::KeyQ);
        app.update();

        assert!(app.world().resource::<InputState>().is_idle());
    }
}
