// src/ui/control_pad/systems.rs
//
// Systems for spawning the control pad and turning button presses into commands.

use bevy::prelude::*;

use crate::controls::{components::InputState, config::ControlSettings};

use super::components::{pad_label, ControlPad, PadButton};

// Visual constants
const BUTTON_SIZE_PX: f32 = 56.0;
const GAP_PX: f32 = 6.0;
const BUTTON_COLOR: Color = Color::srgba(0.18, 0.18, 0.22, 0.85);
const BUTTON_PRESSED_COLOR: Color = Color::srgba(0.35, 0.35, 0.42, 0.95);
const BORDER_COLOR: Color = Color::srgb(0.4, 0.4, 0.45);
const TEXT_COLOR: Color = Color::WHITE;

/// Spawns the 3 x 3 pad in the bottom-left corner, following the configured layout.
pub fn spawn_control_pad(mut commands: Commands, settings: Res<ControlSettings>) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                bottom: Val::Px(20.0),
                left: Val::Px(20.0),
                display: Display::Grid,
                grid_template_columns: RepeatedGridTrack::px(3, BUTTON_SIZE_PX),
                grid_template_rows: RepeatedGridTrack::px(3, BUTTON_SIZE_PX),
                row_gap: Val::Px(GAP_PX),
                column_gap: Val::Px(GAP_PX),
                ..default()
            },
            ZIndex(1000),
            ControlPad,
            Name::new("Control Pad"),
        ))
        .with_children(|grid| {
            for cell in settings.pad {
                let Some(command) = cell else {
                    grid.spawn(Node::default());
                    continue;
                };

                grid.spawn((
                    Node {
                        justify_content: JustifyContent::Center,
                        align_items: AlignItems::Center,
                        border: UiRect::all(Val::Px(1.5)),
                        ..default()
                    },
                    Button,
                    Interaction::None,
                    BackgroundColor(BUTTON_COLOR),
                    BorderColor::from(BORDER_COLOR),
                    BorderRadius::all(Val::Px(8.0)),
                    PadButton::new(command),
                    Name::new(format!("Pad {}", command)),
                ))
                .with_children(|button| {
                    button.spawn((
                        Text::new(pad_label(command)),
                        TextFont {
                            font_size: 13.0,
                            ..default()
                        },
                        TextColor(TEXT_COLOR),
                    ));
                });
            }
        });
}

/// Entering the pressed state is a press-start; leaving it is a press-end.
pub fn handle_pad_buttons(
    settings: Res<ControlSettings>,
    mut input: ResMut<InputState>,
    mut buttons: Query<(&Interaction, &mut PadButton, &mut BackgroundColor), Changed<Interaction>>,
) {
    for (interaction, mut button, mut background) in buttons.iter_mut() {
        let pressed = *interaction == Interaction::Pressed;
        if pressed == button.held {
            continue;
        }

        button.held = pressed;
        if pressed {
            input.press_start(button.command);
            background.0 = BUTTON_PRESSED_COLOR;
        } else {
            input.press_end(button.command, settings.release_policy);
            background.0 = BUTTON_COLOR;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controls::components::{ControlCommand, TranslationCommand, YawCommand};

    fn pad_app() -> App {
        let mut app = App::new();
        app.insert_resource(ControlSettings::default())
            .init_resource::<InputState>()
            .add_systems(Update, handle_pad_buttons);
        app
    }

    fn spawn_button(app: &mut App, command: ControlCommand) -> Entity {
        app.world_mut()
            .spawn((
                Interaction::None,
                PadButton::new(command),
                BackgroundColor(BUTTON_COLOR),
            ))
            .id()
    }

    fn set_interaction(app: &mut App, entity: Entity, interaction: Interaction) {
        *app.world_mut()
            .get_mut::<Interaction>(entity)
            .expect("button interaction") = interaction;
    }

    #[test]
    fn press_and_release_toggle_the_slot() {
        let mut app = pad_app();
        let forward = spawn_button(
            &mut app,
            ControlCommand::Translate(TranslationCommand::Forward),
        );

        set_interaction(&mut app, forward, Interaction::Pressed);
        app.update();
        assert_eq!(
            app.world().resource::<InputState>().translation,
            Some(TranslationCommand::Forward)
        );

        set_interaction(&mut app, forward, Interaction::Hovered);
        app.update();
        assert!(app.world().resource::<InputState>().is_idle());
    }

    #[test]
    fn buttons_in_different_slots_combine() {
        let mut app = pad_app();
        let forward = spawn_button(
            &mut app,
            ControlCommand::Translate(TranslationCommand::Forward),
        );
        let turn = spawn_button(&mut app, ControlCommand::Yaw(YawCommand::Left));

        set_interaction(&mut app, forward, Interaction::Pressed);
        set_interaction(&mut app, turn, Interaction::Pressed);
        app.update();

        let input = *app.world().resource::<InputState>();
        assert_eq!(input.translation, Some(TranslationCommand::Forward));
        assert_eq!(input.yaw, Some(YawCommand::Left));
    }
}
