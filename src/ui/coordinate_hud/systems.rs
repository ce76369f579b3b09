// src/ui/coordinate_hud/systems.rs
//
// Systems for spawning and refreshing the coordinate HUD.

use bevy::prelude::*;

use crate::camera::state::DisplayCoordinates;

use super::components::{CoordinateHud, HudAxis, HudField};

// Visual constants
const BACKGROUND_COLOR: Color = Color::srgba(0.0, 0.0, 0.0, 0.7);
const TEXT_COLOR: Color = Color::WHITE;
const FONT_SIZE: f32 = 14.0;

/// Spawns the top-left readout with one line per axis.
pub fn spawn_coordinate_hud(mut commands: Commands, display: Res<DisplayCoordinates>) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(10.0),
                left: Val::Px(10.0),
                padding: UiRect::axes(Val::Px(15.0), Val::Px(10.0)),
                flex_direction: FlexDirection::Column,
                ..default()
            },
            BackgroundColor(BACKGROUND_COLOR),
            BorderRadius::all(Val::Px(10.0)),
            ZIndex(1000),
            CoordinateHud,
            Name::new("Coordinate HUD"),
        ))
        .with_children(|parent| {
            for axis in HudAxis::ALL {
                parent.spawn((
                    Text::new(axis.line(&display)),
                    TextFont {
                        font_size: FONT_SIZE,
                        ..default()
                    },
                    TextColor(TEXT_COLOR),
                    HudField { axis },
                ));
            }
        });
}

/// Rewrites the HUD lines whenever the display coordinates change.
pub fn refresh_coordinate_hud(
    display: Res<DisplayCoordinates>,
    mut fields: Query<(&HudField, &mut Text)>,
) {
    if !display.is_changed() {
        return;
    }

    for (field, mut text) in fields.iter_mut() {
        let line = field.axis.line(&display);
        if text.0 != line {
            text.0 = line;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hud_lines_follow_display_coordinates() {
        let mut app = App::new();
        app.insert_resource(DisplayCoordinates::from_position(Vec3::new(
            3.4, 120.0, 5.0,
        )))
        .add_systems(Update, refresh_coordinate_hud);

        let fields: Vec<Entity> = HudAxis::ALL
            .into_iter()
            .map(|axis| {
                app.world_mut()
                    .spawn((Text::new(""), HudField { axis }))
                    .id()
            })
            .collect();

        app.update();

        let lines: Vec<String> = fields
            .iter()
            .map(|entity| app.world().get::<Text>(*entity).expect("hud text").0.clone())
            .collect();
        assert_eq!(lines, vec!["X: 3", "Y: 0.00", "Z: -5.00"]);
    }
}
