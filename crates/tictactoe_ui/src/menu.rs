use bevy::prelude::*;
use tictactoe_engine::Difficulty;

use crate::{Game, Screen, UiConfig};

const BUTTON_WIDTH: f32 = 200.0;
const BUTTON_HEIGHT: f32 = 50.0;

#[derive(Component)]
pub(crate) struct MenuRoot;

#[derive(Component)]
pub(crate) struct DifficultyButton(Difficulty);

pub(crate) fn spawn_menu(mut commands: Commands, config: Res<UiConfig>) {
    commands
        .spawn((
            NodeBundle {
                style: Style {
                    width: Val::Percent(100.0),
                    height: Val::Percent(100.0),
                    flex_direction: FlexDirection::Column,
                    justify_content: JustifyContent::Center,
                    align_items: AlignItems::Center,
                    row_gap: Val::Px(20.0),
                    ..default()
                },
                ..default()
            },
            MenuRoot,
        ))
        .with_children(|parent| {
            parent.spawn(TextBundle::from_section(
                "Choose Difficulty",
                TextStyle {
                    font_size: config.font_size,
                    color: Color::WHITE,
                    ..default()
                },
            ));

            for difficulty in Difficulty::ALL {
                parent
                    .spawn((
                        ButtonBundle {
                            style: Style {
                                width: Val::Px(BUTTON_WIDTH),
                                height: Val::Px(BUTTON_HEIGHT),
                                justify_content: JustifyContent::Center,
                                align_items: AlignItems::Center,
                                ..default()
                            },
                            background_color: config.line_color.into(),
                            ..default()
                        },
                        DifficultyButton(difficulty),
                    ))
                    .with_children(|button| {
                        button.spawn(TextBundle::from_section(
                            difficulty.to_string(),
                            TextStyle {
                                font_size: config.font_size * 0.7,
                                color: Color::BLACK,
                                ..default()
                            },
                        ));
                    });
            }
        });
}

pub(crate) fn handle_menu_buttons(
    buttons: Query<(&Interaction, &DifficultyButton), (Changed<Interaction>, With<Button>)>,
    mut game: ResMut<Game>,
    mut next_screen: ResMut<NextState<Screen>>,
) {
    for (interaction, button) in buttons.iter() {
        if *interaction == Interaction::Pressed {
            game.0.set_difficulty(button.0);
            game.0.reset();
            next_screen.set(Screen::Playing);
        }
    }
}
