use bevy::{
    prelude::*,
    window::{PresentMode, PrimaryWindow, WindowResolution},
};
use log::info;
use tictactoe_core::{Mark, Position};
use tictactoe_engine::{GameSession, SessionState};

pub mod config;
pub mod layout;
mod menu;

pub use config::UiConfig;
use layout::BoardLayout;

/// Window, menu and board for a human (X) against the computer (O).
#[derive(Default)]
pub struct TicTacToeUiPlugin {
    pub config: UiConfig,
}

impl TicTacToeUiPlugin {
    pub fn new(config: UiConfig) -> Self {
        Self { config }
    }
}

#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum Screen {
    #[default]
    Menu,
    Playing,
    GameOver,
}

#[derive(Resource)]
pub struct Game(pub GameSession);

#[derive(Resource)]
struct ResultTimer(Timer);

#[derive(Component)]
struct ResultBanner;

impl Plugin for TicTacToeUiPlugin {
    fn build(&self, app: &mut App) {
        let config = self.config.clone();
        let session = GameSession::new(config.preset_difficulty.unwrap_or_default());

        app.add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Tic Tac Toe".into(),
                resolution: WindowResolution::new(config.window_size, config.window_size),
                present_mode: PresentMode::AutoVsync,
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(config.background))
        .insert_resource(GizmoConfig {
            line_width: config.line_width,
            ..default()
        })
        .insert_resource(Game(session))
        .insert_resource(config)
        .add_state::<Screen>()
        .add_systems(Startup, setup)
        .add_systems(OnEnter(Screen::Menu), menu::spawn_menu)
        .add_systems(OnExit(Screen::Menu), despawn_all::<menu::MenuRoot>)
        .add_systems(OnEnter(Screen::GameOver), show_result)
        .add_systems(OnExit(Screen::GameOver), despawn_all::<ResultBanner>)
        .add_systems(Update, (
            menu::handle_menu_buttons.run_if(in_state(Screen::Menu)),
            (handle_input, back_to_menu).run_if(in_state(Screen::Playing)),
            restart_after_delay.run_if(in_state(Screen::GameOver)),
            draw_board,
        ));
    }
}

fn setup(
    mut commands: Commands,
    config: Res<UiConfig>,
    mut next_screen: ResMut<NextState<Screen>>,
) {
    commands.spawn(Camera2dBundle::default());

    if let Some(difficulty) = config.preset_difficulty {
        info!("starting at {} difficulty", difficulty);
        next_screen.set(Screen::Playing);
    }
}

fn handle_input(
    mouse_button: Res<Input<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut game: ResMut<Game>,
    mut next_screen: ResMut<NextState<Screen>>,
) {
    if !mouse_button.just_pressed(MouseButton::Left) {
        return;
    }
    let Ok(window) = windows.get_single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    let Some(pos) = BoardLayout::new(window.width(), window.height()).cell_at(cursor) else {
        return;
    };

    // The computer answers in the same frame.
    let session = &mut game.0;
    if session.play_turn(pos) {
        if let SessionState::GameOver(_) = session.state() {
            next_screen.set(Screen::GameOver);
        }
    }
}

fn back_to_menu(
    keys: Res<Input<KeyCode>>,
    mut game: ResMut<Game>,
    mut next_screen: ResMut<NextState<Screen>>,
) {
    if keys.just_pressed(KeyCode::Escape) {
        game.0.reset();
        next_screen.set(Screen::Menu);
    }
}

fn show_result(mut commands: Commands, game: Res<Game>, config: Res<UiConfig>) {
    let message = game.0.outcome().to_string();

    commands
        .spawn((
            NodeBundle {
                style: Style {
                    width: Val::Percent(100.0),
                    height: Val::Percent(100.0),
                    justify_content: JustifyContent::Center,
                    align_items: AlignItems::Center,
                    ..default()
                },
                ..default()
            },
            ResultBanner,
        ))
        .with_children(|parent| {
            parent.spawn(TextBundle::from_section(
                message,
                TextStyle {
                    font_size: config.font_size,
                    color: Color::WHITE,
                    ..default()
                },
            ));
        });

    commands.insert_resource(ResultTimer(Timer::new(config.result_delay, TimerMode::Once)));
}

fn restart_after_delay(
    time: Res<Time>,
    mut timer: ResMut<ResultTimer>,
    mut game: ResMut<Game>,
    mut next_screen: ResMut<NextState<Screen>>,
) {
    if timer.0.tick(time.delta()).finished() {
        game.0.reset();
        next_screen.set(Screen::Playing);
    }
}

fn draw_board(
    mut gizmos: Gizmos,
    windows: Query<&Window, With<PrimaryWindow>>,
    game: Res<Game>,
    config: Res<UiConfig>,
    screen: Res<State<Screen>>,
) {
    if *screen.get() == Screen::Menu {
        return;
    }
    let Ok(window) = windows.get_single() else {
        return;
    };
    let layout = BoardLayout::new(window.width(), window.height());

    for (start, end) in layout.grid_lines() {
        gizmos.line_2d(start, end, config.line_color);
    }

    let square = layout.square_size();
    // Marks are inset a quarter square from each edge.
    let half = square / 4.0;
    for pos in Position::all() {
        let center = layout.cell_center(pos);
        match game.0.board().mark_at(pos) {
            Some(Mark::X) => {
                gizmos.line_2d(
                    center + Vec2::new(-half, half),
                    center + Vec2::new(half, -half),
                    config.x_color,
                );
                gizmos.line_2d(
                    center + Vec2::new(-half, -half),
                    center + Vec2::new(half, half),
                    config.x_color,
                );
            }
            Some(Mark::O) => {
                gizmos.circle_2d(center, square / 4.0, config.o_color).segments(64);
            }
            None => {}
        }
    }
}

fn despawn_all<T: Component>(mut commands: Commands, query: Query<Entity, With<T>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
