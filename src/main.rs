use std::process::ExitCode;

use bevy::prelude::*;
use tictactoe_ui::{TicTacToeUiPlugin, UiConfig};

fn main() -> ExitCode {
    let config = match UiConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            // The bevy log subscriber is not installed until the app runs.
            eprintln!("{}", err);
            return ExitCode::from(2);
        }
    };

    App::new()
        .add_plugins(TicTacToeUiPlugin::new(config))
        .run();

    ExitCode::SUCCESS
}
