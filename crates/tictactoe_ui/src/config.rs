use std::{env, time::Duration};

use bevy::prelude::*;
use tictactoe_engine::{Difficulty, ParseDifficultyError};

/// Environment variable that presets the difficulty and skips the menu.
pub const DIFFICULTY_ENV: &str = "TICTACTOE_DIFFICULTY";

const WINDOW_SIZE: f32 = 600.0;
const LINE_WIDTH: f32 = 10.0;
const FONT_SIZE: f32 = 50.0;
const RESULT_DELAY: Duration = Duration::from_secs(2);

const BG_COLOR: Color = Color::rgb(28.0 / 255.0, 170.0 / 255.0, 156.0 / 255.0);
const LINE_COLOR: Color = Color::rgb(23.0 / 255.0, 145.0 / 255.0, 135.0 / 255.0);
const X_COLOR: Color = Color::rgb(84.0 / 255.0, 84.0 / 255.0, 84.0 / 255.0);
const O_COLOR: Color = Color::rgb(242.0 / 255.0, 235.0 / 255.0, 211.0 / 255.0);

#[derive(Resource, Debug, Clone)]
pub struct UiConfig {
    pub window_size: f32,
    pub line_width: f32,
    pub font_size: f32,
    /// How long the end-of-game banner stays up before the next game.
    pub result_delay: Duration,
    pub background: Color,
    pub line_color: Color,
    pub x_color: Color,
    pub o_color: Color,
    /// Difficulty to start with; `None` shows the menu first.
    pub preset_difficulty: Option<Difficulty>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            window_size: WINDOW_SIZE,
            line_width: LINE_WIDTH,
            font_size: FONT_SIZE,
            result_delay: RESULT_DELAY,
            background: BG_COLOR,
            line_color: LINE_COLOR,
            x_color: X_COLOR,
            o_color: O_COLOR,
            preset_difficulty: None,
        }
    }
}

impl UiConfig {
    /// Defaults plus the preset difficulty from the environment, if any.
    pub fn from_env() -> Result<Self, ParseDifficultyError> {
        let preset = env::var(DIFFICULTY_ENV).ok();
        Ok(Self {
            preset_difficulty: parse_preset(preset.as_deref())?,
            ..Self::default()
        })
    }
}

fn parse_preset(value: Option<&str>) -> Result<Option<Difficulty>, ParseDifficultyError> {
    match value {
        Some(text) if !text.trim().is_empty() => text.parse().map(Some),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_or_blank_preset_shows_menu() {
        assert_eq!(parse_preset(None), Ok(None));
        assert_eq!(parse_preset(Some("  ")), Ok(None));
    }

    #[test]
    fn preset_is_parsed_like_the_prompt() {
        assert_eq!(parse_preset(Some("Hard")), Ok(Some(Difficulty::Hard)));
        assert!(parse_preset(Some("nightmare")).is_err());
    }

    #[test]
    fn defaults_match_classic_window() {
        let config = UiConfig::default();
        assert_eq!(config.window_size, 600.0);
        assert_eq!(config.result_delay, Duration::from_secs(2));
        assert!(config.preset_difficulty.is_none());
    }
}
