use std::str::FromStr;

use crate::{ConfigError, Params, Player};

/// Physics configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub table_width: f32,
    pub table_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_inset: f32,
    pub paddle_speed: f32,
    pub ball_radius: f32,
    pub ball_speed_serve: f32,
    pub ball_speed_max: f32,
    pub ball_speed_increase: f32,
    pub max_bounce_angle: f32,
    pub serve_half_angle: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            table_width: Params::TABLE_WIDTH,
            table_height: Params::TABLE_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_inset: Params::PADDLE_INSET,
            paddle_speed: Params::PADDLE_SPEED,
            ball_radius: Params::BALL_RADIUS,
            ball_speed_serve: Params::BALL_SPEED_SERVE,
            ball_speed_max: Params::BALL_SPEED_MAX,
            ball_speed_increase: Params::BALL_SPEED_INCREASE,
            max_bounce_angle: Params::MAX_BOUNCE_ANGLE,
            serve_half_angle: Params::SERVE_HALF_ANGLE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get X position (left edge) for a player's paddle
    pub fn paddle_x(&self, player: Player) -> f32 {
        match player {
            Player::One => self.paddle_inset,
            Player::Two => self.table_width - self.paddle_inset - self.paddle_width,
        }
    }

    /// Y (top edge) that centres a paddle vertically
    pub fn paddle_rest_y(&self) -> f32 {
        (self.table_height - self.paddle_height) / 2.0
    }
}

/// AI opponent strength
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

/// Tracking parameters for one difficulty level
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyConfig {
    pub speed: f32,
    pub accuracy: f32,
    /// Frames of input delay. Not consumed by the movement rule.
    pub reaction_time: u32,
}

impl Difficulty {
    pub fn config(self) -> DifficultyConfig {
        match self {
            Difficulty::Easy => DifficultyConfig {
                speed: 0.05,
                accuracy: 0.70,
                reaction_time: 20,
            },
            Difficulty::Medium => DifficultyConfig {
                speed: 0.08,
                accuracy: 0.85,
                reaction_time: 15,
            },
            Difficulty::Hard => DifficultyConfig {
                speed: 0.12,
                accuracy: 0.95,
                reaction_time: 8,
            },
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl FromStr for Difficulty {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ConfigError::UnknownDifficulty(s.to_string())),
        }
    }
}

/// Match rules chosen before a game starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub match_format: u8, // best of N, odd
    pub points_to_win: u16,
    pub serve_switch_points: u16,
    pub deuce_serve_switch_points: u16,
    pub difficulty: Difficulty,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            match_format: Params::MATCH_FORMAT,
            points_to_win: Params::POINTS_TO_WIN,
            serve_switch_points: Params::SERVE_SWITCH_POINTS,
            deuce_serve_switch_points: Params::DEUCE_SERVE_SWITCH_POINTS,
            difficulty: Difficulty::default(),
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.match_format % 2 == 0 {
            return Err(ConfigError::EvenMatchFormat(self.match_format));
        }
        if self.points_to_win == 0 {
            return Err(ConfigError::ZeroPointsToWin);
        }
        if self.serve_switch_points == 0 {
            return Err(ConfigError::ZeroServeSwitchPoints);
        }
        if self.deuce_serve_switch_points == 0 {
            return Err(ConfigError::ZeroDeuceServeSwitchPoints);
        }
        Ok(())
    }

    /// Sets needed to take the match: ceil(match_format / 2)
    pub fn sets_to_win(&self) -> u8 {
        self.match_format / 2 + 1
    }
}
