//! Immutable game configuration
//!
//! Every entity reads its dimensions from a shared `&GameConfig` instead of
//! reaching into other entities.

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::Side;

/// An RGB colour triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Colours handed to whatever draws the frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub background: Rgb,
    pub paddle: Rgb,
    pub ball: Rgb,
    pub text: Rgb,
    pub divider: Rgb,
    /// Unselected menu options
    pub dimmed: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgb(15, 15, 15),
            paddle: Rgb(200, 200, 200),
            ball: Rgb(255, 255, 255),
            text: Rgb(255, 255, 255),
            divider: Rgb(100, 100, 100),
            dimmed: Rgb(100, 100, 100),
        }
    }
}

/// Field geometry and physics limits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub window_width: f32,
    pub window_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub paddle_edge_offset: f32,
    pub ball_size: f32,
    pub ball_speed: f32,
    pub ball_max_speed: f32,
    pub speed_increment: f32,
    pub win_score: u32,
    pub colors: Palette,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,
            paddle_edge_offset: PADDLE_EDGE_OFFSET,
            ball_size: BALL_SIZE,
            ball_speed: BALL_SPEED,
            ball_max_speed: BALL_MAX_SPEED,
            speed_increment: SPEED_INCREMENT,
            win_score: WIN_SCORE,
            colors: Palette::default(),
        }
    }
}

/// A configuration invariant that does not hold
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A size or speed is zero, negative or not finite
    NotPositive { field: &'static str, value: f32 },
    /// `ball_max_speed` is below `ball_speed`
    MaxBelowBase { base: f32, max: f32 },
    /// An entity does not fit inside the field
    DoesNotFit { what: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NotPositive { field, value } => {
                write!(f, "{field} must be positive, got {value}")
            }
            ConfigError::MaxBelowBase { base, max } => {
                write!(f, "ball max speed {max} is below base speed {base}")
            }
            ConfigError::DoesNotFit { what } => write!(f, "{what} does not fit inside the field"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check the invariants the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("window_width", self.window_width),
            ("window_height", self.window_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
            ("ball_size", self.ball_size),
            ("ball_speed", self.ball_speed),
            ("ball_max_speed", self.ball_max_speed),
            ("speed_increment", self.speed_increment),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NotPositive { field, value });
            }
        }
        if !(self.paddle_edge_offset.is_finite() && self.paddle_edge_offset >= 0.0) {
            return Err(ConfigError::NotPositive {
                field: "paddle_edge_offset",
                value: self.paddle_edge_offset,
            });
        }
        if self.win_score == 0 {
            return Err(ConfigError::NotPositive {
                field: "win_score",
                value: 0.0,
            });
        }
        if self.ball_max_speed < self.ball_speed {
            return Err(ConfigError::MaxBelowBase {
                base: self.ball_speed,
                max: self.ball_max_speed,
            });
        }
        if self.paddle_height >= self.window_height {
            return Err(ConfigError::DoesNotFit { what: "paddle" });
        }
        if self.ball_size >= self.window_height || self.ball_size >= self.window_width {
            return Err(ConfigError::DoesNotFit { what: "ball" });
        }
        // Both paddles plus their edge gaps must leave room between them
        if 2.0 * (self.paddle_edge_offset + self.paddle_width) >= self.window_width {
            return Err(ConfigError::DoesNotFit { what: "paddles" });
        }
        Ok(())
    }

    /// Lowest valid paddle top edge
    #[inline]
    pub fn paddle_max_y(&self) -> f32 {
        self.window_height - self.paddle_height
    }

    /// Field centre, rounded down to whole pixels
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            (self.window_width / 2.0).floor(),
            (self.window_height / 2.0).floor(),
        )
    }

    /// Fixed x of a paddle's left edge
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_edge_offset,
            Side::Right => self.window_width - self.paddle_edge_offset - self.paddle_width,
        }
    }

    /// Paddle top edge when vertically centred
    pub fn paddle_start_y(&self) -> f32 {
        ((self.window_height - self.paddle_height) / 2.0).floor()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_paddle_x() {
        let config = GameConfig::new();
        assert_eq!(config.paddle_x(Side::Left), 50.0);
        assert_eq!(config.paddle_x(Side::Right), 735.0);
    }

    #[test]
    fn test_derived_positions() {
        let config = GameConfig::new();
        assert_eq!(config.center(), Vec2::new(400.0, 300.0));
        assert_eq!(config.paddle_start_y(), 255.0);
        assert_eq!(config.paddle_max_y(), 510.0);
    }

    #[test]
    fn test_rejects_max_below_base() {
        let config = GameConfig {
            ball_max_speed: 4.0,
            ..GameConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::MaxBelowBase {
                base: 5.0,
                max: 4.0
            })
        );
    }

    #[test]
    fn test_rejects_non_positive_and_nan() {
        let zero = GameConfig {
            paddle_speed: 0.0,
            ..GameConfig::default()
        };
        assert!(matches!(
            zero.validate(),
            Err(ConfigError::NotPositive {
                field: "paddle_speed",
                ..
            })
        ));

        let nan = GameConfig {
            ball_size: f32::NAN,
            ..GameConfig::default()
        };
        assert!(nan.validate().is_err());
    }

    #[test]
    fn test_rejects_oversized_paddle() {
        let config = GameConfig {
            paddle_height: 600.0,
            ..GameConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::DoesNotFit { what: "paddle" })
        );
    }
}
