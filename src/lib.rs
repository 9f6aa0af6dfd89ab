//! Retro Pong - classic two-paddle arcade game
//!
//! Core modules:
//! - `sim`: Fixed-timestep simulation (ball, paddles, opponent, match tick)
//! - `ui`: Menu screens (selection logic and read-only views)
//! - `session`: Screen state machine (menu → play → pause/game over)
//! - `platform`: Input feed types and frame pacing
//! - `settings`: Player preferences loaded from JSON

pub mod config;
pub mod platform;
pub mod scoreboard;
pub mod session;
pub mod settings;
pub mod sim;
pub mod ui;

pub use config::{ConfigError, GameConfig, Palette, Rgb};
pub use scoreboard::Scoreboard;
pub use session::{Frame, Screen, Session, SessionStatus};
pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Simulation rate (ticks per second)
    pub const TICK_RATE: u32 = 60;
    /// Fixed simulation timestep in seconds
    pub const SIM_DT: f32 = 1.0 / TICK_RATE as f32;

    /// Field dimensions
    pub const WINDOW_WIDTH: f32 = 800.0;
    pub const WINDOW_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 15.0;
    pub const PADDLE_HEIGHT: f32 = 90.0;
    pub const PADDLE_SPEED: f32 = 7.0;
    /// Gap between a paddle and the field edge behind it
    pub const PADDLE_EDGE_OFFSET: f32 = 50.0;

    /// Ball defaults (the ball is a square)
    pub const BALL_SIZE: f32 = 15.0;
    pub const BALL_SPEED: f32 = 5.0;
    pub const BALL_MAX_SPEED: f32 = 15.0;
    /// Per-axis speed gain on each paddle hit (multiplier is 1 + this)
    pub const SPEED_INCREMENT: f32 = 0.2;

    /// Points needed to take a match
    pub const WIN_SCORE: u32 = 11;

    /// Opponent defaults
    pub const AI_DIFFICULTY: f32 = 0.5;
    pub const AI_REACTION_DELAY: u32 = 4;
    pub const AI_MOVEMENT_SPEED_FACTOR: f32 = 0.7;
}
