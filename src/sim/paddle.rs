//! Player paddles

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::collision::Aabb;
use crate::config::GameConfig;

/// Which end of the field a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Sign of ball x-velocity that carries the ball toward this side
    pub fn incoming_sign(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Side::Left => "Left Player",
            Side::Right => "Right Player",
        }
    }
}

/// Vertical movement step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub side: Side,
    /// Top-left corner; x never changes after construction
    pub pos: Vec2,
}

impl Paddle {
    pub fn new(side: Side, config: &GameConfig) -> Self {
        Self {
            side,
            pos: Vec2::new(config.paddle_x(side), config.paddle_start_y()),
        }
    }

    /// Recentre vertically
    pub fn reset(&mut self, config: &GameConfig) {
        self.pos = Vec2::new(config.paddle_x(self.side), config.paddle_start_y());
    }

    /// Move one full step, clamped to the field
    pub fn move_dir(&mut self, direction: Direction, config: &GameConfig) {
        self.pos.y = match direction {
            Direction::Up => (self.pos.y - config.paddle_speed).max(0.0),
            Direction::Down => (self.pos.y + config.paddle_speed).min(config.paddle_max_y()),
        };
    }

    pub fn bounds(&self, config: &GameConfig) -> Aabb {
        Aabb::new(
            self.pos,
            Vec2::new(config.paddle_width, config.paddle_height),
        )
    }

    /// Does the ball overlap this paddle?
    pub fn check_collision(&self, ball: &Ball, config: &GameConfig) -> bool {
        self.bounds(config).overlaps(&ball.bounds(config))
    }
}
