//! Computer-controlled opponent
//!
//! Steers a paddle toward a predicted intercept point. Imperfection comes
//! from three places, each tuned by `difficulty`:
//! - the target is only refreshed every `reaction_delay` ticks
//! - every prediction carries a random error, occasionally doubled
//! - the paddle approaches at a damped fraction of full speed

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::paddle::{Direction, Paddle};
use crate::config::GameConfig;
use crate::consts::*;

/// How the approach speed is damped below full paddle speed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Damping {
    /// Take a full clamped step, then give back `(1 - factor)` of it
    #[default]
    StepThenUndo,
    /// Move `factor` of a full step in one clamped move
    Scaled,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Opponent {
    /// 0.0 = sloppy, 1.0 = sharp
    pub difficulty: f32,
    /// Ticks between target refreshes
    pub reaction_delay: u32,
    /// Fraction of paddle speed used when approaching the target
    pub movement_speed_factor: f32,
    pub damping: Damping,
    frame_counter: u32,
    target_y: f32,
}

impl Opponent {
    pub fn new(difficulty: f32) -> Self {
        Self {
            difficulty: difficulty.clamp(0.0, 1.0),
            reaction_delay: AI_REACTION_DELAY.max(1),
            movement_speed_factor: AI_MOVEMENT_SPEED_FACTOR,
            damping: Damping::default(),
            frame_counter: 0,
            target_y: 0.0,
        }
    }

    pub fn with_damping(mut self, damping: Damping) -> Self {
        self.damping = damping;
        self
    }

    /// Forget the cached target and restart the reaction timer
    pub fn reset(&mut self) {
        self.frame_counter = 0;
        self.target_y = 0.0;
    }

    /// Paddle top edge the opponent is currently steering toward
    pub fn target_y(&self) -> f32 {
        self.target_y
    }

    /// Predict where the paddle's top edge should be to meet the ball.
    ///
    /// A ball moving away (or not moving horizontally) sends the paddle back
    /// to the middle. Otherwise the ball's straight-line path is projected to
    /// the paddle's x, folded back into the field to account for wall bounces,
    /// then perturbed by a random error. The result is always a valid paddle y.
    pub fn predict_ball_position<R: Rng + ?Sized>(
        &self,
        ball: &Ball,
        paddle: &Paddle,
        config: &GameConfig,
        rng: &mut R,
    ) -> f32 {
        let height = config.window_height;
        let approaching = ball.vel.x * paddle.side.incoming_sign() > 0.0;
        if !approaching {
            return height / 2.0 - config.paddle_height / 2.0;
        }

        let time_to_intercept = ((paddle.pos.x - ball.pos.x) / ball.vel.x).abs();
        let future_y = fold_into_field(ball.pos.y + ball.vel.y * time_to_intercept, height);

        let max_error = config.paddle_height * (1.5 - self.difficulty);
        let mut error = rng.random_range(-max_error..=max_error);
        // Occasional big miss
        if rng.random::<f32>() > self.difficulty {
            error *= 2.0;
        }

        (future_y - config.paddle_height / 2.0 + error).clamp(0.0, config.paddle_max_y())
    }

    /// Advance one tick: maybe refresh the target, then step toward it
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        paddle: &mut Paddle,
        ball: &Ball,
        config: &GameConfig,
        rng: &mut R,
    ) {
        self.frame_counter += 1;
        if self.frame_counter >= self.reaction_delay {
            self.frame_counter = 0;
            self.target_y = self.predict_ball_position(ball, paddle, config, rng);
            log::trace!("opponent {:?} retargets to y={:.1}", paddle.side, self.target_y);
        }

        if (paddle.pos.y - self.target_y).abs() <= config.paddle_speed {
            return;
        }
        let direction = if paddle.pos.y < self.target_y {
            Direction::Down
        } else {
            Direction::Up
        };
        self.step(paddle, direction, config);
    }

    fn step(&self, paddle: &mut Paddle, direction: Direction, config: &GameConfig) {
        match self.damping {
            Damping::StepThenUndo => {
                let give_back = (1.0 - self.movement_speed_factor) * config.paddle_speed;
                paddle.move_dir(direction, config);
                match direction {
                    Direction::Down => paddle.pos.y -= give_back,
                    Direction::Up => paddle.pos.y += give_back,
                }
            }
            Damping::Scaled => {
                let delta = match direction {
                    Direction::Down => config.paddle_speed,
                    Direction::Up => -config.paddle_speed,
                };
                paddle.pos.y = (paddle.pos.y + delta * self.movement_speed_factor)
                    .clamp(0.0, config.paddle_max_y());
            }
        }
    }
}

impl Default for Opponent {
    fn default() -> Self {
        Self::new(AI_DIFFICULTY)
    }
}

/// Mirror `y` back into `[0, height]` as if it bounced off both walls
pub fn fold_into_field(y: f32, height: f32) -> f32 {
    if (0.0..=height).contains(&y) {
        return y;
    }
    let period = 2.0 * height;
    let m = y.rem_euclid(period);
    if m > height { period - m } else { m }
}
