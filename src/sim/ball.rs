//! The ball: a square moving at constant velocity between paddle hits

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::config::GameConfig;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Top-left corner
    pub pos: Vec2,
    /// Pixels per tick
    pub vel: Vec2,
}

impl Ball {
    /// Create a ball served from the field centre
    pub fn new<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Self {
        let mut ball = Self::at(Vec2::ZERO, Vec2::ZERO);
        ball.reset(config, rng);
        ball
    }

    /// Ball with an explicit position and velocity
    pub fn at(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Recentre and serve at base speed, each axis picking its sign independently
    pub fn reset<R: Rng + ?Sized>(&mut self, config: &GameConfig, rng: &mut R) {
        self.pos = config.center();
        self.vel = Vec2::new(
            config.ball_speed * random_sign(rng),
            config.ball_speed * random_sign(rng),
        );
    }

    /// Advance one tick, bouncing off the top and bottom walls.
    ///
    /// Left/right edges are not walls; crossing them is a point for the
    /// other side and is handled by the match.
    pub fn advance(&mut self, config: &GameConfig) {
        self.pos += self.vel;

        if self.pos.y <= 0.0 || self.pos.y >= config.window_height - config.ball_size {
            self.vel.y = -self.vel.y;
        }
    }

    /// Speed both axes up by the configured ratio.
    ///
    /// Each axis is scaled only if the result stays within the speed cap; an
    /// axis that would exceed it keeps its current speed.
    pub fn increase_speed(&mut self, config: &GameConfig) {
        let gain = 1.0 + config.speed_increment;
        let next = self.vel * gain;

        if next.x.abs() <= config.ball_max_speed {
            self.vel.x = next.x;
        }
        if next.y.abs() <= config.ball_max_speed {
            self.vel.y = next.y;
        }
    }

    pub fn bounds(&self, config: &GameConfig) -> Aabb {
        Aabb::new(self.pos, Vec2::splat(config.ball_size))
    }
}

fn random_sign<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    if rng.random_bool(0.5) { 1.0 } else { -1.0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_reset_centres_at_base_speed() {
        let config = GameConfig::default();
        let mut rng = Pcg32::seed_from_u64(7);

        for _ in 0..32 {
            let ball = Ball::new(&config, &mut rng);
            assert_eq!(ball.pos, Vec2::new(400.0, 300.0));
            assert_eq!(ball.vel.x.abs(), config.ball_speed);
            assert_eq!(ball.vel.y.abs(), config.ball_speed);
        }
    }

    #[test]
    fn test_reset_draws_every_direction() {
        let config = GameConfig::default();
        let mut rng = Pcg32::seed_from_u64(42);
        let mut seen = [false; 4];

        for _ in 0..200 {
            let ball = Ball::new(&config, &mut rng);
            let idx = (ball.vel.x > 0.0) as usize * 2 + (ball.vel.y > 0.0) as usize;
            seen[idx] = true;
        }
        assert!(seen.iter().all(|s| *s), "serve directions seen: {seen:?}");
    }

    #[test]
    fn test_advance_moves_by_velocity() {
        let config = GameConfig::default();
        let mut ball = Ball::at(Vec2::new(100.0, 100.0), Vec2::new(5.0, -5.0));
        ball.advance(&config);
        assert_eq!(ball.pos, Vec2::new(105.0, 95.0));
        assert_eq!(ball.vel, Vec2::new(5.0, -5.0));
    }

    #[test]
    fn test_advance_bounces_off_top_wall() {
        let config = GameConfig::default();
        let mut ball = Ball::at(Vec2::new(100.0, 3.0), Vec2::new(5.0, -5.0));
        ball.advance(&config);
        assert_eq!(ball.vel.y, 5.0);
        assert_eq!(ball.vel.x, 5.0);
    }

    #[test]
    fn test_advance_bounces_off_bottom_wall() {
        let config = GameConfig::default();
        let mut ball = Ball::at(Vec2::new(100.0, 582.0), Vec2::new(-5.0, 5.0));
        ball.advance(&config);
        assert_eq!(ball.pos.y, 587.0);
        assert_eq!(ball.vel.y, -5.0);
    }

    #[test]
    fn test_advance_ignores_side_edges() {
        let config = GameConfig::default();
        let mut ball = Ball::at(Vec2::new(2.0, 300.0), Vec2::new(-5.0, 5.0));
        ball.advance(&config);
        assert_eq!(ball.pos.x, -3.0);
        assert_eq!(ball.vel.x, -5.0);
    }

    #[test]
    fn test_increase_speed_scales_both_axes() {
        let config = GameConfig::default();
        let mut ball = Ball::at(Vec2::ZERO, Vec2::new(-5.0, 5.0));
        ball.increase_speed(&config);
        assert!((ball.vel.x + 6.0).abs() < 1e-4);
        assert!((ball.vel.y - 6.0).abs() < 1e-4);
    }

    #[test]
    fn test_increase_speed_caps_axes_independently() {
        let config = GameConfig::default();
        // x would reach 15.6 and stays; y grows to 6
        let mut ball = Ball::at(Vec2::ZERO, Vec2::new(13.0, -5.0));
        ball.increase_speed(&config);
        assert_eq!(ball.vel.x, 13.0);
        assert!((ball.vel.y + 6.0).abs() < 1e-4);
    }

    #[test]
    fn test_speed_never_exceeds_cap() {
        let config = GameConfig::default();
        let mut ball = Ball::at(Vec2::ZERO, Vec2::new(5.0, -5.0));
        for _ in 0..50 {
            ball.increase_speed(&config);
            assert!(ball.vel.x.abs() <= config.ball_max_speed);
            assert!(ball.vel.y.abs() <= config.ball_max_speed);
        }
        // Growth stalls once the next step would overshoot
        assert!(ball.vel.x.abs() > config.ball_max_speed / (1.0 + config.speed_increment));
    }
}
