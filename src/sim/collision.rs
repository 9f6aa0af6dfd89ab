//! Axis-aligned box overlap and paddle-hit resolution

use glam::Vec2;

use super::ball::Ball;
use super::paddle::{Paddle, Side};
use crate::config::GameConfig;

/// Axis-aligned rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Strict overlap: rectangles that only share an edge do not collide
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let a_max = self.max();
        let b_max = other.max();
        self.min.x < b_max.x && a_max.x > other.min.x && self.min.y < b_max.y && a_max.y > other.min.y
    }
}

/// Bounce the ball off a paddle it overlaps.
///
/// Places the ball flush against the face of the paddle that points into the
/// field, reverses its horizontal velocity and applies the speed ramp.
/// Returns true if the ball was hit.
pub fn resolve_paddle_hit(ball: &mut Ball, paddle: &Paddle, config: &GameConfig) -> bool {
    if !paddle.check_collision(ball, config) {
        return false;
    }

    ball.pos.x = match paddle.side {
        Side::Left => paddle.pos.x + config.paddle_width,
        Side::Right => paddle.pos.x - config.ball_size,
    };
    ball.vel.x = -ball.vel.x;
    ball.increase_speed(config);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_overlap() {
        let a = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Aabb::new(Vec2::new(5.0, 5.0), Vec2::new(10.0, 10.0));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_aabb_touching_edges_do_not_overlap() {
        let a = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let right = Aabb::new(Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0));
        let below = Aabb::new(Vec2::new(0.0, 10.0), Vec2::new(10.0, 10.0));
        assert!(!a.overlaps(&right));
        assert!(!a.overlaps(&below));
    }

    #[test]
    fn test_left_paddle_hit_places_ball_on_face() {
        let config = GameConfig::default();
        let paddle = Paddle::new(Side::Left, &config);
        let mut ball = Ball::at(
            Vec2::new(paddle.pos.x + 5.0, paddle.pos.y + 10.0),
            Vec2::new(-5.0, 5.0),
        );

        assert!(resolve_paddle_hit(&mut ball, &paddle, &config));
        assert_eq!(ball.pos.x, paddle.pos.x + config.paddle_width);
        assert!(ball.vel.x > 0.0);
        assert!((ball.vel.x - 6.0).abs() < 1e-4);
        assert!((ball.vel.y - 6.0).abs() < 1e-4);
    }

    #[test]
    fn test_right_paddle_hit_places_ball_on_face() {
        let config = GameConfig::default();
        let paddle = Paddle::new(Side::Right, &config);
        let mut ball = Ball::at(
            Vec2::new(paddle.pos.x - 5.0, paddle.pos.y + 10.0),
            Vec2::new(5.0, -5.0),
        );

        assert!(resolve_paddle_hit(&mut ball, &paddle, &config));
        assert_eq!(ball.pos.x, paddle.pos.x - config.ball_size);
        assert!((ball.vel.x + 6.0).abs() < 1e-4);
        assert!((ball.vel.y + 6.0).abs() < 1e-4);
    }

    #[test]
    fn test_miss_leaves_ball_untouched() {
        let config = GameConfig::default();
        let paddle = Paddle::new(Side::Left, &config);
        let mut ball = Ball::at(Vec2::new(400.0, 300.0), Vec2::new(-5.0, 5.0));
        let before = ball.clone();

        assert!(!resolve_paddle_hit(&mut ball, &paddle, &config));
        assert_eq!(ball.pos, before.pos);
        assert_eq!(ball.vel, before.vel);
    }
}
