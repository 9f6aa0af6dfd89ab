//! Simulation module
//!
//! All gameplay logic lives here. Nothing in this module draws, polls
//! devices or sleeps:
//! - One call to `tick` is one fixed step
//! - Randomness comes from the match's seeded RNG
//! - Entities read sizes from a shared `GameConfig`

pub mod ball;
pub mod collision;
pub mod opponent;
pub mod paddle;
pub mod state;
pub mod tick;

pub use ball::Ball;
pub use collision::{Aabb, resolve_paddle_hit};
pub use opponent::{Damping, Opponent, fold_into_field};
pub use paddle::{Direction, Paddle, Side};
pub use state::{GameMode, MatchResult, MatchState, RenderSnapshot, Score, TickOutcome};
pub use tick::{handle_input, tick, update};
