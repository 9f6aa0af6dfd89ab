//! Fixed timestep simulation tick
//!
//! Each tick: held keys steer the human paddles, then `update` moves the
//! ball, runs the opponent, resolves paddle hits and checks for points.

use super::collision::resolve_paddle_hit;
use super::paddle::{Direction, Side};
use super::state::{GameMode, MatchResult, MatchState, TickOutcome};
use crate::platform::KeyState;

/// Apply held keys to the human-controlled paddles.
///
/// Arrows always drive the left paddle; W/S drive the right paddle only in
/// two-player mode.
pub fn handle_input(state: &mut MatchState, keys: &KeyState) {
    let Some(mode) = state.mode else {
        return;
    };
    let config = &state.config;

    if keys.up {
        state.left.move_dir(Direction::Up, config);
    }
    if keys.down {
        state.left.move_dir(Direction::Down, config);
    }

    if mode == GameMode::TwoPlayer {
        if keys.w {
            state.right.move_dir(Direction::Up, config);
        }
        if keys.s {
            state.right.move_dir(Direction::Down, config);
        }
    }
}

/// Advance the match by one tick
pub fn update(state: &mut MatchState) -> TickOutcome {
    let Some(mode) = state.mode else {
        return TickOutcome::Continue;
    };

    state.ball.advance(&state.config);

    if let Some(ai) = state.opponent.as_mut() {
        ai.update(&mut state.right, &state.ball, &state.config, &mut state.rng);
    }

    resolve_paddle_hit(&mut state.ball, &state.left, &state.config);
    resolve_paddle_hit(&mut state.ball, &state.right, &state.config);

    let scorer = if state.ball.pos.x <= 0.0 {
        Some(Side::Right)
    } else if state.ball.pos.x >= state.config.window_width - state.config.ball_size {
        Some(Side::Left)
    } else {
        None
    };

    let Some(scorer) = scorer else {
        return TickOutcome::Continue;
    };

    let points = state.score.award(scorer);
    log::debug!(
        "point to {:?}: {} - {}",
        scorer,
        state.score.left,
        state.score.right
    );

    if points >= state.config.win_score {
        state.scoreboard.record_win(mode, scorer);
        let result = MatchResult {
            winner: scorer,
            score_left: state.score.left,
            score_right: state.score.right,
        };
        log::info!(
            "{} wins {} - {}",
            scorer.label(),
            result.score_left,
            result.score_right
        );
        return TickOutcome::MatchOver(result);
    }

    state.reset_ball();
    TickOutcome::Continue
}

/// Input then update, the order the playing screen runs them in
pub fn tick(state: &mut MatchState, keys: &KeyState) -> TickOutcome {
    handle_input(state, keys);
    update(state)
}
