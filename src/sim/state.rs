//! Match state and the read-only snapshot handed to the renderer

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::opponent::Opponent;
use super::paddle::{Paddle, Side};
use crate::config::GameConfig;
use crate::scoreboard::{Scoreboard, SidePair};

/// Who controls the right paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    /// Human on the left, computer on the right
    Single,
    /// Humans on both sides
    TwoPlayer,
}

impl GameMode {
    pub fn label(self) -> &'static str {
        match self {
            GameMode::Single => "Single",
            GameMode::TwoPlayer => "Multi",
        }
    }
}

/// Result of one simulation tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    /// A side reached the winning score; the ball is left where it ended
    MatchOver(MatchResult),
}

/// Final result of a completed match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub winner: Side,
    pub score_left: u32,
    pub score_right: u32,
}

/// Per-match points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Add a point and return the new total for that side
    pub fn award(&mut self, side: Side) -> u32 {
        let slot = match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        };
        *slot += 1;
        *slot
    }
}

/// Everything a renderer needs to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderSnapshot {
    pub left_paddle: Vec2,
    pub right_paddle: Vec2,
    pub ball: Vec2,
    pub score: Score,
    /// Win counters for the active mode
    pub wins: SidePair,
    pub mode_label: &'static str,
}

/// Two paddles, a ball, the score and the win counters
#[derive(Debug, Clone)]
pub struct MatchState {
    pub config: GameConfig,
    /// Seed the RNG was created from
    pub seed: u64,
    pub mode: Option<GameMode>,
    pub left: Paddle,
    pub right: Paddle,
    pub ball: Ball,
    pub score: Score,
    /// Survives `reset_match`
    pub scoreboard: Scoreboard,
    /// Present only in single-player mode
    pub opponent: Option<Opponent>,
    /// Opponent difficulty used whenever a single-player match starts
    pub difficulty: f32,
    pub(crate) rng: Pcg32,
}

impl MatchState {
    pub fn new(config: GameConfig, seed: u64, difficulty: f32) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let ball = Ball::new(&config, &mut rng);
        Self {
            left: Paddle::new(Side::Left, &config),
            right: Paddle::new(Side::Right, &config),
            ball,
            config,
            seed,
            mode: None,
            score: Score::default(),
            scoreboard: Scoreboard::new(),
            opponent: None,
            difficulty: difficulty.clamp(0.0, 1.0),
            rng,
        }
    }

    /// Begin a fresh match in `mode`
    pub fn start(&mut self, mode: GameMode) {
        self.mode = Some(mode);
        self.opponent = match mode {
            GameMode::Single => Some(Opponent::new(self.difficulty)),
            GameMode::TwoPlayer => None,
        };
        self.reset_match();
        log::info!("match started ({} mode, seed {})", mode.label(), self.seed);
    }

    /// Zero the scores and put paddles and ball back at their start.
    /// Win counters are kept.
    pub fn reset_match(&mut self) {
        self.score = Score::default();
        self.left.reset(&self.config);
        self.right.reset(&self.config);
        self.ball.reset(&self.config, &mut self.rng);
        if let Some(ai) = self.opponent.as_mut() {
            ai.reset();
        }
    }

    /// Serve a new ball after a point; paddles stay where they are
    pub fn reset_ball(&mut self) {
        self.ball.reset(&self.config, &mut self.rng);
    }

    /// Wins for the active mode (two-player counters when no mode is set)
    pub fn wins(&self) -> SidePair {
        self.scoreboard
            .wins(self.mode.unwrap_or(GameMode::TwoPlayer))
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot {
            left_paddle: self.left.pos,
            right_paddle: self.right.pos,
            ball: self.ball.pos,
            score: self.score,
            wins: self.wins(),
            mode_label: self.mode.unwrap_or(GameMode::TwoPlayer).label(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = MatchState::new(GameConfig::default(), 1, 0.5);
        assert_eq!(state.mode, None);
        assert_eq!(state.score, Score::default());
        assert_eq!(state.left.pos, Vec2::new(50.0, 255.0));
        assert_eq!(state.right.pos, Vec2::new(735.0, 255.0));
        assert_eq!(state.ball.pos, Vec2::new(400.0, 300.0));
        assert!(state.opponent.is_none());
    }

    #[test]
    fn test_start_creates_opponent_only_in_single() {
        let mut state = MatchState::new(GameConfig::default(), 1, 0.5);
        state.start(GameMode::Single);
        assert!(state.opponent.is_some());
        state.start(GameMode::TwoPlayer);
        assert!(state.opponent.is_none());
    }

    #[test]
    fn test_score_award() {
        let mut score = Score::default();
        assert_eq!(score.award(Side::Left), 1);
        assert_eq!(score.award(Side::Left), 2);
        assert_eq!(score.award(Side::Right), 1);
        assert_eq!(score.get(Side::Left), 2);
    }

    #[test]
    fn test_snapshot_reports_active_mode() {
        let mut state = MatchState::new(GameConfig::default(), 3, 0.5);
        state.scoreboard.record_win(GameMode::Single, Side::Left);
        state.start(GameMode::Single);

        let snap = state.snapshot();
        assert_eq!(snap.mode_label, "Single");
        assert_eq!(snap.wins, SidePair { left: 1, right: 0 });
        assert_eq!(snap.ball, Vec2::new(400.0, 300.0));

        state.start(GameMode::TwoPlayer);
        let snap = state.snapshot();
        assert_eq!(snap.mode_label, "Multi");
        assert_eq!(snap.wins, SidePair::default());
    }

    #[test]
    fn test_snapshot_serializes() {
        let state = MatchState::new(GameConfig::default(), 3, 0.5);
        let json = serde_json::to_string(&state.snapshot()).unwrap();
        assert!(json.contains("\"mode_label\":\"Multi\""));
        assert!(json.contains("\"score\""));
    }
}
