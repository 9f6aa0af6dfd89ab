//! Win counters per game mode
//!
//! Kept for the lifetime of the process only; nothing is written to disk.

use serde::{Deserialize, Serialize};

use crate::sim::{GameMode, Side};

/// Wins for each side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SidePair {
    pub left: u32,
    pub right: u32,
}

impl SidePair {
    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    fn bump(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }
}

/// Completed-match victories, split by mode
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scoreboard {
    pub single: SidePair,
    pub two_player: SidePair,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit a match win to `side` under `mode`
    pub fn record_win(&mut self, mode: GameMode, side: Side) {
        match mode {
            GameMode::Single => self.single.bump(side),
            GameMode::TwoPlayer => self.two_player.bump(side),
        }
    }

    pub fn wins(&self, mode: GameMode) -> SidePair {
        match mode {
            GameMode::Single => self.single,
            GameMode::TwoPlayer => self.two_player,
        }
    }

    pub fn total(&self) -> u32 {
        self.single.left + self.single.right + self.two_player.left + self.two_player.right
    }
}
