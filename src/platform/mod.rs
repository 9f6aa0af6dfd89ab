//! Platform abstraction layer
//!
//! The boundary with whatever presents the game:
//! - Input events and held-key state fed in each tick
//! - Frame pacing for the fixed-rate loop

pub mod input;
pub mod time;

pub use input::{InputEvent, KeyState};
pub use time::FrameClock;
