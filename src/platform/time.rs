//! Fixed-rate frame pacing

use std::thread;
use std::time::{Duration, Instant};

/// Sleeps away whatever is left of each frame so the loop runs at a fixed rate.
///
/// A frame that overruns is not made up for; the next frame starts from now.
#[derive(Debug)]
pub struct FrameClock {
    frame: Duration,
    next: Instant,
    ticks: u64,
}

impl FrameClock {
    pub fn new(ticks_per_second: u32) -> Self {
        let frame = Duration::from_secs(1) / ticks_per_second.max(1);
        Self {
            frame,
            next: Instant::now() + frame,
            ticks: 0,
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame
    }

    /// Frames completed so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Block until the current frame's slot ends
    pub fn wait(&mut self) {
        let now = Instant::now();
        if now < self.next {
            thread::sleep(self.next - now);
            self.next += self.frame;
        } else {
            self.next = now + self.frame;
        }
        self.ticks += 1;
    }
}
