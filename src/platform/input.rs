//! Input feed types

/// Discrete key press, used by the menu screens and for pause/quit while playing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Window closed
    Quit,
    /// Enter
    Confirm,
    /// Escape
    Back,
    Up,
    Down,
}

/// Keys held down this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyState {
    /// Up arrow (left paddle)
    pub up: bool,
    /// Down arrow (left paddle)
    pub down: bool,
    /// W (right paddle, two-player only)
    pub w: bool,
    /// S (right paddle, two-player only)
    pub s: bool,
}
