//! Menu screens
//!
//! The main menu, pause menu and game-over menu share one implementation,
//! differing only in their options and what Escape means.

pub mod menu;

pub use menu::{
    GameOverAction, MainMenuAction, MenuEntry, MenuScreen, MenuSelection, MenuView, PauseAction,
    game_over_menu, main_menu, pause_menu,
};
