//! Screen state machine
//!
//! ```text
//! Menu ──select mode──▶ Playing ──Esc──▶ Paused ──resume──▶ Playing
//!   ▲                      │                │
//!   │                 match over       back to menu
//!   │                      ▼                │
//!   └────main menu──── GameOver ◀───────────┘ (to Menu)
//!                          │
//!                     play again ──▶ Playing
//! ```
//! Quit is reachable from every screen.

use crate::config::GameConfig;
use crate::platform::{InputEvent, KeyState};
use crate::sim::{self, GameMode, MatchResult, MatchState, RenderSnapshot, TickOutcome};
use crate::ui::{
    GameOverAction, MainMenuAction, MenuScreen, MenuSelection, MenuView, PauseAction,
    game_over_menu, main_menu, pause_menu,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Playing,
    Paused,
    GameOver,
}

/// Whether the outer loop should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Running,
    Exit,
}

/// What to draw this frame
#[derive(Debug, Clone, PartialEq)]
pub enum Frame<'a> {
    Menu(MenuView<'a>),
    Playing(RenderSnapshot),
    /// Field frozen under the pause overlay
    Paused {
        field: RenderSnapshot,
        menu: MenuView<'a>,
    },
    GameOver {
        result: MatchResult,
        menu: MenuView<'a>,
    },
}

pub struct Session {
    screen: Screen,
    state: MatchState,
    main_menu: MenuScreen<MainMenuAction>,
    pause_menu: MenuScreen<PauseAction>,
    game_over_menu: MenuScreen<GameOverAction>,
    last_result: Option<MatchResult>,
}

impl Session {
    pub fn new(config: GameConfig, seed: u64, difficulty: f32) -> Self {
        Self {
            screen: Screen::Menu,
            state: MatchState::new(config, seed, difficulty),
            main_menu: main_menu(),
            pause_menu: pause_menu(),
            game_over_menu: game_over_menu(),
            last_result: None,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn match_state(&self) -> &MatchState {
        &self.state
    }

    /// Result of the most recently finished match
    pub fn last_result(&self) -> Option<MatchResult> {
        self.last_result
    }

    /// Run one frame of whichever screen is active.
    ///
    /// `events` are this frame's discrete presses; `keys` is the held-key
    /// state, only read while playing.
    pub fn step(&mut self, events: &[InputEvent], keys: &KeyState) -> SessionStatus {
        match self.screen {
            Screen::Menu => self.step_menu(events),
            Screen::Playing => self.step_playing(events, keys),
            Screen::Paused => self.step_paused(events),
            Screen::GameOver => self.step_game_over(events),
        }
    }

    fn step_menu(&mut self, events: &[InputEvent]) -> SessionStatus {
        match self.main_menu.handle_input(events) {
            MenuSelection::Pending => SessionStatus::Running,
            MenuSelection::Chosen(MainMenuAction::SinglePlayer) => {
                self.start(GameMode::Single);
                SessionStatus::Running
            }
            MenuSelection::Chosen(MainMenuAction::TwoPlayers) => {
                self.start(GameMode::TwoPlayer);
                SessionStatus::Running
            }
            MenuSelection::Chosen(MainMenuAction::Quit) | MenuSelection::Quit => SessionStatus::Exit,
        }
    }

    fn step_playing(&mut self, events: &[InputEvent], keys: &KeyState) -> SessionStatus {
        for event in events {
            match event {
                InputEvent::Quit => return SessionStatus::Exit,
                InputEvent::Back => {
                    self.enter(Screen::Paused);
                    return SessionStatus::Running;
                }
                _ => {}
            }
        }

        if let TickOutcome::MatchOver(result) = sim::tick(&mut self.state, keys) {
            self.last_result = Some(result);
            self.enter(Screen::GameOver);
        }
        SessionStatus::Running
    }

    fn step_paused(&mut self, events: &[InputEvent]) -> SessionStatus {
        match self.pause_menu.handle_input(events) {
            MenuSelection::Pending => {}
            MenuSelection::Chosen(PauseAction::Resume) => self.enter(Screen::Playing),
            MenuSelection::Chosen(PauseAction::MainMenu) => self.enter(Screen::Menu),
            MenuSelection::Chosen(PauseAction::Quit) | MenuSelection::Quit => {
                return SessionStatus::Exit;
            }
        }
        SessionStatus::Running
    }

    fn step_game_over(&mut self, events: &[InputEvent]) -> SessionStatus {
        match self.game_over_menu.handle_input(events) {
            MenuSelection::Pending => {}
            MenuSelection::Chosen(GameOverAction::PlayAgain) => {
                self.state.reset_match();
                self.enter(Screen::Playing);
            }
            MenuSelection::Chosen(GameOverAction::MainMenu) => self.enter(Screen::Menu),
            MenuSelection::Chosen(GameOverAction::Quit) | MenuSelection::Quit => {
                return SessionStatus::Exit;
            }
        }
        SessionStatus::Running
    }

    fn start(&mut self, mode: GameMode) {
        self.state.start(mode);
        self.enter(Screen::Playing);
    }

    fn enter(&mut self, screen: Screen) {
        log::info!("screen {:?} -> {:?}", self.screen, screen);
        match screen {
            Screen::Menu => self.main_menu.reset(),
            Screen::Paused => self.pause_menu.reset(),
            Screen::GameOver => self.game_over_menu.reset(),
            Screen::Playing => {}
        }
        self.screen = screen;
    }

    /// Everything needed to draw the current screen
    pub fn frame(&self) -> Frame<'_> {
        match self.screen {
            Screen::Menu => Frame::Menu(self.main_menu.draw()),
            Screen::Playing => Frame::Playing(self.state.snapshot()),
            Screen::Paused => Frame::Paused {
                field: self.state.snapshot(),
                menu: self.pause_menu.draw(),
            },
            Screen::GameOver => match self.last_result {
                Some(result) => Frame::GameOver {
                    result,
                    menu: self.game_over_menu.draw(),
                },
                // Unreachable in practice: GameOver is only entered with a result
                None => Frame::Playing(self.state.snapshot()),
            },
        }
    }
}
