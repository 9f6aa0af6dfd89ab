use crate::platform::InputEvent;

/// One selectable line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry<A> {
    pub label: &'static str,
    pub action: A,
}

/// What a batch of input events amounted to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuSelection<A> {
    /// Nothing decided yet
    Pending,
    Chosen(A),
    /// Window closed
    Quit,
}

/// Read-only view of a menu for drawing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuView<'a> {
    pub title: &'a str,
    pub options: Vec<&'a str>,
    pub selected: usize,
}

/// A vertical list of options with a wrapping highlight
#[derive(Debug, Clone)]
pub struct MenuScreen<A: Copy> {
    title: &'static str,
    entries: Vec<MenuEntry<A>>,
    back: A,
    selected: usize,
}

impl<A: Copy> MenuScreen<A> {
    /// `back` is what Escape selects
    pub fn new(title: &'static str, entries: Vec<MenuEntry<A>>, back: A) -> Self {
        assert!(!entries.is_empty(), "menu needs at least one entry");
        Self {
            title,
            entries,
            back,
            selected: 0,
        }
    }

    /// Highlight the first option again
    pub fn reset(&mut self) {
        self.selected = 0;
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Consume this tick's events. The first decisive event wins and the
    /// rest of the batch is dropped.
    pub fn handle_input(&mut self, events: &[InputEvent]) -> MenuSelection<A> {
        let count = self.entries.len();
        for event in events {
            match event {
                InputEvent::Quit => return MenuSelection::Quit,
                InputEvent::Up => self.selected = (self.selected + count - 1) % count,
                InputEvent::Down => self.selected = (self.selected + 1) % count,
                InputEvent::Confirm => {
                    return MenuSelection::Chosen(self.entries[self.selected].action);
                }
                InputEvent::Back => return MenuSelection::Chosen(self.back),
            }
        }
        MenuSelection::Pending
    }

    pub fn draw(&self) -> MenuView<'_> {
        MenuView {
            title: self.title,
            options: self.entries.iter().map(|e| e.label).collect(),
            selected: self.selected,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainMenuAction {
    SinglePlayer,
    TwoPlayers,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseAction {
    Resume,
    MainMenu,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverAction {
    PlayAgain,
    MainMenu,
    Quit,
}

pub fn main_menu() -> MenuScreen<MainMenuAction> {
    MenuScreen::new(
        "Pong",
        vec![
            MenuEntry { label: "Single Player", action: MainMenuAction::SinglePlayer },
            MenuEntry { label: "Two Players", action: MainMenuAction::TwoPlayers },
            MenuEntry { label: "Quit", action: MainMenuAction::Quit },
        ],
        MainMenuAction::Quit,
    )
}

pub fn pause_menu() -> MenuScreen<PauseAction> {
    MenuScreen::new(
        "Paused",
        vec![
            MenuEntry { label: "Return to Game", action: PauseAction::Resume },
            MenuEntry { label: "Back to Menu", action: PauseAction::MainMenu },
            MenuEntry { label: "Quit", action: PauseAction::Quit },
        ],
        PauseAction::Resume,
    )
}

pub fn game_over_menu() -> MenuScreen<GameOverAction> {
    MenuScreen::new(
        "Game Over",
        vec![
            MenuEntry { label: "Play Again", action: GameOverAction::PlayAgain },
            MenuEntry { label: "Main Menu", action: GameOverAction::MainMenu },
            MenuEntry { label: "Quit", action: GameOverAction::Quit },
        ],
        GameOverAction::MainMenu,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use InputEvent::*;

    #[test]
    fn test_no_events_is_pending() {
        let mut menu = main_menu();
        assert_eq!(menu.handle_input(&[]), MenuSelection::Pending);
    }

    #[test]
    fn test_confirm_picks_highlighted() {
        let mut menu = main_menu();
        assert_eq!(
            menu.handle_input(&[Confirm]),
            MenuSelection::Chosen(MainMenuAction::SinglePlayer)
        );
        assert_eq!(
            menu.handle_input(&[Down, Confirm]),
            MenuSelection::Chosen(MainMenuAction::TwoPlayers)
        );
    }

    #[test]
    fn test_navigation_wraps() {
        let mut menu = pause_menu();
        assert_eq!(menu.handle_input(&[Up]), MenuSelection::Pending);
        assert_eq!(menu.selected(), 2);
        menu.handle_input(&[Down]);
        assert_eq!(menu.selected(), 0);
    }

    #[test]
    fn test_back_meaning_per_screen() {
        assert_eq!(
            main_menu().handle_input(&[Back]),
            MenuSelection::Chosen(MainMenuAction::Quit)
        );
        assert_eq!(
            pause_menu().handle_input(&[Back]),
            MenuSelection::Chosen(PauseAction::Resume)
        );
        assert_eq!(
            game_over_menu().handle_input(&[Back]),
            MenuSelection::Chosen(GameOverAction::MainMenu)
        );
    }

    #[test]
    fn test_quit_event_wins_over_later_events() {
        let mut menu = game_over_menu();
        assert_eq!(menu.handle_input(&[Down, Quit, Confirm]), MenuSelection::Quit);
    }

    #[test]
    fn test_events_after_decision_are_dropped() {
        let mut menu = main_menu();
        menu.handle_input(&[Confirm, Down, Down]);
        assert_eq!(menu.selected(), 0);
    }

    #[test]
    fn test_draw_is_read_only() {
        let mut menu = game_over_menu();
        menu.handle_input(&[Down]);
        let view = menu.draw();
        assert_eq!(view.title, "Game Over");
        assert_eq!(view.options, vec!["Play Again", "Main Menu", "Quit"]);
        assert_eq!(view.selected, 1);
        assert_eq!(menu.selected(), 1);
    }

    #[test]
    fn test_reset_highlights_first() {
        let mut menu = pause_menu();
        menu.handle_input(&[Down, Down]);
        menu.reset();
        assert_eq!(menu.selected(), 0);
    }
}
