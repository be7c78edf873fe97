//! Screen selection for the arcade shell.

use serde::{Deserialize, Serialize};

use crate::dashboard::{GameEntry, GameId};

/// The screen currently rendered by the shell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    #[default]
    Dashboard,
    Tournament,
    Memory,
}

impl Screen {
    /// Screen that hosts a playable game
    pub fn for_game(id: GameId) -> Option<Self> {
        match id {
            GameId::Tournament => Some(Screen::Tournament),
            GameId::Memory => Some(Screen::Memory),
            GameId::ComingSoon => None,
        }
    }
}

/// Root navigation state
#[derive(Debug, Clone, Default)]
pub struct Shell {
    screen: Screen,
}

impl Shell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Switch to a game's screen. Disabled games leave the shell untouched.
    pub fn open(&mut self, game: &GameEntry) -> Option<Screen> {
        if game.disabled {
            return None;
        }
        let screen = Screen::for_game(game.id)?;
        tracing::debug!(?screen, "opening game");
        self.screen = screen;
        Some(screen)
    }

    pub fn go_home(&mut self) {
        self.screen = Screen::Dashboard;
    }

    pub fn shows_home_button(&self) -> bool {
        self.screen != Screen::Dashboard
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::catalog;

    #[test]
    fn test_open_and_home() {
        let mut shell = Shell::new();
        assert_eq!(shell.screen(), Screen::Dashboard);
        assert!(!shell.shows_home_button());

        assert_eq!(shell.open(&catalog()[1]), Some(Screen::Memory));
        assert!(shell.shows_home_button());

        shell.go_home();
        assert_eq!(shell.screen(), Screen::Dashboard);
    }

    #[test]
    fn test_disabled_game_is_noop() {
        let mut shell = Shell::new();
        shell.open(&catalog()[0]);
        assert_eq!(shell.open(&catalog()[2]), None);
        assert_eq!(shell.screen(), Screen::Tournament);
    }
}
