//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;

use classroom_arcade::{ArcadeConfig, GameEntry, MemoryConfig, Screen, Shell, ShuffleRng, TournamentConfig};

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Which screen the shell shows
    pub shell: RwSignal<Shell>,
    /// Show candidate names in the tournament
    pub show_names: RwSignal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
    /// Game settings
    pub config: StoredValue<ArcadeConfig>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let config = ArcadeConfig::default();

    let state = GlobalState {
        shell: create_rw_signal(Shell::new()),
        show_names: create_rw_signal(config.tournament.show_names),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
        config: store_value(config),
    };

    provide_context(state);
}

impl GlobalState {
    pub fn screen(&self) -> Screen {
        self.shell.with(|s| s.screen())
    }

    /// Open a game from the dashboard; disabled entries do nothing
    pub fn open_game(&self, game: &GameEntry) {
        self.shell.update(|s| {
            s.open(game);
        });
    }

    pub fn go_home(&self) {
        self.shell.update(|s| s.go_home());
    }

    pub fn tournament_config(&self) -> TournamentConfig {
        self.config.with_value(|c| c.tournament.clone())
    }

    pub fn memory_config(&self) -> MemoryConfig {
        self.config.with_value(|c| c.memory.clone())
    }

    /// Fresh shuffle source for a game session
    pub fn rng(&self) -> ShuffleRng {
        ShuffleRng::from_optional(self.config.with_value(|c| c.seed))
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }

    /// Clear error message
    pub fn clear_error(&self) {
        self.error.set(None);
    }
}
