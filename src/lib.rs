//! # Classroom Arcade
//!
//! Two casual classroom games behind a shared game-select shell:
//!
//! - **Ideal-Type World Cup**: vote a folder of images through a knockout
//!   bracket, with byes for odd rounds
//! - **Neon Memory**: flip cards to find matching pairs, from a folder of
//!   images or from hand-made text/image pairs
//!
//! ## Modules
//!
//! - [`shell`]: which screen is showing
//! - [`dashboard`]: game catalog and the mobile carousel
//! - [`tournament`]: candidates and the bracket state machine
//! - [`memory`]: cards, deck builders, pair editor and the game state machine
//! - [`media`]: host-neutral picked-file descriptions
//! - [`rng`]: seedable shuffling
//! - [`config`]: TOML configuration with environment overrides
//!
//! The state machines never sleep or spawn. Anything that should happen
//! after an animation is returned as a `Duration` for the host (the Leptos
//! frontend or the `arcade` terminal binary) to wait out.
//!
//! ## Quick Start
//!
//! ```rust
//! use classroom_arcade::media::ImageFile;
//! use classroom_arcade::rng::ShuffleRng;
//! use classroom_arcade::tournament::{Bracket, Phase, Side};
//!
//! let files = vec![
//!     ImageFile::new("cat.png", "image/png", "cat.png"),
//!     ImageFile::new("dog.png", "image/png", "dog.png"),
//! ];
//!
//! let mut bracket = Bracket::new(ShuffleRng::new(42));
//! bracket.load_files(&files)?;
//! bracket.select(Side::Left)?;
//! assert_eq!(bracket.settle()?, Phase::Winner);
//! # Ok::<(), classroom_arcade::tournament::TournamentError>(())
//! ```

pub mod config;
pub mod dashboard;
pub mod media;
pub mod memory;
pub mod rng;
pub mod shell;
pub mod tournament;

// Re-export top-level types for convenience
pub use config::{
    generate_default_config, ArcadeConfig, ConfigError, LoggingConfig, MemoryConfig,
    TournamentConfig,
};

pub use dashboard::{catalog, Accent, Carousel, GameEntry, GameId, Slot, SlotAction};

pub use media::ImageFile;

pub use memory::{
    format_clock, CardContent, FlipOutcome, MemoryCard, MemoryError, MemoryGame, MemoryPhase,
    MemoryStats, PairSide,
};

pub use rng::ShuffleRng;

pub use shell::{Screen, Shell};

pub use tournament::{Bracket, Candidate, Phase, RoundLabel, Side, TournamentError};
