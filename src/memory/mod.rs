//! Neon Memory
//!
//! Card-matching game with two ways to build a deck:
//!
//! - **card**: `MemoryCard`, `CardContent` and pair colors
//! - **deck**: auto decks from images, custom decks from hand-made pairs
//! - **editor**: the custom-pair editor rows
//! - **game**: the `MemoryGame` phase machine and flip logic
//! - **error**: error types
//!
//! # Timing
//!
//! ```text
//! flip ─► flip ─► pending(match|mismatch) ──delay──► resolve ─► ... ─► cleared
//!                                                                      │
//!                                               result delay ──► show_result
//! ```
//!
//! Like the tournament bracket, the game never sleeps itself: every outcome
//! that needs a pause carries the `Duration` the host has to wait.

pub mod card;
pub mod deck;
pub mod editor;
pub mod error;
pub mod game;

pub use card::{CardContent, MemoryCard, NeonColor};
pub use deck::{auto_deck, custom_deck, CustomPair, MIN_PAIRS};
pub use editor::{CustomPairEditor, PairDraft, PairSide};
pub use error::{MemoryError, MemoryResult};
pub use game::{
    format_clock, FlipOutcome, MemoryGame, MemoryPhase, MemoryStats, PendingKind, Resolution,
};
