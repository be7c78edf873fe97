//! Image Tournament
//!
//! Knockout bracket over a set of user-picked images:
//!
//! - **candidate**: `Candidate` built from image files
//! - **bracket**: the `setup → playing → bye → winner` state machine
//! - **error**: error types
//!
//! # Flow
//!
//! ```text
//! start ──► playing ──select──► (animating) ──settle──► playing
//!              │                                   │
//!              │                       odd leftover├──► bye ──advance──► playing
//!              │                                   │
//!              └────────────── one left ───────────┴──► winner
//! ```
//!
//! The bracket never waits on its own. `select` returns right away and the
//! host calls `settle` once the pick animation has played.

pub mod bracket;
pub mod candidate;
pub mod error;

pub use bracket::{Bracket, Phase, Preview, RoundLabel, Side};
pub use candidate::{candidates_from_files, Candidate};
pub use error::{TournamentError, TournamentResult};
