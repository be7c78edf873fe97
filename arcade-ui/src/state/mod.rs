//! State Management
//!
//! Global application state and timer handles shared by the game pages.

pub mod global;
pub mod timers;

pub use global::{provide_global_state, GlobalState};
pub use timers::{ClockSlot, TimerSlot};
