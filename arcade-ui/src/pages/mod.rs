//! Pages
//!
//! One page per shell screen.

pub mod dashboard;
pub mod memory;
pub mod tournament;

pub use dashboard::Dashboard;
pub use memory::MemoryPage;
pub use tournament::TournamentPage;
