//! UI Components
//!
//! Reusable Leptos components shared by the game pages.

pub mod game_card;
pub mod layout;
pub mod neon_button;
pub mod toast;

pub use game_card::{alt_text, CandidateCard, CandidateName, CardAnimation};
pub use layout::Layout;
pub use neon_button::{ButtonSize, ButtonTone, NeonButton};
pub use toast::Toast;
