//! Memory cards

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::rng::ShuffleRng;

/// What a card shows when face up
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content", rename_all = "lowercase")]
pub enum CardContent {
    Text(String),
    /// URL or path of the image
    Image(String),
}

impl CardContent {
    pub fn payload(&self) -> &str {
        match self {
            CardContent::Text(s) | CardContent::Image(s) => s,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.payload().is_empty()
    }
}

impl Default for CardContent {
    fn default() -> Self {
        CardContent::Text(String::new())
    }
}

/// Glow color shared by both cards of a pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeonColor {
    pub hue: u16,
}

impl NeonColor {
    pub fn random(rng: &mut ShuffleRng) -> Self {
        Self { hue: rng.hue() }
    }
}

impl fmt::Display for NeonColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, 100%, 60%)", self.hue)
    }
}

/// One card on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryCard {
    pub id: String,
    pub pair_id: String,
    pub content: CardContent,
    pub color: NeonColor,
    pub flipped: bool,
    pub matched: bool,
}

impl MemoryCard {
    pub fn new(
        id: impl Into<String>,
        pair_id: impl Into<String>,
        content: CardContent,
        color: NeonColor,
    ) -> Self {
        Self {
            id: id.into(),
            pair_id: pair_id.into(),
            content,
            color,
            flipped: false,
            matched: false,
        }
    }

    /// Face up, either while being compared or after being matched
    pub fn is_revealed(&self) -> bool {
        self.flipped || self.matched
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_css() {
        assert_eq!(NeonColor { hue: 200 }.to_string(), "hsl(200, 100%, 60%)");
    }

    #[test]
    fn test_content_serializes_tagged() {
        let json = serde_json::to_value(CardContent::Image("blob:x".into())).unwrap();
        assert_eq!(json, serde_json::json!({"type": "image", "content": "blob:x"}));
        assert_eq!(CardContent::default(), CardContent::Text(String::new()));
        assert!(CardContent::default().is_empty());
    }
}
