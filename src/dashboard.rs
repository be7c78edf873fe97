//! Game catalog and the mobile carousel that browses it.
//!
//! Desktop renders the catalog as a grid; mobile shows three slots at a time
//! (previous, active, next) and wraps around at both ends.

use serde::{Deserialize, Serialize};

/// Identifier of a catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameId {
    Tournament,
    Memory,
    ComingSoon,
}

/// Accent color used by the entry's card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Cyan,
    Green,
    Slate,
}

impl Accent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Accent::Cyan => "cyan",
            Accent::Green => "green",
            Accent::Slate => "slate",
        }
    }
}

/// A game listed on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameEntry {
    pub id: GameId,
    pub title: &'static str,
    pub description: &'static str,
    pub accent: Accent,
    pub disabled: bool,
}

static CATALOG: [GameEntry; 3] = [
    GameEntry {
        id: GameId::Tournament,
        title: "Ideal-Type World Cup",
        description: "Pick a folder of images and vote them through a knockout bracket.",
        accent: Accent::Cyan,
        disabled: false,
    },
    GameEntry {
        id: GameId::Memory,
        title: "Neon Memory",
        description: "Flip the cards and find every matching pair.",
        accent: Accent::Green,
        disabled: false,
    },
    GameEntry {
        id: GameId::ComingSoon,
        title: "Coming Soon",
        description: "A new game is on its way.",
        accent: Accent::Slate,
        disabled: true,
    },
];

/// All catalog entries in display order
pub fn catalog() -> &'static [GameEntry] {
    &CATALOG
}

/// Where an entry sits relative to the active carousel slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Prev,
    Active,
    Next,
    Hidden,
}

/// What a click on a carousel slot does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotAction {
    Select,
    MovePrev,
    MoveNext,
    None,
}

/// Wrap-around cursor over the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    current: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { current: 0, len }
    }

    pub fn for_catalog() -> Self {
        Self::new(CATALOG.len())
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.current = (self.current + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.current = (self.current + self.len - 1) % self.len;
        }
    }

    /// Relative position of `index`, wrapping so the neighbours of the
    /// first and last entries are each other.
    pub fn slot(&self, index: usize) -> Slot {
        let len = self.len as isize;
        let mut offset = index as isize - self.current as isize;
        if offset < -1 {
            offset += len;
        }
        if offset > 1 {
            offset -= len;
        }

        match offset {
            0 => Slot::Active,
            -1 => Slot::Prev,
            1 => Slot::Next,
            _ => Slot::Hidden,
        }
    }

    /// Clicking the active slot selects it, a side slot scrolls toward it
    pub fn click(&self, index: usize) -> SlotAction {
        match self.slot(index) {
            Slot::Active => SlotAction::Select,
            Slot::Prev => SlotAction::MovePrev,
            Slot::Next => SlotAction::MoveNext,
            Slot::Hidden => SlotAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog() {
        assert_eq!(catalog().len(), 3);
        let disabled: Vec<_> = catalog().iter().filter(|g| g.disabled).map(|g| g.id).collect();
        assert_eq!(disabled, [GameId::ComingSoon]);
    }

    #[test]
    fn test_wraps_both_ways() {
        let mut carousel = Carousel::for_catalog();
        carousel.prev();
        assert_eq!(carousel.current(), 2);
        carousel.next();
        carousel.next();
        assert_eq!(carousel.current(), 1);
    }

    #[test]
    fn test_slots_wrap_around() {
        let carousel = Carousel::for_catalog();
        assert_eq!(carousel.slot(0), Slot::Active);
        assert_eq!(carousel.slot(1), Slot::Next);
        assert_eq!(carousel.slot(2), Slot::Prev);

        assert_eq!(carousel.click(0), SlotAction::Select);
        assert_eq!(carousel.click(2), SlotAction::MovePrev);
    }

    #[test]
    fn test_hidden_slots_in_longer_lists() {
        let mut carousel = Carousel::new(5);
        carousel.next();
        assert_eq!(carousel.slot(0), Slot::Prev);
        assert_eq!(carousel.slot(2), Slot::Next);
        assert_eq!(carousel.slot(3), Slot::Hidden);
        assert_eq!(carousel.click(4), SlotAction::None);
    }
}
