//! Custom pair editor
//!
//! Rows are edited freely; only rows with both sides filled in count as
//! pairs when the deck is built.

use serde::{Deserialize, Serialize};

use super::{CardContent, CustomPair, MemoryError, MemoryResult, MIN_PAIRS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PairSide {
    Left,
    Right,
}

/// One editable row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairDraft {
    pub id: u64,
    pub left: CardContent,
    pub right: CardContent,
}

impl PairDraft {
    fn new(id: u64) -> Self {
        Self {
            id,
            left: CardContent::default(),
            right: CardContent::default(),
        }
    }

    pub fn side(&self, side: PairSide) -> &CardContent {
        match side {
            PairSide::Left => &self.left,
            PairSide::Right => &self.right,
        }
    }

    fn side_mut(&mut self, side: PairSide) -> &mut CardContent {
        match side {
            PairSide::Left => &mut self.left,
            PairSide::Right => &mut self.right,
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.left.is_empty() && !self.right.is_empty()
    }
}

/// Ordered list of rows with stable ids
#[derive(Debug, Clone, Default)]
pub struct CustomPairEditor {
    rows: Vec<PairDraft>,
    next_id: u64,
}

impl CustomPairEditor {
    /// Editor with one empty row
    pub fn new() -> Self {
        let mut editor = Self::default();
        editor.add_row();
        editor
    }

    pub fn rows(&self) -> &[PairDraft] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Append an empty row and return its id
    pub fn add_row(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.rows.push(PairDraft::new(id));
        id
    }

    pub fn remove_row(&mut self, id: u64) -> MemoryResult<()> {
        let pos = self
            .rows
            .iter()
            .position(|r| r.id == id)
            .ok_or(MemoryError::UnknownRow(id))?;
        self.rows.remove(pos);
        Ok(())
    }

    pub fn set_text(&mut self, id: u64, side: PairSide, text: impl Into<String>) -> MemoryResult<()> {
        self.set(id, side, CardContent::Text(text.into())).map(drop)
    }

    pub fn set_image(&mut self, id: u64, side: PairSide, image: impl Into<String>) -> MemoryResult<()> {
        self.set(id, side, CardContent::Image(image.into())).map(drop)
    }

    /// Replace one side of a row, returning what was there before
    pub fn set(&mut self, id: u64, side: PairSide, content: CardContent) -> MemoryResult<CardContent> {
        let row = self
            .rows
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(MemoryError::UnknownRow(id))?;
        Ok(std::mem::replace(row.side_mut(side), content))
    }

    /// Rows with both sides filled in, in editor order
    pub fn complete_pairs(&self) -> Vec<CustomPair> {
        self.rows
            .iter()
            .filter(|r| r.is_complete())
            .map(|r| CustomPair {
                left: r.left.clone(),
                right: r.right.clone(),
            })
            .collect()
    }

    /// Complete pairs, or an error when there are fewer than two
    pub fn validate(&self) -> MemoryResult<Vec<CustomPair>> {
        let pairs = self.complete_pairs();
        if pairs.len() < MIN_PAIRS {
            return Err(MemoryError::NotEnoughPairs { found: pairs.len() });
        }
        Ok(pairs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_keep_ids_after_removal() {
        let mut editor = CustomPairEditor::new();
        let second = editor.add_row();
        let third = editor.add_row();

        editor.remove_row(second).unwrap();
        let ids: Vec<_> = editor.rows().iter().map(|r| r.id).collect();
        assert_eq!(ids, [0, third]);
        assert_eq!(editor.remove_row(second), Err(MemoryError::UnknownRow(second)));
    }

    #[test]
    fn test_incomplete_rows_are_skipped() {
        let mut editor = CustomPairEditor::new();
        editor.set_text(0, PairSide::Left, "sun").unwrap();
        editor.set_text(0, PairSide::Right, "sol").unwrap();

        let half = editor.add_row();
        editor.set_text(half, PairSide::Left, "moon").unwrap();

        assert_eq!(editor.complete_pairs().len(), 1);
        assert_eq!(editor.validate(), Err(MemoryError::NotEnoughPairs { found: 1 }));

        editor.set_image(half, PairSide::Right, "blob:moon").unwrap();
        let pairs = editor.validate().unwrap();
        assert_eq!(pairs[1].right, CardContent::Image("blob:moon".into()));
    }

    #[test]
    fn test_setters_report_unknown_rows() {
        let mut editor = CustomPairEditor::new();
        assert_eq!(editor.set_text(0, PairSide::Left, "sun"), Ok(()));
        assert_eq!(editor.set_image(0, PairSide::Right, "blob:sun"), Ok(()));
        assert_eq!(
            editor.set_text(9, PairSide::Left, "moon"),
            Err(MemoryError::UnknownRow(9))
        );
        assert!(editor.rows()[0].is_complete());
    }

    #[test]
    fn test_set_returns_previous() {
        let mut editor = CustomPairEditor::new();
        editor.set_image(0, PairSide::Left, "blob:1").unwrap();
        let old = editor.set(0, PairSide::Left, CardContent::default()).unwrap();
        assert_eq!(old, CardContent::Image("blob:1".into()));
        assert!(editor.rows()[0].side(PairSide::Left).is_empty());
    }
}
