//! Memory game state machine

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::{
    auto_deck, custom_deck, CustomPairEditor, MemoryCard, MemoryError, MemoryResult,
};
use crate::config::MemoryConfig;
use crate::media::ImageFile;
use crate::rng::ShuffleRng;

/// Screen the memory game is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemoryPhase {
    Menu,
    SetupCustom,
    PreviewCustom,
    Playing,
    Result,
    ReviewPairs,
}

/// How a face-up pair will be resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PendingKind {
    Match,
    Mismatch,
}

/// What a flip did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipOutcome {
    /// Board locked, card unknown, or card already face up
    Ignored,
    /// First card of a pair turned over
    Revealed,
    /// Second card turned over; call [`MemoryGame::resolve`] after `delay`
    Pending { kind: PendingKind, delay: Duration },
}

/// What [`MemoryGame::resolve`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub kind: PendingKind,
    /// Set once every pair is matched; call [`MemoryGame::show_result`]
    /// after this delay
    pub result_delay: Option<Duration>,
}

/// Summary of a finished (or running) game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryStats {
    pub pairs: usize,
    pub moves: u32,
    pub elapsed_secs: u64,
}

#[derive(Debug, Clone)]
struct PendingPair {
    kind: PendingKind,
    first: String,
    second: String,
}

/// Memory game session
#[derive(Debug, Clone)]
pub struct MemoryGame {
    phase: MemoryPhase,
    cards: Vec<MemoryCard>,
    flipped: Vec<String>,
    pending: Option<PendingPair>,
    matched_pairs: usize,
    moves: u32,
    elapsed_secs: u64,
    editor: CustomPairEditor,
    config: MemoryConfig,
    rng: ShuffleRng,
}

impl MemoryGame {
    pub fn new(config: MemoryConfig, rng: ShuffleRng) -> Self {
        Self {
            phase: MemoryPhase::Menu,
            cards: Vec::new(),
            flipped: Vec::new(),
            pending: None,
            matched_pairs: 0,
            moves: 0,
            elapsed_secs: 0,
            editor: CustomPairEditor::new(),
            config,
            rng,
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn phase(&self) -> MemoryPhase {
        self.phase
    }

    pub fn cards(&self) -> &[MemoryCard] {
        &self.cards
    }

    pub fn card(&self, id: &str) -> Option<&MemoryCard> {
        self.cards.iter().find(|c| c.id == id)
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    pub fn matched_pairs(&self) -> usize {
        self.matched_pairs
    }

    pub fn total_pairs(&self) -> usize {
        self.cards.len() / 2
    }

    /// Every pair found
    pub fn is_cleared(&self) -> bool {
        !self.cards.is_empty() && self.matched_pairs == self.total_pairs()
    }

    /// Two cards are face up and waiting to be resolved
    pub fn is_locked(&self) -> bool {
        self.flipped.len() >= 2
    }

    pub fn stats(&self) -> MemoryStats {
        MemoryStats {
            pairs: self.total_pairs(),
            moves: self.moves,
            elapsed_secs: self.elapsed_secs,
        }
    }

    pub fn config(&self) -> &MemoryConfig {
        &self.config
    }

    pub fn editor(&self) -> &CustomPairEditor {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut CustomPairEditor {
        &mut self.editor
    }

    /// Cards grouped by pair, in order of first appearance on the board
    pub fn pairs(&self) -> Vec<(&MemoryCard, &MemoryCard)> {
        let mut pairs = Vec::with_capacity(self.total_pairs());
        let mut seen: Vec<&str> = Vec::with_capacity(self.total_pairs());

        for (i, card) in self.cards.iter().enumerate() {
            if seen.contains(&card.pair_id.as_str()) {
                continue;
            }
            seen.push(&card.pair_id);
            if let Some(other) = self.cards[i + 1..].iter().find(|c| c.pair_id == card.pair_id) {
                pairs.push((card, other));
            }
        }
        pairs
    }

    fn expect_phase(&self, expected: MemoryPhase) -> MemoryResult<()> {
        if self.phase != expected {
            return Err(MemoryError::InvalidPhase {
                expected,
                actual: self.phase,
            });
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Menu and custom setup
    // ------------------------------------------------------------------

    /// Start a game from picked image files
    pub fn start_auto(&mut self, files: &[ImageFile]) -> MemoryResult<()> {
        self.expect_phase(MemoryPhase::Menu)?;
        let deck = auto_deck(files, self.config.max_auto_pairs, &mut self.rng)?;
        self.start(deck);
        Ok(())
    }

    pub fn open_custom_setup(&mut self) -> MemoryResult<()> {
        self.expect_phase(MemoryPhase::Menu)?;
        if self.editor.is_empty() {
            self.editor.add_row();
        }
        self.phase = MemoryPhase::SetupCustom;
        Ok(())
    }

    pub fn cancel_custom(&mut self) -> MemoryResult<()> {
        self.expect_phase(MemoryPhase::SetupCustom)?;
        self.phase = MemoryPhase::Menu;
        Ok(())
    }

    /// Move to the preview if at least two rows are complete. Returns the
    /// number of complete pairs.
    pub fn review_custom(&mut self) -> MemoryResult<usize> {
        self.expect_phase(MemoryPhase::SetupCustom)?;
        let pairs = self.editor.validate()?;
        self.phase = MemoryPhase::PreviewCustom;
        Ok(pairs.len())
    }

    pub fn edit_custom(&mut self) -> MemoryResult<()> {
        self.expect_phase(MemoryPhase::PreviewCustom)?;
        self.phase = MemoryPhase::SetupCustom;
        Ok(())
    }

    pub fn start_custom(&mut self) -> MemoryResult<()> {
        self.expect_phase(MemoryPhase::PreviewCustom)?;
        let pairs = self.editor.validate()?;
        let deck = custom_deck(&pairs, &mut self.rng)?;
        self.start(deck);
        Ok(())
    }

    fn start(&mut self, mut deck: Vec<MemoryCard>) {
        self.rng.shuffle(&mut deck);
        self.cards = deck;
        self.flipped.clear();
        self.pending = None;
        self.matched_pairs = 0;
        self.moves = 0;
        self.elapsed_secs = 0;
        self.phase = MemoryPhase::Playing;

        tracing::info!(
            pairs = self.total_pairs(),
            seed = self.rng.seed(),
            "memory game started"
        );
    }

    // ------------------------------------------------------------------
    // Play
    // ------------------------------------------------------------------

    /// Turn a card face up
    pub fn flip(&mut self, id: &str) -> FlipOutcome {
        if self.phase != MemoryPhase::Playing || self.is_locked() {
            return FlipOutcome::Ignored;
        }

        let Some(card) = self.cards.iter_mut().find(|c| c.id == id) else {
            return FlipOutcome::Ignored;
        };
        if card.flipped || card.matched {
            return FlipOutcome::Ignored;
        }

        card.flipped = true;
        self.flipped.push(id.to_string());

        let [first, second] = self.flipped.as_slice() else {
            return FlipOutcome::Revealed;
        };

        self.moves += 1;
        let same_pair = match (self.card(first), self.card(second)) {
            (Some(a), Some(b)) => a.pair_id == b.pair_id,
            _ => false,
        };
        let (kind, delay) = if same_pair {
            (PendingKind::Match, self.config.match_delay())
        } else {
            (PendingKind::Mismatch, self.config.mismatch_delay())
        };

        self.pending = Some(PendingPair {
            kind,
            first: first.clone(),
            second: second.clone(),
        });
        FlipOutcome::Pending { kind, delay }
    }

    /// Lock in a match or turn a mismatch back over
    pub fn resolve(&mut self) -> Option<Resolution> {
        let pending = self.pending.take()?;
        let is_pair = |c: &MemoryCard| c.id == pending.first || c.id == pending.second;

        match pending.kind {
            PendingKind::Match => {
                self.cards
                    .iter_mut()
                    .filter(|c| is_pair(c))
                    .for_each(|c| c.matched = true);
                self.matched_pairs += 1;
            }
            PendingKind::Mismatch => {
                self.cards
                    .iter_mut()
                    .filter(|c| is_pair(c))
                    .for_each(|c| c.flipped = false);
            }
        }
        self.flipped.clear();

        let result_delay = if self.is_cleared() {
            tracing::info!(
                moves = self.moves,
                elapsed_secs = self.elapsed_secs,
                "memory game cleared"
            );
            Some(self.config.result_delay())
        } else {
            None
        };

        Some(Resolution {
            kind: pending.kind,
            result_delay,
        })
    }

    /// One second of play time
    pub fn tick(&mut self) -> u64 {
        if self.phase == MemoryPhase::Playing {
            self.elapsed_secs += 1;
        }
        self.elapsed_secs
    }

    /// Leave the board for the result screen
    pub fn show_result(&mut self) -> MemoryResult<MemoryStats> {
        self.expect_phase(MemoryPhase::Playing)?;
        if !self.is_cleared() {
            return Err(MemoryError::NotCleared);
        }
        self.phase = MemoryPhase::Result;
        Ok(self.stats())
    }

    pub fn review_pairs(&mut self) -> MemoryResult<()> {
        self.expect_phase(MemoryPhase::Result)?;
        self.phase = MemoryPhase::ReviewPairs;
        Ok(())
    }

    pub fn back_to_result(&mut self) -> MemoryResult<()> {
        self.expect_phase(MemoryPhase::ReviewPairs)?;
        self.phase = MemoryPhase::Result;
        Ok(())
    }

    /// Back to the menu. Returns the discarded deck so the host can release
    /// image resources; custom rows are kept.
    pub fn return_to_menu(&mut self) -> Vec<MemoryCard> {
        self.phase = MemoryPhase::Menu;
        self.flipped.clear();
        self.pending = None;
        self.matched_pairs = 0;
        std::mem::take(&mut self.cards)
    }
}

impl Default for MemoryGame {
    fn default() -> Self {
        Self::new(MemoryConfig::default(), ShuffleRng::default())
    }
}

/// Elapsed seconds as `mm:ss`
pub fn format_clock(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{CardContent, PairSide};

    fn images(n: usize) -> Vec<ImageFile> {
        (0..n)
            .map(|i| ImageFile::new(format!("{}.png", i), "image/png", format!("blob:{}", i)))
            .collect()
    }

    fn playing(pairs: usize) -> MemoryGame {
        let mut game = MemoryGame::new(MemoryConfig::default(), ShuffleRng::new(17));
        game.start_auto(&images(pairs)).unwrap();
        game
    }

    /// Ids of the two cards of the first pair and one card of another pair
    fn pick(game: &MemoryGame) -> (String, String, String) {
        let first = &game.cards()[0];
        let twin = game
            .cards()
            .iter()
            .find(|c| c.pair_id == first.pair_id && c.id != first.id)
            .unwrap();
        let other = game
            .cards()
            .iter()
            .find(|c| c.pair_id != first.pair_id)
            .unwrap();
        (first.id.clone(), twin.id.clone(), other.id.clone())
    }

    fn clear_board(game: &mut MemoryGame) {
        let pairs: Vec<(String, String)> = game
            .pairs()
            .iter()
            .map(|(a, b)| (a.id.clone(), b.id.clone()))
            .collect();
        for (a, b) in pairs {
            game.flip(&a);
            game.flip(&b);
            game.resolve();
        }
    }

    #[test]
    fn test_too_few_images_stays_in_menu() {
        let mut game = MemoryGame::default();
        let err = game.start_auto(&images(1)).unwrap_err();
        assert_eq!(err, MemoryError::NotEnoughImages { found: 1 });
        assert_eq!(game.phase(), MemoryPhase::Menu);
    }

    #[test]
    fn test_pair_cap_below_two_stays_in_menu() {
        for cap in [0, 1] {
            let config = MemoryConfig {
                max_auto_pairs: cap,
                ..MemoryConfig::default()
            };
            let mut game = MemoryGame::new(config, ShuffleRng::new(17));
            assert_eq!(
                game.start_auto(&images(3)),
                Err(MemoryError::NotEnoughImages { found: cap })
            );
            assert_eq!(game.phase(), MemoryPhase::Menu);
            assert!(game.cards().is_empty());
        }
    }

    #[test]
    fn test_match_flags_flip_together() {
        let mut game = playing(3);
        let (a, b, _) = pick(&game);

        assert_eq!(game.flip(&a), FlipOutcome::Revealed);
        assert_eq!(
            game.flip(&b),
            FlipOutcome::Pending {
                kind: PendingKind::Match,
                delay: Duration::from_millis(500)
            }
        );
        assert!(!game.card(&a).unwrap().matched);

        let resolution = game.resolve().unwrap();
        assert_eq!(resolution.kind, PendingKind::Match);
        assert!(resolution.result_delay.is_none());
        assert!(game.card(&a).unwrap().matched);
        assert!(game.card(&b).unwrap().matched);
        assert_eq!(game.matched_pairs(), 1);
        assert_eq!(game.moves(), 1);
    }

    #[test]
    fn test_mismatch_flips_back() {
        let mut game = playing(3);
        let (a, _, c) = pick(&game);

        game.flip(&a);
        assert_eq!(
            game.flip(&c),
            FlipOutcome::Pending {
                kind: PendingKind::Mismatch,
                delay: Duration::from_millis(1000)
            }
        );
        game.resolve();

        assert!(!game.card(&a).unwrap().is_revealed());
        assert!(!game.card(&c).unwrap().is_revealed());
        assert_eq!(game.matched_pairs(), 0);
        assert_eq!(game.moves(), 1);
    }

    #[test]
    fn test_locked_and_repeat_flips_ignored() {
        let mut game = playing(3);
        let (a, b, c) = pick(&game);

        game.flip(&a);
        assert_eq!(game.flip(&a), FlipOutcome::Ignored);
        game.flip(&c);
        assert!(game.is_locked());
        assert_eq!(game.flip(&b), FlipOutcome::Ignored);
        assert_eq!(game.flip("card-99-1"), FlipOutcome::Ignored);
        assert!(!game.card(&b).unwrap().flipped);
    }

    #[test]
    fn test_result_only_when_cleared() {
        let mut game = playing(2);
        assert_eq!(game.show_result(), Err(MemoryError::NotCleared));

        clear_board(&mut game);
        assert!(game.is_cleared());
        assert_eq!(game.matched_pairs(), game.cards().len() / 2);

        let stats = game.show_result().unwrap();
        assert_eq!(stats.pairs, 2);
        assert_eq!(stats.moves, 2);
        assert_eq!(game.phase(), MemoryPhase::Result);
    }

    #[test]
    fn test_last_match_reports_result_delay() {
        let mut game = playing(2);
        let pairs: Vec<(String, String)> = game
            .pairs()
            .iter()
            .map(|(a, b)| (a.id.clone(), b.id.clone()))
            .collect();

        game.flip(&pairs[0].0);
        game.flip(&pairs[0].1);
        assert_eq!(game.resolve().unwrap().result_delay, None);

        game.flip(&pairs[1].0);
        game.flip(&pairs[1].1);
        assert_eq!(
            game.resolve().unwrap().result_delay,
            Some(Duration::from_millis(1000))
        );
    }

    #[test]
    fn test_timer_only_runs_while_playing() {
        let mut game = playing(2);
        game.tick();
        game.tick();
        assert_eq!(game.elapsed_secs(), 2);

        clear_board(&mut game);
        game.show_result().unwrap();
        assert_eq!(game.tick(), 2);
        assert_eq!(format_clock(game.stats().elapsed_secs), "00:02");
    }

    #[test]
    fn test_review_pairs_round_trip() {
        let mut game = playing(3);
        clear_board(&mut game);
        game.show_result().unwrap();

        game.review_pairs().unwrap();
        assert_eq!(game.phase(), MemoryPhase::ReviewPairs);
        let pairs = game.pairs();
        assert_eq!(pairs.len(), 3);
        assert!(pairs.iter().all(|(a, b)| a.pair_id == b.pair_id && a.color == b.color));
        assert_eq!(pairs[0].0.id, game.cards()[0].id);

        game.back_to_result().unwrap();
        let discarded = game.return_to_menu();
        assert_eq!(discarded.len(), 6);
        assert!(game.cards().is_empty());
        assert_eq!(game.phase(), MemoryPhase::Menu);
    }

    #[test]
    fn test_custom_flow() {
        let mut game = MemoryGame::new(MemoryConfig::default(), ShuffleRng::new(5));
        game.editor_mut().remove_row(0).unwrap();
        game.open_custom_setup().unwrap();
        assert_eq!(game.editor().rows().len(), 1);

        let first = game.editor().rows()[0].id;
        game.editor_mut().set_text(first, PairSide::Left, "H2O").unwrap();
        game.editor_mut().set_text(first, PairSide::Right, "water").unwrap();
        assert_eq!(
            game.review_custom(),
            Err(MemoryError::NotEnoughPairs { found: 1 })
        );
        assert_eq!(game.phase(), MemoryPhase::SetupCustom);

        let second = game.editor_mut().add_row();
        game.editor_mut().set_text(second, PairSide::Left, "NaCl").unwrap();
        game.editor_mut().set_image(second, PairSide::Right, "blob:salt").unwrap();
        assert_eq!(game.review_custom(), Ok(2));

        game.edit_custom().unwrap();
        game.review_custom().unwrap();
        game.start_custom().unwrap();

        assert_eq!(game.phase(), MemoryPhase::Playing);
        assert_eq!(game.cards().len(), 4);
        assert!(game
            .cards()
            .iter()
            .any(|c| c.content == CardContent::Image("blob:salt".into())));
    }

    #[test]
    fn test_phase_guards() {
        let mut game = MemoryGame::default();
        assert!(matches!(
            game.start_custom(),
            Err(MemoryError::InvalidPhase { .. })
        ));
        game.open_custom_setup().unwrap();
        assert!(game.start_auto(&images(2)).is_err());
        game.cancel_custom().unwrap();
        assert_eq!(game.phase(), MemoryPhase::Menu);
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(75), "01:15");
        assert_eq!(format_clock(6000), "100:00");
    }
}
