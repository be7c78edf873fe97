//! Bracket state machine
//!
//! Rounds hold indices into the candidate pool, so a rotation applied through
//! the preview shows up in every round that candidate reaches.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::candidate::MIN_CANDIDATES;
use super::{candidates_from_files, Candidate, TournamentError, TournamentResult};
use crate::media::ImageFile;
use crate::rng::ShuffleRng;

/// Bracket phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Setup,
    Playing,
    Bye,
    Winner,
}

/// Which card of the current pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    fn offset(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }
}

/// Enlarged view of one card of the current pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preview {
    pub side: Side,
}

/// Badge shown above the pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundLabel {
    Final,
    RoundOf(usize),
}

impl fmt::Display for RoundLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundLabel::Final => write!(f, "Final"),
            RoundLabel::RoundOf(n) => write!(f, "Round of {}", n),
        }
    }
}

/// Knockout bracket over a pool of candidates
#[derive(Debug, Clone)]
pub struct Bracket {
    candidates: Vec<Candidate>,
    current_round: Vec<usize>,
    next_round: Vec<usize>,
    pair_index: usize,
    round_number: usize,
    phase: Phase,
    pending: Option<Side>,
    bye: Option<usize>,
    winner: Option<usize>,
    preview: Option<Preview>,
    rng: ShuffleRng,
}

impl Bracket {
    pub fn new(rng: ShuffleRng) -> Self {
        Self {
            candidates: Vec::new(),
            current_round: Vec::new(),
            next_round: Vec::new(),
            pair_index: 0,
            round_number: 0,
            phase: Phase::Setup,
            pending: None,
            bye: None,
            winner: None,
            preview: None,
            rng,
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Side whose pick is still animating
    pub fn pending(&self) -> Option<Side> {
        self.pending
    }

    pub fn preview(&self) -> Option<Preview> {
        self.preview
    }

    /// Number of entries in the round being played
    pub fn round_size(&self) -> usize {
        self.current_round.len()
    }

    /// 1-based number of the round being played
    pub fn round_number(&self) -> usize {
        self.round_number
    }

    /// Entries already through to the next round
    pub fn advanced(&self) -> usize {
        self.next_round.len()
    }

    /// 1-based number of the match within the round
    pub fn match_number(&self) -> usize {
        self.pair_index / 2 + 1
    }

    pub fn round_label(&self) -> RoundLabel {
        match self.current_round.len() {
            2 => RoundLabel::Final,
            n => RoundLabel::RoundOf(n),
        }
    }

    /// The two candidates facing each other, if both exist
    pub fn current_pair(&self) -> Option<(&Candidate, &Candidate)> {
        let left = self.entry(self.pair_index)?;
        let right = self.entry(self.pair_index + 1)?;
        Some((left, right))
    }

    pub fn candidate_at(&self, side: Side) -> Option<&Candidate> {
        self.entry(self.pair_index + side.offset())
    }

    pub fn bye_candidate(&self) -> Option<&Candidate> {
        self.bye.and_then(|i| self.candidates.get(i))
    }

    pub fn winner(&self) -> Option<&Candidate> {
        self.winner.and_then(|i| self.candidates.get(i))
    }

    pub fn previewed(&self) -> Option<&Candidate> {
        self.preview.and_then(|p| self.candidate_at(p.side))
    }

    fn entry(&self, position: usize) -> Option<&Candidate> {
        self.current_round
            .get(position)
            .and_then(|&i| self.candidates.get(i))
    }

    fn expect_phase(&self, expected: Phase) -> TournamentResult<()> {
        if self.phase != expected {
            return Err(TournamentError::InvalidPhase {
                expected,
                actual: self.phase,
            });
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------

    /// Start a bracket from picked files
    pub fn load_files(&mut self, files: &[ImageFile]) -> TournamentResult<()> {
        let candidates = candidates_from_files(files)?;
        self.start(candidates)
    }

    /// Shuffle `candidates` into the first round and start playing.
    ///
    /// Fewer than two candidates leave the bracket untouched.
    pub fn start(&mut self, candidates: Vec<Candidate>) -> TournamentResult<()> {
        if candidates.len() < MIN_CANDIDATES {
            return Err(TournamentError::NotEnoughCandidates {
                found: candidates.len(),
            });
        }

        self.current_round = (0..candidates.len()).collect();
        self.rng.shuffle(&mut self.current_round);
        self.candidates = candidates;
        self.next_round.clear();
        self.pair_index = 0;
        self.round_number = 1;
        self.phase = Phase::Playing;
        self.pending = None;
        self.bye = None;
        self.winner = None;
        self.preview = None;

        tracing::info!(
            candidates = self.candidates.len(),
            seed = self.rng.seed(),
            "tournament started"
        );
        Ok(())
    }

    /// Pick the winner of the current pair.
    ///
    /// The pick is recorded right away; the host plays the animation and
    /// then calls [`Bracket::settle`].
    pub fn select(&mut self, side: Side) -> TournamentResult<&Candidate> {
        self.expect_phase(Phase::Playing)?;
        if self.pending.is_some() {
            return Err(TournamentError::Busy);
        }

        let position = self.pair_index + side.offset();
        let winner = *self
            .current_round
            .get(position)
            .ok_or_else(|| TournamentError::UnknownCandidate(format!("position {}", position)))?;

        self.preview = None;
        self.pending = Some(side);
        self.next_round.push(winner);

        tracing::debug!(
            round = self.round_number,
            winner = %self.candidates[winner].name,
            "pick recorded"
        );
        Ok(&self.candidates[winner])
    }

    /// Finish the pending pick and move on to the next pair, a bye, the
    /// next round or the final winner.
    pub fn settle(&mut self) -> TournamentResult<Phase> {
        if self.pending.take().is_none() {
            return Err(TournamentError::NothingPending);
        }

        let next = self.pair_index + 2;
        let len = self.current_round.len();

        if next + 1 == len {
            let lucky = self.current_round[next];
            self.bye = Some(lucky);
            self.next_round.push(lucky);
            self.phase = Phase::Bye;
            tracing::info!(
                round = self.round_number,
                candidate = %self.candidates[lucky].name,
                "bye"
            );
        } else if next >= len {
            self.advance_round();
        } else {
            self.pair_index = next;
        }

        Ok(self.phase)
    }

    /// Leave the bye screen
    pub fn advance(&mut self) -> TournamentResult<Phase> {
        self.expect_phase(Phase::Bye)?;
        self.advance_round();
        Ok(self.phase)
    }

    fn advance_round(&mut self) {
        if let [only] = self.next_round.as_slice() {
            let only = *only;
            self.winner = Some(only);
            self.phase = Phase::Winner;
            tracing::info!(winner = %self.candidates[only].name, "tournament finished");
            return;
        }

        let mut round = std::mem::take(&mut self.next_round);
        self.rng.shuffle(&mut round);
        self.current_round = round;
        self.pair_index = 0;
        self.round_number += 1;
        self.bye = None;
        self.phase = Phase::Playing;

        tracing::info!(
            round = self.round_number,
            size = self.current_round.len(),
            "round advanced"
        );
    }

    /// Back to setup, discarding every candidate
    pub fn reset(&mut self) {
        self.candidates.clear();
        self.current_round.clear();
        self.next_round.clear();
        self.pair_index = 0;
        self.round_number = 0;
        self.phase = Phase::Setup;
        self.pending = None;
        self.bye = None;
        self.winner = None;
        self.preview = None;
    }

    // ------------------------------------------------------------------
    // Preview
    // ------------------------------------------------------------------

    pub fn open_preview(&mut self, side: Side) -> TournamentResult<&Candidate> {
        self.expect_phase(Phase::Playing)?;
        if self.pending.is_some() {
            return Err(TournamentError::Busy);
        }
        self.preview = Some(Preview { side });
        self.previewed().ok_or(TournamentError::NoPreview)
    }

    pub fn close_preview(&mut self) {
        self.preview = None;
    }

    /// Rotate the previewed candidate a quarter turn
    pub fn rotate_preview(&mut self) -> TournamentResult<u16> {
        let side = self.preview.ok_or(TournamentError::NoPreview)?.side;
        let id = self
            .candidate_at(side)
            .map(|c| c.id.clone())
            .ok_or(TournamentError::NoPreview)?;
        self.rotate(&id)
    }

    /// Rotate a candidate by id
    pub fn rotate(&mut self, id: &str) -> TournamentResult<u16> {
        self.candidates
            .iter_mut()
            .find(|c| c.id == id)
            .map(Candidate::rotate)
            .ok_or_else(|| TournamentError::UnknownCandidate(id.to_string()))
    }

    /// Pick the previewed candidate
    pub fn confirm_preview(&mut self) -> TournamentResult<&Candidate> {
        let side = self.preview.ok_or(TournamentError::NoPreview)?.side;
        self.select(side)
    }
}

impl Default for Bracket {
    fn default() -> Self {
        Self::new(ShuffleRng::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(n: usize) -> Vec<Candidate> {
        (0..n)
            .map(|i| Candidate::new(i, format!("c{}", i), format!("c{}.png", i)))
            .collect()
    }

    fn started(n: usize, seed: u64) -> Bracket {
        let mut bracket = Bracket::new(ShuffleRng::new(seed));
        bracket.start(pool(n)).unwrap();
        bracket
    }

    /// Play one full round always picking the left card. Returns whether a
    /// bye happened.
    fn play_round(bracket: &mut Bracket) -> bool {
        let round = bracket.round_number();
        let mut saw_bye = false;
        while bracket.round_number() == round && bracket.phase() != Phase::Winner {
            match bracket.phase() {
                Phase::Playing => {
                    bracket.select(Side::Left).unwrap();
                    bracket.settle().unwrap();
                }
                Phase::Bye => {
                    saw_bye = true;
                    bracket.advance().unwrap();
                }
                other => panic!("unexpected phase {:?}", other),
            }
        }
        saw_bye
    }

    #[test]
    fn test_rejects_single_candidate() {
        let mut bracket = Bracket::new(ShuffleRng::new(1));
        let err = bracket.start(pool(1)).unwrap_err();
        assert_eq!(err, TournamentError::NotEnoughCandidates { found: 1 });
        assert_eq!(bracket.phase(), Phase::Setup);
    }

    #[test]
    fn test_two_candidates_is_a_final() {
        let mut bracket = started(2, 3);
        assert_eq!(bracket.round_label(), RoundLabel::Final);

        let picked = bracket.select(Side::Right).unwrap().id.clone();
        assert_eq!(bracket.settle().unwrap(), Phase::Winner);
        assert_eq!(bracket.winner().unwrap().id, picked);
    }

    #[test]
    fn test_round_halves_rounding_up() {
        for n in 2..=17 {
            let mut bracket = started(n, n as u64);
            play_round(&mut bracket);
            let expected = (n + 1) / 2;
            if expected == 1 {
                assert_eq!(bracket.phase(), Phase::Winner);
            } else {
                assert_eq!(bracket.round_size(), expected, "round of {}", n);
            }
        }
    }

    #[test]
    fn test_bye_iff_odd() {
        for n in 2..=12 {
            let mut bracket = started(n, 11);
            let saw_bye = play_round(&mut bracket);
            assert_eq!(saw_bye, n % 2 == 1, "round of {}", n);
        }
    }

    #[test]
    fn test_bye_waits_for_confirmation() {
        let mut bracket = started(3, 5);
        bracket.select(Side::Left).unwrap();
        assert_eq!(bracket.settle().unwrap(), Phase::Bye);
        assert!(bracket.bye_candidate().is_some());
        assert_eq!(bracket.advanced(), 2);

        assert!(matches!(
            bracket.select(Side::Left),
            Err(TournamentError::InvalidPhase { .. })
        ));

        assert_eq!(bracket.advance().unwrap(), Phase::Playing);
        assert_eq!(bracket.round_label(), RoundLabel::Final);
    }

    #[test]
    fn test_always_one_winner() {
        for n in 2..=20 {
            let mut bracket = started(n, 99);
            let mut picks = 0;
            while bracket.phase() != Phase::Winner {
                if bracket.phase() == Phase::Bye {
                    bracket.advance().unwrap();
                    continue;
                }
                let side = if picks % 3 == 0 { Side::Right } else { Side::Left };
                bracket.select(side).unwrap();
                bracket.settle().unwrap();
                picks += 1;
            }
            assert_eq!(picks, n - 1);
            assert!(bracket.winner().is_some());
        }
    }

    #[test]
    fn test_double_click_is_ignored() {
        let mut bracket = started(4, 8);
        bracket.select(Side::Left).unwrap();
        assert_eq!(bracket.select(Side::Right), Err(TournamentError::Busy));
        assert_eq!(bracket.advanced(), 1);

        bracket.settle().unwrap();
        assert_eq!(bracket.settle(), Err(TournamentError::NothingPending));
        assert_eq!(bracket.match_number(), 2);
    }

    #[test]
    fn test_rotation_survives_rounds() {
        let mut bracket = started(4, 21);
        let id = bracket.open_preview(Side::Left).unwrap().id.clone();
        assert_eq!(bracket.rotate_preview().unwrap(), 90);
        assert_eq!(bracket.rotate_preview().unwrap(), 180);

        bracket.confirm_preview().unwrap();
        assert!(bracket.preview().is_none());
        bracket.settle().unwrap();
        bracket.select(Side::Left).unwrap();
        bracket.settle().unwrap();

        let (left, right) = bracket.current_pair().unwrap();
        let rotated = if left.id == id { left } else { right };
        assert_eq!(rotated.id, id);
        assert_eq!(rotated.rotation, 180);
    }

    #[test]
    fn test_preview_requires_open() {
        let mut bracket = started(2, 2);
        assert_eq!(bracket.rotate_preview(), Err(TournamentError::NoPreview));
        assert!(matches!(bracket.confirm_preview(), Err(TournamentError::NoPreview)));
        bracket.open_preview(Side::Right).unwrap();
        bracket.close_preview();
        assert!(bracket.previewed().is_none());
    }

    #[test]
    fn test_reset_discards_candidates() {
        let mut bracket = started(5, 4);
        bracket.reset();
        assert_eq!(bracket.phase(), Phase::Setup);
        assert!(bracket.candidates().is_empty());
        assert!(bracket.current_pair().is_none());
    }

    #[test]
    fn test_same_seed_same_pairs() {
        let a = started(8, 1234);
        let b = started(8, 1234);
        let ids = |br: &Bracket| {
            let (l, r) = br.current_pair().unwrap();
            (l.id.clone(), r.id.clone())
        };
        assert_eq!(ids(&a), ids(&b));
    }

    #[test]
    fn test_load_files() {
        let files = vec![
            ImageFile::new("a.png", "image/png", "a"),
            ImageFile::new("b.txt", "text/plain", "b"),
        ];
        let mut bracket = Bracket::new(ShuffleRng::new(1));
        assert_eq!(
            bracket.load_files(&files),
            Err(TournamentError::NotEnoughCandidates { found: 1 })
        );
        assert_eq!(bracket.phase(), Phase::Setup);
    }

    #[test]
    fn test_round_label_display() {
        assert_eq!(RoundLabel::Final.to_string(), "Final");
        assert_eq!(RoundLabel::RoundOf(16).to_string(), "Round of 16");
    }
}
