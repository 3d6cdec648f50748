//! Glyph Match - pair up sixteen face-down cards
//!
//! Two cards may be face-up at once. A mismatch stays visible for a short
//! beat before flipping back; selections during that beat are ignored. The
//! hide delay is a frame counter owned by the session, so tearing the
//! session down cancels it with nothing left to fire.

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_pcg::Pcg32;

use crate::sim::{FrameInput, GameSession, SessionStatus};

pub const PAIRS: usize = 8;
pub const CARDS: usize = PAIRS * 2;

const MATCH_POINTS: u64 = 25;
const HIDE_DELAY_FRAMES: u32 = 45;

/// Score of a fully matched board; the reward bridge keys on it
pub const COMPLETE_SCORE: u64 = PAIRS as u64 * MATCH_POINTS;

#[derive(Debug, Clone, Copy)]
pub struct Card {
    pub icon: u8,
    pub revealed: bool,
    pub matched: bool,
}

pub struct Memory {
    cards: Vec<Card>,
    /// Indices currently face-up and unmatched (0..=2)
    face_up: Vec<usize>,
    /// Frames until a mismatched pair flips back
    hide_timer: Option<u32>,
    matched_pairs: usize,
    score: u64,
    status: SessionStatus,
}

impl Memory {
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut icons: Vec<u8> = (0..PAIRS as u8).flat_map(|i| [i, i]).collect();
        icons.shuffle(&mut rng);

        Self {
            cards: icons
                .into_iter()
                .map(|icon| Card {
                    icon,
                    revealed: false,
                    matched: false,
                })
                .collect(),
            face_up: Vec::new(),
            hide_timer: None,
            matched_pairs: 0,
            score: 0,
            status: SessionStatus::Playing,
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    fn end(&mut self) {
        self.status = SessionStatus::Ended;
        log::info!(
            "memory ended at score {} ({matched}/{PAIRS} pairs)",
            self.score,
            matched = self.matched_pairs
        );
    }
}

impl GameSession for Memory {
    fn step(&mut self, input: &FrameInput) {
        if self.status == SessionStatus::Ended {
            return;
        }

        // A pending mismatch blocks input until it flips back
        if let Some(frames) = self.hide_timer {
            if frames > 1 {
                self.hide_timer = Some(frames - 1);
            } else {
                for index in self.face_up.drain(..) {
                    self.cards[index].revealed = false;
                }
                self.hide_timer = None;
            }
            return;
        }

        let Some(index) = input.select else { return };
        let Some(card) = self.cards.get(index) else {
            return;
        };
        if card.revealed || card.matched {
            return; // already open or locked: silently ignored
        }

        self.cards[index].revealed = true;
        self.face_up.push(index);
        if self.face_up.len() < 2 {
            return;
        }

        let (first, second) = (self.face_up[0], self.face_up[1]);
        if self.cards[first].icon == self.cards[second].icon {
            self.cards[first].matched = true;
            self.cards[second].matched = true;
            self.face_up.clear();
            self.matched_pairs += 1;
            self.score += MATCH_POINTS;
            if self.matched_pairs == PAIRS {
                self.end();
            }
        } else {
            self.hide_timer = Some(HIDE_DELAY_FRAMES);
        }
    }

    fn status(&self) -> SessionStatus {
        self.status
    }

    fn score(&self) -> u64 {
        self.score
    }
}
