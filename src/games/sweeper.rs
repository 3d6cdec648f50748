//! Mine Grid - reveal every safe cell on a 5x5 minefield
//!
//! Each cell rolls a 20% mine chance at session start. Safe reveals score;
//! the last safe reveal wins; a mine ends the run.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::sim::{FrameInput, GameSession, SessionStatus};

pub const GRID: usize = 5;
pub const CELLS: usize = GRID * GRID;

const MINE_CHANCE: f64 = 0.2;
const CELL_POINTS: u64 = 10;

#[derive(Debug, Clone, Copy)]
pub struct Cell {
    pub mine: bool,
    pub revealed: bool,
}

pub struct Sweeper {
    cells: Vec<Cell>,
    safe_remaining: usize,
    score: u64,
    status: SessionStatus,
}

impl Sweeper {
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let cells: Vec<Cell> = (0..CELLS)
            .map(|_| Cell {
                mine: rng.random_bool(MINE_CHANCE),
                revealed: false,
            })
            .collect();
        let safe_remaining = cells.iter().filter(|c| !c.mine).count();
        log::debug!("minefield seeded with {} mines", CELLS - safe_remaining);

        Self {
            cells,
            safe_remaining,
            score: 0,
            status: SessionStatus::Playing,
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    fn end(&mut self) {
        self.status = SessionStatus::Ended;
        log::info!(
            "sweeper ended at score {} ({} safe cells unrevealed)",
            self.score,
            self.safe_remaining
        );
    }
}

impl GameSession for Sweeper {
    fn step(&mut self, input: &FrameInput) {
        if self.status == SessionStatus::Ended {
            return;
        }
        let Some(index) = input.select else { return };
        let Some(cell) = self.cells.get_mut(index) else {
            return;
        };
        if cell.revealed {
            return; // already open: silently ignored
        }

        cell.revealed = true;
        if cell.mine {
            self.end();
            return;
        }

        self.score += CELL_POINTS;
        self.safe_remaining -= 1;
        if self.safe_remaining == 0 {
            self.end(); // every safe cell open: the board is beaten
        }
    }

    fn status(&self) -> SessionStatus {
        self.status
    }

    fn score(&self) -> u64 {
        self.score
    }
}
