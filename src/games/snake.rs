//! Neon Snake - classic snake on a 30x20 grid
//!
//! The snake sits still until the first direction key. One grid step every
//! six engine frames; a queued turn that directly reverses the current
//! heading is dropped.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::sim::{Cadence, FrameInput, GameSession, GridDir, SessionStatus};

pub const GRID_W: i32 = 30;
pub const GRID_H: i32 = 20;

const STEP_EVERY: u32 = 6;
const FOOD_POINTS: u64 = 50;

pub struct Snake {
    /// Body cells, head first
    body: Vec<(i32, i32)>,
    heading: Option<GridDir>,
    /// At most one queued turn between grid steps; last writer wins
    pending: Option<GridDir>,
    food: (i32, i32),
    step_cadence: Cadence,
    score: u64,
    status: SessionStatus,
    rng: Pcg32,
}

impl Snake {
    pub fn new(seed: u64) -> Self {
        Self {
            body: vec![(10, 10)],
            heading: None,
            pending: None,
            food: (15, 15),
            step_cadence: Cadence::new(STEP_EVERY),
            score: 0,
            status: SessionStatus::Playing,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn body(&self) -> &[(i32, i32)] {
        &self.body
    }

    pub fn food(&self) -> (i32, i32) {
        self.food
    }

    fn spawn_food(&mut self) {
        loop {
            let cell = (
                self.rng.random_range(0..GRID_W),
                self.rng.random_range(0..GRID_H),
            );
            if !self.body.contains(&cell) {
                self.food = cell;
                return;
            }
        }
    }

    fn end(&mut self) {
        self.status = SessionStatus::Ended;
        log::info!("snake ended at score {} (length {})", self.score, self.body.len());
    }

    fn grid_step(&mut self) {
        if let Some(turn) = self.pending.take() {
            self.heading = Some(turn);
        }
        let Some(heading) = self.heading else {
            return; // still waiting for the first input
        };

        let (dx, dy) = heading.delta();
        let head = self.body[0];
        let new_head = (head.0 + dx, head.1 + dy);

        let out_of_bounds = new_head.0 < 0
            || new_head.0 >= GRID_W
            || new_head.1 < 0
            || new_head.1 >= GRID_H;
        if out_of_bounds || self.body.contains(&new_head) {
            self.end();
            return;
        }

        self.body.insert(0, new_head);
        if new_head == self.food {
            self.score += FOOD_POINTS;
            self.spawn_food();
        } else {
            self.body.pop();
        }
    }
}

impl GameSession for Snake {
    fn step(&mut self, input: &FrameInput) {
        if self.status == SessionStatus::Ended {
            return;
        }

        // Queue the turn unless it reverses the current heading
        if let Some(turn) = input.turn {
            let reverses = self.heading.is_some_and(|h| turn.is_reverse_of(h));
            if !reverses {
                self.pending = Some(turn);
            }
        }

        if self.step_cadence.tick() {
            self.grid_step();
        }
    }

    fn status(&self) -> SessionStatus {
        self.status
    }

    fn score(&self) -> u64 {
        self.score
    }
}
