//! Neon Flap - thread the pipe gaps
//!
//! Every flap re-applies the upward kick - there is deliberately no
//! airborne guard, mashing is the skill. Leaving the canvas vertically or
//! touching a pipe is terminal.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::sim::{Aabb, Cadence, FrameInput, GameSession, SessionStatus, aabb_overlap};

pub const CANVAS_W: f32 = 480.0;
pub const CANVAS_H: f32 = 600.0;

const GRAVITY: f32 = 0.5;
const FLAP_VY: f32 = -8.0;
const BIRD_X: f32 = 100.0;
const BIRD_SIZE: f32 = 24.0;

const PIPE_W: f32 = 60.0;
const PIPE_GAP: f32 = 150.0;
const PIPE_SPEED: f32 = 3.0;
const PIPE_EVERY: u32 = 90;
const PIPE_MARGIN: f32 = 40.0;
const PASS_POINTS: u64 = 10;

/// One pipe column: a gap between a top and a bottom segment
#[derive(Debug, Clone)]
pub struct PipePair {
    pub x: f32,
    pub top_h: f32,
    passed: bool,
}

impl PipePair {
    fn top_rect(&self) -> Aabb {
        Aabb::new(self.x, 0.0, PIPE_W, self.top_h)
    }

    fn bottom_rect(&self) -> Aabb {
        let y = self.top_h + PIPE_GAP;
        Aabb::new(self.x, y, PIPE_W, CANVAS_H - y)
    }
}

pub struct Flap {
    bird_y: f32,
    bird_vy: f32,
    pipes: Vec<PipePair>,
    cadence: Cadence,
    score: u64,
    status: SessionStatus,
    rng: Pcg32,
}

impl Flap {
    pub fn new(seed: u64) -> Self {
        Self {
            bird_y: CANVAS_H / 2.0,
            bird_vy: 0.0,
            pipes: Vec::new(),
            cadence: Cadence::new(PIPE_EVERY),
            score: 0,
            status: SessionStatus::Playing,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    fn bird_rect(&self) -> Aabb {
        Aabb::new(BIRD_X, self.bird_y, BIRD_SIZE, BIRD_SIZE)
    }

    fn end(&mut self) {
        self.status = SessionStatus::Ended;
        log::info!("flap ended at score {}", self.score);
    }
}

impl GameSession for Flap {
    fn step(&mut self, input: &FrameInput) {
        if self.status == SessionStatus::Ended {
            return;
        }

        if input.impulse {
            self.bird_vy = FLAP_VY;
        }
        self.bird_vy += GRAVITY;
        self.bird_y += self.bird_vy;

        for pipe in &mut self.pipes {
            pipe.x -= PIPE_SPEED;
        }

        if self.cadence.tick() {
            let top_h = self
                .rng
                .random_range(PIPE_MARGIN..CANVAS_H - PIPE_GAP - PIPE_MARGIN);
            self.pipes.push(PipePair {
                x: CANVAS_W,
                top_h,
                passed: false,
            });
        }

        self.pipes.retain(|p| p.x + PIPE_W >= 0.0);

        // Terminal checks before the pass bonus
        let bird = self.bird_rect();
        if self.bird_y < 0.0 || self.bird_y + BIRD_SIZE > CANVAS_H {
            self.end();
            return;
        }
        if self
            .pipes
            .iter()
            .any(|p| aabb_overlap(&bird, &p.top_rect()) || aabb_overlap(&bird, &p.bottom_rect()))
        {
            self.end();
            return;
        }

        for pipe in &mut self.pipes {
            if !pipe.passed && pipe.x + PIPE_W < BIRD_X {
                pipe.passed = true;
                self.score += PASS_POINTS;
            }
        }
    }

    fn status(&self) -> SessionStatus {
        self.status
    }

    fn score(&self) -> u64 {
        self.score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flap_input() -> FrameInput {
        FrameInput {
            impulse: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_gravity_pulls_down_flap_kicks_up() {
        let mut game = Flap::new(6);
        let start = game.bird_y;
        game.step(&FrameInput::default());
        assert!(game.bird_y > start, "falling");

        game.step(&flap_input());
        assert_eq!(game.bird_vy, FLAP_VY + GRAVITY);
        assert!(game.bird_vy < 0.0, "rising");
    }

    #[test]
    fn test_flap_has_no_airborne_guard() {
        let mut game = Flap::new(6);
        game.bird_vy = -3.0; // already rising
        game.step(&flap_input());
        // The kick re-applied regardless
        assert_eq!(game.bird_vy, FLAP_VY + GRAVITY);
    }

    #[test]
    fn test_floor_exit_terminal() {
        let mut game = Flap::new(6);
        game.bird_y = CANVAS_H - BIRD_SIZE;
        game.bird_vy = 5.0;
        game.step(&FrameInput::default());
        assert_eq!(game.status(), SessionStatus::Ended);
    }

    #[test]
    fn test_pipe_contact_terminal() {
        let mut game = Flap::new(6);
        game.pipes.push(PipePair {
            x: BIRD_X,
            top_h: CANVAS_H / 2.0 + 50.0, // top segment reaches the bird
            passed: false,
        });
        game.step(&FrameInput::default());
        assert_eq!(game.status(), SessionStatus::Ended);
    }

    #[test]
    fn test_pass_scores_once() {
        let mut game = Flap::new(6);
        // Keep the bird comfortably inside the gap while the pipe slides by
        game.bird_y = 300.0;
        game.bird_vy = 0.0;
        game.pipes.push(PipePair {
            x: BIRD_X - PIPE_W - 1.0,
            top_h: 200.0,
            passed: false,
        });
        game.step(&flap_input());
        assert_eq!(game.score(), PASS_POINTS);
        game.bird_vy = 0.0;
        game.step(&flap_input());
        assert_eq!(game.score(), PASS_POINTS, "credited once");
    }
}
