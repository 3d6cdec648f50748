//! Click Rush - tap the drifting target before the clock runs out
//!
//! Ten seconds on the clock. Every hit relocates the target; the expiry
//! frame is the natural end of the session, not a loss.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::sim::{Aabb, FrameInput, GameSession, SessionStatus};

pub const CANVAS_W: f32 = 480.0;
pub const CANVAS_H: f32 = 600.0;

const DURATION_FRAMES: u32 = 600;
const TARGET_SIZE: f32 = 60.0;
const HIT_POINTS: u64 = 10;

pub struct Clicker {
    target: Aabb,
    frames_left: u32,
    score: u64,
    status: SessionStatus,
    rng: Pcg32,
}

impl Clicker {
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let target = Self::random_target(&mut rng);
        Self {
            target,
            frames_left: DURATION_FRAMES,
            score: 0,
            status: SessionStatus::Playing,
            rng,
        }
    }

    pub fn target(&self) -> Aabb {
        self.target
    }

    pub fn frames_left(&self) -> u32 {
        self.frames_left
    }

    fn random_target(rng: &mut Pcg32) -> Aabb {
        Aabb::new(
            rng.random_range(0.0..CANVAS_W - TARGET_SIZE),
            rng.random_range(0.0..CANVAS_H - TARGET_SIZE),
            TARGET_SIZE,
            TARGET_SIZE,
        )
    }

    fn end(&mut self) {
        self.status = SessionStatus::Ended;
        log::info!("clicker ended at score {}", self.score);
    }
}

impl GameSession for Clicker {
    fn step(&mut self, input: &FrameInput) {
        if self.status == SessionStatus::Ended {
            return;
        }

        // The clock outranks a tap landing on the expiry frame
        self.frames_left -= 1;
        if self.frames_left == 0 {
            self.end();
            return;
        }

        if let Some(tap) = input.pointer {
            if self.target.contains(tap) {
                self.score += HIT_POINTS;
                self.target = Self::random_target(&mut self.rng);
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
    use glam::Vec2;

    fn tap(pos: Vec2) -> FrameInput {
        FrameInput {
            pointer: Some(pos),
            ..Default::default()
        }
    }

    #[test]
    fn test_hit_scores_and_relocates() {
        let mut game = Clicker::new(11);
        let before = game.target();
        game.step(&tap(before.center()));
        assert_eq!(game.score(), HIT_POINTS);
        assert_ne!(game.target(), before);
    }

    #[test]
    fn test_miss_scores_nothing() {
        let mut game = Clicker::new(11);
        let target = game.target();
        let miss = Vec2::new(
            if target.x > CANVAS_W / 2.0 { 1.0 } else { CANVAS_W - 1.0 },
            if target.y > CANVAS_H / 2.0 { 1.0 } else { CANVAS_H - 1.0 },
        );
        game.step(&tap(miss));
        assert_eq!(game.score(), 0);
        assert_eq!(game.target(), target);
    }

    #[test]
    fn test_timer_expiry_ends_naturally() {
        let mut game = Clicker::new(11);
        for _ in 0..DURATION_FRAMES {
            game.step(&FrameInput::default());
        }
        assert_eq!(game.status(), SessionStatus::Ended);
    }

    #[test]
    fn test_tap_on_expiry_frame_not_credited() {
        let mut game = Clicker::new(11);
        for _ in 0..DURATION_FRAMES - 1 {
            game.step(&FrameInput::default());
        }
        let target = game.target();
        game.step(&tap(target.center()));
        assert_eq!(game.status(), SessionStatus::Ended);
        assert_eq!(game.score(), 0);
    }
}
