//! Rooftop Run - ground runner with a single jump
//!
//! Unlike flap, the jump is guarded: the impulse only fires while grounded,
//! so mashing mid-air is ignored.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::sim::{
    Aabb, Cadence, FrameInput, GameSession, Obstacle, SessionStatus, aabb_overlap, scaled_speed,
};

pub const CANVAS_W: f32 = 480.0;
pub const GROUND_Y: f32 = 500.0;

const PLAYER_X: f32 = 80.0;
const PLAYER_SIZE: f32 = 30.0;
const GRAVITY: f32 = 0.6;
const JUMP_VY: f32 = -12.0;

const OBSTACLE_BASE_SPEED: f32 = 4.0;
const OBSTACLE_EVERY: u32 = 70;
const OBSTACLE_MIN: f32 = 24.0;
const OBSTACLE_MAX: f32 = 40.0;
const PASS_POINTS: u64 = 10;

pub struct Jumper {
    player_y: f32,
    vy: f32,
    grounded: bool,
    obstacles: Vec<Obstacle>,
    cadence: Cadence,
    score: u64,
    status: SessionStatus,
    rng: Pcg32,
}

impl Jumper {
    pub fn new(seed: u64) -> Self {
        Self {
            player_y: GROUND_Y - PLAYER_SIZE,
            vy: 0.0,
            grounded: true,
            obstacles: Vec::new(),
            cadence: Cadence::new(OBSTACLE_EVERY),
            score: 0,
            status: SessionStatus::Playing,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    fn player_rect(&self) -> Aabb {
        Aabb::new(PLAYER_X, self.player_y, PLAYER_SIZE, PLAYER_SIZE)
    }

    fn end(&mut self) {
        self.status = SessionStatus::Ended;
        log::info!("jumper ended at score {}", self.score);
    }
}

impl GameSession for Jumper {
    fn step(&mut self, input: &FrameInput) {
        if self.status == SessionStatus::Ended {
            return;
        }

        // Double-jump guard: the impulse only takes while grounded
        if input.impulse && self.grounded {
            self.vy = JUMP_VY;
            self.grounded = false;
        }
        if !self.grounded {
            self.vy += GRAVITY;
            self.player_y += self.vy;
            if self.player_y >= GROUND_Y - PLAYER_SIZE {
                self.player_y = GROUND_Y - PLAYER_SIZE;
                self.vy = 0.0;
                self.grounded = true;
            }
        }

        for obstacle in &mut self.obstacles {
            obstacle.step();
        }

        if self.cadence.tick() {
            let size = self.rng.random_range(OBSTACLE_MIN..OBSTACLE_MAX);
            let speed = scaled_speed(OBSTACLE_BASE_SPEED, self.score);
            self.obstacles.push(Obstacle::new(
                Aabb::new(CANVAS_W, GROUND_Y - size, size, size),
                Vec2::new(-speed, 0.0),
            ));
        }

        self.obstacles.retain(|o| !o.off_screen(CANVAS_W, GROUND_Y));

        let player = self.player_rect();
        if self
            .obstacles
            .iter()
            .any(|o| aabb_overlap(&player, &o.rect))
        {
            self.end();
            return;
        }

        for obstacle in &mut self.obstacles {
            if !obstacle.passed && obstacle.rect.right() < PLAYER_X {
                obstacle.passed = true;
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
