//! Block Buster - brick breaker on a 480x320 field
//!
//! The floor check runs before brick scoring: on a frame where the ball
//! would both miss the paddle and clip a brick, the session ends without
//! crediting the brick.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::sim::{Aabb, FrameInput, GameSession, SessionStatus, circle_rect_overlap};

pub const CANVAS_W: f32 = 480.0;
pub const CANVAS_H: f32 = 320.0;

const BRICK_COLS: usize = 8;
const BRICK_ROWS: usize = 5;
const BRICK_H: f32 = 16.0;
const BRICK_TOP: f32 = 40.0;
const BRICK_GAP: f32 = 4.0;
const BRICK_POINTS: u64 = 20;

const BALL_RADIUS: f32 = 8.0;
const BALL_SPEED: f32 = 4.0;

const PADDLE_W: f32 = 100.0;
const PADDLE_H: f32 = 10.0;
const PADDLE_SPEED: f32 = 7.0;

pub struct Breaker {
    ball_pos: Vec2,
    ball_vel: Vec2,
    paddle: Aabb,
    bricks: Vec<Aabb>,
    score: u64,
    status: SessionStatus,
}

impl Breaker {
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        // Serve direction alternates by seed; everything else is fixed
        let vx = if rng.random_bool(0.5) {
            BALL_SPEED
        } else {
            -BALL_SPEED
        };

        let mut bricks = Vec::with_capacity(BRICK_COLS * BRICK_ROWS);
        let slot_w = CANVAS_W / BRICK_COLS as f32;
        for col in 0..BRICK_COLS {
            for row in 0..BRICK_ROWS {
                bricks.push(Aabb::new(
                    col as f32 * slot_w,
                    row as f32 * (BRICK_H + BRICK_GAP) + BRICK_TOP,
                    slot_w - BRICK_GAP,
                    BRICK_H,
                ));
            }
        }

        Self {
            ball_pos: Vec2::new(CANVAS_W / 2.0, CANVAS_H - 30.0),
            ball_vel: Vec2::new(vx, -BALL_SPEED),
            paddle: Aabb::new(
                CANVAS_W / 2.0 - PADDLE_W / 2.0,
                CANVAS_H - PADDLE_H,
                PADDLE_W,
                PADDLE_H,
            ),
            bricks,
            score: 0,
            status: SessionStatus::Playing,
        }
    }

    pub fn bricks_left(&self) -> usize {
        self.bricks.len()
    }

    fn end(&mut self) {
        self.status = SessionStatus::Ended;
        log::info!(
            "breaker ended at score {} ({} bricks left)",
            self.score,
            self.bricks.len()
        );
    }
}

impl GameSession for Breaker {
    fn step(&mut self, input: &FrameInput) {
        if self.status == SessionStatus::Ended {
            return;
        }

        if input.right {
            self.paddle.x = (self.paddle.x + PADDLE_SPEED).min(CANVAS_W - PADDLE_W);
        }
        if input.left {
            self.paddle.x = (self.paddle.x - PADDLE_SPEED).max(0.0);
        }

        // Wall bounces use the look-ahead position
        let next = self.ball_pos + self.ball_vel;
        if next.x > CANVAS_W - BALL_RADIUS || next.x < BALL_RADIUS {
            self.ball_vel.x = -self.ball_vel.x;
        }
        if next.y < BALL_RADIUS {
            self.ball_vel.y = -self.ball_vel.y;
        } else if next.y > CANVAS_H - BALL_RADIUS {
            // Floor: paddle saves, otherwise terminal - and terminal is
            // decided before any brick is credited this frame
            if self.ball_pos.x > self.paddle.x && self.ball_pos.x < self.paddle.right() {
                self.ball_vel.y = -self.ball_vel.y;
            } else {
                self.end();
                return;
            }
        }

        // One brick per frame
        if let Some(hit) = self
            .bricks
            .iter()
            .position(|b| circle_rect_overlap(self.ball_pos, BALL_RADIUS, b))
        {
            self.bricks.remove(hit);
            self.ball_vel.y = -self.ball_vel.y;
            self.score += BRICK_POINTS;
        }

        self.ball_pos += self.ball_vel;

        if self.bricks.is_empty() {
            // Field cleared: the session ends as a win with the current score
            self.end();
        }
    }

    fn status(&self) -> SessionStatus {
        self.status
    }

    fn score(&self) -> u64 {
        self.score
    }
}
