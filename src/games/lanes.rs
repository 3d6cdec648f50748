//! Lane Surge - three-lane traffic dodger
//!
//! The player snaps between lanes; traffic rushes down and scores a pass
//! bonus once it clears the player row untouched.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::sim::{Cadence, FrameInput, GameSession, SessionStatus, scaled_speed};

pub const LANES: usize = 3;
pub const CANVAS_H: f32 = 600.0;

const PLAYER_Y: f32 = 540.0;
const PLAYER_H: f32 = 30.0;
const OBSTACLE_H: f32 = 30.0;
const OBSTACLE_BASE_SPEED: f32 = 4.0;
const OBSTACLE_EVERY: u32 = 50;
const PASS_POINTS: u64 = 10;

#[derive(Debug, Clone)]
struct LaneObstacle {
    lane: usize,
    y: f32,
    speed: f32,
    passed: bool,
}

pub struct LaneRunner {
    lane: usize,
    obstacles: Vec<LaneObstacle>,
    cadence: Cadence,
    score: u64,
    status: SessionStatus,
    rng: Pcg32,
}

impl LaneRunner {
    pub fn new(seed: u64) -> Self {
        Self {
            lane: LANES / 2,
            obstacles: Vec::new(),
            cadence: Cadence::new(OBSTACLE_EVERY),
            score: 0,
            status: SessionStatus::Playing,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn lane(&self) -> usize {
        self.lane
    }

    fn end(&mut self) {
        self.status = SessionStatus::Ended;
        log::info!("lane runner ended at score {}", self.score);
    }
}

impl GameSession for LaneRunner {
    fn step(&mut self, input: &FrameInput) {
        if self.status == SessionStatus::Ended {
            return;
        }

        // Discrete lane change, clamped to [0, LANES)
        if input.lane_shift != 0 {
            let target = self.lane as i32 + input.lane_shift as i32;
            self.lane = target.clamp(0, LANES as i32 - 1) as usize;
        }

        for obstacle in &mut self.obstacles {
            obstacle.y += obstacle.speed;
        }

        if self.cadence.tick() {
            let lane = self.rng.random_range(0..LANES);
            self.obstacles.push(LaneObstacle {
                lane,
                y: -OBSTACLE_H,
                speed: scaled_speed(OBSTACLE_BASE_SPEED, self.score),
                passed: false,
            });
        }

        self.obstacles.retain(|o| o.y <= CANVAS_H);

        // Contact in the player's lane is terminal and outranks the pass
        // bonus an obstacle might earn on the same frame
        let lane = self.lane;
        if self
            .obstacles
            .iter()
            .any(|o| o.lane == lane && o.y < PLAYER_Y + PLAYER_H && o.y + OBSTACLE_H > PLAYER_Y)
        {
            self.end();
            return;
        }

        for obstacle in &mut self.obstacles {
            if !obstacle.passed && obstacle.y > PLAYER_Y + PLAYER_H {
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

#[cfg(test)]
mod tests {
    use super::*;

    fn shift(dir: i8) -> FrameInput {
        FrameInput {
            lane_shift: dir,
            ..Default::default()
        }
    }

    #[test]
    fn test_lane_shift_clamped() {
        let mut game = LaneRunner::new(2);
        assert_eq!(game.lane(), 1);
        game.step(&shift(-1));
        assert_eq!(game.lane(), 0);
        game.step(&shift(-1));
        assert_eq!(game.lane(), 0, "cannot leave the road");
        game.step(&shift(1));
        game.step(&shift(1));
        game.step(&shift(1));
        assert_eq!(game.lane(), LANES - 1);
    }

    #[test]
    fn test_same_lane_contact_terminal() {
        let mut game = LaneRunner::new(2);
        game.obstacles.push(LaneObstacle {
            lane: game.lane(),
            y: PLAYER_Y - OBSTACLE_H - 1.0,
            speed: 2.0,
            passed: false,
        });
        game.step(&FrameInput::default());
        assert_eq!(game.status(), SessionStatus::Ended);
    }

    #[test]
    fn test_other_lane_traffic_is_harmless_and_scores_a_pass() {
        let mut game = LaneRunner::new(2);
        game.obstacles.push(LaneObstacle {
            lane: 0,
            y: PLAYER_Y,
            speed: 5.0,
            passed: false,
        });
        game.step(&shift(1)); // move to lane 2, away from the hazard

        let mut steps = 0;
        while game.score() == 0 && steps < 100 {
            game.step(&FrameInput::default());
            steps += 1;
        }
        assert_eq!(game.status(), SessionStatus::Playing);
        assert_eq!(game.score(), PASS_POINTS);
    }

    #[test]
    fn test_pass_credited_once() {
        let mut game = LaneRunner::new(2);
        game.obstacles.push(LaneObstacle {
            lane: 0,
            y: PLAYER_Y + PLAYER_H + 1.0,
            speed: 1.0,
            passed: false,
        });
        game.step(&FrameInput::default());
        game.step(&FrameInput::default());
        assert_eq!(game.score(), PASS_POINTS);
    }
}
