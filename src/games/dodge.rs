//! Cosmic Dodger - slide along the bottom, dodge meteors, grab energy orbs

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::sim::{
    Aabb, Cadence, Collectible, FrameInput, GameSession, Obstacle, SessionStatus, aabb_overlap,
    circle_rect_overlap, scaled_speed,
};

pub const CANVAS_W: f32 = 480.0;
pub const CANVAS_H: f32 = 600.0;

const PLAYER_SIZE: f32 = 30.0;
const PLAYER_SPEED: f32 = 5.0;
const OBSTACLE_SIZE: f32 = 30.0;
const OBSTACLE_BASE_SPEED: f32 = 3.0;
const OBSTACLE_EVERY: u32 = 40;
const ORB_RADIUS: f32 = 10.0;
const ORB_SPEED: f32 = 4.0;
const ORB_EVERY: u32 = 100;
const ORB_POINTS: u64 = 10;

pub struct Dodge {
    player: Aabb,
    obstacles: Vec<Obstacle>,
    orbs: Vec<Collectible>,
    obstacle_cadence: Cadence,
    orb_cadence: Cadence,
    score: u64,
    status: SessionStatus,
    rng: Pcg32,
}

impl Dodge {
    pub fn new(seed: u64) -> Self {
        Self {
            player: Aabb::new(
                CANVAS_W / 2.0 - PLAYER_SIZE / 2.0,
                CANVAS_H - 50.0,
                PLAYER_SIZE,
                PLAYER_SIZE,
            ),
            obstacles: Vec::new(),
            orbs: Vec::new(),
            obstacle_cadence: Cadence::new(OBSTACLE_EVERY),
            orb_cadence: Cadence::new(ORB_EVERY),
            score: 0,
            status: SessionStatus::Playing,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    fn end(&mut self) {
        self.status = SessionStatus::Ended;
        log::info!("dodger ended at score {}", self.score);
    }
}

impl GameSession for Dodge {
    fn step(&mut self, input: &FrameInput) {
        if self.status == SessionStatus::Ended {
            return;
        }

        // Steer, clamped to the canvas
        if input.left {
            self.player.x = (self.player.x - PLAYER_SPEED).max(0.0);
        }
        if input.right {
            self.player.x = (self.player.x + PLAYER_SPEED).min(CANVAS_W - PLAYER_SIZE);
        }

        for obstacle in &mut self.obstacles {
            obstacle.step();
        }
        for orb in &mut self.orbs {
            orb.step();
        }

        if self.obstacle_cadence.tick() {
            let x = self.rng.random_range(0.0..CANVAS_W - OBSTACLE_SIZE);
            let speed = scaled_speed(OBSTACLE_BASE_SPEED, self.score);
            self.obstacles.push(Obstacle::new(
                Aabb::new(x, -OBSTACLE_SIZE, OBSTACLE_SIZE, OBSTACLE_SIZE),
                Vec2::new(0.0, speed),
            ));
        }
        if self.orb_cadence.tick() {
            let x = self.rng.random_range(ORB_RADIUS..CANVAS_W - ORB_RADIUS);
            self.orbs.push(Collectible::new(
                Vec2::new(x, -ORB_RADIUS),
                ORB_RADIUS,
                ORB_POINTS,
                ORB_SPEED,
            ));
        }

        // Despawn before any collision test
        self.obstacles.retain(|o| !o.off_screen(CANVAS_W, CANVAS_H));
        self.orbs.retain(|o| !o.off_screen(CANVAS_H));

        // Terminal check first; a frame that both hits and collects ends
        // without crediting the pickup
        if self
            .obstacles
            .iter()
            .any(|o| aabb_overlap(&self.player, &o.rect))
        {
            self.end();
            return;
        }

        let player = self.player;
        let mut gained = 0;
        self.orbs.retain(|orb| {
            if circle_rect_overlap(orb.pos, orb.radius, &player) {
                gained += orb.value;
                false
            } else {
                true
            }
        });
        self.score += gained;
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

    fn idle() -> FrameInput {
        FrameInput::default()
    }

    #[test]
    fn test_spawns_on_cadence() {
        let mut game = Dodge::new(1);
        for _ in 0..OBSTACLE_EVERY {
            game.step(&idle());
        }
        assert_eq!(game.obstacles.len(), 1);
        for _ in 0..(ORB_EVERY - OBSTACLE_EVERY) {
            game.step(&idle());
        }
        assert_eq!(game.orbs.len(), 1);
    }

    #[test]
    fn test_player_clamped_to_canvas() {
        let mut game = Dodge::new(1);
        let left = FrameInput {
            left: true,
            ..Default::default()
        };
        for _ in 0..500 {
            game.step(&left);
        }
        assert!(game.player.x >= 0.0);
        assert_eq!(game.player.x, 0.0);
    }

    #[test]
    fn test_obstacle_hit_ends_session() {
        let mut game = Dodge::new(1);
        game.obstacles.push(Obstacle::new(
            Aabb::new(game.player.x, game.player.y - 1.0, 30.0, 30.0),
            Vec2::new(0.0, 1.0),
        ));
        game.step(&idle());
        assert_eq!(game.status(), SessionStatus::Ended);
    }

    #[test]
    fn test_orb_pickup_scores_and_consumes() {
        let mut game = Dodge::new(1);
        let center = game.player.center();
        game.orbs
            .push(Collectible::new(center, ORB_RADIUS, ORB_POINTS, 0.0));
        game.step(&idle());
        assert_eq!(game.score(), ORB_POINTS);
        assert!(game.orbs.is_empty());
        assert_eq!(game.status(), SessionStatus::Playing);
    }

    #[test]
    fn test_terminal_beats_simultaneous_pickup() {
        let mut game = Dodge::new(1);
        // Orb on the player AND an obstacle on the player: terminal wins
        game.orbs
            .push(Collectible::new(game.player.center(), ORB_RADIUS, ORB_POINTS, 0.0));
        game.obstacles.push(Obstacle::new(
            Aabb::new(game.player.x, game.player.y, 30.0, 30.0),
            Vec2::ZERO,
        ));
        game.step(&idle());
        assert_eq!(game.status(), SessionStatus::Ended);
        assert_eq!(game.score(), 0);
    }
}
