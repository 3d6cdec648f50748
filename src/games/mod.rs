//! The ten mini-games
//!
//! Each module owns one game's entities and collision policy behind the
//! shared [`GameSession`] interface. The engine never looks inside a
//! variant; it launches by [`GameId`] and steps frames.

pub mod breaker;
pub mod clicker;
pub mod dodge;
pub mod flap;
pub mod jumper;
pub mod lanes;
pub mod memory;
pub mod snake;
pub mod sweeper;
pub mod tictactoe;

use serde::{Deserialize, Serialize};

use crate::sim::GameSession;

/// Every game in the arcade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameId {
    Dodger,
    Snake,
    Breaker,
    TicTacToe,
    LaneRunner,
    Clicker,
    Flap,
    Sweeper,
    Jumper,
    Memory,
}

impl GameId {
    pub const ALL: [GameId; 10] = [
        GameId::Dodger,
        GameId::Snake,
        GameId::Breaker,
        GameId::TicTacToe,
        GameId::LaneRunner,
        GameId::Clicker,
        GameId::Flap,
        GameId::Sweeper,
        GameId::Jumper,
        GameId::Memory,
    ];

    /// Display title
    pub fn title(self) -> &'static str {
        match self {
            GameId::Dodger => "Cosmic Dodger",
            GameId::Snake => "Neon Snake",
            GameId::Breaker => "Block Buster",
            GameId::TicTacToe => "Tic-Tac-Toe",
            GameId::LaneRunner => "Lane Surge",
            GameId::Clicker => "Click Rush",
            GameId::Flap => "Neon Flap",
            GameId::Sweeper => "Mine Grid",
            GameId::Jumper => "Rooftop Run",
            GameId::Memory => "Glyph Match",
        }
    }

    /// Entry fee charged before a session is created
    pub fn entry_cost(self) -> u64 {
        match self {
            GameId::Dodger => 10,
            GameId::Snake => 5,
            GameId::Breaker => 15,
            GameId::TicTacToe => 5,
            GameId::LaneRunner => 10,
            GameId::Clicker => 5,
            GameId::Flap => 10,
            GameId::Sweeper => 10,
            GameId::Jumper => 10,
            GameId::Memory => 10,
        }
    }

    /// Construct a fresh session for this game
    pub fn new_session(self, seed: u64) -> Box<dyn GameSession> {
        match self {
            GameId::Dodger => Box::new(dodge::Dodge::new(seed)),
            GameId::Snake => Box::new(snake::Snake::new(seed)),
            GameId::Breaker => Box::new(breaker::Breaker::new(seed)),
            GameId::TicTacToe => Box::new(tictactoe::TicTacToe::new(seed)),
            GameId::LaneRunner => Box::new(lanes::LaneRunner::new(seed)),
            GameId::Clicker => Box::new(clicker::Clicker::new(seed)),
            GameId::Flap => Box::new(flap::Flap::new(seed)),
            GameId::Sweeper => Box::new(sweeper::Sweeper::new(seed)),
            GameId::Jumper => Box::new(jumper::Jumper::new(seed)),
            GameId::Memory => Box::new(memory::Memory::new(seed)),
        }
    }
}

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{FrameInput, SessionStatus};

    #[test]
    fn test_every_game_starts_playing() {
        for game in GameId::ALL {
            let session = game.new_session(7);
            assert_eq!(session.status(), SessionStatus::Playing, "{game}");
            assert_eq!(session.score(), 0, "{game}");
        }
    }

    #[test]
    fn test_every_game_survives_idle_frames() {
        // Idle input must never panic, and score only ever moves up
        let input = FrameInput::default();
        for game in GameId::ALL {
            let mut session = game.new_session(99);
            let mut last_score = 0;
            for _ in 0..300 {
                session.step(&input);
                assert!(session.score() >= last_score, "{game}");
                last_score = session.score();
            }
        }
    }
}
