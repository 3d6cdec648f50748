//! Tic-Tac-Toe against a random-moving AI
//!
//! The player is X. The AI answers on a short delay so its move lands a
//! beat after the player's, like a thinking opponent. The outcome is
//! encoded in the final score: win 100, draw 50, loss 0.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::sim::{FrameInput, GameSession, SessionStatus};

/// Final score for a won board
pub const WIN_SCORE: u64 = 100;
/// Final score for a drawn board
pub const DRAW_SCORE: u64 = 50;

const AI_DELAY_FRAMES: u32 = 30;

const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    X,
    O,
}

pub struct TicTacToe {
    board: [Option<Mark>; 9],
    /// Frames until the AI answers; `Some` blocks player input
    ai_delay: Option<u32>,
    score: u64,
    status: SessionStatus,
    rng: Pcg32,
}

impl TicTacToe {
    pub fn new(seed: u64) -> Self {
        Self {
            board: [None; 9],
            ai_delay: None,
            score: 0,
            status: SessionStatus::Playing,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn board(&self) -> &[Option<Mark>; 9] {
        &self.board
    }

    fn winner(&self) -> Option<Mark> {
        LINES.iter().find_map(|&[a, b, c]| {
            let mark = self.board[a]?;
            (self.board[b] == Some(mark) && self.board[c] == Some(mark)).then_some(mark)
        })
    }

    fn is_full(&self) -> bool {
        self.board.iter().all(|cell| cell.is_some())
    }

    /// Settle the board if it is decided; returns true once ended
    fn resolve(&mut self) -> bool {
        match self.winner() {
            Some(Mark::X) => self.end(WIN_SCORE),
            Some(Mark::O) => self.end(0),
            None if self.is_full() => self.end(DRAW_SCORE),
            None => return false,
        }
        true
    }

    fn end(&mut self, score: u64) {
        self.score = score;
        self.status = SessionStatus::Ended;
        log::info!("tic-tac-toe ended at score {score}");
    }

    fn ai_move(&mut self) {
        let empty: Vec<usize> = (0..9).filter(|&i| self.board[i].is_none()).collect();
        if let Some(&cell) = empty.get(self.rng.random_range(0..empty.len().max(1))) {
            self.board[cell] = Some(Mark::O);
        }
    }
}

impl GameSession for TicTacToe {
    fn step(&mut self, input: &FrameInput) {
        if self.status == SessionStatus::Ended {
            return;
        }

        if let Some(frames) = self.ai_delay {
            if frames > 1 {
                self.ai_delay = Some(frames - 1);
            } else {
                self.ai_delay = None;
                self.ai_move();
                self.resolve();
            }
            return; // player input is ignored while the AI "thinks"
        }

        let Some(cell) = input.select else { return };
        if cell >= 9 || self.board[cell].is_some() {
            return; // occupied or out of range: silently ignored
        }

        self.board[cell] = Some(Mark::X);
        if !self.resolve() {
            self.ai_delay = Some(AI_DELAY_FRAMES);
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

    fn select(cell: usize) -> FrameInput {
        FrameInput {
            select: Some(cell),
            ..Default::default()
        }
    }

    fn run_ai_delay(game: &mut TicTacToe) {
        for _ in 0..AI_DELAY_FRAMES {
            game.step(&FrameInput::default());
        }
    }

    #[test]
    fn test_player_move_then_delayed_ai_answer() {
        let mut game = TicTacToe::new(9);
        game.step(&select(4));
        assert_eq!(game.board()[4], Some(Mark::X));
        assert_eq!(game.board().iter().flatten().count(), 1);

        run_ai_delay(&mut game);
        assert_eq!(game.board().iter().flatten().count(), 2);
    }

    #[test]
    fn test_occupied_cell_ignored() {
        let mut game = TicTacToe::new(9);
        game.step(&select(0));
        run_ai_delay(&mut game);
        let before = *game.board();
        game.step(&select(0));
        assert_eq!(*game.board(), before);
    }

    #[test]
    fn test_input_ignored_while_ai_pending() {
        let mut game = TicTacToe::new(9);
        game.step(&select(0));
        game.step(&select(1)); // lands inside the AI delay window
        assert_eq!(game.board()[1], None);
    }

    #[test]
    fn test_win_scores_100() {
        let mut game = TicTacToe::new(9);
        game.board = [
            Some(Mark::X),
            Some(Mark::X),
            None,
            Some(Mark::O),
            Some(Mark::O),
            None,
            None,
            None,
            None,
        ];
        game.step(&select(2));
        assert_eq!(game.status(), SessionStatus::Ended);
        assert_eq!(game.score(), WIN_SCORE);
    }

    #[test]
    fn test_ai_win_scores_0() {
        let mut game = TicTacToe::new(9);
        // O O _ / X X O / X X O with cell 2 the only free cell; whatever the
        // AI rolls, it completes the top row
        game.board = [
            Some(Mark::O),
            Some(Mark::O),
            None,
            Some(Mark::X),
            Some(Mark::X),
            Some(Mark::O),
            Some(Mark::X),
            Some(Mark::X),
            Some(Mark::O),
        ];
        game.step(&select(42)); // out of range, ignored
        game.step(&select(7)); // occupied, ignored
        game.ai_delay = Some(1);
        game.step(&FrameInput::default());
        assert_eq!(game.board()[2], Some(Mark::O));
        assert_eq!(game.status(), SessionStatus::Ended);
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn test_draw_scores_50() {
        let mut game = TicTacToe::new(9);
        // X O X / X O O / O X _ with X to play cell 8: full board, no line
        game.board = [
            Some(Mark::X),
            Some(Mark::O),
            Some(Mark::X),
            Some(Mark::X),
            Some(Mark::O),
            Some(Mark::O),
            Some(Mark::O),
            Some(Mark::X),
            None,
        ];
        game.step(&select(8));
        assert_eq!(game.status(), SessionStatus::Ended);
        assert_eq!(game.score(), DRAW_SCORE);
    }
}
