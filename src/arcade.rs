//! Session lifecycle
//!
//! The arcade owns at most one running session plus its frame clock. It
//! charges the entry fee through the economy seam before a session exists,
//! steps the session as display frames arrive, and reports the final
//! score/reward exactly once - whether the session ends on its own or is
//! force-exited back to the arena.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use thiserror::Error;

use crate::economy::EconomyHooks;
use crate::games::GameId;
use crate::highscores::HighScores;
use crate::reward::reward;
use crate::sim::{FrameClock, FrameInput, GameSession, SessionStatus};

/// Why a launch was refused
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LaunchError {
    #[error("entry fee for {0} was not authorized")]
    NotAuthorized(GameId),
    #[error("a session is already active; exit it first")]
    SessionActive,
}

struct ActiveSession {
    game: GameId,
    session: Box<dyn GameSession>,
    clock: FrameClock,
    /// Latched input; one-shots wait here until an engine frame consumes them
    pending: FrameInput,
    /// Set once the result has gone to the economy
    reported: bool,
}

/// The arcade front end the view layer drives
pub struct Arcade<E: EconomyHooks> {
    economy: E,
    highscores: HighScores,
    seed_rng: Pcg32,
    active: Option<ActiveSession>,
}

impl<E: EconomyHooks> Arcade<E> {
    pub fn new(economy: E, master_seed: u64) -> Self {
        Self {
            economy,
            highscores: HighScores::new(),
            seed_rng: Pcg32::seed_from_u64(master_seed),
            active: None,
        }
    }

    /// Charge the entry fee and start a session of `game`.
    ///
    /// Refusal is non-fatal: no session is created and no clock starts.
    pub fn launch(&mut self, game: GameId) -> Result<(), LaunchError> {
        if self.active.is_some() {
            return Err(LaunchError::SessionActive);
        }
        if !self.economy.authorize_entry(game, game.entry_cost()) {
            return Err(LaunchError::NotAuthorized(game));
        }

        let seed: u64 = self.seed_rng.random();
        let session = game.new_session(seed);
        let mut clock = FrameClock::new();
        clock.start();
        log::info!("launched {game} (seed {seed})");

        self.active = Some(ActiveSession {
            game,
            session,
            clock,
            pending: FrameInput::default(),
            reported: false,
        });
        Ok(())
    }

    /// Host per-display-frame entry point: advance the clock and step the
    /// session. One-shot inputs latch until an engine frame consumes them
    /// and land only in the first frame when a display frame expands into
    /// several.
    pub fn frame(&mut self, dt: f32, input: &FrameInput) {
        let Some(active) = self.active.as_mut() else {
            return;
        };
        active.pending.merge(input);

        let steps = active.clock.advance(dt);
        for _ in 0..steps {
            let snapshot = active.pending.clone();
            active.session.step(&snapshot);
            active.pending.clear_one_shots();
            if active.session.is_ended() {
                break;
            }
        }

        if active.session.is_ended() && active.clock.is_running() {
            active.clock.stop();
        }
        self.settle();
    }

    /// Report a finished session to the economy exactly once
    fn settle(&mut self) {
        let Some(active) = self.active.as_mut() else {
            return;
        };
        if active.reported || active.session.status() != SessionStatus::Ended {
            return;
        }

        let score = active.session.score();
        let amount = reward(active.game, score);
        active.reported = true;
        self.economy.report_result(active.game, score, amount);
        self.highscores.add_score(score, active.game, amount);
    }

    /// Leave the active session and return to the arena.
    ///
    /// Graceful-shutdown semantics: a session still in play is ended with
    /// its current score and the reward is computed normally. Calling this
    /// with no active session, or on a session that already reported, does
    /// nothing twice.
    pub fn exit(&mut self) {
        let Some(mut active) = self.active.take() else {
            return;
        };
        active.clock.stop();

        if !active.reported {
            let score = active.session.score();
            let amount = reward(active.game, score);
            self.economy.report_result(active.game, score, amount);
            self.highscores.add_score(score, active.game, amount);
        }
        log::info!("exited {}", active.game);
        // The session (and any timers it owns) drops here
    }

    /// Game currently on screen
    pub fn active_game(&self) -> Option<GameId> {
        self.active.as_ref().map(|a| a.game)
    }

    /// Live status for the HUD
    pub fn status(&self) -> Option<SessionStatus> {
        self.active.as_ref().map(|a| a.session.status())
    }

    /// Live score for the HUD
    pub fn score(&self) -> Option<u64> {
        self.active.as_ref().map(|a| a.session.score())
    }

    /// Engine frames elapsed since launch (session age)
    pub fn frames(&self) -> Option<u64> {
        self.active.as_ref().map(|a| a.clock.frames())
    }

    pub fn highscores(&self) -> &HighScores {
        &self.highscores
    }

    pub fn economy(&self) -> &E {
        &self.economy
    }
}
