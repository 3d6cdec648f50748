//! Neon Arcade - a ten-game arcade with a shared per-frame engine
//!
//! Core modules:
//! - `sim`: The shared engine (frame clock, input adapter, collision, spawner)
//! - `games`: The ten rule modules, each implementing [`sim::GameSession`]
//! - `arcade`: Session lifecycle (launch, per-frame stepping, exit)
//! - `economy`: The entry-fee / payout seam the arcade reports into
//! - `reward`: Pure score-to-reward conversion
//! - `highscores`: Hall-of-fame leaderboard of finished sessions

pub mod arcade;
pub mod economy;
pub mod games;
pub mod highscores;
pub mod reward;
pub mod sim;

pub use arcade::{Arcade, LaunchError};
pub use economy::{EconomyHooks, Wallet};
pub use games::GameId;
pub use highscores::HighScores;

/// Engine configuration constants
pub mod consts {
    /// Nominal display frame interval (60 Hz); all per-frame speeds assume it
    pub const FRAME_DT: f32 = 1.0 / 60.0;
    /// Maximum engine frames per display frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
}
