//! The economy seam
//!
//! The engine never mutates balances itself; it asks the economy to
//! authorize an entry fee before a session exists and hands it the final
//! result exactly once when the session ends. [`Wallet`] is the in-memory
//! reference implementation, which also serves the tests.

use serde::{Deserialize, Serialize};

use crate::games::GameId;

/// What the engine needs from the surrounding economy
pub trait EconomyHooks {
    /// Charge the entry fee; `false` refuses the launch (non-fatal)
    fn authorize_entry(&mut self, game: GameId, cost: u64) -> bool;

    /// Final score and reward for a finished session. Called exactly once
    /// per session.
    fn report_result(&mut self, game: GameId, score: u64, reward: u64);
}

/// Simple in-memory wallet with career stats
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Wallet {
    pub balance: u64,
    pub wins: u32,
    pub losses: u32,
    pub matches_played: u32,
}

impl Wallet {
    pub fn new(balance: u64) -> Self {
        Self {
            balance,
            ..Default::default()
        }
    }
}

impl EconomyHooks for Wallet {
    fn authorize_entry(&mut self, game: GameId, cost: u64) -> bool {
        if self.balance < cost {
            log::warn!("insufficient funds for {game}: {} < {cost}", self.balance);
            return false;
        }
        self.balance -= cost;
        log::info!("entry fee {cost} charged for {game}");
        true
    }

    fn report_result(&mut self, game: GameId, score: u64, reward: u64) {
        self.matches_played += 1;
        if reward > 0 {
            self.balance += reward;
            self.wins += 1;
            log::info!("{game} payout: +{reward} (score {score})");
        } else {
            self.losses += 1;
            log::info!("{game} ended with no payout (score {score})");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_fee_deducted_when_covered() {
        let mut wallet = Wallet::new(20);
        assert!(wallet.authorize_entry(GameId::Snake, 5));
        assert_eq!(wallet.balance, 15);
    }

    #[test]
    fn test_entry_refused_when_short() {
        let mut wallet = Wallet::new(3);
        assert!(!wallet.authorize_entry(GameId::Breaker, 15));
        assert_eq!(wallet.balance, 3, "refusal leaves the balance alone");
    }

    #[test]
    fn test_result_tallies_wins_and_losses() {
        let mut wallet = Wallet::new(0);
        wallet.report_result(GameId::Dodger, 100, 10);
        wallet.report_result(GameId::Dodger, 3, 0);
        assert_eq!(wallet.balance, 10);
        assert_eq!(wallet.wins, 1);
        assert_eq!(wallet.losses, 1);
        assert_eq!(wallet.matches_played, 2);
    }
}
