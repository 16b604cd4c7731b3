use crate::error::BetError;

use super::{Phase, Round};

impl Round {
    /// Locks in the bet for this round and hands the turn to the player.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not accepting bets, the amount
    /// is not positive, or the amount exceeds the balance. The bet and
    /// phase are left unchanged on error.
    pub fn place_bet(&mut self, amount: i64) -> Result<(), BetError> {
        if self.phase != Phase::Betting {
            return Err(BetError::NotAllowed);
        }

        if amount <= 0 {
            return Err(BetError::NonPositive);
        }

        if amount > self.balance {
            return Err(BetError::ExceedsBalance);
        }

        self.bet = amount;
        self.phase = Phase::PlayerTurn;

        Ok(())
    }
}
