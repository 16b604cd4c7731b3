//! Round outcome and settlement types.

use core::fmt;

/// Outcome of a settled round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Player wins with the higher value.
    PlayerWin,
    /// Dealer wins with the higher value.
    DealerWin,
    /// Push (tie); the bet is returned.
    Push,
    /// Player busted (over 21).
    PlayerBust,
    /// Dealer busted (over 21).
    DealerBust,
}

impl Outcome {
    /// The message shown to the player for this outcome.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::PlayerWin => "Player Wins!",
            Self::DealerWin => "Dealer Wins!",
            Self::Push => "Push! It's a draw!",
            Self::PlayerBust => "Player Bust! Dealer Wins!",
            Self::DealerBust => "Dealer Bust! Player Wins!",
        }
    }

    /// Signed amount applied to the balance when settling `bet`.
    #[must_use]
    pub const fn balance_delta(self, bet: i64) -> i64 {
        match self {
            Self::PlayerWin | Self::DealerBust => bet,
            Self::DealerWin | Self::PlayerBust => -bet,
            Self::Push => 0,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Result of a settled round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The outcome of the round.
    pub outcome: Outcome,
    /// The player's final hand value.
    pub player_value: u8,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// The bet that was at stake.
    pub bet: i64,
    /// Net change applied to the balance (positive = profit).
    pub net: i64,
    /// The balance after settlement.
    pub balance: i64,
}
