//! Round phase types.

/// Phase of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Cards are dealt and the table is accepting a bet.
    Betting,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Round has been settled.
    Resolved,
}
