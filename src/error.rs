//! Error types for round operations.

use thiserror::Error;

/// A draw was attempted with no cards left in the deck.
///
/// Unreachable during a normal round (at most 21 of 52 cards are dealt),
/// but a defined error rather than a panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no cards left in the deck")]
pub struct EmptyDeckError;

/// Errors that can occur when placing a bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Betting is not allowed in the current phase.
    #[error("betting is not allowed in the current phase")]
    NotAllowed,
    /// Bet amount is zero or negative.
    #[error("bet amount must be positive")]
    NonPositive,
    /// Bet amount exceeds the current balance.
    #[error("bet exceeds the current balance")]
    ExceedsBalance,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The action is not allowed in the current phase.
    #[error("action is not allowed in the current phase")]
    NotAllowed,
    /// The deck ran out of cards.
    #[error(transparent)]
    EmptyDeck(#[from] EmptyDeckError),
}
