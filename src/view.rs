//! Presentation-facing snapshot of the table.
//!
//! The engine never touches a rendering API; a DOM, terminal, or wasm
//! layer pulls a [`TableView`] after each action and draws from that.

use alloc::vec::Vec;

use crate::card::Card;

/// A card as the presentation layer may show it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardView {
    /// The card.
    pub card: Card,
    /// Whether the card may be shown face up. The dealer's hole card is
    /// face down until the round is resolved.
    pub face_up: bool,
}

/// Enable flags for the player-facing controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    /// Whether the hit control is enabled.
    pub hit: bool,
    /// Whether the stand control is enabled.
    pub stand: bool,
    /// Whether the bet control is enabled.
    pub bet: bool,
}

/// Snapshot of everything the presentation layer renders.
#[derive(Debug, Clone)]
pub struct TableView {
    /// The dealer's cards with per-card visibility.
    pub dealer_cards: Vec<CardView>,
    /// The dealer's value, or `None` while the hole card is concealed.
    pub dealer_value: Option<u8>,
    /// The player's cards (always fully visible).
    pub player_cards: Vec<Card>,
    /// The player's value.
    pub player_value: u8,
    /// The current balance.
    pub balance: i64,
    /// The current bet.
    pub bet: i64,
    /// The outcome message; empty until the round is resolved.
    pub message: &'static str,
    /// Enable flags for the hit/stand/bet controls.
    pub controls: Controls,
}
