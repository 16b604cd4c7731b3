//! A single-deck blackjack round engine with optional `no_std` support.
//!
//! The crate provides a [`Round`] type that manages one betting round
//! against the house: the opening deal, the player's hit/stand decisions,
//! the dealer's fixed draw-to-17 policy, and bet settlement against a
//! running balance. Rendering is entirely external; [`Round::view`]
//! produces the snapshot a presentation layer needs, including which
//! dealer cards may be shown face up.
//!
//! # Example
//!
//! ```
//! use twentyone::{Round, RoundOptions};
//!
//! let mut round = Round::new(RoundOptions::default(), 42);
//! round.place_bet(10)?;
//! let card = round.hit()?;
//! let _ = card;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
pub mod options;
pub mod result;
pub mod round;
pub mod view;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{ActionError, BetError, EmptyDeckError};
pub use hand::{DealerHand, Hand};
pub use options::{DEFAULT_BET, RoundOptions, STARTING_BALANCE};
pub use result::{Outcome, RoundResult};
pub use round::{Phase, Round};
pub use view::{CardView, Controls, TableView};
