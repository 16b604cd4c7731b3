//! Round engine and state management.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use alloc::vec::Vec;

use crate::deck::Deck;
use crate::hand::{DealerHand, Hand};
use crate::options::RoundOptions;
use crate::result::Outcome;
use crate::view::{CardView, Controls, TableView};

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use state::Phase;

/// A single-player blackjack round engine.
///
/// The engine owns the deck, both hands, the balance, and the current
/// bet. Each round runs `Betting -> PlayerTurn -> Resolved`; the balance
/// carries across rounds while hands and bet are reset by
/// [`start_round`](Self::start_round). All actions are synchronous and
/// either complete or are rejected without touching state.
pub struct Round {
    /// Cards remaining this round.
    deck: Deck,
    /// Round options.
    options: RoundOptions,
    /// Current phase.
    phase: Phase,
    /// Dealer's hand.
    dealer_hand: DealerHand,
    /// Player's hand.
    player_hand: Hand,
    /// Running balance; persists across rounds.
    balance: i64,
    /// Bet at stake this round.
    bet: i64,
    /// Outcome of the latest resolved round.
    outcome: Option<Outcome>,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Round {
    /// Creates a new engine with the given seed and deals the first
    /// round, leaving the table in the betting phase.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::{Phase, Round, RoundOptions};
    ///
    /// let round = Round::new(RoundOptions::default(), 42);
    /// assert_eq!(round.phase(), Phase::Betting);
    /// assert_eq!(round.player_hand().len(), 2);
    /// ```
    #[must_use]
    pub fn new(options: RoundOptions, seed: u64) -> Self {
        let mut round = Self {
            deck: Deck::standard(),
            phase: Phase::Betting,
            dealer_hand: DealerHand::new(),
            player_hand: Hand::new(),
            balance: options.starting_balance,
            bet: options.default_bet,
            outcome: None,
            rng: ChaCha8Rng::seed_from_u64(seed),
            options,
        };
        round.start_round();
        round
    }

    /// Starts a new round: fresh shuffled deck, cleared hands, two cards
    /// to the dealer and two to the player, betting reopened.
    ///
    /// The balance carries over; the bet resets to the default.
    pub fn start_round(&mut self) {
        let mut deck = Deck::standard();
        deck.shuffle(&mut self.rng);
        self.start_round_with_deck(deck);
    }

    /// Starts a new round dealing from a prepared deck, without
    /// shuffling. The deal order is dealer, dealer (hole), player,
    /// player. Intended for deterministic replays and tests.
    pub fn start_round_with_deck(&mut self, deck: Deck) {
        self.deck = deck;
        self.dealer_hand.clear();
        self.player_hand.clear();
        self.outcome = None;
        self.bet = self.options.default_bet;

        for _ in 0..2 {
            if let Ok(card) = self.deck.draw() {
                self.dealer_hand.add_card(card);
            }
        }
        for _ in 0..2 {
            if let Ok(card) = self.deck.draw() {
                self.player_hand.add_card(card);
            }
        }

        self.phase = Phase::Betting;
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the current balance.
    #[must_use]
    pub const fn balance(&self) -> i64 {
        self.balance
    }

    /// Returns the bet at stake this round.
    #[must_use]
    pub const fn bet(&self) -> i64 {
        self.bet
    }

    /// Returns the outcome of the latest resolved round, if any.
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player_hand
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.dealer_hand
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Builds the snapshot the presentation layer renders.
    ///
    /// While the round is unresolved the dealer's hole card is reported
    /// face down and the dealer value as `None`.
    #[must_use]
    pub fn view(&self) -> TableView {
        let hole_revealed = self.dealer_hand.is_hole_revealed();
        let dealer_cards: Vec<CardView> = self
            .dealer_hand
            .cards()
            .iter()
            .enumerate()
            .map(|(index, &card)| CardView {
                card,
                face_up: hole_revealed || index == 0,
            })
            .collect();

        TableView {
            dealer_cards,
            dealer_value: self.dealer_hand.visible_value(),
            player_cards: self.player_hand.cards().to_vec(),
            player_value: self.player_hand.value(),
            balance: self.balance,
            bet: self.bet,
            message: self.outcome.map_or("", Outcome::message),
            controls: Controls {
                hit: self.phase == Phase::PlayerTurn,
                stand: self.phase == Phase::PlayerTurn,
                bet: self.phase == Phase::Betting,
            },
        }
    }
}
