use core::cmp::Ordering;

use crate::error::ActionError;
use crate::result::Outcome;

use super::{Phase, Round};

/// The dealer stands at this value or above. Fixed house policy; no
/// soft/hard 17 distinction is made.
const DEALER_STANDS_ON: u8 = 17;

impl Round {
    /// Dealer draws until reaching 17 or higher.
    pub(super) fn dealer_play(&mut self) -> Result<(), ActionError> {
        while self.dealer_hand.value() < DEALER_STANDS_ON {
            let card = self.deck.draw()?;
            self.dealer_hand.add_card(card);
        }

        Ok(())
    }

    /// Compares the final hands.
    ///
    /// The push check runs before the dealer-wins check, so the dealer
    /// only takes strictly higher totals.
    pub(super) fn compare_hands(&self) -> Outcome {
        let dealer_value = self.dealer_hand.value();
        let player_value = self.player_hand.value();

        if dealer_value > 21 {
            return Outcome::DealerBust;
        }

        match dealer_value.cmp(&player_value) {
            Ordering::Equal => Outcome::Push,
            Ordering::Greater => Outcome::DealerWin,
            Ordering::Less => Outcome::PlayerWin,
        }
    }

    /// Applies the outcome to the balance, reveals the hole card, and
    /// resolves the round.
    pub(super) fn settle(&mut self, outcome: Outcome) {
        self.balance += outcome.balance_delta(self.bet);
        self.outcome = Some(outcome);
        self.dealer_hand.reveal_hole();
        self.phase = Phase::Resolved;
    }
}
