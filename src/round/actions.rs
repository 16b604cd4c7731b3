use crate::card::Card;
use crate::error::ActionError;
use crate::result::{Outcome, RoundResult};

use super::{Phase, Round};

impl Round {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.phase != Phase::PlayerTurn {
            return Err(ActionError::NotAllowed);
        }

        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// Draws one card into the player's hand. A hand over 21 busts,
    /// loses the bet, and resolves the round immediately; otherwise the
    /// player may keep acting.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the deck is
    /// empty.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        let card = self.deck.draw()?;
        self.player_hand.add_card(card);

        if self.player_hand.is_bust() {
            self.settle(Outcome::PlayerBust);
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// The dealer plays out their hand under the fixed house policy,
    /// then the bet is settled and the round resolved.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the deck runs
    /// out while the dealer must draw.
    pub fn stand(&mut self) -> Result<RoundResult, ActionError> {
        self.ensure_player_turn()?;

        self.dealer_play()?;
        let outcome = self.compare_hands();
        self.settle(outcome);

        Ok(RoundResult {
            outcome,
            player_value: self.player_hand.value(),
            dealer_value: self.dealer_hand.value(),
            bet: self.bet,
            net: outcome.balance_delta(self.bet),
            balance: self.balance,
        })
    }
}
