//! Round integration tests.

use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use twentyone::{
    ActionError, BetError, Card, DECK_SIZE, Deck, EmptyDeckError, Hand, Outcome, Phase, Rank,
    Round, RoundOptions, Suit,
};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

/// Starts a round dealing the given cards in order: dealer up, dealer
/// hole, player, player, then any hit/dealer draws.
fn round_with_draws(draws: &[Card]) -> Round {
    let mut round = Round::new(RoundOptions::default(), 1);
    let mut cards: Vec<Card> = draws.to_vec();
    cards.reverse();
    round.start_round_with_deck(Deck::from_cards(cards));
    round
}

#[test]
fn standard_deck_has_52_unique_cards() {
    let deck = Deck::standard();
    assert_eq!(deck.len(), DECK_SIZE);

    let unique: HashSet<Card> = deck.cards().iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);
}

#[test]
fn shuffle_is_a_permutation() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut deck = Deck::standard();
    deck.shuffle(&mut rng);

    assert_eq!(deck.len(), DECK_SIZE);

    // All 52 cards are unique, so set equality is multiset equality.
    let before: HashSet<Card> = Deck::standard().cards().iter().copied().collect();
    let after: HashSet<Card> = deck.cards().iter().copied().collect();
    assert_eq!(before, after);
}

#[test]
fn draw_removes_cards_and_errors_when_empty() {
    let mut deck = Deck::from_cards(vec![card(Suit::Hearts, Rank::Two)]);
    assert_eq!(deck.draw(), Ok(card(Suit::Hearts, Rank::Two)));
    assert!(deck.is_empty());
    assert_eq!(deck.draw(), Err(EmptyDeckError));
}

#[test]
fn ace_scoring_fixtures() {
    let mut hand = Hand::new();
    hand.add_card(card(Suit::Hearts, Rank::Ace));
    hand.add_card(card(Suit::Spades, Rank::Nine));
    assert_eq!(hand.value(), 20);
    assert!(hand.is_soft());

    let mut hand = Hand::new();
    hand.add_card(card(Suit::Hearts, Rank::Ace));
    hand.add_card(card(Suit::Spades, Rank::King));
    hand.add_card(card(Suit::Clubs, Rank::Nine));
    assert_eq!(hand.value(), 20);
    assert!(!hand.is_soft());

    let mut hand = Hand::new();
    hand.add_card(card(Suit::Hearts, Rank::Ace));
    hand.add_card(card(Suit::Spades, Rank::Ace));
    hand.add_card(card(Suit::Clubs, Rank::Nine));
    assert_eq!(hand.value(), 21);
    assert!(hand.is_soft());
}

#[test]
fn score_is_order_invariant() {
    let cards = [
        card(Suit::Hearts, Rank::Ace),
        card(Suit::Spades, Rank::King),
        card(Suit::Clubs, Rank::Nine),
    ];

    let orderings: [[usize; 3]; 3] = [[0, 1, 2], [2, 0, 1], [1, 2, 0]];
    for indices in orderings {
        let mut hand = Hand::new();
        for index in indices {
            hand.add_card(cards[index]);
        }
        assert_eq!(hand.value(), 20);
    }
}

#[test]
fn bust_detection_after_downgrades_exhaust() {
    let mut hand = Hand::new();
    hand.add_card(card(Suit::Hearts, Rank::Ten));
    hand.add_card(card(Suit::Spades, Rank::Nine));
    hand.add_card(card(Suit::Clubs, Rank::Five));
    assert_eq!(hand.value(), 24);
    assert!(hand.is_bust());

    let mut hand = Hand::new();
    hand.add_card(card(Suit::Hearts, Rank::Ace));
    hand.add_card(card(Suit::Spades, Rank::Ace));
    hand.add_card(card(Suit::Clubs, Rank::King));
    hand.add_card(card(Suit::Diamonds, Rank::Queen));
    assert_eq!(hand.value(), 22);
    assert!(hand.is_bust());
}

#[test]
fn asset_names_follow_the_contract() {
    assert_eq!(
        card(Suit::Hearts, Rank::Queen).asset_name(),
        "queen_of_hearts"
    );
    assert_eq!(card(Suit::Spades, Rank::Two).asset_name(), "2_of_spades");
    assert_eq!(card(Suit::Diamonds, Rank::Ten).asset_name(), "10_of_diamonds");
    assert_eq!(card(Suit::Clubs, Rank::Ace).asset_name(), "ace_of_clubs");
}

#[test]
fn bet_errors_leave_state_unchanged() {
    let mut round = Round::new(RoundOptions::default(), 3);
    assert_eq!(round.balance(), 200);

    assert_eq!(round.place_bet(250).unwrap_err(), BetError::ExceedsBalance);
    assert_eq!(round.place_bet(0).unwrap_err(), BetError::NonPositive);
    assert_eq!(round.place_bet(-5).unwrap_err(), BetError::NonPositive);

    assert_eq!(round.balance(), 200);
    assert_eq!(round.phase(), Phase::Betting);

    round.place_bet(50).unwrap();
    assert_eq!(round.phase(), Phase::PlayerTurn);
    assert_eq!(round.bet(), 50);

    // Bet is locked until the next round.
    assert_eq!(round.place_bet(20).unwrap_err(), BetError::NotAllowed);
    assert_eq!(round.bet(), 50);
}

#[test]
fn actions_rejected_outside_player_turn() {
    let mut round = Round::new(RoundOptions::default(), 4);
    assert_eq!(round.phase(), Phase::Betting);

    let player_len = round.player_hand().len();
    let remaining = round.cards_remaining();

    assert_eq!(round.hit().unwrap_err(), ActionError::NotAllowed);
    assert_eq!(round.stand().unwrap_err(), ActionError::NotAllowed);

    assert_eq!(round.player_hand().len(), player_len);
    assert_eq!(round.cards_remaining(), remaining);
    assert_eq!(round.balance(), 200);
    assert_eq!(round.phase(), Phase::Betting);
}

#[test]
fn dealer_draws_until_seventeen() {
    // Dealer starts at 16 and must keep drawing until reaching 17+.
    let mut round = round_with_draws(&[
        card(Suit::Hearts, Rank::Ten),  // dealer up
        card(Suit::Clubs, Rank::Six),   // dealer hole
        card(Suit::Spades, Rank::Ten),  // player
        card(Suit::Hearts, Rank::Nine), // player
        card(Suit::Clubs, Rank::Five),  // dealer draw -> 21
    ]);

    round.place_bet(10).unwrap();
    let result = round.stand().unwrap();

    assert_eq!(round.dealer_hand().len(), 3);
    assert_eq!(result.dealer_value, 21);
    assert_eq!(result.outcome, Outcome::DealerWin);
    assert_eq!(round.balance(), 190);
}

#[test]
fn dealer_stands_on_seventeen_and_above() {
    let mut round = round_with_draws(&[
        card(Suit::Hearts, Rank::Ten),   // dealer up
        card(Suit::Clubs, Rank::Seven),  // dealer hole -> 17
        card(Suit::Spades, Rank::Ten),   // player
        card(Suit::Hearts, Rank::Eight), // player -> 18
    ]);

    round.place_bet(10).unwrap();
    let result = round.stand().unwrap();

    // No draw at 17, even though the dealer loses by standing.
    assert_eq!(round.dealer_hand().len(), 2);
    assert_eq!(result.dealer_value, 17);
    assert_eq!(result.outcome, Outcome::PlayerWin);
}

#[test]
fn end_to_end_player_win() {
    let mut round = round_with_draws(&[
        card(Suit::Hearts, Rank::Ten),   // dealer up
        card(Suit::Clubs, Rank::Eight),  // dealer hole -> 18
        card(Suit::Spades, Rank::King),  // player
        card(Suit::Hearts, Rank::Queen), // player -> 20
    ]);

    round.place_bet(10).unwrap();
    let result = round.stand().unwrap();

    assert_eq!(result.player_value, 20);
    assert_eq!(result.dealer_value, 18);
    assert_eq!(result.outcome, Outcome::PlayerWin);
    assert_eq!(result.net, 10);
    assert_eq!(round.balance(), 210);
    assert_eq!(round.view().message, "Player Wins!");
    assert_eq!(round.phase(), Phase::Resolved);
}

#[test]
fn end_to_end_push() {
    let mut round = round_with_draws(&[
        card(Suit::Hearts, Rank::Ten),  // dealer up
        card(Suit::Clubs, Rank::Nine),  // dealer hole -> 19
        card(Suit::Spades, Rank::Ten),  // player
        card(Suit::Hearts, Rank::Nine), // player -> 19
    ]);

    round.place_bet(10).unwrap();
    let result = round.stand().unwrap();

    assert_eq!(result.outcome, Outcome::Push);
    assert_eq!(result.net, 0);
    assert_eq!(round.balance(), 200);
    assert_eq!(round.view().message, "Push! It's a draw!");
}

#[test]
fn dealer_bust_pays_the_player() {
    let mut round = round_with_draws(&[
        card(Suit::Hearts, Rank::Ten),  // dealer up
        card(Suit::Clubs, Rank::Six),   // dealer hole -> 16
        card(Suit::Spades, Rank::Ten),  // player
        card(Suit::Hearts, Rank::Nine), // player -> 19
        card(Suit::Clubs, Rank::King),  // dealer draw -> 26, bust
    ]);

    round.place_bet(25).unwrap();
    let result = round.stand().unwrap();

    assert_eq!(result.outcome, Outcome::DealerBust);
    assert_eq!(result.dealer_value, 26);
    assert_eq!(round.balance(), 225);
    assert_eq!(round.view().message, "Dealer Bust! Player Wins!");
}

#[test]
fn player_bust_loses_the_bet_and_resolves() {
    let mut round = round_with_draws(&[
        card(Suit::Hearts, Rank::Ten),  // dealer up
        card(Suit::Clubs, Rank::Six),   // dealer hole
        card(Suit::Spades, Rank::Ten),  // player
        card(Suit::Hearts, Rank::Six),  // player -> 16
        card(Suit::Clubs, Rank::Queen), // player hit -> 26, bust
    ]);

    round.place_bet(10).unwrap();
    let hit_card = round.hit().unwrap();
    assert_eq!(hit_card.rank, Rank::Queen);

    assert_eq!(round.phase(), Phase::Resolved);
    assert_eq!(round.outcome(), Some(Outcome::PlayerBust));
    assert_eq!(round.balance(), 190);
    assert_eq!(round.view().message, "Player Bust! Dealer Wins!");

    // Hit and stand are dead once the round is resolved.
    assert_eq!(round.hit().unwrap_err(), ActionError::NotAllowed);
    assert_eq!(round.stand().unwrap_err(), ActionError::NotAllowed);
    assert_eq!(round.balance(), 190);
}

#[test]
fn hit_keeps_the_turn_while_under_21() {
    let mut round = round_with_draws(&[
        card(Suit::Hearts, Rank::Ten),  // dealer up
        card(Suit::Clubs, Rank::Ten),   // dealer hole
        card(Suit::Spades, Rank::Five), // player
        card(Suit::Hearts, Rank::Four), // player -> 9
        card(Suit::Clubs, Rank::Seven), // player hit -> 16
    ]);

    round.place_bet(10).unwrap();
    round.hit().unwrap();

    assert_eq!(round.phase(), Phase::PlayerTurn);
    assert_eq!(round.player_hand().value(), 16);
    assert!(round.outcome().is_none());
}

#[test]
fn hole_card_concealed_until_resolved() {
    let mut round = round_with_draws(&[
        card(Suit::Hearts, Rank::Ten),   // dealer up
        card(Suit::Clubs, Rank::Eight),  // dealer hole
        card(Suit::Spades, Rank::King),  // player
        card(Suit::Hearts, Rank::Queen), // player
    ]);

    round.place_bet(10).unwrap();

    let view = round.view();
    assert_eq!(view.dealer_cards.len(), 2);
    assert!(view.dealer_cards[0].face_up);
    assert!(!view.dealer_cards[1].face_up);
    assert_eq!(view.dealer_value, None);
    assert_eq!(view.message, "");

    round.stand().unwrap();

    let view = round.view();
    assert!(view.dealer_cards.iter().all(|card_view| card_view.face_up));
    assert_eq!(view.dealer_value, Some(18));
}

#[test]
fn controls_follow_the_phase() {
    let mut round = round_with_draws(&[
        card(Suit::Hearts, Rank::Ten),   // dealer up
        card(Suit::Clubs, Rank::Eight),  // dealer hole
        card(Suit::Spades, Rank::King),  // player
        card(Suit::Hearts, Rank::Queen), // player
    ]);

    let controls = round.view().controls;
    assert!(controls.bet);
    assert!(!controls.hit);
    assert!(!controls.stand);

    round.place_bet(10).unwrap();
    let controls = round.view().controls;
    assert!(!controls.bet);
    assert!(controls.hit);
    assert!(controls.stand);

    round.stand().unwrap();
    let controls = round.view().controls;
    assert!(!controls.bet);
    assert!(!controls.hit);
    assert!(!controls.stand);
}

#[test]
fn hit_with_empty_deck_returns_error() {
    // Exactly the four dealt cards; the first hit finds nothing left.
    let mut round = round_with_draws(&[
        card(Suit::Hearts, Rank::Five),  // dealer up
        card(Suit::Clubs, Rank::Six),    // dealer hole
        card(Suit::Spades, Rank::Seven), // player
        card(Suit::Hearts, Rank::Eight), // player
    ]);

    round.place_bet(10).unwrap();
    assert_eq!(round.cards_remaining(), 0);
    assert_eq!(
        round.hit().unwrap_err(),
        ActionError::EmptyDeck(EmptyDeckError)
    );
    assert_eq!(round.phase(), Phase::PlayerTurn);
}

#[test]
fn start_round_carries_balance_and_resets_the_table() {
    let mut round = round_with_draws(&[
        card(Suit::Hearts, Rank::Ten),   // dealer up
        card(Suit::Clubs, Rank::Eight),  // dealer hole -> 18
        card(Suit::Spades, Rank::King),  // player
        card(Suit::Hearts, Rank::Queen), // player -> 20
    ]);

    round.place_bet(40).unwrap();
    round.stand().unwrap();
    assert_eq!(round.balance(), 240);

    round.start_round();

    assert_eq!(round.phase(), Phase::Betting);
    assert_eq!(round.balance(), 240);
    assert_eq!(round.bet(), 10);
    assert!(round.outcome().is_none());
    assert_eq!(round.player_hand().len(), 2);
    assert_eq!(round.dealer_hand().len(), 2);
    assert_eq!(round.cards_remaining(), DECK_SIZE - 4);
    assert!(!round.dealer_hand().is_hole_revealed());
}

#[test]
fn seeded_rounds_are_reproducible() {
    let one = Round::new(RoundOptions::default(), 99);
    let two = Round::new(RoundOptions::default(), 99);

    assert_eq!(one.player_hand().cards(), two.player_hand().cards());
    assert_eq!(one.dealer_hand().cards(), two.dealer_hand().cards());
}

#[test]
fn options_builder_sets_fields() {
    let options = RoundOptions::default()
        .with_starting_balance(500)
        .with_default_bet(25);

    assert_eq!(options.starting_balance, 500);
    assert_eq!(options.default_bet, 25);

    let round = Round::new(options, 8);
    assert_eq!(round.balance(), 500);
    assert_eq!(round.bet(), 25);
}
