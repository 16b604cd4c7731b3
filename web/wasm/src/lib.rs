use serde::Serialize;
use twentyone::{Card, CardView, Phase, Round, RoundOptions, RoundResult};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmRound {
    round: Round,
}

#[wasm_bindgen]
impl WasmRound {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        Self {
            round: Round::new(RoundOptions::default(), u64::from(seed)),
        }
    }

    pub fn start_round(&mut self) {
        self.round.start_round();
    }

    pub fn place_bet(&mut self, amount: i32) -> Result<(), JsValue> {
        self.round.place_bet(i64::from(amount)).map_err(js_err)
    }

    pub fn hit(&mut self) -> Result<JsValue, JsValue> {
        let card = self.round.hit().map_err(js_err)?;
        to_js_value(&card_to_js(card, true))
    }

    pub fn stand(&mut self) -> Result<JsValue, JsValue> {
        let result = self.round.stand().map_err(js_err)?;
        to_js_value(&JsRoundResult::from(result))
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let view = self.round.view();

        let snapshot = Snapshot {
            phase: phase_to_str(self.round.phase()),
            dealer_cards: view.dealer_cards.iter().map(card_view_to_js).collect(),
            dealer_value: view.dealer_value,
            player_cards: view
                .player_cards
                .iter()
                .map(|&card| card_to_js(card, true))
                .collect(),
            player_value: view.player_value,
            balance: view.balance as i32,
            bet: view.bet as i32,
            message: view.message,
            can_hit: view.controls.hit,
            can_stand: view.controls.stand,
            can_bet: view.controls.bet,
        };

        to_js_value(&snapshot)
    }
}

#[derive(Serialize)]
struct JsCard {
    suit: &'static str,
    rank: &'static str,
    asset: String,
    face_up: bool,
}

#[derive(Serialize)]
struct Snapshot {
    phase: &'static str,
    dealer_cards: Vec<JsCard>,
    dealer_value: Option<u8>,
    player_cards: Vec<JsCard>,
    player_value: u8,
    balance: i32,
    bet: i32,
    message: &'static str,
    can_hit: bool,
    can_stand: bool,
    can_bet: bool,
}

#[derive(Serialize)]
struct JsRoundResult {
    outcome: &'static str,
    message: &'static str,
    player_value: u8,
    dealer_value: u8,
    bet: i32,
    net: i32,
    balance: i32,
}

impl From<RoundResult> for JsRoundResult {
    fn from(result: RoundResult) -> Self {
        Self {
            outcome: outcome_to_str(result.outcome),
            message: result.outcome.message(),
            player_value: result.player_value,
            dealer_value: result.dealer_value,
            bet: result.bet as i32,
            net: result.net as i32,
            balance: result.balance as i32,
        }
    }
}

fn card_to_js(card: Card, face_up: bool) -> JsCard {
    JsCard {
        suit: card.suit.name(),
        rank: card.rank.name(),
        asset: card.asset_name(),
        face_up,
    }
}

fn card_view_to_js(card_view: &CardView) -> JsCard {
    card_to_js(card_view.card, card_view.face_up)
}

fn phase_to_str(phase: Phase) -> &'static str {
    match phase {
        Phase::Betting => "Betting",
        Phase::PlayerTurn => "PlayerTurn",
        Phase::Resolved => "Resolved",
    }
}

fn outcome_to_str(outcome: twentyone::Outcome) -> &'static str {
    match outcome {
        twentyone::Outcome::PlayerWin => "PlayerWin",
        twentyone::Outcome::DealerWin => "DealerWin",
        twentyone::Outcome::Push => "Push",
        twentyone::Outcome::PlayerBust => "PlayerBust",
        twentyone::Outcome::DealerBust => "DealerBust",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
