use bjsolo::{
    Card, Game, GameOptions, Leaderboard, Outcome, Phase, Resolution, RoundRecord, RoundResult,
    ScoreStore,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
    leaderboard: Leaderboard,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        Self {
            game: Game::new(GameOptions::default(), u64::from(seed)),
            leaderboard: Leaderboard::new(),
        }
    }

    /// Starts a new session between rounds. The leaderboard survives.
    pub fn reset(&mut self) -> Result<(), JsValue> {
        self.game.reset().map_err(js_err)
    }

    pub fn place_bet(&mut self, amount: u32) -> Result<(), JsValue> {
        self.game.place_bet(u64::from(amount)).map_err(js_err)
    }

    pub fn deal(&mut self) -> Result<(), JsValue> {
        self.game.deal().map_err(js_err)
    }

    pub fn hit(&mut self) -> Result<(), JsValue> {
        self.game.hit().map(|_| ()).map_err(js_err)
    }

    pub fn stand(&mut self) -> Result<(), JsValue> {
        self.game.stand().map_err(js_err)
    }

    pub fn double_down(&mut self) -> Result<(), JsValue> {
        self.game.double_down().map(|_| ()).map_err(js_err)
    }

    /// One dealer draw, so the page can pace the reveal. Returns whether the
    /// dealer drew a card.
    pub fn dealer_step(&mut self) -> Result<bool, JsValue> {
        self.game
            .dealer_step()
            .map(|card| card.is_some())
            .map_err(js_err)
    }

    pub fn dealer_play(&mut self) -> Result<(), JsValue> {
        self.game.dealer_play().map(|_| ()).map_err(js_err)
    }

    /// Resolves the round and, when `name` is given, submits the score.
    pub fn resolve(&mut self, name: Option<String>) -> Result<JsValue, JsValue> {
        let result = self.game.resolve().map_err(js_err)?;
        if let Some(name) = name.filter(|n| !n.trim().is_empty()) {
            let starting = self.game.options().starting_bankroll;
            self.leaderboard
                .submit(result.score_entry(name.trim(), starting));
        }
        to_js_value(&JsRoundResult::from(result))
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let snapshot = self.game.snapshot();
        let conceal = snapshot.conceals_dealer();
        let legal = self.game.legal_actions();

        let dealer_cards = snapshot
            .dealer_cards
            .iter()
            .enumerate()
            .map(|(index, card)| (!conceal || index == 0).then(|| card_to_js(*card)))
            .collect();

        let view = JsSnapshot {
            phase: phase_to_str(snapshot.phase),
            player_cards: snapshot.player_cards.iter().copied().map(card_to_js).collect(),
            player_total: snapshot.player_total,
            dealer_cards,
            dealer_total: (!conceal).then_some(snapshot.dealer_total),
            bankroll: snapshot.bankroll,
            bet: snapshot.bet,
            rounds_played: snapshot.rounds_played,
            rounds_remaining: self.game.rounds_remaining(),
            can_hit: legal.hit,
            can_stand: legal.stand,
            can_double: legal.double_down,
        };

        to_js_value(&view)
    }

    pub fn history(&self) -> Result<JsValue, JsValue> {
        let records: Vec<JsRecord> = self.game.history().iter().map(JsRecord::from).collect();
        to_js_value(&records)
    }

    pub fn leaderboard(&self) -> Result<JsValue, JsValue> {
        let scores: Vec<JsScore> = self
            .leaderboard
            .ranked()
            .into_iter()
            .map(|entry| JsScore {
                name: entry.name,
                money_won: entry.net,
                win: u8::from(entry.win),
            })
            .collect();
        to_js_value(&JsScores { scores })
    }
}

#[derive(Serialize)]
struct JsSnapshot {
    phase: &'static str,
    player_cards: Vec<JsCard>,
    player_total: u8,
    dealer_cards: Vec<Option<JsCard>>,
    dealer_total: Option<u8>,
    bankroll: u64,
    bet: u64,
    rounds_played: u32,
    rounds_remaining: u32,
    can_hit: bool,
    can_stand: bool,
    can_double: bool,
}

#[derive(Serialize)]
struct JsCard {
    code: String,
    rank: &'static str,
    suit: char,
}

#[derive(Serialize)]
struct JsRoundResult {
    round: u32,
    resolution: &'static str,
    outcome: &'static str,
    bet: u64,
    payout: u64,
    net: i64,
    player_total: u8,
    dealer_total: u8,
    bankroll: u64,
}

impl From<RoundResult> for JsRoundResult {
    fn from(result: RoundResult) -> Self {
        Self {
            round: result.round,
            resolution: resolution_to_str(result.resolution),
            outcome: outcome_to_str(result.outcome),
            bet: result.bet,
            payout: result.payout,
            net: result.net,
            player_total: result.player_total,
            dealer_total: result.dealer_total,
            bankroll: result.bankroll,
        }
    }
}

#[derive(Serialize)]
struct JsRecord {
    round: u32,
    result: &'static str,
    bet: u64,
    payout: u64,
    money: u64,
}

impl From<&RoundRecord> for JsRecord {
    fn from(record: &RoundRecord) -> Self {
        Self {
            round: record.round,
            result: outcome_to_str(record.outcome),
            bet: record.bet,
            payout: record.payout,
            money: record.bankroll,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsScore {
    name: String,
    money_won: i64,
    win: u8,
}

#[derive(Serialize)]
struct JsScores {
    scores: Vec<JsScore>,
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        code: card.code(),
        rank: card.rank.symbol(),
        suit: card.suit.symbol(),
    }
}

fn phase_to_str(phase: Phase) -> &'static str {
    match phase {
        Phase::Betting => "Betting",
        Phase::PlayerTurn => "PlayerTurn",
        Phase::DealerTurn => "DealerTurn",
        Phase::RoundOver => "RoundOver",
        Phase::GameOver => "GameOver",
        Phase::BetRejected => "BetRejected",
    }
}

fn outcome_to_str(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Win | Outcome::Blackjack => "win",
        Outcome::Lose => "lose",
        Outcome::Push => "push",
    }
}

fn resolution_to_str(resolution: Resolution) -> &'static str {
    match resolution {
        Resolution::PlayerBust => "PlayerBust",
        Resolution::DealerBust => "DealerBust",
        Resolution::NaturalPush => "NaturalPush",
        Resolution::PlayerNatural => "PlayerNatural",
        Resolution::DealerNatural => "DealerNatural",
        Resolution::PlayerHigher => "PlayerHigher",
        Resolution::DealerHigher => "DealerHigher",
        Resolution::TotalsTied => "TotalsTied",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
