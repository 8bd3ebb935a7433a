//! Session lifecycle tests: round cap, running out of funds, reset, history.

use bjsolo::{
    BetError, Card, DealError, Deck, Game, GameOptions, Outcome, Phase, Rank, ResetError,
    RoundingMode, Suit,
};

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

/// Player 20 against dealer 18: the player wins after standing.
fn winning_round() -> Deck {
    Deck::stacked(&[
        card(Rank::King, Suit::Hearts),
        card(Rank::Ten, Suit::Clubs),
        card(Rank::Queen, Suit::Hearts),
        card(Rank::Eight, Suit::Clubs),
    ])
    .unwrap()
}

/// Player 17 against dealer 20: the player loses after standing.
fn losing_round() -> Deck {
    Deck::stacked(&[
        card(Rank::Ten, Suit::Hearts),
        card(Rank::King, Suit::Clubs),
        card(Rank::Seven, Suit::Hearts),
        card(Rank::Queen, Suit::Clubs),
    ])
    .unwrap()
}

fn play_standing(game: &mut Game, bet: u64, deck: Deck) -> bjsolo::RoundResult {
    game.place_bet(bet).unwrap();
    game.deal_from(deck).unwrap();
    game.stand().unwrap();
    game.dealer_play().unwrap();
    game.resolve().unwrap()
}

#[test]
fn round_cap_ends_session_regardless_of_bankroll() {
    let mut game = Game::new(GameOptions::default(), 5);

    for round in 1..=5 {
        assert!(!game.is_game_over());
        assert_eq!(game.rounds_remaining(), 6 - round);
        let result = play_standing(&mut game, 100, winning_round());
        assert_eq!(result.round, round);
    }

    assert_eq!(game.rounds_played(), 5);
    assert_eq!(game.rounds_remaining(), 0);
    assert_eq!(game.phase(), Phase::GameOver);
    assert_eq!(game.bankroll(), 3000);

    assert_eq!(game.place_bet(100).unwrap_err(), BetError::GameOver);
    assert_eq!(game.deal().unwrap_err(), DealError::GameOver);
    assert_eq!(game.phase(), Phase::GameOver);
}

#[test]
fn configured_round_cap_is_honored() {
    let mut game = Game::new(GameOptions::default().with_round_cap(2), 5);
    play_standing(&mut game, 100, losing_round());
    assert!(!game.is_game_over());
    play_standing(&mut game, 100, losing_round());
    assert!(game.is_game_over());
}

#[test]
fn zero_round_cap_starts_over() {
    let mut game = Game::new(GameOptions::default().with_round_cap(0), 5);
    assert_eq!(game.phase(), Phase::GameOver);
    assert!(game.check_game_over());
}

#[test]
fn losing_everything_ends_session() {
    let mut game = Game::new(GameOptions::default(), 5);
    let result = play_standing(&mut game, 2500, losing_round());

    assert_eq!(result.outcome, Outcome::Lose);
    assert_eq!(game.bankroll(), 0);
    assert_eq!(game.rounds_played(), 1);
    assert_eq!(game.phase(), Phase::GameOver);
    assert_eq!(game.place_bet(0).unwrap_err(), BetError::GameOver);
}

#[test]
fn reset_restores_bankroll_and_round_count() {
    let mut game = Game::new(GameOptions::default().with_round_cap(1), 5);
    play_standing(&mut game, 1000, losing_round());
    assert!(game.is_game_over());

    game.reset().unwrap();
    assert_eq!(game.phase(), Phase::Betting);
    assert_eq!(game.bankroll(), 2500);
    assert_eq!(game.bet(), 0);
    assert_eq!(game.rounds_played(), 0);
    assert!(game.player_hand().is_empty());
    assert!(game.last_result().is_none());
    assert_eq!(game.history().len(), 1);

    play_standing(&mut game, 100, winning_round());
    assert_eq!(game.history().len(), 2);
}

#[test]
fn reset_discards_an_unplayed_bet() {
    let mut game = Game::new(GameOptions::default(), 5);
    game.place_bet(400).unwrap();
    game.reset().unwrap();
    assert_eq!(game.bankroll(), 2500);
    assert_eq!(game.bet(), 0);
}

#[test]
fn reset_is_refused_while_a_round_is_in_progress() {
    let mut game = Game::new(GameOptions::default(), 5);
    game.place_bet(100).unwrap();
    game.deal_from(winning_round()).unwrap();

    assert_eq!(game.reset().unwrap_err(), ResetError::RoundInProgress);
    assert_eq!(game.phase(), Phase::PlayerTurn);
    assert_eq!(game.bet(), 100);
    assert_eq!(game.player_hand().len(), 2);

    game.stand().unwrap();
    assert_eq!(game.reset().unwrap_err(), ResetError::RoundInProgress);
    game.dealer_play().unwrap();
    assert_eq!(game.reset().unwrap_err(), ResetError::RoundInProgress);

    let result = game.resolve().unwrap();
    assert_eq!(result.outcome, Outcome::Win);
    assert_eq!(game.bankroll(), 2600);

    game.reset().unwrap();
    assert_eq!(game.bankroll(), 2500);
    assert_eq!(game.rounds_played(), 0);
}

#[test]
fn history_records_each_resolved_round() {
    let mut game = Game::new(GameOptions::default(), 5);
    play_standing(&mut game, 100, winning_round());
    play_standing(&mut game, 300, losing_round());

    let history = game.history();
    assert_eq!(history.len(), 2);

    assert_eq!(history[0].round, 1);
    assert_eq!(history[0].outcome, Outcome::Win);
    assert_eq!(history[0].bet, 100);
    assert_eq!(history[0].payout, 200);
    assert_eq!(history[0].bankroll, 2600);

    assert_eq!(history[1].round, 2);
    assert_eq!(history[1].outcome, Outcome::Lose);
    assert_eq!(history[1].bet, 300);
    assert_eq!(history[1].payout, 0);
    assert_eq!(history[1].bankroll, 2300);
}

#[test]
fn natural_payout_multiplier_and_rounding() {
    let natural = || {
        Deck::stacked(&[
            card(Rank::Ace, Suit::Hearts),
            card(Rank::Nine, Suit::Clubs),
            card(Rank::Jack, Suit::Hearts),
            card(Rank::Seven, Suit::Clubs),
        ])
        .unwrap()
    };

    let options = GameOptions::default().with_natural_payout(2.5);
    let mut down = Game::new(options.clone(), 1);
    down.place_bet(15).unwrap();
    down.deal_from(natural()).unwrap();
    let result = down.resolve().unwrap();
    assert_eq!(result.outcome, Outcome::Blackjack);
    assert_eq!(result.payout, 37);

    let mut up = Game::new(options.with_rounding_natural(RoundingMode::Up), 1);
    up.place_bet(15).unwrap();
    up.deal_from(natural()).unwrap();
    assert_eq!(up.resolve().unwrap().payout, 38);
}

#[test]
fn score_entry_reports_net_since_session_start() {
    let mut game = Game::new(GameOptions::default(), 5);
    play_standing(&mut game, 100, winning_round());
    let result = play_standing(&mut game, 400, losing_round());

    let entry = result.score_entry("ada", game.options().starting_bankroll);
    assert_eq!(entry.name, "ada");
    assert_eq!(entry.net, -300);
    assert!(!entry.win);
}
