//! Bankroll and wager bookkeeping tests.

use bjsolo::{ActionError, BetError, Ledger, Outcome, RoundingMode};

fn ledger(bankroll: u64) -> Ledger {
    Ledger::new(bankroll, 2.0, RoundingMode::Down)
}

#[test]
fn bets_accumulate() {
    let mut ledger = ledger(1000);
    ledger.place_bet(100).unwrap();
    ledger.place_bet(250).unwrap();
    assert_eq!(ledger.bet(), 350);
    assert_eq!(ledger.bankroll(), 650);
    assert_eq!(ledger.funds(), 1000);
}

#[test]
fn oversized_bet_changes_nothing() {
    let mut ledger = ledger(100);
    ledger.place_bet(40).unwrap();
    assert_eq!(ledger.place_bet(61), Err(BetError::InsufficientFunds));
    assert_eq!(ledger.bankroll(), 60);
    assert_eq!(ledger.bet(), 40);
}

#[test]
fn payouts_by_outcome() {
    for (outcome, payout, bankroll) in [
        (Outcome::Win, 200, 1100),
        (Outcome::Blackjack, 200, 1100),
        (Outcome::Push, 100, 1000),
        (Outcome::Lose, 0, 900),
    ] {
        let mut ledger = ledger(1000);
        ledger.place_bet(100).unwrap();
        assert_eq!(ledger.resolve_payout(outcome), payout, "{outcome:?}");
        assert_eq!(ledger.bankroll(), bankroll, "{outcome:?}");
        assert_eq!(ledger.bet(), 0, "{outcome:?}");
    }
}

#[test]
fn natural_payout_rounds_per_mode() {
    for (mode, expected) in [
        (RoundingMode::Down, 12),
        (RoundingMode::Up, 13),
        (RoundingMode::Nearest, 13),
    ] {
        let mut ledger = Ledger::new(100, 2.5, mode);
        ledger.place_bet(5).unwrap();
        assert_eq!(ledger.payout_for(Outcome::Blackjack), expected, "{mode:?}");
    }
}

#[test]
fn double_matches_the_wager() {
    let mut ledger = ledger(300);
    ledger.place_bet(100).unwrap();
    ledger.double().unwrap();
    assert_eq!(ledger.bet(), 200);
    assert_eq!(ledger.bankroll(), 100);

    assert_eq!(ledger.double(), Err(ActionError::InsufficientFunds));
    assert_eq!(ledger.bet(), 200);
    assert_eq!(ledger.bankroll(), 100);
}

#[test]
fn reset_drops_the_wager() {
    let mut ledger = ledger(300);
    ledger.place_bet(100).unwrap();
    ledger.reset(500);
    assert_eq!(ledger.bankroll(), 500);
    assert_eq!(ledger.bet(), 0);
}
