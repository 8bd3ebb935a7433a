//! Deck construction and drawing tests.

use std::collections::HashSet;

use bjsolo::{Card, DECK_SIZE, Deck, DeckError, Rank, Suit};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn build_has_every_card_once() {
    let deck = Deck::build();
    assert_eq!(deck.len(), DECK_SIZE);

    let unique: HashSet<Card> = deck.cards().iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);

    let codes: HashSet<String> = deck.cards().iter().map(Card::code).collect();
    assert!(codes.contains("AH"));
    assert!(codes.contains("10S"));
    assert!(codes.contains("KD"));
    assert!(codes.contains("QC"));
}

#[test]
fn shuffle_is_a_permutation_and_seed_deterministic() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let shuffled = Deck::shuffled(&mut rng);
    assert_eq!(shuffled.len(), DECK_SIZE);
    assert_ne!(shuffled, Deck::build());

    let original: HashSet<Card> = Deck::build().cards().iter().copied().collect();
    let after: HashSet<Card> = shuffled.cards().iter().copied().collect();
    assert_eq!(original, after);

    let mut again = ChaCha8Rng::seed_from_u64(7);
    assert_eq!(Deck::shuffled(&mut again), shuffled);
}

#[test]
fn draw_shrinks_deck_until_empty() {
    let mut deck = Deck::build();
    let mut seen = HashSet::new();
    while let Some(card) = deck.draw() {
        assert!(!deck.contains(&card));
        assert!(seen.insert(card));
    }
    assert_eq!(seen.len(), DECK_SIZE);
    assert!(deck.is_empty());
    assert_eq!(deck.draw(), None);
}

#[test]
fn stacked_deck_draws_top_cards_first() {
    let top = [
        Card::new(Rank::Ace, Suit::Spades),
        Card::new(Rank::Two, Suit::Hearts),
        Card::new(Rank::King, Suit::Diamonds),
    ];
    let mut deck = Deck::stacked(&top).unwrap();
    assert_eq!(deck.len(), DECK_SIZE);

    for expected in top {
        assert_eq!(deck.draw(), Some(expected));
    }
    assert_eq!(deck.len(), DECK_SIZE - 3);
    for card in top {
        assert!(!deck.contains(&card));
    }

    // The rest follows in build order.
    assert_eq!(deck.draw(), Some(Card::new(Rank::Ace, Suit::Hearts)));
}

#[test]
fn stacked_deck_rejects_duplicates() {
    let card = Card::new(Rank::Seven, Suit::Clubs);
    assert_eq!(
        Deck::stacked(&[card, card]).unwrap_err(),
        DeckError::DuplicateCard(card)
    );
}
