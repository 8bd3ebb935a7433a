//! Hand representation and scoring.

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;

/// Highest total that is not a bust.
pub const BLACKJACK: u8 = 21;

fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut value: u32 = 0;
    let mut aces: u32 = 0;

    for card in cards {
        if card.rank.is_ace() {
            aces += 1;
            value += 11;
        } else {
            value += u32::from(card.value());
        }
    }

    let limit = u32::from(BLACKJACK);
    while value > limit && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= limit;
    (u8::try_from(value).unwrap_or(u8::MAX), is_soft)
}

/// Best total of `cards`.
///
/// Every ace starts at 11 and is demoted to 1, one at a time, while the
/// total exceeds 21. The result is the largest total not over 21, or the
/// all-aces-low total when no such assignment exists. Busted totals above
/// 255 saturate at `u8::MAX`.
#[must_use]
pub fn total(cards: &[Card]) -> u8 {
    evaluate_cards(cards).0
}

/// Returns whether a total is a bust.
#[must_use]
pub const fn is_bust(total: u8) -> bool {
    total > BLACKJACK
}

/// Returns whether `cards` is a natural: exactly two cards totalling 21.
#[must_use]
pub const fn is_natural_blackjack(cards: &[Card], total: u8) -> bool {
    cards.len() == 2 && total == BLACKJACK
}

/// A hand held by the player or the dealer.
///
/// Hands only grow within a round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the card codes in the hand, in deal order.
    #[must_use]
    pub fn codes(&self) -> Vec<String> {
        self.cards.iter().map(Card::code).collect()
    }

    /// Calculates the value of the hand.
    #[must_use]
    pub fn total(&self) -> u8 {
        total(&self.cards)
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        is_bust(self.total())
    }

    /// Returns whether the hand is a natural blackjack.
    #[must_use]
    pub fn is_natural_blackjack(&self) -> bool {
        is_natural_blackjack(&self.cards, self.total())
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}
