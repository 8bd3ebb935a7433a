//! Single-deck construction, shuffling, and drawing.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;

/// A single 52-card deck.
///
/// Cards are drawn from the end of the internal vector, so once the deck has
/// been shuffled every draw is a uniform pick from the cards that remain.
/// A deck lives for exactly one round and is rebuilt for the next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds an unshuffled deck with one card of every rank and suit.
    #[must_use]
    pub fn build() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Self { cards }
    }

    /// Builds a fresh deck and shuffles it.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::build();
        deck.shuffle(rng);
        deck
    }

    /// Builds a full deck whose first draws are `top`, in order.
    ///
    /// The remaining cards follow in build order. Useful for replaying a
    /// recorded round.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::DuplicateCard`] if a card appears twice in `top`.
    pub fn stacked(top: &[Card]) -> Result<Self, DeckError> {
        let mut rest = Self::build().cards;
        for card in top {
            let index = rest
                .iter()
                .position(|c| c == card)
                .ok_or(DeckError::DuplicateCard(*card))?;
            rest.remove(index);
        }

        // Draws pop from the back, so store the draw order reversed.
        let mut cards: Vec<Card> = top.iter().copied().chain(rest).collect();
        cards.reverse();
        Ok(Self { cards })
    }

    /// Shuffles the remaining cards uniformly (Fisher-Yates).
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns the next card, or `None` once all 52 are gone.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether every card has been drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether the card is still in the deck.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Returns the remaining cards, last element drawn first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::build()
    }
}
