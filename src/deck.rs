//! The 33-card deck.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE};
use crate::error::DealError;

/// An ordered deck of cards. The first card is the top of the deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a full deck shuffled with the given random source.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards: Vec<Card> = Card::all().collect();
        cards.shuffle(rng);
        Self { cards }
    }

    /// Creates a deck with the given cards in order, top first.
    ///
    /// Useful for arranging a specific deal.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Removes and returns the top `n` cards.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::EmptyDeck`] if fewer than `n` cards remain. The
    /// deck is left untouched in that case.
    ///
    /// # Example
    ///
    /// ```
    /// use watten::{Card, Deck};
    ///
    /// let mut deck = Deck::from_cards(Card::all().collect());
    /// let top = deck.deal_top(3).unwrap();
    /// assert_eq!(top.iter().map(|c| c.id()).collect::<Vec<_>>(), [0, 1, 2]);
    /// assert_eq!(deck.len(), 30);
    /// ```
    pub fn deal_top(&mut self, n: usize) -> Result<Vec<Card>, DealError> {
        if n > self.cards.len() {
            return Err(DealError::EmptyDeck {
                requested: n,
                remaining: self.cards.len(),
            });
        }
        Ok(self.cards.drain(..n).collect())
    }

    /// Returns the remaining cards, top first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of remaining cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether the deck still holds all 33 cards.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cards.len() == DECK_SIZE
    }
}
