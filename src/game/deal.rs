use crate::deck::Deck;
use crate::error::DealError;
use crate::result::DealSummary;
use crate::seat::SEATS;
use crate::trump::compute_trump;

use super::{DEAL_PATTERN, HAND_SIZE, Match, MatchPhase};

impl Match {
    /// Shuffles a fresh deck and deals the next point.
    ///
    /// # Errors
    ///
    /// Returns an error if the match is not in the dealing phase.
    pub fn deal(&mut self) -> Result<DealSummary, DealError> {
        let deck = Deck::shuffled(&mut self.rng);
        self.deal_from(deck)
    }

    /// Deals the next point from the given deck.
    ///
    /// Each seat in turn order receives three cards, then each receives two.
    /// The trump is derived from the first card of the first and last seats,
    /// who are recorded as informed.
    ///
    /// # Errors
    ///
    /// Returns an error if the match is not in the dealing phase or the deck
    /// holds fewer than twenty cards.
    pub fn deal_from(&mut self, mut deck: Deck) -> Result<DealSummary, DealError> {
        if self.phase != MatchPhase::Dealing {
            return Err(DealError::InvalidState);
        }

        let needed = SEATS * HAND_SIZE;
        if deck.len() < needed {
            return Err(DealError::EmptyDeck {
                requested: needed,
                remaining: deck.len(),
            });
        }

        for hand in &mut self.hands {
            hand.clear();
        }
        self.pile.clear();
        self.trick.take();

        let order = self.turn_order();
        for count in DEAL_PATTERN {
            for seat in order {
                let cards = deck.deal_top(count)?;
                self.hands[seat.index()].extend(cards);
            }
        }
        self.deck = deck;

        let first = order[0];
        let last = order[SEATS - 1];
        let trump = compute_trump(self.hands[first.index()][0], self.hands[last.index()][0]);
        let informed = [first, last];

        self.trump = Some(trump);
        self.informed = Some(informed);
        self.tricks_played = 0;
        for score in &mut self.scores {
            score.tricks = 0;
        }
        self.phase = MatchPhase::TrickPlay;

        Ok(DealSummary { trump, informed })
    }
}
