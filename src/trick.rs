//! Trick collection and winner resolution.

use alloc::vec::Vec;

use crate::card::{Card, RankOrdering};
use crate::seat::{SEATS, Seat};
use crate::trump::{has_power_rank, is_rechter};

/// A card played by a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Play {
    /// The seat that played the card.
    pub seat: Seat,
    /// The card played.
    pub card: Card,
}

/// Determines which of the played cards wins the trick.
///
/// Returns the index into `played` of the winning card, or `None` if nothing
/// was played. Rules, in order of strength:
///
/// 1. The Rechter (trump suit and trump rank) wins outright. If two cards
///    match it (the Weli against a Schell VII trump) the earlier one wins.
/// 2. A card of the trump rank beats any card without it, whatever its suit.
///    Among power-rank cards the earliest holds.
/// 3. Otherwise a higher card of the same suit beats the current leader, and a
///    trump-suit card beats a leader of another suit.
///
/// # Example
///
/// ```
/// use watten::{resolve_trick, Card, Rank, Suit};
///
/// let trump = Card::from_parts(Suit::Herz, Rank::Unter);
/// let played = [
///     Card::from_parts(Suit::Laub, Rank::Sau),
///     Card::from_parts(Suit::Laub, Rank::Ten),
///     Card::from_parts(Suit::Herz, Rank::Seven),
///     Card::from_parts(Suit::Schell, Rank::Unter),
/// ];
/// assert_eq!(resolve_trick(&played, trump), Some(3));
/// ```
#[must_use]
pub fn resolve_trick(played: &[Card], trump: Card) -> Option<usize> {
    let (&first, rest) = played.split_first()?;
    if is_rechter(first, trump) {
        return Some(0);
    }

    let mut best = 0;
    let mut current = first;
    for (offset, &card) in rest.iter().enumerate() {
        let index = offset + 1;
        if is_rechter(card, trump) {
            return Some(index);
        }
        if has_power_rank(current, trump) {
            continue;
        }
        let takes_lead = if has_power_rank(card, trump) {
            true
        } else {
            card.compare_rank(current) == RankOrdering::Greater
                || (card.same_suit(trump) && !current.same_suit(trump))
        };
        if takes_lead {
            best = index;
            current = card;
        }
    }
    Some(best)
}

/// The cards played so far in the current trick, in play order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trick {
    plays: Vec<Play>,
}

impl Trick {
    /// Creates an empty trick.
    #[must_use]
    pub const fn new() -> Self {
        Self { plays: Vec::new() }
    }

    /// Records a play.
    pub fn push(&mut self, seat: Seat, card: Card) {
        self.plays.push(Play { seat, card });
    }

    /// Returns the plays in order.
    #[must_use]
    pub fn plays(&self) -> &[Play] {
        &self.plays
    }

    /// Returns the played cards in order.
    #[must_use]
    pub fn cards(&self) -> Vec<Card> {
        self.plays.iter().map(|play| play.card).collect()
    }

    /// Returns the number of plays.
    #[must_use]
    pub fn len(&self) -> usize {
        self.plays.len()
    }

    /// Returns whether no card has been played yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }

    /// Returns whether every seat has played.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.plays.len() == SEATS
    }

    /// Returns the winning play under the given trump.
    #[must_use]
    pub fn winner(&self, trump: Card) -> Option<Play> {
        resolve_trick(&self.cards(), trump).map(|index| self.plays[index])
    }

    /// Empties the trick, returning its plays.
    pub fn take(&mut self) -> Vec<Play> {
        core::mem::take(&mut self.plays)
    }
}
