//! The trump card ("Rechter") and the follow-suit rule.

use alloc::vec::Vec;

use crate::card::Card;

/// Derives the trump card for a point.
///
/// The trump takes its rank from the first card dealt to the first player in
/// turn order and its suit from the first card dealt to the last player.
///
/// # Example
///
/// ```
/// use watten::{compute_trump, Card, Rank, Suit};
///
/// let first = Card::from_parts(Suit::Herz, Rank::Ober);
/// let last = Card::from_parts(Suit::Eichel, Rank::Nine);
/// assert_eq!(compute_trump(first, last), Card::from_parts(Suit::Eichel, Rank::Ober));
/// ```
#[must_use]
pub const fn compute_trump(first_player_first_card: Card, last_player_first_card: Card) -> Card {
    Card::from_parts(last_player_first_card.suit(), first_player_first_card.rank())
}

/// Returns whether `card` carries both the trump suit and the trump rank.
#[must_use]
pub const fn is_rechter(card: Card, trump: Card) -> bool {
    card.same_suit(trump) && card.rank().index() == trump.rank().index()
}

/// Returns whether `card` carries the trump rank (the power rank).
#[must_use]
pub const fn has_power_rank(card: Card, trump: Card) -> bool {
    card.rank().index() == trump.rank().index()
}

/// Computes which cards of `hand` may be played.
///
/// An informed player facing a trick led with a trump-suit card must follow
/// with a trump-suit card if they hold one. Everyone else may play anything.
#[must_use]
pub fn legal_plays(hand: &[Card], trick: &[Card], trump: Card, informed: bool) -> Vec<Card> {
    let trump_led = trick.first().is_some_and(|lead| lead.same_suit(trump));
    if trump_led && informed {
        let following: Vec<Card> = hand
            .iter()
            .copied()
            .filter(|card| card.same_suit(trump))
            .collect();
        if !following.is_empty() {
            return following;
        }
    }
    hand.to_vec()
}
