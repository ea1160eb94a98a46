use alloc::vec::Vec;

use crate::card::Card;
use crate::error::PlayError;
use crate::result::{PlayOutcome, TrickResult};
use crate::seat::Seat;
use crate::trump::legal_plays;

use super::{Match, MatchPhase, TRICKS_PER_POINT};

impl Match {
    /// Returns the seat expected to play next.
    ///
    /// Returns `None` outside of trick play.
    #[must_use]
    pub fn current_player(&self) -> Option<Seat> {
        match self.phase {
            MatchPhase::TrickPlay => Some(self.lead.offset(self.trick.len())),
            _ => None,
        }
    }

    /// Returns the cards `seat` may play into the current trick.
    ///
    /// Before the first deal this is the (empty) hand.
    #[must_use]
    pub fn legal_plays(&self, seat: Seat) -> Vec<Card> {
        let hand = self.hand(seat);
        match self.trump {
            Some(trump) => legal_plays(hand, &self.trick.cards(), trump, self.is_informed(seat)),
            None => hand.to_vec(),
        }
    }

    /// Plays a card for `seat`.
    ///
    /// The card leaves the player's hand and joins the trick. When it is the
    /// fourth card the trick is resolved: the winner's team takes the trick
    /// and the winner leads the next one. After the fifth trick the match
    /// moves to [`MatchPhase::PointScoring`].
    ///
    /// # Errors
    ///
    /// Returns an error if no trick is in progress, it is not this seat's
    /// turn, the card is not in hand, or the card is not a legal play. The
    /// hand is unchanged on error.
    pub fn play_card(&mut self, seat: Seat, card: Card) -> Result<PlayOutcome, PlayError> {
        if self.phase != MatchPhase::TrickPlay {
            return Err(PlayError::InvalidState);
        }
        if self.current_player() != Some(seat) {
            return Err(PlayError::NotYourTurn);
        }
        let position = self
            .hand(seat)
            .iter()
            .position(|held| held.identical(card))
            .ok_or(PlayError::NotInHand)?;
        if !self.legal_plays(seat).contains(&card) {
            return Err(PlayError::IllegalPlay);
        }
        let trump = self.trump.ok_or(PlayError::InvalidState)?;

        self.hands[seat.index()].remove(position);
        self.trick.push(seat, card);
        self.pile.push(card);
        let played = self.trick.plays().to_vec();

        if !self.trick.is_complete() {
            return Ok(PlayOutcome {
                played,
                completed: None,
            });
        }

        let winner = self.trick.winner(trump).ok_or(PlayError::InvalidState)?;
        let plays = self.trick.take();
        self.scores[winner.seat.team().index()].tricks += 1;
        self.lead = winner.seat;
        self.tricks_played += 1;
        if self.tricks_played >= TRICKS_PER_POINT {
            self.phase = MatchPhase::PointScoring;
        }

        Ok(PlayOutcome {
            played,
            completed: Some(TrickResult {
                plays,
                winner,
                tricks: self.tally(|score| score.tricks),
            }),
        })
    }
}
