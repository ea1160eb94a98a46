//! Match engine and state management.

use alloc::string::String;
use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::JoinError;
use crate::options::MatchOptions;
use crate::seat::{SEATS, Seat, Team};
use crate::trick::Trick;

mod deal;
mod play;
mod scoring;
pub mod state;

pub use state::{MatchPhase, TeamScore};

/// Cards each player holds at the start of a point.
pub const HAND_SIZE: usize = 5;

/// Cards dealt per seat in each dealing pass.
pub const DEAL_PATTERN: [usize; 2] = [3, 2];

/// Tricks played per point.
pub const TRICKS_PER_POINT: u8 = 5;

/// Tricks a team needs to take the point.
pub const TRICKS_TO_WIN: u8 = 3;

/// A Watten match between two teams of two.
///
/// The match owns the deck, the hands, and all tallies. Every transition takes
/// `&mut self`, so one owner drives the whole match.
///
/// # Example
///
/// ```
/// use watten::{Match, MatchOptions, MatchPhase};
///
/// let mut game = Match::new(MatchOptions::default(), 7);
/// for name in ["Marcel", "Thomas", "Daniel", "Christoph"] {
///     game.join(name).unwrap();
/// }
/// assert_eq!(game.phase(), MatchPhase::Dealing);
/// let deal = game.deal().unwrap();
/// assert_eq!(game.phase(), MatchPhase::TrickPlay);
/// assert_eq!(deal.informed, [game.turn_order()[0], game.turn_order()[3]]);
/// ```
#[derive(Debug, Clone)]
pub struct Match {
    options: MatchOptions,
    phase: MatchPhase,
    /// Player names by seat.
    players: Vec<String>,
    /// Hands by seat.
    hands: [Vec<Card>; SEATS],
    /// Cards not yet dealt this point.
    deck: Deck,
    /// Cards played this point.
    pile: Vec<Card>,
    trump: Option<Card>,
    informed: Option<[Seat; 2]>,
    /// Head of the turn order.
    lead: Seat,
    trick: Trick,
    tricks_played: u8,
    scores: [TeamScore; 2],
    rng: ChaCha8Rng,
}

impl Match {
    /// Creates an empty match with the given seed.
    #[must_use]
    pub fn new(options: MatchOptions, seed: u64) -> Self {
        Self {
            options,
            phase: MatchPhase::AwaitingPlayers,
            players: Vec::with_capacity(SEATS),
            hands: Default::default(),
            deck: Deck::from_cards(Vec::new()),
            pile: Vec::new(),
            trump: None,
            informed: None,
            lead: Seat::ALL[0],
            trick: Trick::new(),
            tricks_played: 0,
            scores: [TeamScore::default(); 2],
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Seats a player in the next free seat.
    ///
    /// Seats fill in joining order; the fourth player completes the table and
    /// moves the match to [`MatchPhase::Dealing`].
    ///
    /// # Errors
    ///
    /// Returns an error if the table is already full or the name is taken.
    pub fn join(&mut self, name: impl Into<String>) -> Result<Seat, JoinError> {
        if self.phase != MatchPhase::AwaitingPlayers {
            return Err(JoinError::InvalidState);
        }
        let name = name.into();
        if self.players.contains(&name) {
            return Err(JoinError::DuplicateName);
        }
        let seat = Seat::new(self.players.len()).ok_or(JoinError::TableFull)?;
        self.players.push(name);
        if self.players.len() == SEATS {
            self.phase = MatchPhase::Dealing;
        }
        Ok(seat)
    }

    /// Returns the match options.
    #[must_use]
    pub const fn options(&self) -> &MatchOptions {
        &self.options
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> MatchPhase {
        self.phase
    }

    /// Returns the seated player names in seat order.
    #[must_use]
    pub fn players(&self) -> &[String] {
        &self.players
    }

    /// Returns the name of the player in `seat`.
    #[must_use]
    pub fn player_name(&self, seat: Seat) -> Option<&str> {
        self.players.get(seat.index()).map(String::as_str)
    }

    /// Returns the seat of the named player.
    #[must_use]
    pub fn seat_of(&self, name: &str) -> Option<Seat> {
        self.players
            .iter()
            .position(|player| player == name)
            .and_then(Seat::new)
    }

    /// Returns the cards held by `seat`.
    #[must_use]
    pub fn hand(&self, seat: Seat) -> &[Card] {
        &self.hands[seat.index()]
    }

    /// Returns the trump card of the current point, once dealt.
    #[must_use]
    pub const fn trump(&self) -> Option<Card> {
        self.trump
    }

    /// Returns the two seats told the trump this point.
    #[must_use]
    pub const fn informed(&self) -> Option<[Seat; 2]> {
        self.informed
    }

    /// Returns whether `seat` was told the trump this point.
    #[must_use]
    pub fn is_informed(&self, seat: Seat) -> bool {
        self.informed.is_some_and(|seats| seats.contains(&seat))
    }

    /// Returns the seat that plays first in the next or current trick.
    #[must_use]
    pub const fn lead(&self) -> Seat {
        self.lead
    }

    /// Returns all four seats in turn order, starting with the lead.
    #[must_use]
    pub const fn turn_order(&self) -> [Seat; SEATS] {
        [
            self.lead,
            self.lead.offset(1),
            self.lead.offset(2),
            self.lead.offset(3),
        ]
    }

    /// Returns the trick in progress.
    #[must_use]
    pub const fn current_trick(&self) -> &Trick {
        &self.trick
    }

    /// Returns the number of completed tricks this point.
    #[must_use]
    pub const fn tricks_played(&self) -> u8 {
        self.tricks_played
    }

    /// Returns the tallies of `team`.
    #[must_use]
    pub const fn score(&self, team: Team) -> TeamScore {
        self.scores[team.index()]
    }

    /// Returns the undealt cards.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the cards played so far this point.
    #[must_use]
    pub fn pile(&self) -> &[Card] {
        &self.pile
    }

    fn tally(&self, field: impl Fn(&TeamScore) -> u8) -> [u8; 2] {
        [field(&self.scores[0]), field(&self.scores[1])]
    }
}
