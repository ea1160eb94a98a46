//! Outcomes reported by the match engine.

use alloc::vec::Vec;

use crate::card::Card;
use crate::seat::{Seat, Team};
use crate::trick::Play;

/// Result of dealing a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DealSummary {
    /// The trump card for this point.
    pub trump: Card,
    /// The first and last seats in turn order, who are told the trump.
    pub informed: [Seat; 2],
}

/// Result of a completed trick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrickResult {
    /// The plays in order.
    pub plays: Vec<Play>,
    /// The winning play.
    pub winner: Play,
    /// Tricks taken by each team this point, indexed by [`Team::index`].
    pub tricks: [u8; 2],
}

/// Result of playing a single card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayOutcome {
    /// The plays of the current trick so far, including this one.
    pub played: Vec<Play>,
    /// Set when this card completed the trick.
    pub completed: Option<TrickResult>,
}

/// Result of scoring a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointResult {
    /// The team that took the majority of tricks.
    pub winner: Team,
    /// Tricks taken by each team.
    pub tricks: [u8; 2],
    /// Running score of each team after the award.
    pub points: [u8; 2],
    /// Whether the award ends the round.
    pub round_over: bool,
}

/// Result of scoring a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The team that reached the target score.
    pub winner: Team,
    /// Rounds won by each team so far.
    pub rounds: [u32; 2],
    /// The seat that leads the next round, drawn from the losing team.
    pub next_lead: Seat,
}
