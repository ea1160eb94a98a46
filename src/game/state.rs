//! Match phase and score types.

/// Match phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchPhase {
    /// Waiting for four players to take their seats.
    AwaitingPlayers,
    /// Ready to shuffle and deal the next point.
    Dealing,
    /// Collecting cards for the current trick.
    TrickPlay,
    /// All five tricks are played and the point can be scored.
    PointScoring,
    /// A team reached the target score and the round can be scored.
    RoundScoring,
}

/// Running tallies for one team.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TeamScore {
    /// Tricks taken in the current point.
    pub tricks: u8,
    /// Score in the current round.
    pub points: u8,
    /// Rounds won.
    pub rounds: u32,
}
