use rand::Rng;

use crate::error::ScoreError;
use crate::result::{PointResult, RoundResult};
use crate::seat::Team;

use super::{Match, MatchPhase, TRICKS_TO_WIN};

impl Match {
    /// Awards the finished point to the team that took three or more tricks.
    ///
    /// Trick tallies reset. If the award lifts a team to the target score the
    /// match moves to [`MatchPhase::RoundScoring`], otherwise back to
    /// [`MatchPhase::Dealing`].
    ///
    /// # Errors
    ///
    /// Returns an error if the match is not in the point-scoring phase.
    pub fn score_point(&mut self) -> Result<PointResult, ScoreError> {
        if self.phase != MatchPhase::PointScoring {
            return Err(ScoreError::InvalidState);
        }

        let tricks = self.tally(|score| score.tricks);
        let winner = if tricks[Team::One.index()] >= TRICKS_TO_WIN {
            Team::One
        } else {
            Team::Two
        };

        let award = self.options.point_award;
        let score = &mut self.scores[winner.index()];
        score.points = score.points.saturating_add(award);
        for score in &mut self.scores {
            score.tricks = 0;
        }
        self.tricks_played = 0;
        self.trump = None;
        self.informed = None;

        let points = self.tally(|score| score.points);
        let round_over = points.iter().any(|&p| p >= self.options.target_points);
        self.phase = if round_over {
            MatchPhase::RoundScoring
        } else {
            MatchPhase::Dealing
        };

        Ok(PointResult {
            winner,
            tricks,
            points,
            round_over,
        })
    }

    /// Awards the round to the team at the target score.
    ///
    /// Both scores reset and a random player of the losing team leads the
    /// next round.
    ///
    /// # Errors
    ///
    /// Returns an error if the match is not in the round-scoring phase.
    pub fn score_round(&mut self) -> Result<RoundResult, ScoreError> {
        if self.phase != MatchPhase::RoundScoring {
            return Err(ScoreError::InvalidState);
        }

        let target = self.options.target_points;
        let winner = Team::ALL
            .into_iter()
            .find(|team| self.scores[team.index()].points >= target)
            .ok_or(ScoreError::InvalidState)?;

        self.scores[winner.index()].rounds += 1;
        for score in &mut self.scores {
            score.points = 0;
        }

        let candidates = winner.opponent().seats();
        let next_lead = candidates[self.rng.random_range(0..candidates.len())];
        self.lead = next_lead;
        self.phase = MatchPhase::Dealing;

        Ok(RoundResult {
            winner,
            rounds: [
                self.scores[Team::One.index()].rounds,
                self.scores[Team::Two.index()].rounds,
            ],
            next_lead,
        })
    }
}
