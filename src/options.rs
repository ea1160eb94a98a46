//! Match configuration options.

/// Configuration options for a Watten match.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use watten::MatchOptions;
///
/// let options = MatchOptions::default()
///     .with_target_points(15)
///     .with_point_award(3);
/// assert_eq!(options.target_points, 15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatchOptions {
    /// Score a team must reach to win a round.
    pub target_points: u8,
    /// Score awarded to the team winning a point.
    pub point_award: u8,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            target_points: 11,
            point_award: 2,
        }
    }
}

impl MatchOptions {
    /// Sets the score that ends a round.
    ///
    /// # Example
    ///
    /// ```
    /// use watten::MatchOptions;
    ///
    /// let options = MatchOptions::default().with_target_points(18);
    /// assert_eq!(options.target_points, 18);
    /// ```
    #[must_use]
    pub const fn with_target_points(mut self, points: u8) -> Self {
        self.target_points = points;
        self
    }

    /// Sets the score awarded per point won.
    ///
    /// # Example
    ///
    /// ```
    /// use watten::MatchOptions;
    ///
    /// let options = MatchOptions::default().with_point_award(3);
    /// assert_eq!(options.point_award, 3);
    /// ```
    #[must_use]
    pub const fn with_point_award(mut self, award: u8) -> Self {
        self.point_award = award;
        self
    }
}
