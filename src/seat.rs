//! Seats and teams.

use core::fmt;

/// Number of players at a table.
pub const SEATS: usize = 4;

/// A player's seat, numbered `0..4` in connection order.
///
/// Seats 0 and 2 form [`Team::One`]; seats 1 and 3 form [`Team::Two`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Seat(u8);

impl Seat {
    /// All seats in order.
    pub const ALL: [Self; SEATS] = [Self(0), Self(1), Self(2), Self(3)];

    /// Returns the seat with the given index, if it exists.
    #[must_use]
    pub const fn new(index: usize) -> Option<Self> {
        if index < SEATS {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// Returns the seat index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the seat `steps` places further round the table.
    #[must_use]
    pub const fn offset(self, steps: usize) -> Self {
        Self(((self.0 as usize + steps) % SEATS) as u8)
    }

    /// Returns the team this seat plays for.
    #[must_use]
    pub const fn team(self) -> Team {
        if self.0 % 2 == 0 { Team::One } else { Team::Two }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "seat {}", self.0)
    }
}

/// One of the two partnerships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "server",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum Team {
    /// Seats 0 and 2.
    #[cfg_attr(feature = "server", serde(rename = "team1"))]
    One,
    /// Seats 1 and 3.
    #[cfg_attr(feature = "server", serde(rename = "team2"))]
    Two,
}

impl Team {
    /// Both teams.
    pub const ALL: [Self; 2] = [Self::One, Self::Two];

    /// Returns the team index (0 or 1).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the two seats of this team.
    #[must_use]
    pub const fn seats(self) -> [Seat; 2] {
        match self {
            Self::One => [Seat(0), Seat(2)],
            Self::Two => [Seat(1), Seat(3)],
        }
    }

    /// Returns the opposing team.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::One => f.write_str("team1"),
            Self::Two => f.write_str("team2"),
        }
    }
}
