//! Card types and comparison rules.
//!
//! A card is identified by an integer in `0..=32`. Identifiers `0..=31` encode
//! four suits of eight ranks each (`suit = id / 8`, `rank = id % 8`); `32` is
//! the Weli, which reports suit Schell and rank VII but is a card of its own.

use core::fmt;

use crate::error::CardError;

/// Number of distinct cards in a Watten deck.
pub const DECK_SIZE: usize = 33;

/// Identifier of the Weli.
const WELI_ID: u8 = 32;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Schell (bells).
    Schell,
    /// Herz (hearts).
    Herz,
    /// Eichel (acorns).
    Eichel,
    /// Laub (leaves).
    Laub,
}

impl Suit {
    /// All suits in identifier order.
    pub const ALL: [Self; 4] = [Self::Schell, Self::Herz, Self::Eichel, Self::Laub];

    /// Returns the suit's position in identifier order.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    const fn from_index(index: u8) -> Self {
        match index {
            0 => Self::Schell,
            1 => Self::Herz,
            2 => Self::Eichel,
            _ => Self::Laub,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Schell => "Schell",
            Self::Herz => "Herz",
            Self::Eichel => "Eichel",
            Self::Laub => "Laub",
        })
    }
}

/// Card rank, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// VII.
    Seven,
    /// VIII.
    Eight,
    /// IX.
    Nine,
    /// X.
    Ten,
    /// Unter.
    Unter,
    /// Ober.
    Ober,
    /// König.
    Koenig,
    /// Sau.
    Sau,
}

impl Rank {
    /// All ranks in identifier order.
    pub const ALL: [Self; 8] = [
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Unter,
        Self::Ober,
        Self::Koenig,
        Self::Sau,
    ];

    /// Returns the rank's position in identifier order.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    const fn from_index(index: u8) -> Self {
        match index {
            0 => Self::Seven,
            1 => Self::Eight,
            2 => Self::Nine,
            3 => Self::Ten,
            4 => Self::Unter,
            5 => Self::Ober,
            6 => Self::Koenig,
            _ => Self::Sau,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Seven => "VII",
            Self::Eight => "VIII",
            Self::Nine => "IX",
            Self::Ten => "X",
            Self::Unter => "Unter",
            Self::Ober => "Ober",
            Self::Koenig => "König",
            Self::Sau => "Sau",
        })
    }
}

/// Outcome of comparing the ranks of two cards.
///
/// Ranks are only ordered within a suit, so cards of different suits compare
/// as [`RankOrdering::Incomparable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RankOrdering {
    /// Same suit, lower rank.
    Less,
    /// Same suit, same rank.
    Equal,
    /// Same suit, higher rank.
    Greater,
    /// Different suits.
    Incomparable,
}

/// A playing card.
///
/// `==` compares card identity. Use [`Card::same_suit`] for the suit check the
/// trick rules are built on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "server",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "i16", into = "u8")
)]
pub struct Card {
    id: u8,
}

impl Card {
    /// The Weli, the 33rd card.
    pub const WELI: Self = Self { id: WELI_ID };

    /// Creates a card from its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidCard`] if `id` is greater than 32.
    ///
    /// # Example
    ///
    /// ```
    /// use watten::{Card, Rank, Suit};
    ///
    /// let card = Card::new(21).unwrap();
    /// assert_eq!(card.suit(), Suit::Eichel);
    /// assert_eq!(card.rank(), Rank::Ober);
    /// assert!(Card::new(33).is_err());
    /// ```
    pub const fn new(id: u8) -> Result<Self, CardError> {
        if id > WELI_ID {
            return Err(CardError::InvalidCard(id as i16));
        }
        Ok(Self { id })
    }

    /// Creates the ordinary card with the given suit and rank.
    ///
    /// This never yields the Weli.
    #[must_use]
    pub const fn from_parts(suit: Suit, rank: Rank) -> Self {
        Self {
            id: suit.index() * 8 + rank.index(),
        }
    }

    /// Returns the card identifier.
    #[must_use]
    pub const fn id(self) -> u8 {
        self.id
    }

    /// Returns the suit. The Weli reports [`Suit::Schell`].
    #[must_use]
    pub const fn suit(self) -> Suit {
        if self.id == WELI_ID {
            Suit::Schell
        } else {
            Suit::from_index(self.id / 8)
        }
    }

    /// Returns the rank. The Weli reports [`Rank::Seven`].
    #[must_use]
    pub const fn rank(self) -> Rank {
        if self.id == WELI_ID {
            Rank::Seven
        } else {
            Rank::from_index(self.id % 8)
        }
    }

    /// Returns whether this card is the Weli.
    #[must_use]
    pub const fn is_weli(self) -> bool {
        self.id == WELI_ID
    }

    /// Returns whether both cards share a suit.
    #[must_use]
    pub const fn same_suit(self, other: Self) -> bool {
        self.suit().index() == other.suit().index()
    }

    /// Returns whether both cards are the same card.
    #[must_use]
    pub const fn identical(self, other: Self) -> bool {
        self.id == other.id
    }

    /// Compares ranks of two cards of the same suit.
    ///
    /// # Example
    ///
    /// ```
    /// use watten::{Card, Rank, RankOrdering, Suit};
    ///
    /// let ober = Card::from_parts(Suit::Herz, Rank::Ober);
    /// let ten = Card::from_parts(Suit::Herz, Rank::Ten);
    /// let sau = Card::from_parts(Suit::Laub, Rank::Sau);
    /// assert_eq!(ober.compare_rank(ten), RankOrdering::Greater);
    /// assert_eq!(ober.compare_rank(sau), RankOrdering::Incomparable);
    /// ```
    #[must_use]
    pub fn compare_rank(self, other: Self) -> RankOrdering {
        if !self.same_suit(other) {
            return RankOrdering::Incomparable;
        }
        match self.rank().cmp(&other.rank()) {
            core::cmp::Ordering::Less => RankOrdering::Less,
            core::cmp::Ordering::Equal => RankOrdering::Equal,
            core::cmp::Ordering::Greater => RankOrdering::Greater,
        }
    }

    /// Iterates over all 33 cards in identifier order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..=WELI_ID).map(|id| Self { id })
    }
}

impl TryFrom<u8> for Card {
    type Error = CardError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Self::new(id)
    }
}

impl TryFrom<i16> for Card {
    type Error = CardError;

    fn try_from(id: i16) -> Result<Self, Self::Error> {
        u8::try_from(id)
            .map_err(|_| CardError::InvalidCard(id))
            .and_then(Self::new)
    }
}

impl From<Card> for u8 {
    fn from(card: Card) -> Self {
        card.id
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_weli() {
            f.write_str("Weli")
        } else {
            write!(f, "{} {}", self.suit(), self.rank())
        }
    }
}
