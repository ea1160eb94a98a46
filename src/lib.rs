//! A server-authoritative engine for the four-player card game Watten.
//!
//! The engine core ([`Match`] and the card rules around it) works without
//! `std`. With the `server` feature the crate also provides the
//! length-prefixed JSON [`protocol`], a TCP [`server`] driving one match, and
//! a player-side [`client`].
//!
//! # Example
//!
//! ```
//! use watten::{Match, MatchOptions};
//!
//! let mut game = Match::new(MatchOptions::default(), 42);
//! for name in ["Marcel", "Thomas", "Daniel", "Christoph"] {
//!     game.join(name).unwrap();
//! }
//! game.deal().unwrap();
//!
//! while let Some(seat) = game.current_player() {
//!     let card = game.legal_plays(seat)[0];
//!     game.play_card(seat, card).unwrap();
//! }
//! let point = game.score_point().unwrap();
//! assert_eq!(point.points[point.winner.index()], 2);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod options;
pub mod result;
pub mod seat;
pub mod trick;
pub mod trump;

#[cfg(feature = "server")]
#[cfg_attr(docsrs, doc(cfg(feature = "server")))]
pub mod client;
#[cfg(feature = "server")]
#[cfg_attr(docsrs, doc(cfg(feature = "server")))]
pub mod protocol;
#[cfg(feature = "server")]
#[cfg_attr(docsrs, doc(cfg(feature = "server")))]
pub mod server;
#[cfg(feature = "server")]
#[cfg_attr(docsrs, doc(cfg(feature = "server")))]
pub mod telemetry;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, RankOrdering, Suit};
pub use deck::Deck;
pub use error::{CardError, DealError, JoinError, PlayError, ScoreError};
#[cfg(feature = "server")]
pub use error::{ClientError, ProtocolError, ServerError};
pub use game::{HAND_SIZE, Match, MatchPhase, TRICKS_PER_POINT, TRICKS_TO_WIN, TeamScore};
pub use options::MatchOptions;
pub use result::{DealSummary, PlayOutcome, PointResult, RoundResult, TrickResult};
pub use seat::{SEATS, Seat, Team};
pub use trick::{Play, Trick, resolve_trick};
pub use trump::{compute_trump, has_power_rank, is_rechter, legal_plays};
