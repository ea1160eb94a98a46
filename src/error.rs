//! Error types for engine and network operations.

use thiserror::Error;

/// Errors that can occur when decoding a card identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// The identifier lies outside `0..=32`.
    #[error("invalid card identifier {0}")]
    InvalidCard(i16),
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid match phase for dealing.
    #[error("invalid match phase for dealing")]
    InvalidState,
    /// Not enough cards left in the deck.
    #[error("requested {requested} cards but only {remaining} remain in the deck")]
    EmptyDeck {
        /// Number of cards requested.
        requested: usize,
        /// Number of cards left in the deck.
        remaining: usize,
    },
}

/// Errors that can occur while seating players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum JoinError {
    /// Invalid match phase for joining.
    #[error("invalid match phase for joining")]
    InvalidState,
    /// A player with this name is already seated.
    #[error("a player with this name is already seated")]
    DuplicateName,
    /// All four seats are taken.
    #[error("all seats are taken")]
    TableFull,
}

/// Errors that can occur when a card is played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// Invalid match phase for playing a card.
    #[error("invalid match phase for playing a card")]
    InvalidState,
    /// Not this player's turn.
    #[error("not this player's turn")]
    NotYourTurn,
    /// The card is not in the player's hand.
    #[error("card is not in the player's hand")]
    NotInHand,
    /// The card is in hand but not among the legal plays.
    #[error("card is not a legal play")]
    IllegalPlay,
}

/// Errors that can occur while scoring a point or a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// Invalid match phase for scoring.
    #[error("invalid match phase for scoring")]
    InvalidState,
}

/// Errors raised by the message framing layer.
#[cfg(feature = "server")]
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// The declared frame length exceeds the configured maximum.
    #[error("frame exceeds the maximum length")]
    FrameTooLarge,
    /// The payload is not a valid message.
    #[error("failed to decode message: {0}")]
    Decode(#[source] serde_json::Error),
    /// The message could not be serialized.
    #[error("failed to encode message: {0}")]
    Encode(#[source] serde_json::Error),
    /// The underlying stream failed.
    #[error("stream error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while accepting players or running a match.
#[cfg(feature = "server")]
#[derive(Debug, Error)]
pub enum ServerError {
    /// The credential check rejected the player.
    #[error("authentication failed for {0}")]
    AuthenticationFailed(alloc::string::String),
    /// A player with this name is already connected.
    #[error("name {0} is already taken")]
    DuplicateName(alloc::string::String),
    /// The first message of a connection was not a login.
    #[error("expected a login message")]
    ExpectedLogin,
    /// A seated player's connection closed.
    #[error("connection to {0} lost")]
    ConnectionLost(alloc::string::String),
    /// Not enough players connected before the accept deadline.
    #[error("timed out waiting for players")]
    ConnectionTimeout,
    /// A connection did not complete its login in time.
    #[error("timed out waiting for a login")]
    LoginTimeout,
    /// A connection sent an undecodable frame.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),
    /// The listener failed.
    #[error("listener error: {0}")]
    Io(#[from] std::io::Error),
    /// Dealing failed; indicates a broken engine invariant.
    #[error("deal failed: {0}")]
    Deal(#[from] DealError),
    /// Seating failed; indicates a broken engine invariant.
    #[error("seating failed: {0}")]
    Join(#[from] JoinError),
    /// A play was rejected for a reason other than client input.
    #[error("play failed: {0}")]
    Play(#[from] PlayError),
    /// Scoring failed; indicates a broken engine invariant.
    #[error("scoring failed: {0}")]
    Score(#[from] ScoreError),
}

/// Errors raised by [`crate::client::Client`].
#[cfg(feature = "server")]
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server refused the login.
    #[error("connection refused: {0}")]
    Refused(alloc::string::String),
    /// The server replied with something other than a login answer.
    #[error("unexpected reply to login")]
    UnexpectedReply,
    /// The server closed the connection.
    #[error("connection closed by server")]
    ConnectionLost,
    /// Framing or decoding failed.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),
    /// Connecting failed.
    #[error("connect error: {0}")]
    Io(#[from] std::io::Error),
}
