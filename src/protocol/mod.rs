//! Wire protocol between the server and the four players.
//!
//! Every message is a JSON object carrying a `command` field. Server messages
//! add a `to` field naming the recipient, client messages a `from` field naming
//! the sender; the remaining fields depend on the command:
//!
//! ```json
//! {"command": "PLAYER_TURN", "to": "Marcel", "available": [3, 12, 21]}
//! {"command": "PLAY_CARD", "from": "Marcel", "card": 12}
//! ```
//!
//! Messages travel in length-prefixed frames, see [`codec`].

use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::seat::Team;

pub mod codec;

pub use codec::{ClientCodec, DEFAULT_MAX_FRAME_LEN, MessageCodec, ServerCodec};

/// A message sent by the server to one player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerMessage {
    /// Name of the recipient.
    pub to: String,
    /// The command and its fields.
    #[serde(flatten)]
    pub command: ServerCommand,
}

/// Commands sent from server to client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServerCommand {
    /// The login was accepted.
    Connected,
    /// The login was rejected; the server closes the connection.
    ConnectionRefused {
        /// Why the login was rejected.
        reason: String,
    },
    /// Seated player names, rotated so the recipient comes first.
    PlayerNames {
        /// Names in turn order from the recipient's seat.
        players: Vec<String>,
    },
    /// The recipient's hand for the new point.
    NewCard {
        /// All five cards, in dealing order.
        cards: Vec<Card>,
    },
    /// The trump card, sent only to the informed players.
    Highest {
        /// The trump card.
        highest: Card,
    },
    /// Start-of-point marker.
    SoLosGehts,
    /// The recipient must play one of the listed cards.
    PlayerTurn {
        /// Cards the recipient may play.
        available: Vec<Card>,
    },
    /// A card was played into the current trick.
    UpdateTurn {
        /// Cards of the current trick, in play order.
        played: Vec<Card>,
        /// Name of the player who just played.
        last_played: String,
    },
    /// The trick is complete.
    TurnWinner {
        /// Name of the player who took the trick.
        winner: String,
    },
    /// The point is complete.
    PointWinner {
        /// The team that took the point.
        winner: Team,
        /// Round score of team 1 and team 2.
        points: [u8; 2],
    },
    /// The round is complete.
    RoundWinner {
        /// The team that reached the target score.
        winner: Team,
        /// Rounds won by team 1 and team 2.
        rounds: [u32; 2],
    },
    /// The recipient's last message was rejected.
    Error {
        /// Category of the rejection.
        kind: ErrorKind,
        /// Human-readable detail.
        message: String,
    },
    /// The match ended abnormally.
    MatchAborted {
        /// Why the match ended.
        reason: String,
    },
}

/// Categories of rejected client messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// The card is not among the available cards.
    IllegalPlay,
    /// Another player is due to play.
    NotYourTurn,
    /// The command is not valid at this point.
    UnexpectedCommand,
}

/// A message sent by a player to the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientMessage {
    /// Name of the sender.
    pub from: String,
    /// The command and its fields.
    #[serde(flatten)]
    pub command: ClientCommand,
}

/// Commands sent from client to server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClientCommand {
    /// First message of every connection.
    Login {
        /// The player's secret.
        password: String,
    },
    /// The card chosen in answer to [`ServerCommand::PlayerTurn`].
    PlayCard {
        /// The chosen card.
        card: Card,
    },
}

impl ServerMessage {
    /// Addresses `command` to `to`.
    #[must_use]
    pub fn new(to: impl Into<String>, command: ServerCommand) -> Self {
        Self {
            to: to.into(),
            command,
        }
    }
}

impl ClientMessage {
    /// Signs `command` as sent by `from`.
    #[must_use]
    pub fn new(from: impl Into<String>, command: ClientCommand) -> Self {
        Self {
            from: from.into(),
            command,
        }
    }
}
