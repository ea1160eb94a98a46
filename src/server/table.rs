//! Drives a seated match over the players' connections.

use futures::stream::{SplitSink, SplitStream};
use futures::{SinkExt, StreamExt};
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::codec::Framed;
use tracing::{debug, error, info, warn};

use crate::card::Card;
use crate::error::{JoinError, PlayError, ProtocolError, ServerError};
use crate::game::{Match, MatchPhase};
use crate::options::MatchOptions;
use crate::protocol::{
    ClientCommand, ClientMessage, ErrorKind, ServerCodec, ServerCommand, ServerMessage,
};
use crate::result::PlayOutcome;
use crate::seat::{SEATS, Seat, Team};

use super::lobby::Seated;

/// Messages buffered from all connections before readers wait.
const INBOX_CAPACITY: usize = 32;

type Writer<S> = SplitSink<Framed<S, ServerCodec>, ServerMessage>;
type Reader<S> = SplitStream<Framed<S, ServerCodec>>;

/// Events forwarded from the per-connection reader tasks.
#[derive(Debug)]
enum Inbound {
    Message(Seat, ClientMessage),
    Closed(Seat, Option<ProtocolError>),
}

/// Final standings of a match that ran to its round limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSummary {
    /// Player names by seat.
    pub players: Vec<String>,
    /// Rounds won by team 1 and team 2.
    pub rounds: [u32; 2],
}

/// Four connected players and the match they play.
///
/// The table is the only writer of the [`Match`]. Each connection has a reader
/// task forwarding decoded messages into one bounded channel, so the table
/// sees every player's input in arrival order and answers out-of-turn
/// messages without blocking the player whose turn it is. A reader stops
/// pulling from its connection while the channel is full.
pub struct Table<S> {
    game: Match,
    names: Vec<String>,
    writers: Vec<Writer<S>>,
    inbox: mpsc::Receiver<Inbound>,
    readers: Vec<JoinHandle<()>>,
    rounds_played: u32,
}

impl<S> Table<S>
where
    S: AsyncRead + AsyncWrite + Unpin + Send + 'static,
{
    /// Seats the players in admission order and starts their reader tasks.
    ///
    /// Must be called inside a Tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Join`] unless exactly four players with
    /// distinct names are given.
    pub fn new(options: MatchOptions, seed: u64, players: Vec<Seated<S>>) -> Result<Self, ServerError> {
        if players.len() != SEATS {
            return Err(JoinError::InvalidState.into());
        }
        let mut game = Match::new(options, seed);
        let mut seats = Vec::with_capacity(SEATS);
        for player in &players {
            seats.push(game.join(player.name.clone())?);
        }
        if game.phase() != MatchPhase::Dealing {
            return Err(JoinError::InvalidState.into());
        }

        let (inbox_tx, inbox) = mpsc::channel(INBOX_CAPACITY);
        let mut names = Vec::with_capacity(SEATS);
        let mut writers = Vec::with_capacity(SEATS);
        let mut readers = Vec::with_capacity(SEATS);
        for (seat, player) in seats.into_iter().zip(players) {
            let (writer, reader) = player.framed.split();
            names.push(player.name);
            writers.push(writer);
            readers.push(tokio::spawn(forward(seat, reader, inbox_tx.clone())));
        }

        Ok(Self {
            game,
            names,
            writers,
            inbox,
            readers,
            rounds_played: 0,
        })
    }

    /// Returns the match state.
    #[must_use]
    pub const fn game(&self) -> &Match {
        &self.game
    }

    /// Plays until `rounds` rounds are complete, or forever with `None`.
    ///
    /// If a connection fails the remaining players receive `MATCH_ABORTED`
    /// and the error is returned.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::ConnectionLost`] or [`ServerError::Protocol`]
    /// when a player drops or sends an undecodable frame. Engine errors
    /// indicate a broken invariant.
    pub async fn run(mut self, rounds: Option<u32>) -> Result<MatchSummary, ServerError> {
        let result = self.play(rounds).await;
        if let Err(err) = &result {
            error!(error = %err, "match aborted");
            self.abort(&err.to_string()).await;
        }
        for reader in &self.readers {
            reader.abort();
        }
        result?;

        let rounds = Team::ALL.map(|team| self.game.score(team).rounds);
        info!(?rounds, "match finished");
        Ok(MatchSummary {
            players: self.names,
            rounds,
        })
    }

    async fn play(&mut self, rounds: Option<u32>) -> Result<(), ServerError> {
        self.announce_players().await?;
        while rounds.is_none_or(|limit| self.rounds_played < limit) {
            self.play_point().await?;
        }
        Ok(())
    }

    async fn announce_players(&mut self) -> Result<(), ServerError> {
        for seat in Seat::ALL {
            let players = (0..SEATS)
                .map(|step| self.name(seat.offset(step)).to_owned())
                .collect();
            self.send(seat, ServerCommand::PlayerNames { players }).await?;
        }
        Ok(())
    }

    async fn play_point(&mut self) -> Result<(), ServerError> {
        let deal = self.game.deal()?;
        info!(
            trump = %deal.trump,
            lead = %self.name(self.game.lead()),
            "new point"
        );

        self.broadcast(ServerCommand::SoLosGehts).await?;
        for seat in Seat::ALL {
            let cards = self.game.hand(seat).to_vec();
            self.send(seat, ServerCommand::NewCard { cards }).await?;
        }
        for seat in deal.informed {
            self.send(seat, ServerCommand::Highest { highest: deal.trump }).await?;
        }

        while let Some(seat) = self.game.current_player() {
            let outcome = self.collect_play(seat).await?;
            let last_played = self.name(seat).to_owned();
            let played = outcome.played.iter().map(|play| play.card).collect();
            self.broadcast(ServerCommand::UpdateTurn {
                played,
                last_played,
            })
            .await?;

            if let Some(trick) = outcome.completed {
                let winner = self.name(trick.winner.seat).to_owned();
                debug!(player = %winner, card = %trick.winner.card, tricks = ?trick.tricks, "trick taken");
                self.broadcast(ServerCommand::TurnWinner { winner }).await?;
            }
        }

        let point = self.game.score_point()?;
        info!(team = %point.winner, points = ?point.points, "point won");
        self.broadcast(ServerCommand::PointWinner {
            winner: point.winner,
            points: point.points,
        })
        .await?;

        if point.round_over {
            let round = self.game.score_round()?;
            self.rounds_played += 1;
            info!(
                team = %round.winner,
                rounds = ?round.rounds,
                next_lead = %self.name(round.next_lead),
                "round won"
            );
            self.broadcast(ServerCommand::RoundWinner {
                winner: round.winner,
                rounds: round.rounds,
            })
            .await?;
        }
        Ok(())
    }

    /// Prompts `seat` until it plays an acceptable card.
    async fn collect_play(&mut self, seat: Seat) -> Result<PlayOutcome, ServerError> {
        let available = self.game.legal_plays(seat);
        self.prompt(seat, &available).await?;

        loop {
            let (sender, message) = self.next_message().await?;
            if sender != seat {
                let kind = match message.command {
                    ClientCommand::PlayCard { .. } => ErrorKind::NotYourTurn,
                    ClientCommand::Login { .. } => ErrorKind::UnexpectedCommand,
                };
                let detail = format!("waiting for {}", self.name(seat));
                self.reject(sender, kind, detail).await?;
                continue;
            }
            if message.from != self.name(seat) {
                let detail = format!("connection belongs to {}", self.name(seat));
                self.reject(seat, ErrorKind::UnexpectedCommand, detail).await?;
                self.prompt(seat, &available).await?;
                continue;
            }
            let ClientCommand::PlayCard { card } = message.command else {
                self.reject(seat, ErrorKind::UnexpectedCommand, "expected PLAY_CARD".to_owned())
                    .await?;
                self.prompt(seat, &available).await?;
                continue;
            };

            match self.game.play_card(seat, card) {
                Ok(outcome) => {
                    debug!(player = %self.name(seat), %card, "card played");
                    return Ok(outcome);
                }
                Err(err @ (PlayError::NotInHand | PlayError::IllegalPlay)) => {
                    warn!(player = %self.name(seat), %card, error = %err, "play rejected");
                    self.reject(seat, ErrorKind::IllegalPlay, rejection(card, err))
                        .await?;
                    self.prompt(seat, &available).await?;
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    async fn next_message(&mut self) -> Result<(Seat, ClientMessage), ServerError> {
        match self.inbox.recv().await {
            Some(Inbound::Message(seat, message)) => Ok((seat, message)),
            Some(Inbound::Closed(seat, Some(err))) => {
                warn!(player = %self.name(seat), error = %err, "undecodable frame");
                Err(err.into())
            }
            Some(Inbound::Closed(seat, None)) => Err(ServerError::ConnectionLost(self.name(seat).to_owned())),
            None => Err(ServerError::ConnectionLost("all players".to_owned())),
        }
    }

    async fn prompt(&mut self, seat: Seat, available: &[Card]) -> Result<(), ServerError> {
        let available = available.to_vec();
        self.send(seat, ServerCommand::PlayerTurn { available }).await
    }

    async fn reject(&mut self, seat: Seat, kind: ErrorKind, message: String) -> Result<(), ServerError> {
        self.send(seat, ServerCommand::Error { kind, message }).await
    }

    async fn broadcast(&mut self, command: ServerCommand) -> Result<(), ServerError> {
        for seat in Seat::ALL {
            self.send(seat, command.clone()).await?;
        }
        Ok(())
    }

    async fn send(&mut self, seat: Seat, command: ServerCommand) -> Result<(), ServerError> {
        let to = self.names[seat.index()].clone();
        self.writers[seat.index()]
            .send(ServerMessage::new(to.clone(), command))
            .await
            .map_err(|err| {
                warn!(player = %to, error = %err, "send failed");
                ServerError::ConnectionLost(to)
            })
    }

    /// Tells every reachable player the match is over.
    async fn abort(&mut self, reason: &str) {
        for (name, writer) in self.names.iter().zip(&mut self.writers) {
            let aborted = ServerCommand::MatchAborted {
                reason: reason.to_owned(),
            };
            if let Err(err) = writer.send(ServerMessage::new(name.clone(), aborted)).await {
                debug!(player = %name, error = %err, "player unreachable");
            }
        }
    }

    fn name(&self, seat: Seat) -> &str {
        &self.names[seat.index()]
    }
}

fn rejection(card: Card, err: PlayError) -> String {
    match err {
        PlayError::NotInHand => format!("{card} is not in your hand"),
        _ => format!("{card} may not be played now"),
    }
}

/// Forwards decoded messages from one connection until it closes.
async fn forward<S>(seat: Seat, mut reader: Reader<S>, inbox: mpsc::Sender<Inbound>)
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    loop {
        let (event, closed) = match reader.next().await {
            Some(Ok(message)) => (Inbound::Message(seat, message), false),
            Some(Err(err)) => (Inbound::Closed(seat, Some(err)), true),
            None => (Inbound::Closed(seat, None), true),
        };
        if inbox.send(event).await.is_err() || closed {
            break;
        }
    }
}
