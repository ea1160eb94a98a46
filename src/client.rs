//! Player-side connection.

use futures::{SinkExt, StreamExt};
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::{TcpStream, ToSocketAddrs};
use tokio_util::codec::Framed;

use crate::card::Card;
use crate::error::ClientError;
use crate::protocol::{ClientCodec, ClientCommand, ClientMessage, ServerCommand, ServerMessage};

/// A logged-in player connection.
///
/// Every outgoing message is signed with the player's name.
#[derive(Debug)]
pub struct Client<S> {
    name: String,
    framed: Framed<S, ClientCodec>,
}

impl Client<TcpStream> {
    /// Connects to a server and logs in.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Refused`] if the server rejects the login, or an
    /// I/O error if the connection cannot be established.
    pub async fn connect(
        addr: impl ToSocketAddrs,
        name: impl Into<String>,
        password: &str,
    ) -> Result<Self, ClientError> {
        let stream = TcpStream::connect(addr).await?;
        Self::login(stream, name, password).await
    }
}

impl<S> Client<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    /// Logs in over an established stream.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Refused`] with the server's reason,
    /// [`ClientError::UnexpectedReply`] if the answer is not a login answer,
    /// and [`ClientError::ConnectionLost`] if the stream closes first.
    pub async fn login(stream: S, name: impl Into<String>, password: &str) -> Result<Self, ClientError> {
        let name = name.into();
        let mut framed = Framed::new(stream, ClientCodec::default());
        let login = ClientCommand::Login {
            password: password.to_owned(),
        };
        framed.send(ClientMessage::new(name.clone(), login)).await?;

        match framed.next().await {
            Some(Ok(ServerMessage {
                command: ServerCommand::Connected,
                ..
            })) => Ok(Self { name, framed }),
            Some(Ok(ServerMessage {
                command: ServerCommand::ConnectionRefused { reason },
                ..
            })) => Err(ClientError::Refused(reason)),
            Some(Ok(_)) => Err(ClientError::UnexpectedReply),
            Some(Err(err)) => Err(err.into()),
            None => Err(ClientError::ConnectionLost),
        }
    }

    /// Returns the name this client logged in with.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Waits for the next server command.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::ConnectionLost`] once the server closes the
    /// connection.
    pub async fn recv(&mut self) -> Result<ServerCommand, ClientError> {
        match self.framed.next().await {
            Some(message) => Ok(message?.command),
            None => Err(ClientError::ConnectionLost),
        }
    }

    /// Sends a command signed with this client's name.
    ///
    /// # Errors
    ///
    /// Returns an error if the stream fails.
    pub async fn send(&mut self, command: ClientCommand) -> Result<(), ClientError> {
        let message = ClientMessage::new(self.name.clone(), command);
        self.framed.send(message).await?;
        Ok(())
    }

    /// Plays `card`.
    ///
    /// # Errors
    ///
    /// Returns an error if the stream fails.
    pub async fn play_card(&mut self, card: Card) -> Result<(), ClientError> {
        self.send(ClientCommand::PlayCard { card }).await
    }
}
