//! Login handshake and player admission.

use core::future::Future;
use core::net::SocketAddr;
use core::time::Duration;

use futures::stream::FuturesUnordered;
use futures::{SinkExt, StreamExt};
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::{TcpListener, TcpStream};
use tokio::time::Instant;
use tokio::time::error::Elapsed;
use tokio_util::codec::Framed;
use tracing::{debug, info, warn};

use crate::error::ServerError;
use crate::protocol::{ClientCommand, ClientMessage, ServerCodec, ServerCommand, ServerMessage};
use crate::seat::SEATS;

use super::auth::Authenticator;
use super::options::ServerOptions;

/// A connection that completed the login handshake.
#[derive(Debug)]
pub struct Seated<S> {
    /// The player's name, unique among seated players.
    pub name: String,
    /// The framed connection.
    pub framed: Framed<S, ServerCodec>,
}

/// Runs the login handshake on a fresh connection.
///
/// The first message must be a `LOGIN` carrying a secret accepted by `auth`
/// and a name not in `taken`. On success the player receives `CONNECTED`; on
/// failure `CONNECTION_REFUSED` is sent and the connection is dropped.
///
/// # Errors
///
/// Returns [`ServerError::ExpectedLogin`] if the connection closes or sends
/// anything but a login, [`ServerError::AuthenticationFailed`] or
/// [`ServerError::DuplicateName`] when the login is refused, and a protocol
/// or I/O error if the stream fails.
pub async fn login<S>(
    mut framed: Framed<S, ServerCodec>,
    auth: &dyn Authenticator,
    taken: &[String],
) -> Result<Seated<S>, ServerError>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let name = authenticate(&mut framed, auth).await?;
    seat(framed, name, taken).await
}

/// Reads the `LOGIN` and checks its credentials.
async fn authenticate<S>(framed: &mut Framed<S, ServerCodec>, auth: &dyn Authenticator) -> Result<String, ServerError>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let Some(message) = framed.next().await else {
        return Err(ServerError::ExpectedLogin);
    };
    let ClientMessage { from, command } = message?;

    let ClientCommand::Login { password } = command else {
        refuse(framed, &from, "expected LOGIN").await;
        return Err(ServerError::ExpectedLogin);
    };
    if from.is_empty() || !auth.verify(&from, &password) {
        refuse(framed, &from, "invalid credentials").await;
        return Err(ServerError::AuthenticationFailed(from));
    }
    Ok(from)
}

/// Confirms an authenticated player unless the name is already seated.
async fn seat<S>(mut framed: Framed<S, ServerCodec>, name: String, taken: &[String]) -> Result<Seated<S>, ServerError>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    if taken.contains(&name) {
        refuse(&mut framed, &name, "name already taken").await;
        return Err(ServerError::DuplicateName(name));
    }
    framed
        .send(ServerMessage::new(name.clone(), ServerCommand::Connected))
        .await?;
    Ok(Seated { name, framed })
}

async fn refuse<S>(framed: &mut Framed<S, ServerCodec>, to: &str, reason: &str)
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let refusal = ServerCommand::ConnectionRefused {
        reason: reason.to_owned(),
    };
    // The connection is dropped either way.
    if let Err(err) = framed.send(ServerMessage::new(to, refusal)).await {
        debug!(error = %err, "failed to deliver refusal");
    }
}

/// Accepts connections until four players are seated.
///
/// Handshakes run concurrently, so a connection that never logs in does not
/// hold up the others. Each handshake is bounded by the handshake timeout,
/// and names are checked against the seated players when a login completes.
/// Connections that fail are refused and the listener keeps waiting. With an
/// accept timeout set, the whole admission must finish before it elapses.
///
/// # Errors
///
/// Returns [`ServerError::ConnectionTimeout`] when the deadline passes and
/// [`ServerError::Io`] if the listener fails.
pub async fn accept_players(
    listener: &TcpListener,
    auth: &dyn Authenticator,
    options: &ServerOptions,
) -> Result<Vec<Seated<TcpStream>>, ServerError> {
    let deadline = options.accept_timeout.map(|timeout| Instant::now() + timeout);
    until(deadline, fill_table(listener, auth, options))
        .await
        .map_err(|_| ServerError::ConnectionTimeout)?
}

async fn fill_table(
    listener: &TcpListener,
    auth: &dyn Authenticator,
    options: &ServerOptions,
) -> Result<Vec<Seated<TcpStream>>, ServerError> {
    let mut seated: Vec<Seated<TcpStream>> = Vec::with_capacity(SEATS);
    let mut pending = FuturesUnordered::new();

    while seated.len() < SEATS {
        tokio::select! {
            accepted = listener.accept() => {
                let (stream, addr) = accepted?;
                debug!(%addr, pending = pending.len() + 1, "connection opened");
                let framed = Framed::new(stream, ServerCodec::new(options.max_frame_len));
                pending.push(handshake(framed, addr, auth, options.handshake_timeout));
            }
            Some((addr, outcome)) = pending.next() => {
                let joined = match outcome {
                    Ok((framed, name)) => {
                        let taken: Vec<String> = seated.iter().map(|player| player.name.clone()).collect();
                        seat(framed, name, &taken).await
                    }
                    Err(err) => Err(err),
                };
                match joined {
                    Ok(player) => {
                        info!(
                            player = %player.name,
                            %addr,
                            "player joined ({}/{SEATS})",
                            seated.len() + 1
                        );
                        seated.push(player);
                    }
                    Err(err) => warn!(%addr, error = %err, "login refused"),
                }
            }
        }
    }

    if !pending.is_empty() {
        debug!(dropped = pending.len(), "table full, closing pending handshakes");
    }
    Ok(seated)
}

type Handshake = (SocketAddr, Result<(Framed<TcpStream, ServerCodec>, String), ServerError>);

async fn handshake(
    mut framed: Framed<TcpStream, ServerCodec>,
    addr: SocketAddr,
    auth: &dyn Authenticator,
    limit: Option<Duration>,
) -> Handshake {
    let deadline = limit.map(|limit| Instant::now() + limit);
    let outcome = match until(deadline, authenticate(&mut framed, auth)).await {
        Ok(Ok(name)) => Ok((framed, name)),
        Ok(Err(err)) => Err(err),
        Err(_) => Err(ServerError::LoginTimeout),
    };
    (addr, outcome)
}

async fn until<F: Future>(deadline: Option<Instant>, future: F) -> Result<F::Output, Elapsed> {
    match deadline {
        Some(deadline) => tokio::time::timeout_at(deadline, future).await,
        None => Ok(future.await),
    }
}
