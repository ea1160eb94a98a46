//! TCP match server.
//!
//! A [`Server`] accepts connections until four players have logged in, seats
//! them in login order, and drives the match through a [`Table`]. Seats 0 and
//! 2 form team 1, seats 1 and 3 team 2.

use tokio::net::TcpListener;
use tracing::info;

use crate::error::ServerError;

mod auth;
mod lobby;
mod options;
mod table;

pub use auth::{Authenticator, MemoryAuthenticator, OpenAuthenticator};
pub use lobby::{Seated, accept_players, login};
pub use options::{DEFAULT_BIND, DEFAULT_HANDSHAKE_TIMEOUT, ServerOptions};
pub use table::{MatchSummary, Table};

/// Hosts one match at a time.
pub struct Server {
    options: ServerOptions,
    auth: Box<dyn Authenticator>,
}

impl Server {
    /// Creates a server checking logins with `auth`.
    #[must_use]
    pub fn new(options: ServerOptions, auth: impl Authenticator + 'static) -> Self {
        Self {
            options,
            auth: Box::new(auth),
        }
    }

    /// Returns the server options.
    #[must_use]
    pub const fn options(&self) -> &ServerOptions {
        &self.options
    }

    /// Binds the configured address and plays one match.
    ///
    /// # Errors
    ///
    /// Returns an error if binding fails or the match ends abnormally.
    pub async fn run(&self) -> Result<MatchSummary, ServerError> {
        let listener = TcpListener::bind(self.options.bind).await?;
        info!(addr = %listener.local_addr()?, "listening");
        self.serve(&listener).await
    }

    /// Seats four players from `listener` and plays one match.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::ConnectionTimeout`] if the table does not fill
    /// in time, or the error that ended the match.
    pub async fn serve(&self, listener: &TcpListener) -> Result<MatchSummary, ServerError> {
        let players = accept_players(listener, self.auth.as_ref(), &self.options).await?;
        let seed = self.options.seed.unwrap_or_else(rand::random);
        info!(seed, "table full, starting match");
        let table = Table::new(self.options.match_options, seed, players)?;
        table.run(self.options.rounds).await
    }
}
