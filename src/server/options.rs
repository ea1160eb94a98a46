//! Server configuration options.

use core::net::{IpAddr, Ipv4Addr, SocketAddr};
use core::time::Duration;

use crate::options::MatchOptions;
use crate::protocol::DEFAULT_MAX_FRAME_LEN;

/// Default listening address.
pub const DEFAULT_BIND: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::new(127, 0, 0, 2)), 3333);

/// Default time a connection has to complete its login.
pub const DEFAULT_HANDSHAKE_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration options for a match server.
///
/// ```
/// use std::time::Duration;
/// use watten::server::ServerOptions;
///
/// let options = ServerOptions::default()
///     .with_accept_timeout(Some(Duration::from_secs(60)))
///     .with_rounds(Some(3));
/// assert_eq!(options.rounds, Some(3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerOptions {
    /// Address to listen on.
    pub bind: SocketAddr,
    /// How long to wait for four players. `None` waits forever.
    pub accept_timeout: Option<Duration>,
    /// How long a single connection may take to log in. `None` waits forever.
    pub handshake_timeout: Option<Duration>,
    /// Largest accepted frame payload, in bytes.
    pub max_frame_len: usize,
    /// Rounds to play before stopping. `None` plays until the process stops.
    pub rounds: Option<u32>,
    /// Seed for shuffling and lead selection. `None` draws a random seed.
    pub seed: Option<u64>,
    /// Rules of the match.
    pub match_options: MatchOptions,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND,
            accept_timeout: None,
            handshake_timeout: Some(DEFAULT_HANDSHAKE_TIMEOUT),
            max_frame_len: DEFAULT_MAX_FRAME_LEN,
            rounds: None,
            seed: None,
            match_options: MatchOptions::default(),
        }
    }
}

impl ServerOptions {
    /// Sets the listening address.
    #[must_use]
    pub const fn with_bind(mut self, bind: SocketAddr) -> Self {
        self.bind = bind;
        self
    }

    /// Sets how long to wait for four players.
    #[must_use]
    pub const fn with_accept_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.accept_timeout = timeout;
        self
    }

    /// Sets how long a single connection may take to log in.
    #[must_use]
    pub const fn with_handshake_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.handshake_timeout = timeout;
        self
    }

    /// Sets the largest accepted frame payload.
    #[must_use]
    pub const fn with_max_frame_len(mut self, len: usize) -> Self {
        self.max_frame_len = len;
        self
    }

    /// Sets the number of rounds to play.
    #[must_use]
    pub const fn with_rounds(mut self, rounds: Option<u32>) -> Self {
        self.rounds = rounds;
        self
    }

    /// Sets the shuffle seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the match rules.
    #[must_use]
    pub const fn with_match_options(mut self, options: MatchOptions) -> Self {
        self.match_options = options;
        self
    }
}
