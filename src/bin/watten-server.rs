//! Hosts one Watten match over TCP.

use core::net::SocketAddr;
use core::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use watten::MatchOptions;
use watten::server::{
    Authenticator, DEFAULT_BIND, DEFAULT_HANDSHAKE_TIMEOUT, MemoryAuthenticator, OpenAuthenticator, Server,
    ServerOptions,
};
use watten::telemetry::init_tracing;

#[derive(Debug, Parser)]
#[command(name = "watten-server")]
#[command(about = "Host a four-player Watten match", long_about = None)]
struct Args {
    /// Address to listen on (host:port)
    #[arg(long, env = "WATTEN_BIND", default_value_t = DEFAULT_BIND)]
    bind: SocketAddr,

    /// Seconds to wait for four players; waits forever if omitted
    #[arg(long)]
    accept_timeout: Option<u64>,

    /// Seconds a connection has to log in
    #[arg(long, default_value_t = DEFAULT_HANDSHAKE_TIMEOUT.as_secs())]
    handshake_timeout: u64,

    /// Rounds to play before shutting down; plays forever if omitted
    #[arg(long)]
    rounds: Option<u32>,

    /// Seed for shuffling and lead selection
    #[arg(long, env = "WATTEN_SEED")]
    seed: Option<u64>,

    /// Score a team needs to win a round
    #[arg(long, default_value_t = MatchOptions::default().target_points)]
    target_points: u8,

    /// Score awarded for winning a point
    #[arg(long, default_value_t = MatchOptions::default().point_award)]
    point_award: u8,

    /// Registered account; repeat for each player. Any login is accepted when
    /// no account is given.
    #[arg(long = "user", value_name = "NAME:PASSWORD[:EMAIL]", value_parser = parse_account)]
    users: Vec<Account>,

    /// Largest accepted frame payload in bytes
    #[arg(long, default_value_t = watten::protocol::DEFAULT_MAX_FRAME_LEN)]
    max_frame_len: usize,
}

#[derive(Debug, Clone)]
struct Account {
    name: String,
    password: String,
    email: String,
}

fn parse_account(raw: &str) -> Result<Account, String> {
    let mut parts = raw.splitn(3, ':');
    let name = parts.next().unwrap_or_default();
    let Some(password) = parts.next() else {
        return Err("expected NAME:PASSWORD[:EMAIL]".to_owned());
    };
    if name.is_empty() {
        return Err("account name must not be empty".to_owned());
    }
    Ok(Account {
        name: name.to_owned(),
        password: password.to_owned(),
        email: parts.next().unwrap_or_default().to_owned(),
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing();

    let options = ServerOptions::default()
        .with_bind(args.bind)
        .with_accept_timeout(args.accept_timeout.map(Duration::from_secs))
        .with_handshake_timeout(Some(Duration::from_secs(args.handshake_timeout)))
        .with_rounds(args.rounds)
        .with_seed(args.seed)
        .with_max_frame_len(args.max_frame_len)
        .with_match_options(
            MatchOptions::default()
                .with_target_points(args.target_points)
                .with_point_award(args.point_award),
        );

    let server = if args.users.is_empty() {
        info!("no accounts configured, accepting any login");
        Server::new(options, OpenAuthenticator)
    } else {
        let accounts = MemoryAuthenticator::new();
        for account in &args.users {
            accounts.register(&account.name, &account.email, &account.password);
        }
        info!(accounts = accounts.len(), "accounts registered");
        Server::new(options, accounts)
    };

    let summary = server.run().await.context("match ended abnormally")?;
    info!(players = ?summary.players, rounds = ?summary.rounds, "server shutting down");
    Ok(())
}
