//! A Watten player that always plays its first available card.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info, warn};

use watten::ClientError;
use watten::client::Client;
use watten::protocol::ServerCommand;
use watten::server::DEFAULT_BIND;
use watten::telemetry::init_tracing;

#[derive(Debug, Parser)]
#[command(name = "watten-bot")]
#[command(about = "Join a Watten match as a simple bot", long_about = None)]
struct Args {
    /// Server address (host:port)
    #[arg(long, env = "WATTEN_SERVER", default_value_t = DEFAULT_BIND.to_string())]
    server: String,

    /// Player name
    #[arg(short, long)]
    name: String,

    /// Player password
    #[arg(short, long, env = "WATTEN_PASSWORD", default_value = "")]
    password: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing();

    let mut client = Client::connect(&args.server, args.name, &args.password)
        .await
        .with_context(|| format!("failed to join {}", args.server))?;
    info!(name = client.name(), "connected");

    loop {
        let command = match client.recv().await {
            Ok(command) => command,
            Err(ClientError::ConnectionLost) => {
                info!("server closed the connection");
                break;
            }
            Err(err) => return Err(err.into()),
        };
        match command {
            ServerCommand::PlayerTurn { available } => {
                let Some(&card) = available.first() else {
                    warn!("prompted without any playable card");
                    continue;
                };
                debug!(%card, "playing");
                client.play_card(card).await?;
            }
            ServerCommand::Highest { highest } => info!(trump = %highest, "trump revealed"),
            ServerCommand::PointWinner { winner, points } => info!(team = %winner, ?points, "point over"),
            ServerCommand::RoundWinner { winner, rounds } => info!(team = %winner, ?rounds, "round over"),
            ServerCommand::Error { kind, message } => warn!(?kind, %message, "server rejected a message"),
            ServerCommand::MatchAborted { reason } => {
                warn!(%reason, "match aborted");
                break;
            }
            other => debug!(?other, "received"),
        }
    }
    Ok(())
}
