/*
A small SPOP agent that answers HAProxy's `check-client-ip` message with a
trust score stored in the session's `ip_score` variable.

Every client is scored 95 here; a real deployment would look the address
up in a reputation table instead.
*/

use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use clap::Parser;
use tracing::{debug, warn};

use spop_agent::{Engine, Handler, HandlerError};
use spop_core::{Action, Message, Scope, Value};

#[derive(Debug, Parser)]
#[command(name = "client-ip-scorer", about = "Scores client IPs for HAProxy over SPOP")]
struct Opt {
    /// Port to listen on for HAProxy connections.
    #[arg(short, long, default_value_t = 12345)]
    port: u16,

    /// Maximum frame size to negotiate.
    #[arg(short, long, default_value_t = 16384)]
    max_frame_size: u32,
}

struct ClientIpScorer;

#[async_trait]
impl Handler for ClientIpScorer {
    async fn process(&self, message: &Message) -> Result<Vec<Action>, HandlerError> {
        if message.name != "check-client-ip" {
            warn!(message = %message.name, "unexpected message, ignoring");
            return Ok(vec![]);
        }

        let ip = message
            .args
            .iter()
            .find(|(name, _)| name == "src")
            .context("check-client-ip is missing its src argument")?;

        debug!(ip = ?ip.1, "scoring client");

        Ok(vec![Action::set_var(Scope::Session, "ip_score", Value::Int32(95))])
    }
}

#[tokio::main]
pub async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let opt = Opt::parse();
    debug!(?opt, "starting");

    let engine = Arc::new(
        Engine::builder()
            .port(opt.port)
            .max_frame_size(opt.max_frame_size)
            .handler(ClientIpScorer)
            .build()?,
    );

    engine.start().await?.await.context("accept loop crashed")?;

    Ok(())
}
