//! API server command.

use crate::Cli;
use anyhow::Result;
use clap::Args;
use std::sync::Arc;

/// Port used when neither `--bind` nor `PORT` is given.
const DEFAULT_PORT: u16 = 10000;

/// Start the HTTP API server.
#[derive(Args, Debug)]
pub struct Serve {
    /// Bind address (host:port). Defaults to `0.0.0.0:$PORT`.
    #[arg(long)]
    pub bind: Option<String>,

    /// Port used with the default bind address.
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,
}

impl Serve {
    /// The address to listen on.
    pub fn bind_address(&self) -> String {
        self.bind
            .clone()
            .unwrap_or_else(|| format!("0.0.0.0:{}", self.port))
    }

    /// Resolve the provider, then serve until ctrl-c.
    pub async fn run(&self, cli: &Cli) -> Result<()> {
        let assistant = Arc::new(cli.assistant()?);
        let handle = gateway::serve(assistant, &self.bind_address()).await?;

        tokio::signal::ctrl_c().await?;
        tracing::info!("received ctrl-c, shutting down");
        handle.shutdown().await?;
        tracing::info!("api server shut down");
        Ok(())
    }
}
