//! geodash binary entry point.

use anyhow::Result;
use clap::Parser;
use geodash_cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.init_tracing();
    cli.run().await
}
