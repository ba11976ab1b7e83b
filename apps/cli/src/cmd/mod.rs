//! CLI argument parsing and subcommand dispatch.

use anyhow::{Context, Result};
use assistant::Assistant;
use clap::{Parser, Subcommand};
use gcore::Library;
use model::{Provider, Registry, Settings};
use std::{path::PathBuf, sync::Arc};
use tracing_subscriber::{EnvFilter, fmt};

pub mod analyze;
pub mod catalog;
pub mod search;
pub mod serve;

/// Map dashboard assistant: country analysis and document search.
#[derive(Parser, Debug)]
#[command(name = "geodash", version, about)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,

    /// Provider settings file (TOML). Defaults to the environment.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Document directory laid out as `<org>/*.{txt,md}`.
    #[arg(long, global = true, env = "GEODASH_DOCUMENTS")]
    pub documents: Option<PathBuf>,

    /// Verbosity level (use -v, -vv, -vvv, etc.)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyze one metric of a country.
    Analyze(analyze::Analyze),
    /// Ask a question answered only from the documents.
    Search(search::Search),
    /// Print the countries, datasets and organizations.
    Catalog(catalog::Catalog),
    /// Start the HTTP API server.
    Serve(serve::Serve),
}

impl Cli {
    /// Initialize tracing subscriber based on verbosity.
    pub fn init_tracing(&self) {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let directive = match self.verbose {
                0 => "warn",
                1 => "info,geodash_model=debug,geodash_assistant=debug",
                2 => "info,geodash_model=trace,geodash_assistant=trace",
                3 => "debug",
                _ => "trace",
            };
            EnvFilter::new(directive)
        });

        fmt()
            .without_time()
            .with_env_filter(filter)
            .with_target(self.verbose != 0)
            .with_writer(std::io::stderr)
            .init();
    }

    /// Run the selected subcommand.
    pub async fn run(self) -> Result<()> {
        match &self.command {
            Command::Analyze(cmd) => cmd.run(&self).await,
            Command::Search(cmd) => cmd.run(&self).await,
            Command::Catalog(cmd) => cmd.run(&self),
            Command::Serve(cmd) => cmd.run(&self).await,
        }
    }

    /// The document library, from `--documents` or the built-in document.
    pub fn library(&self) -> Result<Arc<Library>> {
        let library = match &self.documents {
            Some(dir) => Library::load_dir(dir)?,
            None => Library::builtin(),
        };
        Ok(Arc::new(library))
    }

    /// The configured provider, built on first use.
    pub fn provider(&self) -> Result<Arc<Provider>> {
        let provider = match &self.config {
            Some(path) => {
                let path = path.clone();
                Registry::new(move || Settings::load(&path)).get()
            }
            None => model::get_provider(),
        };
        provider.context("failed to configure the text generation provider")
    }

    /// An assistant over the configured provider and documents.
    pub fn assistant(&self) -> Result<Assistant<Arc<Provider>>> {
        Ok(Assistant::with_library(self.provider()?, self.library()?))
    }
}
