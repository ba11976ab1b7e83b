//! One-shot document search.

use crate::Cli;
use anyhow::{Result, bail};
use clap::Args;
use gcore::Language;

/// Ask a question answered only from the documents.
#[derive(Args, Debug)]
pub struct Search {
    /// The question.
    pub query: String,

    /// Response language (`en` or `es`).
    #[arg(short, long, default_value = "en")]
    pub language: Language,

    /// Search this organization's documents instead of the general ones.
    #[arg(long)]
    pub org: Option<String>,
}

impl Search {
    pub async fn run(&self, cli: &Cli) -> Result<()> {
        if self.query.trim().is_empty() {
            bail!("query must not be empty");
        }
        let text = cli
            .assistant()?
            .search_document(&self.query, self.language, self.org.as_deref())
            .await?;
        println!("{text}");
        Ok(())
    }
}
