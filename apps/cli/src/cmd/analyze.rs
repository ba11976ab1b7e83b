//! One-shot country analysis.

use crate::Cli;
use anyhow::{Result, anyhow};
use assistant::Value;
use clap::Args;
use gcore::{
    Language,
    catalog::{self, DatasetId},
};

/// Analyze one metric of a country.
#[derive(Args, Debug)]
pub struct Analyze {
    /// Country id or name (e.g. `GT`, `Colombia`).
    pub country: String,

    /// Dataset id.
    #[arg(short, long, default_value = "population")]
    pub dataset: DatasetId,

    /// Response language (`en` or `es`).
    #[arg(short, long, default_value = "en")]
    pub language: Language,

    /// Scope the analysis to an organization.
    #[arg(long)]
    pub org: Option<String>,
}

impl Analyze {
    pub async fn run(&self, cli: &Cli) -> Result<()> {
        let country = catalog::country(&self.country)
            .ok_or_else(|| anyhow!("unknown country '{}'", self.country))?;
        let dataset = self.dataset.dataset();
        let value = match country.data.get(self.dataset) {
            Some(value) => Value::Number(value),
            None => Value::Text("N/A".to_owned()),
        };

        let text = cli
            .assistant()?
            .analyze_country_data(
                country.name,
                dataset.name.get(self.language),
                value,
                dataset.unit.get(self.language),
                self.language,
                self.org.as_deref(),
            )
            .await?;
        println!("{text}");
        Ok(())
    }
}
