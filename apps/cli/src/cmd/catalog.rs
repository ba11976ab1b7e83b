//! Catalog listing.

use crate::Cli;
use anyhow::Result;
use assistant::format_number;
use clap::Args;
use gcore::{
    Language,
    catalog::{COUNTRIES, DATASETS, DatasetId},
};

/// Print the countries, datasets and organizations.
#[derive(Args, Debug)]
pub struct Catalog {
    /// Dataset whose values are listed.
    #[arg(short, long, default_value = "population")]
    pub dataset: DatasetId,

    /// Language of names and units.
    #[arg(short, long, default_value = "en")]
    pub language: Language,

    /// Print JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

impl Catalog {
    pub fn run(&self, cli: &Cli) -> Result<()> {
        let organizations = cli.library()?.organizations();
        if self.json {
            let catalog = serde_json::json!({
                "countries": &COUNTRIES,
                "datasets": &DATASETS,
                "organizations": organizations,
            });
            println!("{}", serde_json::to_string_pretty(&catalog)?);
            return Ok(());
        }

        let dataset = self.dataset.dataset();
        println!(
            "{} ({})",
            dataset.name.get(self.language),
            dataset.unit.get(self.language)
        );
        for country in &COUNTRIES {
            let value = country
                .data
                .get(self.dataset)
                .map_or_else(|| "N/A".to_owned(), format_number);
            println!("  {}  {:<12} {value:>12}", country.id, country.name);
        }

        println!();
        println!("datasets:");
        for dataset in &DATASETS {
            println!("  {:<20} {}", dataset.id.as_str(), dataset.name.get(self.language));
        }

        if !organizations.is_empty() {
            println!();
            println!("organizations:");
            for org in organizations {
                println!("  {:<20} {}", org.id, org.name);
            }
        }
        Ok(())
    }
}
