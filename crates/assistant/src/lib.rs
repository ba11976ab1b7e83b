//! Request orchestration: country analysis and document search.
//!
//! [`Assistant`] turns a user action into a prompt, calls the configured
//! [`Model`] once and post-processes the reply. Any provider failure is
//! reduced to a localized [`Error`]; the provider's message is logged.

use gcore::{
    Language, Library, Model, Options,
    i18n::{NOT_FOUND_EN, NOT_FOUND_ES},
};
use std::sync::Arc;

pub use error::Error;
pub use format::{Value, format_number};

mod error;
mod format;
pub mod prompt;

/// Sampling temperature for closed-book search.
pub const SEARCH_TEMPERATURE: f32 = 0.2;

/// Orchestrates the two text generation operations over one model.
pub struct Assistant<M> {
    model: M,
    library: Arc<Library>,
}

impl<M: Model> Assistant<M> {
    /// An assistant searching the built-in document.
    pub fn new(model: M) -> Self {
        Self::with_library(model, Arc::new(Library::builtin()))
    }

    /// An assistant searching `library`.
    pub fn with_library(model: M, library: Arc<Library>) -> Self {
        Self { model, library }
    }

    /// The underlying model.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// The document library.
    pub fn library(&self) -> &Library {
        &self.library
    }

    /// Analyze one metric of a country.
    ///
    /// Without `org_id` this is a general country analysis. With one, the
    /// prompt is scoped to that organization and carries its documents when
    /// the library has them.
    pub async fn analyze_country_data(
        &self,
        country_name: &str,
        dataset_name: &str,
        value: impl Into<Value>,
        unit: &str,
        language: Language,
        org_id: Option<&str>,
    ) -> Result<String, Error> {
        let org_id = org_id.map(str::trim).filter(|id| !id.is_empty());
        let organizations = self.library.organizations();
        let scope = org_id.map(|id| prompt::Scope {
            name: organizations
                .iter()
                .find(|org| org.id == id)
                .map_or(id, |org| org.name.as_str()),
            corpus: self.library.contains(id).then(|| self.library.get(Some(id))),
        });

        let prompt = prompt::analysis(
            country_name,
            dataset_name,
            &value.into().formatted(),
            unit,
            language,
            scope,
        );
        tracing::debug!(
            "analyzing {dataset_name} for {country_name} via {} (org {org_id:?})",
            self.model.name()
        );

        match self.model.generate(&prompt, &Options::default()).await {
            Ok(text) => Ok(text.trim().to_owned()),
            Err(e) => {
                tracing::error!("{} analysis request failed: {e:#}", self.model.name());
                Err(Error::new(language))
            }
        }
    }

    /// Answer `query` from the documents of `org_id`, or the general corpus.
    pub async fn search_document(
        &self,
        query: &str,
        language: Language,
        org_id: Option<&str>,
    ) -> Result<String, Error> {
        let corpus = self.library.get(org_id);
        let prompt = prompt::search(query, language, corpus);
        let options = Options::default().with_temperature(SEARCH_TEMPERATURE);
        tracing::debug!(
            "searching {} bytes of documents via {}",
            corpus.text().len(),
            self.model.name()
        );

        match self.model.generate(&prompt, &options).await {
            Ok(text) => Ok(canonicalize(&text, language)),
            Err(e) => {
                tracing::error!("{} search request failed: {e:#}", self.model.name());
                Err(Error::new(language))
            }
        }
    }
}

/// Trim a search reply and localize the English "not found" sentinel.
///
/// Only an exact match is replaced; any other text passes through trimmed.
pub fn canonicalize(response: &str, language: Language) -> String {
    let response = response.trim();
    if language == Language::Es && response == NOT_FOUND_EN {
        return NOT_FOUND_ES.to_owned();
    }
    response.to_owned()
}
