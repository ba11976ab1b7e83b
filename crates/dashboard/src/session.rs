//! Async driver over a shared dashboard.
//!
//! Each operation begins under the state lock, awaits the assistant or the
//! decoder with the lock released, then applies the outcome by ticket.

use crate::{ShapefileDecoder, view::Dashboard};
use assistant::Assistant;
use gcore::{Language, Model};
use parking_lot::{Mutex, MutexGuard};
use std::sync::Arc;

/// A dashboard shared between the UI and in-flight requests.
pub struct Session<M> {
    state: Arc<Mutex<Dashboard>>,
    assistant: Arc<Assistant<M>>,
}

impl<M> Clone for Session<M> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            assistant: self.assistant.clone(),
        }
    }
}

impl<M: Model> Session<M> {
    /// A fresh dashboard in `language`.
    pub fn new(assistant: Arc<Assistant<M>>, language: Language) -> Self {
        Self {
            state: Arc::new(Mutex::new(Dashboard::new(language))),
            assistant,
        }
    }

    /// Lock the dashboard. Do not hold the guard across an await.
    pub fn state(&self) -> MutexGuard<'_, Dashboard> {
        self.state.lock()
    }

    /// Analyze the selected country with the selected dataset.
    ///
    /// Returns whether an outcome was applied: false without a selected
    /// country or when a newer request superseded this one.
    pub async fn ask_ai(&self) -> bool {
        let request = self.state.lock().begin_analysis();
        let Some(request) = request else {
            return false;
        };

        let outcome = self
            .assistant
            .analyze_country_data(
                request.country,
                request.dataset,
                request.value,
                request.unit,
                request.language,
                request.org_id.as_deref(),
            )
            .await
            .map_err(|e| e.to_string());

        self.state.lock().complete_analysis(request.ticket, outcome)
    }

    /// Search the documents. Returns false for a blank query or a
    /// superseded request.
    pub async fn search(&self, query: &str) -> bool {
        let request = self.state.lock().begin_search(query);
        let Some(request) = request else {
            return false;
        };

        let outcome = self
            .assistant
            .search_document(&request.query, request.language, request.org_id.as_deref())
            .await
            .map_err(|e| e.to_string());

        self.state.lock().complete_search(request.ticket, outcome)
    }

    /// Decode an uploaded archive into a new layer. Returns the layer id.
    pub async fn upload(
        &self,
        decoder: &impl ShapefileDecoder,
        name: &str,
        archive: &[u8],
    ) -> Option<String> {
        let ticket = self.state.lock().begin_upload();
        let decoded = decoder.decode(archive).await.map_err(|e| {
            tracing::warn!("failed to decode {name}: {e:#}");
            e.to_string()
        });
        self.state.lock().complete_upload(ticket, name, decoded)
    }
}
