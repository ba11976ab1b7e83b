//! Dashboard view state.
//!
//! Mirrors what the user sees: the chosen language and dataset, at most one
//! open panel (country, shapefile feature or search), the uploaded layers,
//! and one [`RequestState`] per request concern. Every handler is
//! synchronous; network work happens between a `begin_*` and the matching
//! `complete_*`.

use crate::{
    layers::{CustomLayer, Layers},
    lifecycle::{RequestState, Ticket},
};
use assistant::Value;
use gcore::{
    Language,
    catalog::{COUNTRIES, Country, DatasetId},
    i18n::{Message, t},
};
use serde_json::Map;

/// Smallest marker scale.
const MARKER_MIN: f64 = 8.0;

/// Scale range added on top of [`MARKER_MIN`] for the largest value.
const MARKER_RANGE: f64 = 18.0;

/// Extra scale of the selected country's marker.
const MARKER_SELECTED: f64 = 2.0;

/// The open side panel.
#[derive(Debug, Clone, PartialEq)]
pub enum Panel {
    /// A country marker was selected.
    Country(&'static Country),
    /// A feature of an uploaded layer was selected.
    Feature(Map<String, serde_json::Value>),
    /// The search panel.
    Search,
}

/// Inputs of a started analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisRequest {
    /// Completion ticket.
    pub ticket: Ticket,
    /// Country display name.
    pub country: &'static str,
    /// Localized dataset name.
    pub dataset: &'static str,
    /// Metric value.
    pub value: Value,
    /// Localized unit.
    pub unit: &'static str,
    /// Response language.
    pub language: Language,
    /// Selected organization.
    pub org_id: Option<String>,
}

/// Inputs of a started search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Completion ticket.
    pub ticket: Ticket,
    /// The trimmed question.
    pub query: String,
    /// Response language.
    pub language: Language,
    /// Selected organization.
    pub org_id: Option<String>,
}

/// A country marker sized by the selected dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    /// The country.
    pub country: &'static Country,
    /// Value of the selected dataset.
    pub value: Option<f64>,
    /// Relative marker size.
    pub scale: f64,
    /// Whether the country is selected.
    pub selected: bool,
}

/// The whole dashboard.
#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    language: Language,
    dataset: DatasetId,
    organization: Option<String>,
    panel: Option<Panel>,
    layers: Layers,
    analysis: RequestState<String>,
    search: RequestState<String>,
    upload: RequestState<String>,
}

impl Dashboard {
    /// A dashboard in its initial state.
    pub fn new(language: Language) -> Self {
        Self {
            language,
            ..Self::default()
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    pub fn dataset(&self) -> DatasetId {
        self.dataset
    }

    pub fn set_dataset(&mut self, dataset: DatasetId) {
        self.dataset = dataset;
    }

    /// Organization whose documents scope analysis and search.
    pub fn organization(&self) -> Option<&str> {
        self.organization.as_deref()
    }

    pub fn set_organization(&mut self, organization: Option<String>) {
        self.organization = organization.filter(|id| !id.trim().is_empty());
    }

    pub fn panel(&self) -> Option<&Panel> {
        self.panel.as_ref()
    }

    /// The selected country, while its panel is open.
    pub fn selected_country(&self) -> Option<&'static Country> {
        match self.panel {
            Some(Panel::Country(country)) => Some(country),
            _ => None,
        }
    }

    /// The selected feature's properties, while its panel is open.
    pub fn selected_feature(&self) -> Option<&Map<String, serde_json::Value>> {
        match &self.panel {
            Some(Panel::Feature(properties)) => Some(properties),
            _ => None,
        }
    }

    pub fn is_search_open(&self) -> bool {
        matches!(self.panel, Some(Panel::Search))
    }

    pub fn layers(&self) -> &[CustomLayer] {
        self.layers.as_slice()
    }

    pub fn analysis(&self) -> &RequestState<String> {
        &self.analysis
    }

    pub fn search(&self) -> &RequestState<String> {
        &self.search
    }

    /// Upload state. A successful upload resolves with the new layer id.
    pub fn upload(&self) -> &RequestState<String> {
        &self.upload
    }

    pub fn close_all_panels(&mut self) {
        self.panel = None;
    }

    /// Open the panel of `country`, or close the country panel on `None`.
    pub fn select_country(&mut self, country: Option<&'static Country>) {
        match country {
            Some(country) => {
                self.close_all_panels();
                self.panel = Some(Panel::Country(country));
                self.analysis.clear();
            }
            None if self.selected_country().is_some() => self.panel = None,
            None => {}
        }
    }

    /// Open the panel of a layer feature, or close it on `None`.
    pub fn select_feature(&mut self, properties: Option<Map<String, serde_json::Value>>) {
        match properties {
            Some(properties) => {
                self.close_all_panels();
                self.panel = Some(Panel::Feature(properties));
            }
            None if self.selected_feature().is_some() => self.panel = None,
            None => {}
        }
    }

    /// Start analyzing the selected country. `None` without a selection.
    pub fn begin_analysis(&mut self) -> Option<AnalysisRequest> {
        let country = self.selected_country()?;
        let dataset = self.dataset.dataset();
        let value = match country.data.get(self.dataset) {
            Some(value) => Value::Number(value),
            None => Value::Text("N/A".to_owned()),
        };

        Some(AnalysisRequest {
            ticket: self.analysis.start(),
            country: country.name,
            dataset: dataset.name.get(self.language),
            value,
            unit: dataset.unit.get(self.language),
            language: self.language,
            org_id: self.organization.clone(),
        })
    }

    /// Apply the outcome of an analysis. Returns whether it was current.
    pub fn complete_analysis(&mut self, ticket: Ticket, outcome: Result<String, String>) -> bool {
        let outcome = outcome.map_err(|message| self.error_text(message));
        self.analysis.complete(ticket, outcome)
    }

    /// Start a search, opening the search panel. `None` for a blank query.
    pub fn begin_search(&mut self, query: &str) -> Option<SearchRequest> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }

        self.close_all_panels();
        let ticket = self.search.start();
        self.panel = Some(Panel::Search);
        Some(SearchRequest {
            ticket,
            query: query.to_owned(),
            language: self.language,
            org_id: self.organization.clone(),
        })
    }

    /// Apply the outcome of a search. Returns whether it was current.
    pub fn complete_search(&mut self, ticket: Ticket, outcome: Result<String, String>) -> bool {
        let outcome = outcome.map_err(|message| self.error_text(message));
        self.search.complete(ticket, outcome)
    }

    /// Start an upload, closing every panel.
    pub fn begin_upload(&mut self) -> Ticket {
        self.close_all_panels();
        self.upload.start()
    }

    /// Apply a decoded upload, adding a layer on success.
    ///
    /// Every successful decode adds its layer, even when a newer upload has
    /// started since. Only the latest upload drives the upload state.
    /// Returns the new layer id.
    pub fn complete_upload(
        &mut self,
        ticket: Ticket,
        name: &str,
        decoded: Result<serde_json::Value, String>,
    ) -> Option<String> {
        match decoded {
            Ok(geojson) => {
                let id = self.layers.add(name, geojson).id.clone();
                self.upload.resolve(ticket, id.clone());
                Some(id)
            }
            Err(message) => {
                let message = if message.trim().is_empty() {
                    t(Message::UploadErrorGeneral, self.language).to_owned()
                } else {
                    message
                };
                self.upload.reject(ticket, message);
                None
            }
        }
    }

    /// Flip a layer's visibility. Returns false for an unknown id.
    pub fn toggle_layer(&mut self, id: &str) -> bool {
        self.layers.toggle(id)
    }

    /// Remove a layer. Returns false for an unknown id.
    pub fn remove_layer(&mut self, id: &str) -> bool {
        self.layers.remove(id)
    }

    /// Country markers sized linearly between the smallest and largest
    /// positive value of the selected dataset.
    pub fn markers(&self) -> Vec<Marker> {
        let positive = || {
            COUNTRIES
                .iter()
                .filter_map(|c| c.data.get(self.dataset))
                .filter(|v| *v > 0.0)
        };
        let min = positive().fold(f64::INFINITY, f64::min);
        let max = positive().fold(f64::NEG_INFINITY, f64::max);
        let selected = self.selected_country().map(|c| c.id);

        COUNTRIES
            .iter()
            .map(|country| {
                let value = country.data.get(self.dataset);
                let v = value.unwrap_or(0.0);
                let mut scale = if v > 0.0 && max > min {
                    MARKER_MIN + (v - min) / (max - min) * MARKER_RANGE
                } else {
                    MARKER_MIN
                };
                let is_selected = selected == Some(country.id);
                if is_selected {
                    scale += MARKER_SELECTED;
                }
                Marker {
                    country,
                    value,
                    scale,
                    selected: is_selected,
                }
            })
            .collect()
    }

    fn error_text(&self, message: String) -> String {
        if message.trim().is_empty() {
            t(Message::ErrorUnknown, self.language).to_owned()
        } else {
            message
        }
    }
}
