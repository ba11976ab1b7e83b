//! JSON API routes.
//!
//! - `POST /api/analyze` `{country, dataset, language, org_id?}` -> `{response}`
//! - `POST /api/chat` `{query, language, org_id?}` -> `{response}`
//! - `GET /api/catalog`
//!
//! Orchestrator failures answer 502 with the localized `{error}`; invalid
//! input, including a body that does not parse, answers 400 with `{error}`.

use assistant::{Assistant, Value};
use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use gcore::{
    Language, Model,
    catalog::{
        self, COUNTRIES, Country, DATASETS, Dataset, DatasetId, LAYER_COLORS, MAP_CENTER, MAP_ZOOM,
        Organization,
    },
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Shared handler state.
pub struct Gateway<M> {
    /// The orchestrator behind every route.
    pub assistant: Arc<Assistant<M>>,
}

impl<M> Clone for Gateway<M> {
    fn clone(&self) -> Self {
        Self {
            assistant: self.assistant.clone(),
        }
    }
}

/// Body of `POST /api/analyze`.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// Country id or display name.
    pub country: String,
    /// Dataset id.
    pub dataset: String,
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub org_id: Option<String>,
}

/// Body of `POST /api/chat`.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub query: String,
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub org_id: Option<String>,
}

/// Successful generation.
#[derive(Debug, Serialize)]
pub struct Answer {
    pub response: String,
}

/// Body of `GET /api/catalog`.
#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub countries: &'static [Country],
    pub datasets: &'static [Dataset],
    pub organizations: Vec<Organization>,
    pub layer_colors: &'static [&'static str],
    /// Initial viewport as `[longitude, latitude]`.
    pub map_center: [f64; 2],
    pub map_zoom: u8,
}

/// Build the axum router.
pub fn router<M: Model + 'static>(state: Gateway<M>) -> Router {
    Router::new()
        .route("/api/analyze", post(analyze::<M>))
        .route("/api/chat", post(chat::<M>))
        .route("/api/catalog", get(catalog_handler::<M>))
        .with_state(state)
}

async fn analyze<M: Model + 'static>(
    State(state): State<Gateway<M>>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Response {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejected(rejection),
    };
    let Some(country) = catalog::country(&req.country) else {
        return error(StatusCode::BAD_REQUEST, format!("unknown country '{}'", req.country));
    };
    let dataset_id: DatasetId = match req.dataset.parse() {
        Ok(id) => id,
        Err(e) => return error(StatusCode::BAD_REQUEST, format!("{e}")),
    };

    let dataset = dataset_id.dataset();
    let value = match country.data.get(dataset_id) {
        Some(value) => Value::Number(value),
        None => Value::Text("N/A".to_owned()),
    };

    let result = state
        .assistant
        .analyze_country_data(
            country.name,
            dataset.name.get(req.language),
            value,
            dataset.unit.get(req.language),
            req.language,
            req.org_id.as_deref(),
        )
        .await;
    respond(result)
}

async fn chat<M: Model + 'static>(
    State(state): State<Gateway<M>>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Response {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejected(rejection),
    };
    if req.query.trim().is_empty() {
        return error(StatusCode::BAD_REQUEST, "query must not be empty".to_owned());
    }
    let result = state
        .assistant
        .search_document(&req.query, req.language, req.org_id.as_deref())
        .await;
    respond(result)
}

async fn catalog_handler<M: Model + 'static>(State(state): State<Gateway<M>>) -> Json<CatalogResponse> {
    Json(CatalogResponse {
        countries: &COUNTRIES,
        datasets: &DATASETS,
        organizations: state.assistant.library().organizations(),
        layer_colors: &LAYER_COLORS,
        map_center: MAP_CENTER,
        map_zoom: MAP_ZOOM,
    })
}

fn respond(result: Result<String, assistant::Error>) -> Response {
    match result {
        Ok(response) => Json(Answer { response }).into_response(),
        Err(e) => error(StatusCode::BAD_GATEWAY, e.to_string()),
    }
}

fn rejected(rejection: JsonRejection) -> Response {
    error(StatusCode::BAD_REQUEST, rejection.body_text())
}

fn error(status: StatusCode, message: String) -> Response {
    (status, Json(serde_json::json!({ "error": message }))).into_response()
}
