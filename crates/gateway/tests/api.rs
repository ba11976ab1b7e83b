//! HTTP tests for the JSON API against a scripted model.

use assistant::Assistant;
use gcore::{
    Corpus, Library,
    i18n::{NOT_FOUND_EN, NOT_FOUND_ES},
    model::Scripted,
};
use geodash_gateway::{ServeHandle, serve};
use serde_json::{Value, json};
use std::sync::Arc;

async fn start(model: Scripted) -> (ServeHandle, String) {
    let mut library = Library::builtin();
    library.insert("forest_trust", Corpus::new("Mangrove restoration notes."));
    let assistant = Arc::new(Assistant::with_library(model, Arc::new(library)));
    let handle = serve(assistant, "127.0.0.1:0").await.unwrap();
    let base = format!("http://127.0.0.1:{}", handle.port);
    (handle, base)
}

async fn post(url: &str, body: Value) -> (u16, Value) {
    let response = reqwest::Client::new()
        .post(url)
        .json(&body)
        .send()
        .await
        .unwrap();
    let status = response.status().as_u16();
    (status, response.json().await.unwrap())
}

#[tokio::test]
async fn analyze_returns_response() {
    let (handle, base) = start(Scripted::reply(" Analysis text ")).await;
    let (status, body) = post(
        &format!("{base}/api/analyze"),
        json!({ "country": "GT", "dataset": "population", "language": "en" }),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(body, json!({ "response": "Analysis text" }));
    handle.shutdown().await.unwrap();
}

#[tokio::test]
async fn analyze_rejects_unknown_inputs() {
    let (handle, base) = start(Scripted::reply("unused")).await;
    let (status, body) = post(
        &format!("{base}/api/analyze"),
        json!({ "country": "Atlantis", "dataset": "population" }),
    )
    .await;
    assert_eq!(status, 400);
    assert!(body["error"].as_str().unwrap().contains("Atlantis"));

    let (status, _) = post(
        &format!("{base}/api/analyze"),
        json!({ "country": "Ecuador", "dataset": "rainfall" }),
    )
    .await;
    assert_eq!(status, 400);
    handle.shutdown().await.unwrap();
}

#[tokio::test]
async fn provider_failure_is_bad_gateway() {
    let (handle, base) = start(Scripted::fail("invalid x-api-key")).await;
    let (status, body) = post(
        &format!("{base}/api/chat"),
        json!({ "query": "What is protected?", "language": "es" }),
    )
    .await;
    assert_eq!(status, 502);
    assert_eq!(
        body["error"],
        "Se produjo un error al comunicarse con la IA. Verifique su clave de API y su conexión."
    );
    handle.shutdown().await.unwrap();
}

#[tokio::test]
async fn chat_localizes_sentinel() {
    let (handle, base) = start(Scripted::reply(NOT_FOUND_EN)).await;
    let (status, body) = post(
        &format!("{base}/api/chat"),
        json!({ "query": "¿Qué es la biodiversidad?", "language": "es", "org_id": "forest_trust" }),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(body["response"], NOT_FOUND_ES);
    handle.shutdown().await.unwrap();
}

#[tokio::test]
async fn chat_rejects_blank_query() {
    let (handle, base) = start(Scripted::reply("unused")).await;
    let (status, _) = post(&format!("{base}/api/chat"), json!({ "query": "  " })).await;
    assert_eq!(status, 400);
    handle.shutdown().await.unwrap();
}

#[tokio::test]
async fn catalog_lists_entities() {
    let (handle, base) = start(Scripted::reply("")).await;
    let body: Value = reqwest::get(format!("{base}/api/catalog"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["countries"].as_array().unwrap().len(), 5);
    assert_eq!(body["datasets"].as_array().unwrap().len(), 4);
    assert_eq!(body["datasets"][1]["id"], "land_area");
    assert_eq!(body["organizations"][0]["id"], "forest_trust");
    assert_eq!(body["layer_colors"].as_array().unwrap().len(), 6);
    assert_eq!(body["map_center"], json!([-78.0, 0.0]));
    assert_eq!(body["map_zoom"], 4);
    handle.shutdown().await.unwrap();
}

#[tokio::test]
async fn malformed_body_is_json_error() {
    let (handle, base) = start(Scripted::reply("unused")).await;
    let (status, body) = post(
        &format!("{base}/api/chat"),
        json!({ "query": "Where?", "language": "fr" }),
    )
    .await;
    assert_eq!(status, 400);
    assert!(!body["error"].as_str().unwrap().is_empty());

    let (status, body) = post(
        &format!("{base}/api/analyze"),
        json!({ "dataset": "population" }),
    )
    .await;
    assert_eq!(status, 400);
    assert!(body["error"].is_string());
    handle.shutdown().await.unwrap();
}
