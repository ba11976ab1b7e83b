//! Tests for `Assistant::analyze_country_data`.

use gcore::{Corpus, Language, Library, Options, model::Scripted};
use geodash_assistant::Assistant;
use std::sync::Arc;

#[tokio::test]
async fn prompt_embeds_formatted_value() {
    let assistant = Assistant::new(Scripted::reply("  Guatemala is growing.\n"));
    let text = assistant
        .analyze_country_data("Guatemala", "Population", 18_092_026.0, "people", Language::En, None)
        .await
        .unwrap();
    assert_eq!(text, "Guatemala is growing.");

    let calls = assistant.model().calls();
    assert_eq!(calls.len(), 1);
    let (prompt, options) = &calls[0];
    assert!(prompt.contains("socio-economic analysis for Guatemala"));
    assert!(prompt.contains("- Metric: Population"));
    assert!(prompt.contains("- Value: 18,092,026 people"));
    assert!(prompt.contains("Do not use markdown formatting."));
    assert!(prompt.contains("Respond in English."));
    assert_eq!(*options, Options::new(0.5, 0.95));
}

#[tokio::test]
async fn spanish_response_language() {
    let assistant = Assistant::new(Scripted::reply("Análisis"));
    assistant
        .analyze_country_data("Colombia", "Superficie", 1_141_748.0, "km²", Language::Es, None)
        .await
        .unwrap();
    let prompt = assistant.model().last_prompt().unwrap();
    assert!(prompt.contains("Respond in Spanish."));
    assert!(prompt.contains("- Value: 1,141,748 km²"));
}

#[tokio::test]
async fn failure_is_localized() {
    let assistant = Assistant::new(Scripted::fail("401 invalid api key"));
    let err = assistant
        .analyze_country_data("Ecuador", "Population", 1.0, "people", Language::En, None)
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "An error occurred while communicating with the AI. Please check your API key and connection."
    );
    assert!(!err.to_string().contains("401"));

    let err = assistant
        .analyze_country_data("Ecuador", "Población", 1.0, "personas", Language::Es, None)
        .await
        .unwrap_err();
    assert_eq!(err.language(), Language::Es);
    assert_eq!(
        err.to_string(),
        "Se produjo un error al comunicarse con la IA. Verifique su clave de API y su conexión."
    );
}

#[tokio::test]
async fn empty_reply_is_empty_text() {
    let assistant = Assistant::new(Scripted::reply(""));
    let text = assistant
        .analyze_country_data("Honduras", "Population", 1.0, "people", Language::En, None)
        .await
        .unwrap();
    assert_eq!(text, "");
}

#[tokio::test]
async fn organization_scope() {
    let mut library = Library::builtin();
    library.insert("forest_trust", Corpus::new("The trust restores mangroves."));
    let assistant = Assistant::with_library(Scripted::reply("ok"), Arc::new(library));

    assistant
        .analyze_country_data(
            "Honduras",
            "Protected Area",
            27_972.0,
            "km²",
            Language::En,
            Some("forest_trust"),
        )
        .await
        .unwrap();
    let prompt = assistant.model().last_prompt().unwrap();
    assert!(prompt.contains("the work of forest trust in Honduras"));
    assert!(prompt.contains("The trust restores mangroves."));
}

#[tokio::test]
async fn unknown_organization_still_scoped_without_documents() {
    let assistant = Assistant::new(Scripted::reply("ok"));
    assistant
        .analyze_country_data("Honduras", "Population", 1.0, "people", Language::En, Some("acme"))
        .await
        .unwrap();
    let prompt = assistant.model().last_prompt().unwrap();
    assert!(prompt.contains("the work of acme in Honduras"));
    assert!(!prompt.contains("Organization Documents:"));
}

#[tokio::test]
async fn blank_organization_is_general() {
    let assistant = Assistant::new(Scripted::reply("ok"));
    assistant
        .analyze_country_data("Honduras", "Population", 1.0, "people", Language::En, Some("  "))
        .await
        .unwrap();
    let prompt = assistant.model().last_prompt().unwrap();
    assert!(prompt.contains("socio-economic analysis for Honduras"));
}
