//! Tests for generation options and the scripted model.

use geodash_core::{Model, Options, model::Scripted};

#[test]
fn defaults() {
    let options = Options::default();
    assert_eq!(options.temperature, 0.5);
    assert_eq!(options.top_p, 0.95);
}

#[test]
fn values_are_clamped_into_unit_range() {
    let options = Options::new(1.7, -0.2);
    assert_eq!(options.temperature, 1.0);
    assert_eq!(options.top_p, 0.0);
}

#[test]
fn nan_falls_back_to_default() {
    let options = Options::new(f32::NAN, f32::NAN);
    assert_eq!(options, Options::default());
}

#[test]
fn builder_keeps_other_field() {
    let options = Options::default().with_temperature(0.2);
    assert_eq!(options.temperature, 0.2);
    assert_eq!(options.top_p, Options::TOP_P);
}

#[test]
fn serializes_camel_case() {
    let json = serde_json::to_value(Options::default()).unwrap();
    assert!(json.get("topP").is_some());
    assert!(json.get("temperature").is_some());
}

#[tokio::test]
async fn scripted_records_calls() {
    let model = Scripted::reply("hello");
    let text = model.generate("prompt one", &Options::default()).await.unwrap();
    assert_eq!(text, "hello");
    model
        .generate("prompt two", &Options::default().with_temperature(0.2))
        .await
        .unwrap();

    let calls = model.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[1].1.temperature, 0.2);
    assert_eq!(model.last_prompt().as_deref(), Some("prompt two"));
}

#[tokio::test]
async fn scripted_failure() {
    let model = Scripted::fail("connection reset");
    let err = model.generate("p", &Options::default()).await.unwrap_err();
    assert_eq!(err.to_string(), "connection reset");
}
