//! Tests for dashboard view handlers.

use gcore::{
    Language,
    catalog::{self, DatasetId},
    i18n::{Message, t},
};
use geodash_dashboard::{Dashboard, Panel};
use serde_json::{Map, json};

fn feature() -> Map<String, serde_json::Value> {
    let mut properties = Map::new();
    properties.insert("NAME".into(), json!("Reserve"));
    properties
}

#[test]
fn panels_are_exclusive() {
    let mut dashboard = Dashboard::new(Language::En);
    let guatemala = catalog::country("GT").unwrap();

    dashboard.select_country(Some(guatemala));
    assert_eq!(dashboard.selected_country(), Some(guatemala));

    dashboard.select_feature(Some(feature()));
    assert!(dashboard.selected_country().is_none());
    assert!(dashboard.selected_feature().is_some());

    dashboard.begin_search("biodiversity").unwrap();
    assert!(dashboard.is_search_open());
    assert!(dashboard.selected_feature().is_none());
}

#[test]
fn deselect_only_closes_matching_panel() {
    let mut dashboard = Dashboard::new(Language::En);
    dashboard.begin_search("q").unwrap();
    dashboard.select_country(None);
    assert!(dashboard.is_search_open());

    dashboard.select_feature(Some(feature()));
    dashboard.select_feature(None);
    assert!(dashboard.panel().is_none());
}

#[test]
fn analysis_request_uses_language_and_dataset() {
    let mut dashboard = Dashboard::new(Language::Es);
    assert!(dashboard.begin_analysis().is_none());

    dashboard.set_dataset(DatasetId::LandArea);
    dashboard.set_organization(Some("ngo".into()));
    dashboard.select_country(Some(catalog::country("Colombia").unwrap()));
    let request = dashboard.begin_analysis().unwrap();

    assert_eq!(request.country, "Colombia");
    assert_eq!(request.dataset, "Superficie");
    assert_eq!(request.unit, "km²");
    assert_eq!(request.value.formatted(), "1,141,748");
    assert_eq!(request.org_id.as_deref(), Some("ngo"));
    assert!(dashboard.analysis().is_loading());
}

#[test]
fn selecting_country_clears_analysis() {
    let mut dashboard = Dashboard::new(Language::En);
    dashboard.select_country(catalog::country("HN"));
    let request = dashboard.begin_analysis().unwrap();

    dashboard.select_country(catalog::country("EC"));
    assert!(!dashboard.analysis().is_loading());
    assert!(!dashboard.complete_analysis(request.ticket, Ok("stale".into())));
    assert_eq!(dashboard.analysis().result(), None);
}

#[test]
fn blank_search_is_ignored() {
    let mut dashboard = Dashboard::new(Language::En);
    dashboard.select_country(catalog::country("SV"));
    assert!(dashboard.begin_search("   ").is_none());
    assert!(dashboard.selected_country().is_some());
    assert!(!dashboard.search().is_loading());
}

#[test]
fn empty_error_becomes_unknown() {
    let mut dashboard = Dashboard::new(Language::Es);
    let request = dashboard.begin_search("q").unwrap();
    assert!(dashboard.complete_search(request.ticket, Err(String::new())));
    assert_eq!(
        dashboard.search().error(),
        Some(t(Message::ErrorUnknown, Language::Es))
    );
}

#[test]
fn upload_adds_layers_with_cycling_colors() {
    let mut dashboard = Dashboard::new(Language::En);
    dashboard.select_country(catalog::country("GT"));

    let ticket = dashboard.begin_upload();
    assert!(dashboard.panel().is_none());
    let id = dashboard
        .complete_upload(ticket, "parks.zip", Ok(json!({ "type": "FeatureCollection", "features": [] })))
        .unwrap();
    assert!(id.starts_with("layer-"));
    assert_eq!(dashboard.upload().result(), Some(&id));

    for i in 1..7 {
        let ticket = dashboard.begin_upload();
        dashboard.complete_upload(ticket, &format!("l{i}.zip"), Ok(json!({})));
    }
    let colors: Vec<_> = dashboard.layers().iter().map(|l| l.color).collect();
    assert_eq!(colors[0], catalog::LAYER_COLORS[0]);
    assert_eq!(colors[5], catalog::LAYER_COLORS[5]);
    assert_eq!(colors[6], catalog::LAYER_COLORS[0]);
    assert!(dashboard.layers().iter().all(|l| l.visible));
}

#[test]
fn upload_error_message() {
    let mut dashboard = Dashboard::new(Language::En);
    let ticket = dashboard.begin_upload();
    assert!(dashboard.complete_upload(ticket, "bad.zip", Err("not a zip file".into())).is_none());
    assert_eq!(dashboard.upload().error(), Some("not a zip file"));

    let ticket = dashboard.begin_upload();
    dashboard.complete_upload(ticket, "bad.zip", Err(String::new()));
    assert_eq!(
        dashboard.upload().error(),
        Some(t(Message::UploadErrorGeneral, Language::En))
    );
    assert!(dashboard.layers().is_empty());
}

#[test]
fn overlapping_uploads_keep_every_layer() {
    let mut dashboard = Dashboard::new(Language::En);
    let first = dashboard.begin_upload();
    let second = dashboard.begin_upload();

    let b = dashboard.complete_upload(second, "b.zip", Ok(json!({}))).unwrap();
    assert_eq!(dashboard.upload().result(), Some(&b));

    let a = dashboard.complete_upload(first, "a.zip", Ok(json!({}))).unwrap();
    assert_ne!(a, b);
    let names: Vec<_> = dashboard.layers().iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, ["b.zip", "a.zip"]);
    assert_eq!(dashboard.upload().result(), Some(&b));

    // A late failure does not override the latest outcome.
    let third = dashboard.begin_upload();
    let fourth = dashboard.begin_upload();
    dashboard.complete_upload(fourth, "d.zip", Ok(json!({})));
    assert!(dashboard.complete_upload(third, "c.zip", Err("corrupt".into())).is_none());
    assert!(dashboard.upload().error().is_none());
    assert_eq!(dashboard.layers().len(), 3);
}

#[test]
fn toggle_and_remove_layers() {
    let mut dashboard = Dashboard::new(Language::En);
    let ticket = dashboard.begin_upload();
    let id = dashboard.complete_upload(ticket, "a.zip", Ok(json!({}))).unwrap();

    assert!(dashboard.toggle_layer(&id));
    assert!(!dashboard.layers()[0].visible);
    assert!(dashboard.toggle_layer(&id));
    assert!(dashboard.layers()[0].visible);

    assert!(!dashboard.toggle_layer("layer-missing"));
    assert!(dashboard.remove_layer(&id));
    assert!(!dashboard.remove_layer(&id));
    assert!(dashboard.layers().is_empty());
}

#[test]
fn markers_scale_with_dataset() {
    let mut dashboard = Dashboard::new(Language::En);
    dashboard.set_dataset(DatasetId::Population);
    let markers = dashboard.markers();
    assert_eq!(markers.len(), catalog::COUNTRIES.len());

    let scale = |id: &str| markers.iter().find(|m| m.country.id == id).unwrap().scale;
    assert_eq!(scale("SV"), 8.0);
    assert_eq!(scale("CO"), 26.0);
    assert!(scale("GT") > 8.0 && scale("GT") < 26.0);

    dashboard.select_country(catalog::country("SV"));
    let markers = dashboard.markers();
    let selected = markers.iter().find(|m| m.selected).unwrap();
    assert_eq!(selected.country.id, "SV");
    assert_eq!(selected.scale, 10.0);
    assert!(matches!(dashboard.panel(), Some(Panel::Country(_))));
}
