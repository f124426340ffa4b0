use datazoom_rs::api::{ENGINE_CONFIG_JSON_SCHEMA_V1, ZoomEngine, ZoomEngineConfig};
use datazoom_rs::core::FilterMode;
use datazoom_rs::render::NullRenderer;

#[test]
fn config_contract_round_trips() {
    let config = ZoomEngineConfig::new()
        .with_window(20.0, 60.0)
        .with_filter_mode(FilterMode::WeakFilter)
        .with_zoom_lock(true)
        .with_scroll_sensitivity(5.0);

    let json = config.to_json_contract_v1_pretty().expect("serialize");
    assert!(json.contains(&format!("\"schema_version\": {ENGINE_CONFIG_JSON_SCHEMA_V1}")));

    let parsed = ZoomEngineConfig::from_json_compat_str(&json).expect("parse");
    assert_eq!(parsed, config);
}

#[test]
fn bare_config_payload_parses_with_defaults() {
    let json = r#"{"start_percent": 25.0, "end_percent": 75.0}"#;

    let parsed = ZoomEngineConfig::from_json_compat_str(json).expect("parse");
    assert!((parsed.start_percent - 25.0).abs() <= 1e-9);
    assert!((parsed.end_percent - 75.0).abs() <= 1e-9);
    assert!(parsed.enabled);
    assert_eq!(parsed.filter_mode, FilterMode::None);
    assert!((parsed.scroll_sensitivity - 10.0).abs() <= 1e-9);
    assert!((parsed.bottom_px - 10.0).abs() <= 1e-9);
}

#[test]
fn unknown_schema_version_is_rejected() {
    let json = r#"{
        "schema_version": 99,
        "config": {"start_percent": 25.0, "end_percent": 75.0}
    }"#;

    let err = ZoomEngineConfig::from_json_compat_str(json).expect_err("version must be rejected");
    assert!(err.to_string().contains("schema version"));
}

#[test]
fn malformed_payload_is_rejected() {
    let err =
        ZoomEngineConfig::from_json_compat_str("{not json}").expect_err("must fail to parse");
    assert!(err.to_string().contains("config json"));
}

#[test]
fn engine_snapshot_round_trips_through_contract() {
    let mut engine =
        ZoomEngine::new(NullRenderer::default(), ZoomEngineConfig::new()).expect("engine init");
    engine.set_window(10.0, 50.0);
    engine.set_zoom_lock(true);
    engine.resolve_height(100.0);

    let json = engine
        .config_json_contract_v1_pretty()
        .expect("serialize snapshot");
    let parsed = ZoomEngineConfig::from_json_compat_str(&json).expect("parse snapshot");

    assert_eq!(parsed, engine.snapshot_config());
    assert!((parsed.start_percent - 10.0).abs() <= 1e-9);
    assert!((parsed.height_px - 60.0).abs() <= 1e-9);
    assert!(parsed.zoom_lock);
}

#[test]
fn non_finite_config_is_rejected_at_construction() {
    let config = ZoomEngineConfig::new().with_window(f64::NAN, 70.0);
    assert!(ZoomEngine::new(NullRenderer::default(), config).is_err());

    let config = ZoomEngineConfig::new().with_scroll_sensitivity(f64::INFINITY);
    assert!(ZoomEngine::new(NullRenderer::default(), config).is_err());
}

#[test]
fn out_of_range_config_is_clamped_not_rejected() {
    let config = ZoomEngineConfig::new().with_window(-20.0, 140.0);
    let engine = ZoomEngine::new(NullRenderer::default(), config).expect("engine init");

    assert!(engine.start().abs() <= 1e-9);
    assert!((engine.end() - 100.0).abs() <= 1e-9);
}
