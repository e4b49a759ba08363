mod common;

use curveview_core::config::{CacheConfig, ViewConfig};
use curveview_core::consts::DEFAULT_CACHE_CAPACITY;
use curveview_core::error::CurveViewError;
use curveview_core::validation::ValidationPolicy;
use curveview_core::view::FitMode;

use common::write_test_png;

#[test]
fn test_fit_mode_display() {
    assert_eq!(format!("{}", FitMode::Height), "Height");
    assert_eq!(format!("{}", FitMode::Contain), "Contain");
    assert_eq!(FitMode::default(), FitMode::Height);
}

#[test]
fn test_default_config() {
    let config = ViewConfig::default();
    assert_eq!(config.policy, ValidationPolicy::Minimal);
    assert_eq!(config.cache.capacity, DEFAULT_CACHE_CAPACITY);
    assert!(config.background.is_none());
    assert!(config.check().is_ok());
    assert_eq!(config.transform_cache().capacity(), DEFAULT_CACHE_CAPACITY);
}

#[test]
fn test_config_round_trip_json() {
    let mut config = ViewConfig::default();
    config.view.zoom_factor = 2.5;
    config.view.flip_y_axis = true;
    config.policy = ValidationPolicy::Strict;
    config.fit = FitMode::Contain;

    let json = serde_json::to_string(&config).unwrap();
    let parsed: ViewConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.view, config.view);
    assert_eq!(parsed.policy, ValidationPolicy::Strict);
    assert_eq!(parsed.fit, FitMode::Contain);
}

#[test]
fn test_partial_config_uses_defaults() {
    let parsed: ViewConfig =
        serde_json::from_str(r#"{ "view": { "zoom_factor": 3.0 }, "policy": "Comprehensive" }"#)
            .unwrap();
    assert_eq!(parsed.view.zoom_factor, 3.0);
    assert_eq!(parsed.view.display_width, 1920);
    assert_eq!(parsed.policy, ValidationPolicy::Comprehensive);
    assert_eq!(parsed.cache.capacity, DEFAULT_CACHE_CAPACITY);
}

#[test]
fn test_zero_capacity_rejected() {
    let config = ViewConfig {
        cache: CacheConfig { capacity: 0 },
        ..ViewConfig::default()
    };
    match config.controller() {
        Err(CurveViewError::InvalidConfig(msg)) => assert!(msg.contains("capacity"), "got: {msg}"),
        other => panic!("expected config error, got {other:?}"),
    }
}

#[test]
fn test_background_loaded_into_controller() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_test_png(dir.path(), 64, 32);
    let config = ViewConfig {
        background: Some(path),
        ..ViewConfig::default()
    };
    let controller = config.controller().unwrap();
    let state = controller.snapshot();
    assert_eq!(state.display_width(), 64);
    assert_eq!(state.display_height(), 32);
    assert!(state.background_image().is_some());
}

#[test]
fn test_missing_background_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = ViewConfig {
        background: Some(dir.path().join("missing.png")),
        ..ViewConfig::default()
    };
    assert!(config.controller().is_err());
}
