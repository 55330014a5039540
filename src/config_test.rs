#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn empty_object_gives_defaults() {
    let config = ViewportConfig::from_json("{}").expect("config");
    assert_eq!(config, ViewportConfig::default());
    assert_eq!(config.pixel_size, None);
    assert_eq!(config.observe, ObserveMode::ResizeObserver);
    assert_eq!(config.half_extent, 2.0);
}

#[test]
fn fields_use_camel_case() {
    let raw = r#"{
        "pixelSize": 1,
        "observe": "windowResize",
        "minZoom": 0.5,
        "maxZoom": 4.0,
        "halfExtent": 10.0
    }"#;
    let config = ViewportConfig::from_json(raw).expect("config");
    assert_eq!(config.pixel_size, Some(1));
    assert_eq!(config.observe, ObserveMode::WindowResize);
    assert_eq!(config.min_zoom, 0.5);
    assert_eq!(config.max_zoom, 4.0);
    assert_eq!(config.half_extent, 10.0);
}

#[test]
fn null_pixel_size_means_auto() {
    let config = ViewportConfig::from_json(r#"{"pixelSize": null}"#).expect("config");
    assert_eq!(config.pixel_size, None);
}

#[test]
fn observe_modes_parse_from_camel_case() {
    let observer = ViewportConfig::from_json(r#"{"observe": "resizeObserver"}"#).expect("config");
    let window = ViewportConfig::from_json(r#"{"observe": "windowResize"}"#).expect("config");
    assert_eq!(observer.observe, ObserveMode::ResizeObserver);
    assert_eq!(window.observe, ObserveMode::WindowResize);
}

#[test]
fn malformed_json_is_parse_error() {
    let err = ViewportConfig::from_json("{ not json").expect_err("should fail");
    assert!(matches!(err, ViewportError::ConfigParse(_)));
}

#[test]
fn unknown_observe_mode_is_parse_error() {
    let err = ViewportConfig::from_json(r#"{"observe": "polling"}"#).expect_err("should fail");
    assert!(matches!(err, ViewportError::ConfigParse(_)));
}

#[test]
fn pixel_size_zero_rejected() {
    let err = ViewportConfig::from_json(r#"{"pixelSize": 0}"#).expect_err("should fail");
    assert!(matches!(err, ViewportError::ConfigValue { field: "pixelSize", .. }));
}

#[test]
fn non_positive_min_zoom_rejected() {
    let err = ViewportConfig::from_json(r#"{"minZoom": 0}"#).expect_err("should fail");
    assert!(matches!(err, ViewportError::ConfigValue { field: "minZoom", .. }));
}

#[test]
fn max_zoom_below_min_rejected() {
    let err = ViewportConfig::from_json(r#"{"minZoom": 2.0, "maxZoom": 1.0}"#).expect_err("should fail");
    assert!(matches!(err, ViewportError::ConfigValue { field: "maxZoom", .. }));
}

#[test]
fn non_positive_half_extent_rejected() {
    let err = ViewportConfig::from_json(r#"{"halfExtent": -1}"#).expect_err("should fail");
    assert!(matches!(err, ViewportError::ConfigValue { field: "halfExtent", .. }));
}

#[test]
fn error_messages_name_the_field() {
    let err = ViewportConfig::from_json(r#"{"pixelSize": 0}"#).expect_err("should fail");
    assert_eq!(err.to_string(), "invalid viewport config: pixelSize must be at least 1");
}
