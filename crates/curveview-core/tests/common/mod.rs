use std::path::{Path, PathBuf};

use curveview_core::validation::ValidationPolicy;
use curveview_core::view::{ViewParams, ViewState};

/// View where data and screen coincide: display == widget, unit scale,
/// no offsets, no flip, no normalization.
pub fn identity_params(width: i64, height: i64) -> ViewParams {
    ViewParams {
        display_width: width,
        display_height: height,
        widget_width: width,
        widget_height: height,
        image_width: width,
        image_height: height,
        zoom_factor: 1.0,
        base_scale: 1.0,
        offset_x: 0.0,
        offset_y: 0.0,
        manual_x_offset: 0.0,
        manual_y_offset: 0.0,
        scale_to_image: false,
        flip_y_axis: false,
    }
}

/// 1920x1080 content in an 800x600 widget, the usual editor setup.
pub fn hd_params() -> ViewParams {
    ViewParams {
        display_width: 1920,
        display_height: 1080,
        widget_width: 800,
        widget_height: 600,
        image_width: 1920,
        image_height: 1080,
        ..identity_params(1920, 1080)
    }
}

pub fn minimal_state(params: &ViewParams) -> ViewState {
    ViewState::new(params, ValidationPolicy::Minimal).into_value()
}

/// Assert `actual` is within 1e-6 relative or 1e-9 absolute of `expected`,
/// whichever is larger.
pub fn assert_close(actual: f64, expected: f64, context: &str) {
    let tolerance = (expected.abs() * 1e-6).max(1e-9);
    assert!(
        (actual - expected).abs() <= tolerance,
        "{context}: expected {expected}, got {actual}"
    );
}

/// Write a black RGB PNG of the given size and return its path.
pub fn write_test_png(dir: &Path, width: u32, height: u32) -> PathBuf {
    let path = dir.join("background.png");
    image::RgbImage::new(width, height)
        .save(&path)
        .expect("write test png");
    path
}
