use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::background::BackgroundImage;
use crate::consts::{MAX_SCALE, MIN_SCALE};
use crate::error::Result;
use crate::validation::{ValidationPolicy, ValidationResult, Validator};

/// Raw, unvalidated view parameters as held by the live view.
///
/// Dimensions are signed so that bogus values coming from the widget layer
/// can be detected instead of wrapping.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewParams {
    pub display_width: i64,
    pub display_height: i64,
    pub widget_width: i64,
    pub widget_height: i64,
    pub image_width: i64,
    pub image_height: i64,
    pub zoom_factor: f64,
    pub base_scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    pub manual_x_offset: f64,
    pub manual_y_offset: f64,
    pub scale_to_image: bool,
    pub flip_y_axis: bool,
}

impl Default for ViewParams {
    fn default() -> Self {
        Self {
            display_width: 1920,
            display_height: 1080,
            widget_width: 800,
            widget_height: 600,
            image_width: 1920,
            image_height: 1080,
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
}

/// Immutable snapshot of everything needed to build a `Transform`.
///
/// Every numeric field has passed through a `Validator`, so all values are
/// finite, scales are positive and dimensions are at least one.
#[derive(Clone, Debug)]
pub struct ViewState {
    display_width: u32,
    display_height: u32,
    widget_width: u32,
    widget_height: u32,
    image_width: u32,
    image_height: u32,
    zoom_factor: f64,
    base_scale: f64,
    offset_x: f64,
    offset_y: f64,
    manual_x_offset: f64,
    manual_y_offset: f64,
    scale_to_image: bool,
    flip_y_axis: bool,
    background_image: Option<Arc<BackgroundImage>>,
}

impl ViewState {
    /// Sanitize `params` under `policy`. Never fails; corrections are
    /// reported in the returned issues (unless the policy is `Minimal`).
    pub fn new(params: &ViewParams, policy: ValidationPolicy) -> ValidationResult<Self> {
        let mut v = Validator::new(policy);
        let state = Self {
            display_width: v.dimension("display_width", params.display_width),
            display_height: v.dimension("display_height", params.display_height),
            widget_width: v.dimension("widget_width", params.widget_width),
            widget_height: v.dimension("widget_height", params.widget_height),
            image_width: v.dimension("image_width", params.image_width),
            image_height: v.dimension("image_height", params.image_height),
            zoom_factor: v.scale("zoom_factor", params.zoom_factor),
            base_scale: v.scale("base_scale", params.base_scale),
            offset_x: v.offset("offset_x", params.offset_x),
            offset_y: v.offset("offset_y", params.offset_y),
            manual_x_offset: v.offset("manual_x_offset", params.manual_x_offset),
            manual_y_offset: v.offset("manual_y_offset", params.manual_y_offset),
            scale_to_image: params.scale_to_image,
            flip_y_axis: params.flip_y_axis,
            background_image: None,
        };
        if state.scale_to_image
            && state.image_width == state.display_width
            && state.image_height == state.display_height
        {
            v.advise(
                "scale_to_image",
                1.0,
                "image and display sizes match, normalization has no effect",
                "disable scale_to_image or load the tracked image size",
            );
        }
        v.finish(state)
    }

    /// Sanitize and fail on critical issues if the policy is `Strict`.
    pub fn from_params(params: &ViewParams, policy: ValidationPolicy) -> Result<Self> {
        Self::new(params, policy).resolve()
    }

    pub fn with_background(mut self, image: Arc<BackgroundImage>) -> Self {
        self.background_image = Some(image);
        self
    }

    /// Raw parameters equal to this snapshot, for producers that want to
    /// derive a modified view.
    pub fn to_params(&self) -> ViewParams {
        ViewParams {
            display_width: self.display_width.into(),
            display_height: self.display_height.into(),
            widget_width: self.widget_width.into(),
            widget_height: self.widget_height.into(),
            image_width: self.image_width.into(),
            image_height: self.image_height.into(),
            zoom_factor: self.zoom_factor,
            base_scale: self.base_scale,
            offset_x: self.offset_x,
            offset_y: self.offset_y,
            manual_x_offset: self.manual_x_offset,
            manual_y_offset: self.manual_y_offset,
            scale_to_image: self.scale_to_image,
            flip_y_axis: self.flip_y_axis,
        }
    }

    pub fn display_width(&self) -> u32 {
        self.display_width
    }

    pub fn display_height(&self) -> u32 {
        self.display_height
    }

    pub fn widget_width(&self) -> u32 {
        self.widget_width
    }

    pub fn widget_height(&self) -> u32 {
        self.widget_height
    }

    pub fn image_width(&self) -> u32 {
        self.image_width
    }

    pub fn image_height(&self) -> u32 {
        self.image_height
    }

    pub fn zoom_factor(&self) -> f64 {
        self.zoom_factor
    }

    pub fn base_scale(&self) -> f64 {
        self.base_scale
    }

    pub fn offset_x(&self) -> f64 {
        self.offset_x
    }

    pub fn offset_y(&self) -> f64 {
        self.offset_y
    }

    pub fn manual_x_offset(&self) -> f64 {
        self.manual_x_offset
    }

    pub fn manual_y_offset(&self) -> f64 {
        self.manual_y_offset
    }

    pub fn scale_to_image(&self) -> bool {
        self.scale_to_image
    }

    pub fn flip_y_axis(&self) -> bool {
        self.flip_y_axis
    }

    pub fn background_image(&self) -> Option<&Arc<BackgroundImage>> {
        self.background_image.as_ref()
    }

    /// `base_scale * zoom_factor`, before any image normalization.
    ///
    /// Both factors are already in range, but their product is held to
    /// `[MIN_SCALE, MAX_SCALE]` as well so a sanitized view always inverts.
    pub fn combined_scale(&self) -> f64 {
        (self.base_scale * self.zoom_factor).clamp(MIN_SCALE, MAX_SCALE)
    }
}

// The background handle never affects geometry and is left out.
impl PartialEq for ViewState {
    fn eq(&self, other: &Self) -> bool {
        self.display_width == other.display_width
            && self.display_height == other.display_height
            && self.widget_width == other.widget_width
            && self.widget_height == other.widget_height
            && self.image_width == other.image_width
            && self.image_height == other.image_height
            && self.zoom_factor == other.zoom_factor
            && self.base_scale == other.base_scale
            && self.offset_x == other.offset_x
            && self.offset_y == other.offset_y
            && self.manual_x_offset == other.manual_x_offset
            && self.manual_y_offset == other.manual_y_offset
            && self.scale_to_image == other.scale_to_image
            && self.flip_y_axis == other.flip_y_axis
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(&ViewParams::default(), ValidationPolicy::Minimal).into_value()
    }
}
