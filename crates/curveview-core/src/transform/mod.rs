pub mod cache;
pub mod quantize;

pub use cache::{CacheStats, SharedTransformCache, TransformCache};
pub use quantize::ViewKey;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::consts::{MIN_SCALE, PARALLEL_POINT_THRESHOLD};
use crate::error::{CurveViewError, Result};
use crate::point::{DataPoint, ScreenPoint, TrackPoint};
use crate::view::ViewState;

/// Pure mapping between data space and screen space.
///
/// Forward order: image normalization, Y flip, scale, centering, pan, manual
/// offset. `inverse` undoes the same steps in reverse. A `Transform` never
/// changes after construction and can be shared across threads.
#[derive(Clone, Debug, PartialEq)]
pub struct Transform {
    scale: f64,
    image_scale_x: f64,
    image_scale_y: f64,
    display_height: f64,
    center_offset_x: f64,
    center_offset_y: f64,
    pan_offset_x: f64,
    pan_offset_y: f64,
    manual_offset_x: f64,
    manual_offset_y: f64,
    flip_y: bool,
    scale_to_image: bool,
}

impl Transform {
    pub fn new(state: &ViewState) -> Self {
        let scale = state.combined_scale();
        let display_w = f64::from(state.display_width());
        let display_h = f64::from(state.display_height());

        let (image_scale_x, image_scale_y) = if state.scale_to_image() {
            (
                display_w / f64::from(state.image_width()),
                display_h / f64::from(state.image_height()),
            )
        } else {
            (1.0, 1.0)
        };

        // May be negative when the scaled content is larger than the widget.
        let center_offset_x = (f64::from(state.widget_width()) - display_w * scale) / 2.0;
        let center_offset_y = (f64::from(state.widget_height()) - display_h * scale) / 2.0;

        Self {
            scale,
            image_scale_x,
            image_scale_y,
            display_height: display_h,
            center_offset_x,
            center_offset_y,
            pan_offset_x: state.offset_x(),
            pan_offset_y: state.offset_y(),
            manual_offset_x: state.manual_x_offset(),
            manual_offset_y: state.manual_y_offset(),
            flip_y: state.flip_y_axis(),
            scale_to_image: state.scale_to_image(),
        }
    }

    /// Rebuild a transform from a parameter dump, e.g. one captured in a
    /// diagnostic log. Values are taken as-is, so the result may be
    /// degenerate.
    pub fn from_parameters(params: &TransformParameters) -> Self {
        Self {
            scale: params.scale,
            image_scale_x: params.image_scale_x,
            image_scale_y: params.image_scale_y,
            display_height: params.display_height,
            center_offset_x: params.center_offset_x,
            center_offset_y: params.center_offset_y,
            pan_offset_x: params.pan_offset_x,
            pan_offset_y: params.pan_offset_y,
            manual_offset_x: params.manual_offset_x,
            manual_offset_y: params.manual_offset_y,
            flip_y: params.flip_y,
            scale_to_image: params.scale_to_image,
        }
    }

    /// Map a data-space position to screen space.
    pub fn apply(&self, data_x: f64, data_y: f64) -> (f64, f64) {
        let mut x = data_x;
        let mut y = data_y;

        if self.scale_to_image {
            x *= self.image_scale_x;
            y *= self.image_scale_y;
        }
        if self.flip_y {
            y = self.display_height - y;
        }

        x *= self.scale;
        y *= self.scale;

        x += self.center_offset_x + self.pan_offset_x + self.manual_offset_x;
        y += self.center_offset_y + self.pan_offset_y + self.manual_offset_y;
        (x, y)
    }

    /// Map a screen-space position back to data space.
    ///
    /// Fails with `DegenerateTransform` instead of dividing by a scale below
    /// `MIN_SCALE`.
    pub fn inverse(&self, screen_x: f64, screen_y: f64) -> Result<(f64, f64)> {
        if self.is_degenerate() {
            warn!(scale = self.scale, "inverse requested on degenerate transform");
            return Err(CurveViewError::DegenerateTransform {
                scale: self.scale,
                min: MIN_SCALE,
            });
        }

        let mut x = screen_x - self.manual_offset_x - self.pan_offset_x - self.center_offset_x;
        let mut y = screen_y - self.manual_offset_y - self.pan_offset_y - self.center_offset_y;

        x /= self.scale;
        y /= self.scale;

        if self.flip_y {
            y = self.display_height - y;
        }
        if self.scale_to_image {
            x /= self.image_scale_x;
            y /= self.image_scale_y;
        }
        Ok((x, y))
    }

    pub fn apply_point(&self, point: DataPoint) -> ScreenPoint {
        let (x, y) = self.apply(point.x, point.y);
        ScreenPoint::new(x, y)
    }

    pub fn inverse_point(&self, point: ScreenPoint) -> Result<DataPoint> {
        let (x, y) = self.inverse(point.x, point.y)?;
        Ok(DataPoint::new(x, y))
    }

    /// Project a whole point list with this transform.
    pub fn apply_points(&self, points: &[TrackPoint]) -> Vec<ScreenPoint> {
        if points.len() >= PARALLEL_POINT_THRESHOLD {
            points
                .par_iter()
                .map(|p| self.apply_point(p.position()))
                .collect()
        } else {
            points.iter().map(|p| self.apply_point(p.position())).collect()
        }
    }

    /// Combined `base_scale * zoom_factor`.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Screen pixels per data unit on each axis, including image normalization.
    pub fn effective_scale(&self) -> (f64, f64) {
        (
            self.scale * self.image_scale_x,
            self.scale * self.image_scale_y,
        )
    }

    /// True when the scale is too small (or not a number) to invert.
    pub fn is_degenerate(&self) -> bool {
        self.scale.is_nan() || self.scale.abs() < MIN_SCALE
    }

    pub fn flip_y(&self) -> bool {
        self.flip_y
    }

    pub fn scale_to_image(&self) -> bool {
        self.scale_to_image
    }

    pub fn parameters(&self) -> TransformParameters {
        TransformParameters {
            scale: self.scale,
            image_scale_x: self.image_scale_x,
            image_scale_y: self.image_scale_y,
            center_offset_x: self.center_offset_x,
            center_offset_y: self.center_offset_y,
            pan_offset_x: self.pan_offset_x,
            pan_offset_y: self.pan_offset_y,
            manual_offset_x: self.manual_offset_x,
            manual_offset_y: self.manual_offset_y,
            display_height: self.display_height,
            flip_y: self.flip_y,
            scale_to_image: self.scale_to_image,
        }
    }
}

/// Flat copy of a transform's fields, for diagnostic overlays and logs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransformParameters {
    pub scale: f64,
    pub image_scale_x: f64,
    pub image_scale_y: f64,
    pub center_offset_x: f64,
    pub center_offset_y: f64,
    pub pan_offset_x: f64,
    pub pan_offset_y: f64,
    pub manual_offset_x: f64,
    pub manual_offset_y: f64,
    pub display_height: f64,
    pub flip_y: bool,
    pub scale_to_image: bool,
}

impl std::fmt::Display for TransformParameters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "scale={:.4} image_scale=({:.4}, {:.4}) center=({:.1}, {:.1}) pan=({:.1}, {:.1}) manual=({:.1}, {:.1}) flip_y={} scale_to_image={}",
            self.scale,
            self.image_scale_x,
            self.image_scale_y,
            self.center_offset_x,
            self.center_offset_y,
            self.pan_offset_x,
            self.pan_offset_y,
            self.manual_offset_x,
            self.manual_offset_y,
            self.flip_y,
            self.scale_to_image
        )
    }
}
