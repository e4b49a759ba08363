use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::background::BackgroundImage;
use crate::consts::{MAX_ZOOM, MIN_ZOOM, ZOOM_STEP};
use crate::error::Result;
use crate::point::{DataPoint, ScreenPoint};
use crate::transform::Transform;
use crate::validation::ValidationPolicy;

use super::state::{ViewParams, ViewState};

/// How `fit_to_window` chooses the base scale.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FitMode {
    /// Fit the content height to the widget height; wide content overflows
    /// horizontally and stays centered.
    #[default]
    Height,
    /// Fit the whole content inside the widget.
    Contain,
}

impl std::fmt::Display for FitMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Height => write!(f, "Height"),
            Self::Contain => write!(f, "Contain"),
        }
    }
}

/// Owner of the live view parameters.
///
/// Input handling mutates the controller; rendering and hit testing take a
/// `ViewState` snapshot from it and never see the live values directly.
#[derive(Clone, Debug)]
pub struct ViewController {
    params: ViewParams,
    policy: ValidationPolicy,
    background: Option<Arc<BackgroundImage>>,
}

impl ViewController {
    pub fn new(params: ViewParams, policy: ValidationPolicy) -> Self {
        Self {
            params,
            policy,
            background: None,
        }
    }

    pub fn params(&self) -> &ViewParams {
        &self.params
    }

    /// Sanitized snapshot of the live parameters. Corrections are always
    /// applied, even under `Strict`.
    pub fn snapshot(&self) -> ViewState {
        let state = ViewState::new(&self.params, self.policy).into_value();
        match &self.background {
            Some(image) => state.with_background(Arc::clone(image)),
            None => state,
        }
    }

    /// Like `snapshot`, but honors `Strict` by failing on critical issues.
    pub fn try_snapshot(&self) -> Result<ViewState> {
        let state = ViewState::from_params(&self.params, self.policy)?;
        Ok(match &self.background {
            Some(image) => state.with_background(Arc::clone(image)),
            None => state,
        })
    }

    /// Attach a background image; the display area takes its size.
    pub fn set_background(&mut self, image: Arc<BackgroundImage>) {
        self.params.display_width = image.width.into();
        self.params.display_height = image.height.into();
        self.background = Some(image);
    }

    pub fn set_zoom(&mut self, zoom: f64) {
        let zoom = if zoom.is_finite() { zoom } else { 1.0 };
        self.params.zoom_factor = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Multiply the zoom by `factor`, keeping the data point under `cursor`
    /// at the same screen position.
    ///
    /// If the current view cannot be inverted the view is reset instead.
    pub fn zoom_at(&mut self, cursor: ScreenPoint, factor: f64) {
        let before_state = self.snapshot();
        let before = Transform::new(&before_state);
        let anchor = match before.inverse_point(cursor) {
            Ok(point) => point,
            Err(err) => {
                warn!(%err, "zoom anchor unavailable, resetting view");
                self.reset();
                return;
            }
        };

        self.set_zoom(before_state.zoom_factor() * factor);

        let after = Transform::new(&self.snapshot());
        let landed = after.apply_point(anchor);
        self.params.offset_x += cursor.x - landed.x;
        self.params.offset_y += cursor.y - landed.y;
    }

    /// Zoom by whole steps of `ZOOM_STEP` around `cursor` (negative zooms out).
    pub fn zoom_steps(&mut self, cursor: ScreenPoint, steps: i32) {
        self.zoom_at(cursor, ZOOM_STEP.powi(steps));
    }

    /// Accumulate a pan delta in screen units. The live value is never
    /// quantized.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.params.offset_x += dx;
        self.params.offset_y += dy;
    }

    pub fn nudge_manual(&mut self, dx: f64, dy: f64) {
        self.params.manual_x_offset += dx;
        self.params.manual_y_offset += dy;
    }

    /// Recompute the base scale for the current widget and clear zoom and pan.
    pub fn fit_to_window(&mut self, mode: FitMode) {
        let state = self.snapshot();
        let fit_x = f64::from(state.widget_width()) / f64::from(state.display_width());
        let fit_y = f64::from(state.widget_height()) / f64::from(state.display_height());
        let base_scale = match mode {
            FitMode::Height => fit_y,
            FitMode::Contain => fit_x.min(fit_y),
        };
        debug!(%mode, base_scale, "fit to window");
        self.params.base_scale = base_scale;
        self.params.zoom_factor = 1.0;
        self.params.offset_x = 0.0;
        self.params.offset_y = 0.0;
    }

    /// Pan so that `point` lands on the widget center.
    pub fn center_on(&mut self, point: DataPoint) {
        let state = self.snapshot();
        let screen = Transform::new(&state).apply_point(point);
        let center_x = f64::from(state.widget_width()) / 2.0;
        let center_y = f64::from(state.widget_height()) / 2.0;
        self.params.offset_x += center_x - screen.x;
        self.params.offset_y += center_y - screen.y;
    }

    pub fn resize_widget(&mut self, width: i64, height: i64) {
        self.params.widget_width = width;
        self.params.widget_height = height;
    }

    pub fn set_display_size(&mut self, width: i64, height: i64) {
        self.params.display_width = width;
        self.params.display_height = height;
    }

    pub fn set_image_size(&mut self, width: i64, height: i64) {
        self.params.image_width = width;
        self.params.image_height = height;
    }

    pub fn set_flip_y(&mut self, flip: bool) {
        self.params.flip_y_axis = flip;
    }

    pub fn set_scale_to_image(&mut self, enabled: bool) {
        self.params.scale_to_image = enabled;
    }

    /// Fit to window and clear pan. Manual alignment offsets are kept.
    pub fn reset(&mut self) {
        debug!("view reset");
        self.fit_to_window(FitMode::default());
    }
}
