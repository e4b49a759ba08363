use std::sync::Arc;

use crate::point::{DataPoint, ScreenPoint, ScreenRect, TrackPoint};
use crate::transform::{Transform, TransformCache};
use crate::view::ViewState;

/// Everything a paint pass needs, computed with a single transform.
#[derive(Clone, Debug)]
pub struct ProjectedFrame {
    /// The transform every position in this frame was mapped with.
    pub transform: Arc<Transform>,
    /// Where the background image lands on screen.
    pub background: ScreenRect,
    /// Screen position of every input point, in input order.
    pub points: Vec<ScreenPoint>,
    /// Indices of points that fall inside the widget.
    pub visible: Vec<usize>,
}

impl ProjectedFrame {
    /// Project `points` with an already-obtained transform.
    pub fn project(transform: Arc<Transform>, state: &ViewState, points: &[TrackPoint]) -> Self {
        // Data coordinates live in image units when normalization is on.
        let (content_w, content_h) = if state.scale_to_image() {
            (state.image_width(), state.image_height())
        } else {
            (state.display_width(), state.display_height())
        };
        let background = ScreenRect::from_corners(
            transform.apply_point(DataPoint::new(0.0, 0.0)),
            transform.apply_point(DataPoint::new(content_w.into(), content_h.into())),
        );

        let projected = transform.apply_points(points);
        let viewport = ScreenRect::from_corners(
            ScreenPoint::new(0.0, 0.0),
            ScreenPoint::new(state.widget_width().into(), state.widget_height().into()),
        );
        let visible = projected
            .iter()
            .enumerate()
            .filter(|(_, p)| viewport.contains(**p))
            .map(|(i, _)| i)
            .collect();

        Self {
            transform,
            background,
            points: projected,
            visible,
        }
    }
}

/// Fetch the transform for `state` once and project the whole frame with it.
pub fn project_frame(
    cache: &mut TransformCache,
    state: &ViewState,
    points: &[TrackPoint],
) -> ProjectedFrame {
    let transform = cache.get_or_build(state);
    ProjectedFrame::project(transform, state, points)
}
