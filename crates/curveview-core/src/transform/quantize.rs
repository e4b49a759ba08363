use crate::consts::{
    BASE_SCALE_QUANTUM, MANUAL_OFFSET_QUANTUM, MIN_SCALE, OFFSET_QUANTUM, ZOOM_QUANTUM,
};
use crate::view::ViewState;

/// Round `value` to the nearest multiple of `quantum`.
pub fn quantize(value: f64, quantum: f64) -> f64 {
    // Adding 0.0 folds -0.0 into 0.0 so both hash alike.
    (value / quantum).round() * quantum + 0.0
}

/// Like `quantize`, but never returns less than `MIN_SCALE`.
pub fn quantize_scale(value: f64, quantum: f64) -> f64 {
    quantize(value, quantum).max(MIN_SCALE)
}

/// Cache key for a `ViewState`.
///
/// Floats are rounded to their per-field granularity and stored as bit
/// patterns; dimensions and flags are compared exactly. The background
/// image is not part of the key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ViewKey {
    display_width: u32,
    display_height: u32,
    widget_width: u32,
    widget_height: u32,
    image_width: u32,
    image_height: u32,
    zoom_factor: u64,
    base_scale: u64,
    offset_x: u64,
    offset_y: u64,
    manual_x_offset: u64,
    manual_y_offset: u64,
    scale_to_image: bool,
    flip_y_axis: bool,
}

impl ViewKey {
    pub fn from_state(state: &ViewState) -> Self {
        Self {
            display_width: state.display_width(),
            display_height: state.display_height(),
            widget_width: state.widget_width(),
            widget_height: state.widget_height(),
            image_width: state.image_width(),
            image_height: state.image_height(),
            zoom_factor: quantize_scale(state.zoom_factor(), ZOOM_QUANTUM).to_bits(),
            base_scale: quantize_scale(state.base_scale(), BASE_SCALE_QUANTUM).to_bits(),
            offset_x: quantize(state.offset_x(), OFFSET_QUANTUM).to_bits(),
            offset_y: quantize(state.offset_y(), OFFSET_QUANTUM).to_bits(),
            manual_x_offset: quantize(state.manual_x_offset(), MANUAL_OFFSET_QUANTUM).to_bits(),
            manual_y_offset: quantize(state.manual_y_offset(), MANUAL_OFFSET_QUANTUM).to_bits(),
            scale_to_image: state.scale_to_image(),
            flip_y_axis: state.flip_y_axis(),
        }
    }

    pub fn zoom_factor(&self) -> f64 {
        f64::from_bits(self.zoom_factor)
    }

    pub fn offset(&self) -> (f64, f64) {
        (f64::from_bits(self.offset_x), f64::from_bits(self.offset_y))
    }
}
