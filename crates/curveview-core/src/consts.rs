/// Smallest magnitude a scale-like value may take.
/// Applies to `zoom_factor`, `base_scale` and to the combined scale seen by `inverse`.
pub const MIN_SCALE: f64 = 1e-10;

/// Largest magnitude a scale-like value may take.
pub const MAX_SCALE: f64 = 1e10;

/// Bound on accumulated pan and manual offsets, in screen units.
pub const MAX_OFFSET: f64 = 1e6;

/// Bound on user-entered data coordinates.
pub const MAX_COORDINATE: f64 = 1e10;

/// Cache-key granularity for `zoom_factor`.
/// Must stay finer than the pan granularity: 0.01 let distinct zoom levels
/// collide during smooth zoom gestures.
pub const ZOOM_QUANTUM: f64 = 0.001;

/// Cache-key granularity for `base_scale`, aligned with zoom precision.
pub const BASE_SCALE_QUANTUM: f64 = 0.001;

/// Cache-key granularity for pan offsets.
pub const OFFSET_QUANTUM: f64 = 0.1;

/// Cache-key granularity for manual alignment offsets.
pub const MANUAL_OFFSET_QUANTUM: f64 = 0.1;

/// Default number of transforms kept by a `TransformCache`.
pub const DEFAULT_CACHE_CAPACITY: usize = 32;

/// Minimum point count to project a point list with Rayon.
pub const PARALLEL_POINT_THRESHOLD: usize = 4_096;

/// Lower zoom bound enforced by interactive view controls.
pub const MIN_ZOOM: f64 = 0.01;

/// Upper zoom bound enforced by interactive view controls.
pub const MAX_ZOOM: f64 = 100.0;

/// Multiplier applied per zoom-in step (wheel notch or key press).
pub const ZOOM_STEP: f64 = 1.1;

/// Default pick radius for point hit testing, in screen pixels.
pub const DEFAULT_HIT_RADIUS: f64 = 8.0;
