mod common;

use std::sync::Arc;

use curveview_core::consts::MIN_SCALE;
use curveview_core::transform::{SharedTransformCache, TransformCache, ViewKey};
use curveview_core::validation::ValidationPolicy;
use curveview_core::view::{ViewController, ViewParams};

use common::{hd_params, minimal_state};

fn key_for_zoom(zoom: f64) -> ViewKey {
    ViewKey::from_state(&minimal_state(&ViewParams {
        zoom_factor: zoom,
        ..hd_params()
    }))
}

// ---------------------------------------------------------------------------
// Quantization
// ---------------------------------------------------------------------------

#[test]
fn test_zoom_keys_distinct_two_quanta_apart() {
    for i in 0..2_000 {
        let a = 0.05 + i as f64 * 0.00137;
        let b = a + 0.002;
        assert_ne!(key_for_zoom(a), key_for_zoom(b), "zoom {a} vs {b}");
    }
}

#[test]
fn test_zoom_keys_equal_within_bin() {
    for k in 50..2_000 {
        let a = k as f64 * 0.001 + 0.0001;
        let b = a + 0.0003;
        assert_eq!(key_for_zoom(a), key_for_zoom(b), "zoom {a} vs {b}");
    }
}

#[test]
fn test_coarse_zoom_steps_no_longer_collide() {
    // 1.001 and 1.004 shared a key at 0.01 granularity.
    assert_ne!(key_for_zoom(1.001), key_for_zoom(1.004));
}

#[test]
fn test_pan_within_granularity_shares_key() {
    let a = ViewKey::from_state(&minimal_state(&ViewParams {
        offset_x: 10.01,
        ..hd_params()
    }));
    let b = ViewKey::from_state(&minimal_state(&ViewParams {
        offset_x: 10.04,
        ..hd_params()
    }));
    let c = ViewKey::from_state(&minimal_state(&ViewParams {
        offset_x: 10.26,
        ..hd_params()
    }));
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_quantized_scale_never_zero() {
    let key = key_for_zoom(0.0002);
    assert_eq!(key.zoom_factor(), MIN_SCALE);
}

#[test]
fn test_flags_and_dimensions_exact() {
    let base = ViewKey::from_state(&minimal_state(&hd_params()));
    let flipped = ViewKey::from_state(&minimal_state(&ViewParams {
        flip_y_axis: true,
        ..hd_params()
    }));
    let wider = ViewKey::from_state(&minimal_state(&ViewParams {
        widget_width: 801,
        ..hd_params()
    }));
    assert_ne!(base, flipped);
    assert_ne!(base, wider);
}

// ---------------------------------------------------------------------------
// Cache behavior
// ---------------------------------------------------------------------------

#[test]
fn test_hit_returns_same_instance() {
    let mut cache = TransformCache::new();
    let a = cache.get_or_build(&minimal_state(&ViewParams {
        zoom_factor: 1.2001,
        ..hd_params()
    }));
    let b = cache.get_or_build(&minimal_state(&ViewParams {
        zoom_factor: 1.2003,
        ..hd_params()
    }));
    assert!(Arc::ptr_eq(&a, &b));
    assert_eq!(cache.len(), 1);
    let stats = cache.stats();
    assert_eq!(stats.hits, 1);
    assert_eq!(stats.misses, 1);
    assert!((stats.hit_rate() - 0.5).abs() < 1e-12);
}

#[test]
fn test_distinct_zoom_builds_new_transform() {
    let mut cache = TransformCache::new();
    let a = cache.get_or_build(&minimal_state(&ViewParams {
        zoom_factor: 1.000,
        ..hd_params()
    }));
    let b = cache.get_or_build(&minimal_state(&ViewParams {
        zoom_factor: 1.002,
        ..hd_params()
    }));
    assert!(!Arc::ptr_eq(&a, &b));
    assert!(b.scale() > a.scale());
}

#[test]
fn test_background_does_not_affect_lookup() {
    use curveview_core::background::BackgroundImage;

    let mut cache = TransformCache::new();
    let state = minimal_state(&hd_params());
    let a = cache.get_or_build(&state);
    let with_bg = state.with_background(Arc::new(BackgroundImage {
        path: "plate.png".into(),
        width: 1920,
        height: 1080,
    }));
    let b = cache.get_or_build(&with_bg);
    assert!(Arc::ptr_eq(&a, &b));
}

#[test]
fn test_lru_eviction() {
    let mut cache = TransformCache::with_capacity(2);
    let s1 = minimal_state(&ViewParams {
        zoom_factor: 1.0,
        ..hd_params()
    });
    let s2 = minimal_state(&ViewParams {
        zoom_factor: 2.0,
        ..hd_params()
    });
    let s3 = minimal_state(&ViewParams {
        zoom_factor: 3.0,
        ..hd_params()
    });

    cache.get_or_build(&s1);
    cache.get_or_build(&s2);
    cache.get_or_build(&s1);
    cache.get_or_build(&s3);

    assert_eq!(cache.len(), 2);
    assert!(cache.contains(&s1));
    assert!(!cache.contains(&s2));
    assert!(cache.contains(&s3));
    assert_eq!(cache.stats().evictions, 1);
}

#[test]
fn test_eviction_only_affects_reuse() {
    let mut cache = TransformCache::with_capacity(1);
    let s1 = minimal_state(&hd_params());
    let s2 = minimal_state(&ViewParams {
        zoom_factor: 4.0,
        ..hd_params()
    });
    let first = cache.get_or_build(&s1);
    cache.get_or_build(&s2);
    let rebuilt = cache.get_or_build(&s1);
    assert!(!Arc::ptr_eq(&first, &rebuilt));
    assert_eq!(*first, *rebuilt);
}

#[test]
fn test_zero_capacity_treated_as_one() {
    let mut cache = TransformCache::with_capacity(0);
    assert_eq!(cache.capacity(), 1);
    cache.get_or_build(&minimal_state(&hd_params()));
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_clear_keeps_stats() {
    let mut cache = TransformCache::new();
    let state = minimal_state(&hd_params());
    cache.get_or_build(&state);
    cache.get_or_build(&state);
    cache.clear();
    assert!(cache.is_empty());
    assert_eq!(cache.stats().hits, 1);
}

// ---------------------------------------------------------------------------
// Pan accumulation
// ---------------------------------------------------------------------------

#[test]
fn test_small_pans_accumulate_in_live_state() {
    let mut controller = ViewController::new(hd_params(), ValidationPolicy::Minimal);
    let mut cache = TransformCache::new();

    for _ in 0..50 {
        controller.pan_by(0.05, -0.05);
        cache.get_or_build(&controller.snapshot());
    }

    let state = controller.snapshot();
    assert!((state.offset_x() - 2.5).abs() < 1e-9, "got {}", state.offset_x());
    assert!((state.offset_y() + 2.5).abs() < 1e-9, "got {}", state.offset_y());

    let stats = cache.stats();
    assert!(stats.hits > 0, "sub-granularity pans should share transforms");
    assert!(stats.misses < 50);

    let (qx, qy) = ViewKey::from_state(&state).offset();
    assert!((qx - 2.5).abs() < 1e-9);
    assert!((qy + 2.5).abs() < 1e-9);
}

// ---------------------------------------------------------------------------
// Shared cache
// ---------------------------------------------------------------------------

#[test]
fn test_shared_cache_across_threads() {
    let cache = SharedTransformCache::default();
    let state = minimal_state(&hd_params());
    let first = cache.get_or_build(&state);

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                let t = cache.get_or_build(&state);
                assert!(Arc::ptr_eq(&t, &first));
            });
        }
    });

    let stats = cache.stats();
    assert_eq!(stats.misses, 1);
    assert_eq!(stats.hits, 4);
}
