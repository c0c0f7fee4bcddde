//! Property tests for curve resolution and conversion.
//!
//! Expected values are recomputed from the raw stock table rather than via
//! the lookup, so a regression in key search or blending shows up here.

use std::borrow::Cow;

use fontscale_core::{
    BUILTIN_CURVES, FontScaleLookup, REFERENCE_SIZES, ScaleCurve, ScaleKey, convert,
};
use proptest::prelude::*;

fn builtin() -> FontScaleLookup {
    FontScaleLookup::builtin().unwrap()
}

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() <= 1e-3 * b.abs().max(1.0)
}

/// Neighbouring stock entries around a scale whose key is not stored;
/// `None` for stored keys and scales outside the table.
fn neighbours(scale: f32) -> Option<((f32, [f32; 9]), (f32, [f32; 9]))> {
    let key = ScaleKey::from_scale(scale);
    if BUILTIN_CURVES.iter().any(|(s, _)| ScaleKey::from_scale(*s) == key) {
        return None;
    }
    let lower = BUILTIN_CURVES
        .iter()
        .rev()
        .find(|(s, _)| ScaleKey::from_scale(*s) < key)?;
    let higher = BUILTIN_CURVES
        .iter()
        .find(|(s, _)| ScaleKey::from_scale(*s) > key)?;
    Some((*lower, *higher))
}

#[test]
fn stored_keys_return_stored_curves() {
    let lookup = builtin();
    for (key, stored) in lookup.table().iter() {
        let resolved = lookup.lookup(key.scale()).unwrap();
        assert!(matches!(resolved, Cow::Borrowed(_)), "key {key:?} was not an exact hit");
        assert_eq!(resolved.as_ref(), stored);
    }
}

#[test]
fn stored_curves_reproduce_reference_targets() {
    let lookup = builtin();
    for (scale, to_dp) in BUILTIN_CURVES {
        let curve = lookup.lookup(scale).unwrap();
        for (sp, dp) in REFERENCE_SIZES.iter().zip(to_dp) {
            assert_eq!(convert(&curve, *sp), dp, "scale {scale} at {sp}sp");
        }
    }
}

#[test]
fn scale_1_3_converts_14sp_to_18_8dp() {
    let lookup = builtin();
    let curve = lookup.lookup(1.3).unwrap();
    assert_eq!(convert(&curve, 14.0), 18.8);
}

#[test]
fn shared_lookup_is_consistent_across_threads() {
    let expected = builtin().scale_size(1.65, 17.0);
    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(|| FontScaleLookup::shared().scale_size(1.65, 17.0)))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

proptest! {
    #[test]
    fn below_threshold_is_inactive(scale in -10.0f32..1.12) {
        let lookup = builtin();
        prop_assert!(!lookup.is_active(scale));
        prop_assert!(lookup.lookup(scale).is_none());
    }

    #[test]
    fn between_keys_blends_neighbours(scale in 1.151f32..1.999) {
        let pair = neighbours(scale);
        prop_assume!(pair.is_some());
        let (low, high) = pair.unwrap();
        let lookup = builtin();
        let curve = lookup.lookup(scale).unwrap();
        prop_assert!(matches!(curve, Cow::Owned(_)));

        let low_scale = ScaleKey::from_scale(low.0).scale();
        let high_scale = ScaleKey::from_scale(high.0).scale();
        let t = ((scale - low_scale) / (high_scale - low_scale)).clamp(0.0, 1.0);
        for (i, sp) in REFERENCE_SIZES.iter().enumerate() {
            let expected = low.1[i] + (high.1[i] - low.1[i]) * t;
            let actual = convert(&curve, *sp);
            prop_assert!(close(actual, expected), "{scale} at {sp}sp: {actual} != {expected}");
        }
    }

    #[test]
    fn outside_table_scales_linearly(
        scale in prop_oneof![1.131f32..1.149, 2.02f32..10.0],
        size in 0.0f32..500.0,
    ) {
        let lookup = builtin();
        let curve = lookup.lookup(scale).unwrap();
        prop_assert_eq!(curve.as_ref(), &ScaleCurve::linear(scale));
        prop_assert!(close(convert(&curve, size), scale * size));
    }

    #[test]
    fn conversion_is_monotonic(
        scale in 1.131f32..4.0,
        a in 0.0f32..300.0,
        b in 0.0f32..300.0,
    ) {
        let (small, large) = if a <= b { (a, b) } else { (b, a) };
        let lookup = builtin();
        let curve = lookup.lookup(scale).unwrap();
        let (lo, hi) = (convert(&curve, small), convert(&curve, large));
        prop_assert!(lo <= hi + 1e-4 * hi.abs().max(1.0), "{small}->{lo} > {large}->{hi}");
    }

    #[test]
    fn negative_sizes_mirror(scale in 1.131f32..4.0, size in 0.0f32..300.0) {
        let lookup = builtin();
        let curve = lookup.lookup(scale).unwrap();
        prop_assert_eq!(curve.convert_sp_to_dp(-size), -curve.convert_sp_to_dp(size));
    }

    #[test]
    fn reverse_conversion_inverts(scale in 1.131f32..4.0, size in 1.0f32..300.0) {
        let lookup = builtin();
        let curve = lookup.lookup(scale).unwrap();
        let back = curve.convert_dp_to_sp(curve.convert_sp_to_dp(size));
        prop_assert!(close(back, size), "{size} -> {back}");
    }
}
