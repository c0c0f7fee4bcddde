//! Piecewise-linear font size curves.
//!
//! A [`ScaleCurve`] maps a nominal font size (sp) to a scaled size (dp)
//! through a short list of anchor points. Between anchors the mapping is
//! linear. Below the first anchor it runs straight to the origin; past the
//! last anchor it keeps the last anchor's `dp / sp` ratio, so a curve with a
//! single `(1.0, s)` point is plain linear scaling by `s`.

use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

use crate::error::{FontScaleError, FontScaleResult};
use crate::math::constrained_map;

/// Monotonic piecewise-linear mapping from sp to dp.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaleCurve {
    from_sp: Vec<f32>,
    to_dp: Vec<f32>,
}

impl ScaleCurve {
    /// Build a curve from matching source and target columns.
    ///
    /// Source sizes must be finite and strictly increasing; target sizes
    /// must be finite and non-decreasing.
    pub fn new(from_sp: Vec<f32>, to_dp: Vec<f32>) -> FontScaleResult<Self> {
        if from_sp.len() != to_dp.len() {
            return Err(FontScaleError::LengthMismatch {
                from_len: from_sp.len(),
                to_len: to_dp.len(),
            });
        }
        if from_sp.is_empty() {
            return Err(FontScaleError::EmptyCurve);
        }

        for (index, (sp, dp)) in from_sp.iter().zip(&to_dp).enumerate() {
            if !sp.is_finite() || !dp.is_finite() {
                return Err(FontScaleError::NonFinite { index });
            }
            if index > 0 {
                if *sp <= from_sp[index - 1] {
                    return Err(FontScaleError::NonIncreasingSource { index, value: *sp });
                }
                if *dp < to_dp[index - 1] {
                    return Err(FontScaleError::NonMonotonicTarget { index, value: *dp });
                }
            }
        }

        Ok(Self { from_sp, to_dp })
    }

    /// Single-point curve that scales every size by `scale`.
    pub fn linear(scale: f32) -> Self {
        Self::from_parts_unchecked(vec![1.0], vec![scale])
    }

    /// Caller guarantees the columns are equal-length, non-empty and ordered.
    pub(crate) fn from_parts_unchecked(from_sp: Vec<f32>, to_dp: Vec<f32>) -> Self {
        debug_assert_eq!(from_sp.len(), to_dp.len());
        debug_assert!(!from_sp.is_empty());
        Self { from_sp, to_dp }
    }

    pub fn from_sp(&self) -> &[f32] {
        &self.from_sp
    }

    pub fn to_dp(&self) -> &[f32] {
        &self.to_dp
    }

    pub fn len(&self) -> usize {
        self.from_sp.len()
    }

    pub fn is_empty(&self) -> bool {
        self.from_sp.is_empty()
    }

    /// Iterate over `(sp, dp)` anchor pairs.
    pub fn points(&self) -> impl Iterator<Item = (f32, f32)> + '_ {
        self.from_sp.iter().copied().zip(self.to_dp.iter().copied())
    }

    /// Convert a nominal size to its scaled size.
    pub fn convert_sp_to_dp(&self, sp: f32) -> f32 {
        lookup_and_interpolate(sp, &self.from_sp, &self.to_dp)
    }

    /// Inverse of [`convert_sp_to_dp`](Self::convert_sp_to_dp).
    pub fn convert_dp_to_sp(&self, dp: f32) -> f32 {
        lookup_and_interpolate(dp, &self.to_dp, &self.from_sp)
    }
}

impl fmt::Display for ScaleCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScaleCurve[")?;
        for (i, (sp, dp)) in self.points().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{sp}sp -> {dp}dp")?;
        }
        write!(f, "]")
    }
}

/// Convert a size through a curve. Free-function form of
/// [`ScaleCurve::convert_sp_to_dp`].
pub fn convert(curve: &ScaleCurve, size: f32) -> f32 {
    curve.convert_sp_to_dp(size)
}

fn lookup_and_interpolate(value: f32, sources: &[f32], targets: &[f32]) -> f32 {
    let magnitude = value.abs();
    let sign = if value == 0.0 { 0.0 } else { value.signum() };

    let insert_at = match sources.binary_search_by(|s| compare(*s, magnitude)) {
        Ok(index) => return sign * targets[index],
        Err(insert_at) => insert_at,
    };

    let last = sources.len() - 1;
    let (start_src, end_src, start_tgt, end_tgt) = if insert_at > last {
        // Past the table: keep the last anchor's ratio.
        if sources[last] == 0.0 {
            return 0.0;
        }
        return value * (targets[last] / sources[last]);
    } else if insert_at == 0 {
        (0.0, sources[0], 0.0, targets[0])
    } else {
        (
            sources[insert_at - 1],
            sources[insert_at],
            targets[insert_at - 1],
            targets[insert_at],
        )
    };

    sign * constrained_map(start_tgt, end_tgt, start_src, end_src, magnitude)
}

fn compare(a: f32, b: f32) -> Ordering {
    a.total_cmp(&b)
}
