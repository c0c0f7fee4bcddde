//! Scale factor → curve resolution.
//!
//! ```text
//! scale < min_activation_scale        → None (use linear scaling)
//! trunc(scale * 100) is a stored key  → stored curve
//! key before first / after last entry → ScaleCurve::linear(scale)
//! otherwise                           → curve blended between neighbours
//! ```

use std::borrow::Cow;
use std::sync::OnceLock;

use tracing::{debug, info};

use crate::builtin::{REFERENCE_SIZES, builtin_table};
use crate::curve::ScaleCurve;
use crate::error::{FontScaleError, FontScaleResult};
use crate::math::{constrained_map, lerp};
use crate::table::{CurveTable, KeySearch, ScaleKey};

/// Distance below the smallest stored scale at which curves kick in.
pub const ACTIVATION_MARGIN: f32 = 0.02;

/// Immutable table of curves plus the resolution rules above.
#[derive(Debug, Clone)]
pub struct FontScaleLookup {
    table: CurveTable,
    min_activation_scale: f32,
}

impl FontScaleLookup {
    /// Wrap a table, rejecting tables that would activate at or below 1.0.
    pub fn new(table: CurveTable) -> FontScaleResult<Self> {
        let first = table.first_key().ok_or(FontScaleError::EmptyTable)?;
        let min_activation_scale = first.scale() - ACTIVATION_MARGIN;
        // Negated so a NaN threshold is rejected too.
        if !(min_activation_scale > 1.0) {
            return Err(FontScaleError::ActivationTooLow {
                threshold: min_activation_scale,
            });
        }

        info!(
            curves = table.len(),
            min_activation_scale,
            "font scale lookup table ready"
        );
        Ok(Self {
            table,
            min_activation_scale,
        })
    }

    /// Lookup over the stock tables.
    pub fn builtin() -> FontScaleResult<Self> {
        Self::new(builtin_table()?)
    }

    /// Process-wide lookup over the stock tables, built on first use.
    ///
    /// # Panics
    ///
    /// Panics if the stock tables fail validation.
    pub fn shared() -> &'static Self {
        static SHARED: OnceLock<FontScaleLookup> = OnceLock::new();
        SHARED.get_or_init(|| {
            Self::builtin()
                .unwrap_or_else(|e| panic!("built-in font scale table is invalid: {e}"))
        })
    }

    pub fn table(&self) -> &CurveTable {
        &self.table
    }

    pub fn min_activation_scale(&self) -> f32 {
        self.min_activation_scale
    }

    /// Whether non-linear curves apply at `scale`. Below the threshold
    /// (and for no scaling at all) sizes scale linearly.
    pub fn is_active(&self, scale: f32) -> bool {
        scale >= self.min_activation_scale
    }

    /// Resolve the curve for `scale`, or `None` when scaling is linear.
    pub fn lookup(&self, scale: f32) -> Option<Cow<'_, ScaleCurve>> {
        if !self.is_active(scale) {
            return None;
        }

        let key = ScaleKey::from_scale(scale);
        match self.table.search(key) {
            KeySearch::Found(index) => self.curve_at(index).map(|(_, c)| Cow::Borrowed(c)),
            KeySearch::Between {
                lower: Some(lower),
                higher: Some(higher),
            } => {
                let (low_key, low) = self.curve_at(lower)?;
                let (high_key, high) = self.curve_at(higher)?;
                let t = constrained_map(0.0, 1.0, low_key.scale(), high_key.scale(), scale);
                debug!(
                    scale,
                    lower = low_key.scale(),
                    higher = high_key.scale(),
                    t,
                    "interpolating font scale curve"
                );
                Some(Cow::Owned(interpolate_between(low, high, t)))
            }
            KeySearch::Between { .. } => {
                debug!(scale, key = key.get(), "scale outside table, using linear curve");
                Some(Cow::Owned(ScaleCurve::linear(scale)))
            }
        }
    }

    /// Scale a single size, falling back to `sp * scale` when curves are
    /// inactive.
    pub fn scale_size(&self, scale: f32, sp: f32) -> f32 {
        match self.lookup(scale) {
            Some(curve) => curve.convert_sp_to_dp(sp),
            None => sp * scale,
        }
    }

    /// Inverse of [`scale_size`](Self::scale_size).
    pub fn unscale_size(&self, scale: f32, dp: f32) -> f32 {
        match self.lookup(scale) {
            Some(curve) => curve.convert_dp_to_sp(dp),
            None if scale != 0.0 => dp / scale,
            None => dp,
        }
    }

    fn curve_at(&self, index: usize) -> Option<(ScaleKey, &ScaleCurve)> {
        self.table.entry(index)
    }
}

/// Blend two curves on the reference-size grid.
fn interpolate_between(start: &ScaleCurve, end: &ScaleCurve, t: f32) -> ScaleCurve {
    let to_dp = REFERENCE_SIZES
        .iter()
        .map(|&sp| lerp(start.convert_sp_to_dp(sp), end.convert_sp_to_dp(sp), t))
        .collect();
    ScaleCurve::from_parts_unchecked(REFERENCE_SIZES.to_vec(), to_dp)
}
