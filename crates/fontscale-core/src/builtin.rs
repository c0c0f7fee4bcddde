//! Stock lookup tables.
//!
//! Anchors were tuned by hand for readability: small text grows by roughly
//! the full scale factor while text at 30sp and up barely grows at all.

use crate::curve::ScaleCurve;
use crate::error::FontScaleResult;
use crate::table::CurveTable;

/// Nominal sizes every stock curve is anchored at. Interpolated curves are
/// rebuilt on the same grid; the trailing 100sp anchor pins the ratio used
/// for sizes past the table.
pub const REFERENCE_SIZES: [f32; 9] = [8.0, 10.0, 12.0, 14.0, 18.0, 20.0, 24.0, 30.0, 100.0];

/// `(scale, dp values at REFERENCE_SIZES)`.
pub const BUILTIN_CURVES: [(f32, [f32; 9]); 5] = [
    (1.15, [9.2, 11.5, 13.8, 16.4, 19.8, 21.8, 25.2, 30.0, 100.0]),
    (1.3, [10.4, 13.0, 15.6, 18.8, 21.6, 23.6, 26.4, 30.0, 100.0]),
    (1.5, [12.0, 15.0, 18.0, 22.0, 24.0, 26.0, 28.0, 30.0, 100.0]),
    (1.8, [14.4, 18.0, 21.6, 24.4, 27.6, 30.8, 32.8, 34.8, 100.0]),
    (2.0, [16.0, 20.0, 24.0, 26.0, 30.0, 34.0, 36.0, 38.0, 100.0]),
];

/// Build the stock table.
pub fn builtin_table() -> FontScaleResult<CurveTable> {
    let mut table = CurveTable::new();
    for (scale, to_dp) in BUILTIN_CURVES {
        table.insert(scale, ScaleCurve::new(REFERENCE_SIZES.to_vec(), to_dp.to_vec())?)?;
    }
    Ok(table)
}
