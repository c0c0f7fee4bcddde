//! fontscale-core — non-linear font scaling.
//!
//! Converts nominal font sizes (sp) into scaled sizes (dp) for large
//! accessibility font scales, growing small text more than large text.
//!
//! # Components
//!
//! - **`curve`** — piecewise-linear sp ↔ dp curves
//! - **`table`** — scale-keyed curve table with tagged key search
//! - **`lookup`** — resolves a scale factor to a stored, interpolated, or linear curve
//! - **`builtin`** — stock tables
//! - **`config`** — TOML table files

pub mod builtin;
pub mod config;
pub mod curve;
pub mod error;
pub mod lookup;
pub mod math;
pub mod table;

pub use builtin::{BUILTIN_CURVES, REFERENCE_SIZES, builtin_table};
pub use config::{CurveConfig, TableConfig};
pub use curve::{ScaleCurve, convert};
pub use error::{FontScaleError, FontScaleResult};
pub use lookup::FontScaleLookup;
pub use table::{CurveTable, KeySearch, SCALE_KEY_MULTIPLIER, ScaleKey};
