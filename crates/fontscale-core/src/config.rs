//! Curve table file parser.
//!
//! ```toml
//! [[curve]]
//! scale = 1.15
//! from_sp = [8.0, 10.0, 12.0, 14.0, 18.0, 20.0, 24.0, 30.0, 100.0]
//! to_dp = [9.2, 11.5, 13.8, 16.4, 19.8, 21.8, 25.2, 30.0, 100.0]
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::builtin::{BUILTIN_CURVES, REFERENCE_SIZES};
use crate::curve::ScaleCurve;
use crate::error::FontScaleResult;
use crate::lookup::FontScaleLookup;
use crate::table::CurveTable;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableConfig {
    #[serde(rename = "curve", default)]
    pub curves: Vec<CurveConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveConfig {
    pub scale: f32,
    pub from_sp: Vec<f32>,
    pub to_dp: Vec<f32>,
}

impl TableConfig {
    pub fn from_file(path: &Path) -> FontScaleResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> FontScaleResult<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml_string(&self) -> FontScaleResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Config holding the stock tables, as a starting point for edits.
    pub fn scaffold() -> Self {
        TableConfig {
            curves: BUILTIN_CURVES
                .iter()
                .map(|(scale, to_dp)| CurveConfig {
                    scale: *scale,
                    from_sp: REFERENCE_SIZES.to_vec(),
                    to_dp: to_dp.to_vec(),
                })
                .collect(),
        }
    }

    /// Validate every curve and build the table.
    pub fn into_table(self) -> FontScaleResult<CurveTable> {
        let mut table = CurveTable::new();
        for curve in self.curves {
            table.insert(curve.scale, ScaleCurve::new(curve.from_sp, curve.to_dp)?)?;
        }
        Ok(table)
    }

    pub fn into_lookup(self) -> FontScaleResult<FontScaleLookup> {
        FontScaleLookup::new(self.into_table()?)
    }
}
