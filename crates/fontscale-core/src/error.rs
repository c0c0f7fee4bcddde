//! Error types for curve construction and table loading.

use thiserror::Error;

/// Result type alias for fontscale operations.
pub type FontScaleResult<T> = Result<T, FontScaleError>;

/// Errors raised while building curves and lookup tables.
///
/// Nothing here is produced by `lookup` or `convert`; once a
/// [`FontScaleLookup`](crate::FontScaleLookup) exists, every query succeeds.
#[derive(Debug, Error)]
pub enum FontScaleError {
    #[error("curve must contain at least one point")]
    EmptyCurve,

    #[error("curve arrays differ in length: {from_len} source sizes, {to_len} target sizes")]
    LengthMismatch { from_len: usize, to_len: usize },

    #[error("curve source sizes must be strictly increasing (index {index}: {value})")]
    NonIncreasingSource { index: usize, value: f32 },

    #[error("curve target sizes must not decrease (index {index}: {value})")]
    NonMonotonicTarget { index: usize, value: f32 },

    #[error("curve contains a non-finite value at index {index}")]
    NonFinite { index: usize },

    #[error("lookup table must contain at least one curve")]
    EmptyTable,

    #[error("duplicate scale key {key} (scale {scale})")]
    DuplicateKey { key: i32, scale: f32 },

    #[error("non-linear scaling only applies to font scales > 1 (activation threshold is {threshold})")]
    ActivationTooLow { threshold: f32 },

    #[error("failed to read table file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse table file: {0}")]
    ParseToml(#[from] toml::de::Error),

    #[error("failed to serialize table: {0}")]
    SerializeToml(#[from] toml::ser::Error),
}
