//! Scale-keyed curve table.

use crate::curve::ScaleCurve;
use crate::error::{FontScaleError, FontScaleResult};

/// Factor between a font scale and its integer key.
pub const SCALE_KEY_MULTIPLIER: f32 = 100.0;

/// Integer table key: a font scale times 100, truncated toward zero.
///
/// Scales that differ only past the hundredths place share a key, so
/// `1.309` and `1.3` both land on `130`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScaleKey(i32);

impl ScaleKey {
    pub fn from_scale(scale: f32) -> Self {
        // `as` truncates and saturates; NaN maps to 0.
        Self((scale * SCALE_KEY_MULTIPLIER) as i32)
    }

    pub fn scale(self) -> f32 {
        self.0 as f32 / SCALE_KEY_MULTIPLIER
    }

    pub fn get(self) -> i32 {
        self.0
    }
}

/// Outcome of searching the table for a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySearch {
    /// The key is stored at this index.
    Found(usize),
    /// The key is absent. `lower`/`higher` are the neighbouring indices,
    /// `None` when the key falls before the first or after the last entry.
    Between {
        lower: Option<usize>,
        higher: Option<usize>,
    },
}

/// Ascending, unique-keyed list of curves.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurveTable {
    entries: Vec<(ScaleKey, ScaleCurve)>,
}

impl CurveTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a curve under the key derived from `scale`.
    pub fn insert(&mut self, scale: f32, curve: ScaleCurve) -> FontScaleResult<()> {
        let key = ScaleKey::from_scale(scale);
        match self.search(key) {
            KeySearch::Found(_) => Err(FontScaleError::DuplicateKey {
                key: key.get(),
                scale,
            }),
            KeySearch::Between { higher, .. } => {
                let at = higher.unwrap_or(self.entries.len());
                self.entries.insert(at, (key, curve));
                Ok(())
            }
        }
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with_curve(mut self, scale: f32, curve: ScaleCurve) -> FontScaleResult<Self> {
        self.insert(scale, curve)?;
        Ok(self)
    }

    pub fn search(&self, key: ScaleKey) -> KeySearch {
        match self.entries.binary_search_by_key(&key, |(k, _)| *k) {
            Ok(index) => KeySearch::Found(index),
            Err(insert_at) => KeySearch::Between {
                lower: insert_at.checked_sub(1),
                higher: (insert_at < self.entries.len()).then_some(insert_at),
            },
        }
    }

    pub fn get(&self, key: ScaleKey) -> Option<&ScaleCurve> {
        match self.search(key) {
            KeySearch::Found(index) => Some(&self.entries[index].1),
            KeySearch::Between { .. } => None,
        }
    }

    pub fn entry(&self, index: usize) -> Option<(ScaleKey, &ScaleCurve)> {
        self.entries.get(index).map(|(k, c)| (*k, c))
    }

    pub fn first_key(&self) -> Option<ScaleKey> {
        self.entries.first().map(|(k, _)| *k)
    }

    pub fn keys(&self) -> impl Iterator<Item = ScaleKey> + '_ {
        self.entries.iter().map(|(k, _)| *k)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ScaleKey, &ScaleCurve)> + '_ {
        self.entries.iter().map(|(k, c)| (*k, c))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> CurveTable {
        CurveTable::new()
            .with_curve(1.5, ScaleCurve::linear(1.5))
            .unwrap()
            .with_curve(1.15, ScaleCurve::linear(1.15))
            .unwrap()
            .with_curve(2.0, ScaleCurve::linear(2.0))
            .unwrap()
    }

    #[test]
    fn test_key_truncates() {
        assert_eq!(ScaleKey::from_scale(1.3).get(), 130);
        assert_eq!(ScaleKey::from_scale(1.309).get(), 130);
        assert_eq!(ScaleKey::from_scale(1.15).get(), 115);
        assert_eq!(ScaleKey::from_scale(f32::NAN).get(), 0);
        assert_eq!(ScaleKey::from_scale(f32::INFINITY).get(), i32::MAX);
    }

    #[test]
    fn test_insert_keeps_keys_sorted() {
        let keys: Vec<i32> = table().keys().map(ScaleKey::get).collect();
        assert_eq!(keys, vec![115, 150, 200]);
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let err = table().with_curve(1.151, ScaleCurve::linear(1.2)).unwrap_err();
        assert!(matches!(err, FontScaleError::DuplicateKey { key: 115, .. }));
    }

    #[test]
    fn test_search_outcomes() {
        let t = table();
        assert_eq!(t.search(ScaleKey::from_scale(1.5)), KeySearch::Found(1));
        assert_eq!(
            t.search(ScaleKey::from_scale(1.7)),
            KeySearch::Between { lower: Some(1), higher: Some(2) }
        );
        assert_eq!(
            t.search(ScaleKey::from_scale(1.1)),
            KeySearch::Between { lower: None, higher: Some(0) }
        );
        assert_eq!(
            t.search(ScaleKey::from_scale(3.0)),
            KeySearch::Between { lower: Some(2), higher: None }
        );
    }

    #[test]
    fn test_get() {
        let t = table();
        assert_eq!(t.get(ScaleKey::from_scale(2.0)), Some(&ScaleCurve::linear(2.0)));
        assert!(t.get(ScaleKey::from_scale(1.8)).is_none());
    }
}
