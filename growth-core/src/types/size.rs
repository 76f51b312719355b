use serde::{Deserialize, Serialize};

use crate::errors::{GrowthError, GrowthResult};

/// One clothing size bucket: heights in `[height_min, height_max)` wear
/// this size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeBucket {
    /// Catalog size identifier, e.g. "90", "100".
    pub code: String,
    /// Minimum height (cm), inclusive.
    pub height_min: f64,
    /// Maximum height (cm), exclusive.
    pub height_max: f64,
}

impl SizeBucket {
    pub fn new(code: impl Into<String>, height_min: f64, height_max: f64) -> Self {
        Self {
            code: code.into(),
            height_min,
            height_max,
        }
    }

    /// Whether a height falls inside this bucket's `[min, max)` range.
    pub fn contains(&self, height_cm: f64) -> bool {
        height_cm >= self.height_min && height_cm < self.height_max
    }
}

/// Ordered, immutable size catalog supplied by an external collaborator.
///
/// Catalog order matters: recommendation ties are broken by the
/// first-listed bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeTable {
    buckets: Vec<SizeBucket>,
}

impl SizeTable {
    pub fn new(buckets: Vec<SizeBucket>) -> Self {
        Self { buckets }
    }

    /// Buckets in catalog order.
    pub fn buckets(&self) -> &[SizeBucket] {
        &self.buckets
    }

    /// Look up a bucket by size code.
    pub fn bucket(&self, code: &str) -> GrowthResult<&SizeBucket> {
        self.buckets
            .iter()
            .find(|b| b.code == code)
            .ok_or_else(|| GrowthError::UnknownSize {
                code: code.to_string(),
            })
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }
}
