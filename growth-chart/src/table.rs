use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use growth_core::errors::{GrowthError, GrowthResult};
use growth_core::traits::IReferenceChart;
use growth_core::types::{LmsParams, Sex};

/// One parsed reference chart row.
///
/// Chart ingestion and validation happen upstream; this crate only
/// receives rows already parsed into this shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartRow {
    pub sex: Sex,
    pub age_months: u32,
    pub l: f64,
    pub m: f64,
    pub s: f64,
}

/// Immutable in-memory LMS reference chart keyed by (sex, age-in-months).
///
/// Lookups are exact-key only. Ages between chart rows are never
/// interpolated: a missing key is a `ChartMissing` error so that coverage
/// gaps in the supplied chart surface instead of being papered over.
#[derive(Debug, Clone)]
pub struct LmsChart {
    rows: HashMap<(Sex, u32), LmsParams>,
}

impl LmsChart {
    /// Build a chart from parsed rows. Duplicate (sex, age) keys keep the
    /// last row seen.
    pub fn from_rows(rows: impl IntoIterator<Item = ChartRow>) -> Self {
        let rows = rows
            .into_iter()
            .map(|r| ((r.sex, r.age_months), LmsParams::new(r.l, r.m, r.s)))
            .collect();
        Self { rows }
    }

    pub fn contains(&self, sex: Sex, age_months: u32) -> bool {
        self.rows.contains_key(&(sex, age_months))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl IReferenceChart for LmsChart {
    fn lookup(&self, sex: Sex, age_months: u32) -> GrowthResult<LmsParams> {
        self.rows
            .get(&(sex, age_months))
            .copied()
            .ok_or(GrowthError::ChartMissing { sex, age_months })
    }
}
