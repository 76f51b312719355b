use crate::errors::GrowthResult;
use crate::types::{LmsParams, Sex};

/// Reference chart provider: per-(sex, age) LMS population parameters.
///
/// Lookups are exact — age-in-months must be an integer key present in the
/// chart. Implementations must not interpolate between ages: a silently
/// interpolated row would mask missing chart coverage, so absence is a
/// `ChartMissing` error instead.
pub trait IReferenceChart: Send + Sync {
    /// Fetch the LMS row for an exact (sex, age-in-months) key.
    fn lookup(&self, sex: Sex, age_months: u32) -> GrowthResult<LmsParams>;
}

impl<C: IReferenceChart + ?Sized> IReferenceChart for &C {
    fn lookup(&self, sex: Sex, age_months: u32) -> GrowthResult<LmsParams> {
        (**self).lookup(sex, age_months)
    }
}
