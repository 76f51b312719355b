use crate::types::Sex;

/// Mapping from raw database sex codes to chart sex categories.
///
/// The code scheme is domain policy owned by the caller, not by the
/// statistical core. Returning `None` means the code is not mappable and
/// the record should be skipped (never silently defaulted).
pub trait ISexCodePolicy: Send + Sync {
    fn map(&self, raw_code: i64) -> Option<Sex>;
}
