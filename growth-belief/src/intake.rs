//! Raw-record intake: turn collaborator-supplied child records into
//! belief models.
//!
//! Records arrive from an external store with loosely validated fields, so
//! this boundary skips what it cannot use and logs why, rather than failing
//! the whole batch.

use std::collections::HashMap;

use chrono::NaiveDate;
use tracing::warn;

use growth_core::config::BeliefConfig;
use growth_core::traits::{IReferenceChart, ISexCodePolicy};
use growth_core::types::Sex;

use crate::model::GrowthBelief;

/// One child's raw intake fields. Optional fields reflect the upstream
/// store, where either may be absent.
#[derive(Debug, Clone)]
pub struct ChildRecord {
    pub birth_date: Option<NaiveDate>,
    /// Last stored height measurement, if any.
    pub height_cm: Option<f64>,
    /// Raw sex code in the upstream store's scheme.
    pub sex_code: Option<i64>,
}

/// A guardian account with its children, in stored order.
#[derive(Debug, Clone)]
pub struct GuardianRecord {
    pub id: String,
    pub children: Vec<ChildRecord>,
}

/// Sex-code mapping used by the legacy store: odd codes 1/3 are male,
/// even codes 2/4 female. Unknown codes map to nothing and the record is
/// skipped — a silent default would misclassify the child.
#[derive(Debug, Clone, Copy, Default)]
pub struct LegacySexCodePolicy;

impl ISexCodePolicy for LegacySexCodePolicy {
    fn map(&self, raw_code: i64) -> Option<Sex> {
        match raw_code {
            1 | 3 => Some(Sex::Male),
            2 | 4 => Some(Sex::Female),
            _ => None,
        }
    }
}

/// Build belief models from guardian records, keyed by guardian id with
/// children in stored order.
///
/// A stored height, when present, is incorporated as an observation dated
/// `measured_on`. Children with missing or unmappable fields are skipped
/// with a warning; a failed incorporation (for example a chart coverage
/// gap at the child's age) leaves that belief uninitialized rather than
/// dropping it.
pub fn build_beliefs<C, P>(
    guardians: &[GuardianRecord],
    policy: &P,
    chart: &C,
    config: &BeliefConfig,
    measured_on: NaiveDate,
) -> HashMap<String, Vec<GrowthBelief>>
where
    C: IReferenceChart,
    P: ISexCodePolicy,
{
    let mut out = HashMap::new();

    for guardian in guardians {
        let mut beliefs = Vec::new();

        for (child_idx, child) in guardian.children.iter().enumerate() {
            let (Some(birth_date), Some(sex_code)) = (child.birth_date, child.sex_code) else {
                warn!(
                    guardian = %guardian.id,
                    child_idx,
                    "skipping child record with missing birth date or sex code"
                );
                continue;
            };

            let Some(sex) = policy.map(sex_code) else {
                warn!(
                    guardian = %guardian.id,
                    child_idx,
                    sex_code,
                    "skipping child record with unmappable sex code"
                );
                continue;
            };

            let mut belief = GrowthBelief::new(sex, birth_date, config);

            if let Some(height_cm) = child.height_cm {
                if let Err(e) = belief.incorporate(chart, measured_on, height_cm) {
                    warn!(
                        guardian = %guardian.id,
                        child_idx,
                        %height_cm,
                        error = %e,
                        "stored height could not be incorporated; belief left uninitialized"
                    );
                }
            }

            beliefs.push(belief);
        }

        out.insert(guardian.id.clone(), beliefs);
    }

    out
}
