use chrono::{Datelike, NaiveDate};

use growth_chart::transform;
use growth_core::config::BeliefConfig;
use growth_core::errors::{GrowthError, GrowthResult};
use growth_core::traits::IReferenceChart;
use growth_core::types::{Observation, Posterior, Sex};

/// One child's growth belief: a Gaussian posterior over theta, the child's
/// persistent relative growth position in z-space, plus the append-only
/// observation history that produced it.
///
/// The belief moves through two states: uninitialized (prior only, empty
/// history) and observed (≥1 incorporated observation). The transition is
/// one-directional — there is no way to remove an observation.
/// `incorporate` is the single mutation entry point; everything else reads.
///
/// One belief belongs to one logical child/session. Concurrent writers are
/// the caller's problem to serialize; read paths borrow immutably.
#[derive(Debug, Clone)]
pub struct GrowthBelief {
    sex: Sex,
    birth_date: NaiveDate,
    theta_mean: f64,
    theta_var: f64,
    /// Observation noise variance, fixed at construction.
    obs_var: f64,
    history: Vec<Observation>,
}

impl GrowthBelief {
    /// Create an uninitialized belief from the configured prior.
    pub fn new(sex: Sex, birth_date: NaiveDate, config: &BeliefConfig) -> Self {
        Self {
            sex,
            birth_date,
            theta_mean: config.prior_mean,
            theta_var: config.prior_var,
            obs_var: config.obs_var(),
            history: Vec::new(),
        }
    }

    /// Create with the default prior: mean 0, variance 1 — an average
    /// child, maximally uncertain.
    pub fn with_defaults(sex: Sex, birth_date: NaiveDate) -> Self {
        Self::new(sex, birth_date, &BeliefConfig::default())
    }

    pub fn sex(&self) -> Sex {
        self.sex
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    /// Whole calendar months from birth to `date`, floored and clamped
    /// to 0 (dates before birth count as age 0, not an error).
    ///
    /// Day-of-month is deliberately ignored — pure year/month arithmetic,
    /// matching the granularity of monthly reference charts. Known
    /// approximation: a measurement on the 1st and the 28th of the same
    /// month resolve to the same chart row.
    pub fn age_in_months(&self, date: NaiveDate) -> u32 {
        let months = i64::from(date.year() - self.birth_date.year()) * 12
            + i64::from(date.month() as i32 - self.birth_date.month() as i32);
        months.max(0) as u32
    }

    /// Incorporate one height observation.
    ///
    /// The measurement is standardized against the (sex, age) chart row and
    /// fused into the posterior by a conjugate Normal-Normal update, using
    /// the current posterior as the prior (sequential online fusion):
    ///
    /// ```text
    /// post_var  = 1 / (1/prior_var + 1/obs_var)
    /// post_mean = post_var · (prior_mean/prior_var + z/obs_var)
    /// ```
    ///
    /// Drift of theta across calendar time is not modeled here; that is the
    /// trajectory simulator's process-noise step.
    ///
    /// Fails with `InvalidObservation` for non-positive or non-finite
    /// heights (checked before the transform, whose domain requires
    /// height > 0) and propagates `ChartMissing` unchanged. On any failure
    /// the belief is left untouched.
    pub fn incorporate<C: IReferenceChart>(
        &mut self,
        chart: &C,
        date: NaiveDate,
        height_cm: f64,
    ) -> GrowthResult<Observation> {
        if !height_cm.is_finite() || height_cm <= 0.0 {
            return Err(GrowthError::InvalidObservation {
                date,
                height_cm,
                reason: "height must be a positive finite number".into(),
            });
        }

        let age_months = self.age_in_months(date);
        let lms = chart.lookup(self.sex, age_months)?;
        let z = transform::height_to_z(height_cm, lms);

        let prior_mean = self.theta_mean;
        let prior_var = self.theta_var;
        let post_var = 1.0 / (1.0 / prior_var + 1.0 / self.obs_var);
        let post_mean = post_var * (prior_mean / prior_var + z / self.obs_var);

        self.theta_mean = post_mean;
        self.theta_var = post_var;
        let observation = Observation {
            date,
            age_months,
            height_cm,
            z_score: z,
            posterior_mean: post_mean,
            posterior_var: post_var,
        };
        self.history.push(observation.clone());

        Ok(observation)
    }

    /// Current posterior over theta.
    pub fn posterior(&self) -> Posterior {
        Posterior::new(self.theta_mean, self.theta_var)
    }

    /// Full observation history in arrival order.
    pub fn history(&self) -> &[Observation] {
        &self.history
    }

    /// Whether at least one observation has been incorporated.
    pub fn is_observed(&self) -> bool {
        !self.history.is_empty()
    }

    /// Most recent observation date (by date, not arrival order) — the
    /// time origin for forward simulation. `None` while uninitialized.
    pub fn last_observation_date(&self) -> Option<NaiveDate> {
        self.history.iter().map(|o| o.date).max()
    }
}
