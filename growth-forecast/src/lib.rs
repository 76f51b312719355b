//! # growth-forecast
//!
//! Monte Carlo projection of a growth belief: size recommendation at a
//! target date, forward trajectory simulation with z-space process noise,
//! percentile summaries, and outgrow-probability curves.
//!
//! All sampling goes through a caller-injected `rand::Rng`, so runs are
//! reproducible under a fixed seed and no global RNG state is touched.

pub mod engine;
pub mod outgrow;
pub mod sampler;
pub mod summary;

mod recommend;
mod simulate;

pub use engine::ForecastEngine;
pub use outgrow::outgrow_curve;
pub use summary::summarize;
