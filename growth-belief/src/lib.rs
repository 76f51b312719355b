//! # growth-belief
//!
//! Owns one child's persistent relative-growth-position belief: a scalar
//! latent theta in z-space with a Gaussian posterior, updated by conjugate
//! Normal-Normal fusion as height observations arrive.

pub mod intake;
pub mod model;

pub use intake::{build_beliefs, ChildRecord, GuardianRecord, LegacySexCodePolicy};
pub use model::GrowthBelief;
