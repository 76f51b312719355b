//! # growth-core
//!
//! Foundation crate for the growth estimation workspace.
//! Defines the shared types, output models, traits, errors, config, and
//! constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::GrowthConfig;
pub use errors::{GrowthError, GrowthResult};
pub use types::{LmsParams, Observation, Posterior, Sex, SizeBucket, SizeTable};
