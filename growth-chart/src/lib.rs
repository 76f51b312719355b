//! # growth-chart
//!
//! Reference growth chart lookup (per-age/sex LMS parameters) and the
//! stateless LMS transform between raw heights and population z-scores.

pub mod table;
pub mod transform;

pub use table::{ChartRow, LmsChart};
pub use transform::{height_to_z, z_to_height};
