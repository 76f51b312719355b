/// Workspace version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Percentiles reported by the trajectory summarizer.
pub const SUMMARY_PERCENTILES: [f64; 3] = [5.0, 50.0, 95.0];
