pub mod chart;
pub mod sex_policy;

pub use chart::IReferenceChart;
pub use sex_policy::ISexCodePolicy;
