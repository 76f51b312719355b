pub mod recommendation;
pub mod trajectory;

pub use recommendation::{SizeRecommendation, SizeScore};
pub use trajectory::{OutgrowPoint, TrajectoryBand, TrajectoryPoint};
