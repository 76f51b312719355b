pub mod lms;
pub mod observation;
pub mod posterior;
pub mod sex;
pub mod size;

pub use lms::LmsParams;
pub use observation::Observation;
pub use posterior::Posterior;
pub use sex::Sex;
pub use size::{SizeBucket, SizeTable};
