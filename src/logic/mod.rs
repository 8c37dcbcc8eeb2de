pub mod assessment;
pub mod calculations;
pub mod calculator;

pub use assessment::{Assessment, AssessmentService};
pub use calculator::HarvestingCalculator;
