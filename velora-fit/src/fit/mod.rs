//! Fit module - angle classification, advice and adjustments
//!
//! Re-exports only. All logic in submodules.

mod ranges;
mod advice;
mod format;
mod recommendations;
mod bike;
mod guidance;
mod report;

pub use ranges::{AngleClass, OptimalAngles, OptimalRange, OPTIMAL_ANGLES};
pub use advice::{angle_advice, back_angle_advice, hip_angle_advice, knee_angle_advice};
pub use format::{format_adjustment, format_angle};
pub use recommendations::{generate_recommendations, Recommendation, RecommendationType};
pub use bike::{BikeInfo, BikeType};
pub use guidance::{FitIssue, COMMON_FIT_ISSUES, SETUP_INSTRUCTIONS};
pub use report::FitReport;
