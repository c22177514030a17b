//! Geometry module - joint angles and segment inclines
//!
//! Re-exports only. All logic in submodules.

mod point;
mod angles;
mod incline;

pub use point::Point;
pub use angles::{angle_at, angle_at_with, try_angle_at, AngleMethod, MIN_SEGMENT_LENGTH};
pub use incline::{back_incline, vertical_angle};
