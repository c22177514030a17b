//! Pose module - landmarks in, bike-fit angles out
//!
//! Re-exports only. All logic in submodules.

mod landmarks;
mod visibility_gate;
mod reading;
mod extractor;

pub use landmarks::{BodySide, Landmark, LandmarkIndex, SideJoints, LANDMARK_COUNT};
pub use visibility_gate::{VisibilityGate, DEFAULT_VISIBILITY_THRESHOLD};
pub use reading::{
    AngleData, AngleKind, PoseQuality, PoseReading,
    DEFAULT_BACK_ANGLE, DEFAULT_HIP_ANGLE, DEFAULT_KNEE_ANGLE,
};
pub use extractor::{extract_body_angles, is_valid_pose, pose_confidence, BodyAngleExtractor};
