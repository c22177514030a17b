//! Tunables for pose extraction
//!
//! Every field has a default matching the app's shipped behavior, so a
//! partial JSON object (or `{}`) is a valid config.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::geometry::AngleMethod;
use crate::pose::DEFAULT_VISIBILITY_THRESHOLD;

/// Mean visibility above which the pose reads as good
pub const DEFAULT_GOOD_POSE_CONFIDENCE: f32 = 0.7;

/// Which side of the body the angles are measured on
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SideSelection {
    #[default]
    Left,
    Right,
    /// Side whose shoulder/hip/knee/ankle have the higher mean visibility
    MostVisible,
}


/// Reference the back angle is measured against
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackAngleConvention {
    /// Torso incline from horizontal (flat back = 0°)
    #[default]
    FromHorizontal,
    /// `90 − incline` (upright back = 0°)
    FromVertical,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FitConfig {
    /// Minimum landmark visibility for an angle to use measured data.
    pub visibility_threshold: f32,
    /// Mean visibility above which `PoseQuality::Good` is reported.
    pub good_pose_confidence: f32,
    pub side: SideSelection,
    pub angle_method: AngleMethod,
    pub back_angle: BackAngleConvention,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            visibility_threshold: DEFAULT_VISIBILITY_THRESHOLD,
            good_pose_confidence: DEFAULT_GOOD_POSE_CONFIDENCE,
            side: SideSelection::Left,
            angle_method: AngleMethod::LawOfCosines,
            back_angle: BackAngleConvention::FromHorizontal,
        }
    }
}

impl FitConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
