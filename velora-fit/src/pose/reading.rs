//! Angle readings produced from one pose

use serde::{Deserialize, Serialize};

use super::landmarks::BodySide;

/// Fallback angles used when the landmarks for a joint are unusable
pub const DEFAULT_KNEE_ANGLE: i32 = 32;
pub const DEFAULT_HIP_ANGLE: i32 = 45;
pub const DEFAULT_BACK_ANGLE: i32 = 28;

/// The three angles bike-fit analysis looks at
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleKind {
    Knee,
    Hip,
    Back,
}

impl AngleKind {
    pub const ALL: [AngleKind; 3] = [AngleKind::Knee, AngleKind::Hip, AngleKind::Back];

    pub fn name(&self) -> &'static str {
        match self {
            AngleKind::Knee => "knee",
            AngleKind::Hip => "hip",
            AngleKind::Back => "back",
        }
    }

    pub fn default_angle(&self) -> i32 {
        match self {
            AngleKind::Knee => DEFAULT_KNEE_ANGLE,
            AngleKind::Hip => DEFAULT_HIP_ANGLE,
            AngleKind::Back => DEFAULT_BACK_ANGLE,
        }
    }
}

/// Joint angles in whole degrees
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AngleData {
    /// Hip-knee-ankle, 0-180°
    pub knee_angle: i32,
    /// Shoulder-hip-knee, 0-180°
    pub hip_angle: i32,
    /// Torso angle, 0-90°
    pub back_angle: i32,
}

impl AngleData {
    pub const fn new(knee_angle: i32, hip_angle: i32, back_angle: i32) -> Self {
        Self { knee_angle, hip_angle, back_angle }
    }

    pub fn get(&self, kind: AngleKind) -> i32 {
        match kind {
            AngleKind::Knee => self.knee_angle,
            AngleKind::Hip => self.hip_angle,
            AngleKind::Back => self.back_angle,
        }
    }
}

impl Default for AngleData {
    fn default() -> Self {
        Self::new(DEFAULT_KNEE_ANGLE, DEFAULT_HIP_ANGLE, DEFAULT_BACK_ANGLE)
    }
}

/// Advisory signal telling the user whether to reposition
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PoseQuality {
    #[serde(rename = "good")]
    Good,
    #[serde(rename = "adjust position")]
    AdjustPosition,
}

impl PoseQuality {
    /// Strictly above `good_threshold` is good
    pub fn from_confidence(confidence: f32, good_threshold: f32) -> Self {
        if confidence > good_threshold {
            PoseQuality::Good
        } else {
            PoseQuality::AdjustPosition
        }
    }

    /// Status line shown over the camera preview
    pub fn label(&self) -> &'static str {
        match self {
            PoseQuality::Good => "Good posture detected",
            PoseQuality::AdjustPosition => "Adjust your position",
        }
    }
}

/// Everything extracted from one frame
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoseReading {
    pub angles: AngleData,
    /// Mean visibility over every landmark in the frame
    pub pose_confidence: f32,
    pub pose_quality: PoseQuality,
    pub side: BodySide,
    /// Angles that used their default value
    pub fallbacks: Vec<AngleKind>,
}

impl PoseReading {
    pub fn is_measured(&self, kind: AngleKind) -> bool {
        !self.fallbacks.contains(&kind)
    }
}
