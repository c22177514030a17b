//! Pose landmark layout (MediaPipe Pose - 33 points)
//!
//! The index table is the only place that knows the pose model's output
//! layout. Swapping model providers means remapping this file.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

// ============================================================================
// LANDMARK INDICES
// ============================================================================

/// Number of landmarks produced per detected body
pub const LANDMARK_COUNT: usize = 33;

/// Named landmark indices in the pose model's output order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum LandmarkIndex {
    Nose = 0,
    LeftEyeInner = 1,
    LeftEye = 2,
    LeftEyeOuter = 3,
    RightEyeInner = 4,
    RightEye = 5,
    RightEyeOuter = 6,
    LeftEar = 7,
    RightEar = 8,
    MouthLeft = 9,
    MouthRight = 10,
    LeftShoulder = 11,
    RightShoulder = 12,
    LeftElbow = 13,
    RightElbow = 14,
    LeftWrist = 15,
    RightWrist = 16,
    LeftPinky = 17,
    RightPinky = 18,
    LeftIndex = 19,
    RightIndex = 20,
    LeftThumb = 21,
    RightThumb = 22,
    LeftHip = 23,
    RightHip = 24,
    LeftKnee = 25,
    RightKnee = 26,
    LeftAnkle = 27,
    RightAnkle = 28,
    LeftHeel = 29,
    RightHeel = 30,
    LeftFootIndex = 31,
    RightFootIndex = 32,
}

impl LandmarkIndex {
    /// All indices in output order
    pub const ALL: [LandmarkIndex; LANDMARK_COUNT] = [
        Self::Nose,
        Self::LeftEyeInner, Self::LeftEye, Self::LeftEyeOuter,
        Self::RightEyeInner, Self::RightEye, Self::RightEyeOuter,
        Self::LeftEar, Self::RightEar,
        Self::MouthLeft, Self::MouthRight,
        Self::LeftShoulder, Self::RightShoulder,
        Self::LeftElbow, Self::RightElbow,
        Self::LeftWrist, Self::RightWrist,
        Self::LeftPinky, Self::RightPinky,
        Self::LeftIndex, Self::RightIndex,
        Self::LeftThumb, Self::RightThumb,
        Self::LeftHip, Self::RightHip,
        Self::LeftKnee, Self::RightKnee,
        Self::LeftAnkle, Self::RightAnkle,
        Self::LeftHeel, Self::RightHeel,
        Self::LeftFootIndex, Self::RightFootIndex,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Keypoint name as reported by the pose model (`"left_hip"`)
    pub fn name(self) -> &'static str {
        match self {
            Self::Nose => "nose",
            Self::LeftEyeInner => "left_eye_inner",
            Self::LeftEye => "left_eye",
            Self::LeftEyeOuter => "left_eye_outer",
            Self::RightEyeInner => "right_eye_inner",
            Self::RightEye => "right_eye",
            Self::RightEyeOuter => "right_eye_outer",
            Self::LeftEar => "left_ear",
            Self::RightEar => "right_ear",
            Self::MouthLeft => "mouth_left",
            Self::MouthRight => "mouth_right",
            Self::LeftShoulder => "left_shoulder",
            Self::RightShoulder => "right_shoulder",
            Self::LeftElbow => "left_elbow",
            Self::RightElbow => "right_elbow",
            Self::LeftWrist => "left_wrist",
            Self::RightWrist => "right_wrist",
            Self::LeftPinky => "left_pinky",
            Self::RightPinky => "right_pinky",
            Self::LeftIndex => "left_index",
            Self::RightIndex => "right_index",
            Self::LeftThumb => "left_thumb",
            Self::RightThumb => "right_thumb",
            Self::LeftHip => "left_hip",
            Self::RightHip => "right_hip",
            Self::LeftKnee => "left_knee",
            Self::RightKnee => "right_knee",
            Self::LeftAnkle => "left_ankle",
            Self::RightAnkle => "right_ankle",
            Self::LeftHeel => "left_heel",
            Self::RightHeel => "right_heel",
            Self::LeftFootIndex => "left_foot_index",
            Self::RightFootIndex => "right_foot_index",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|idx| idx.name() == name)
    }
}

// ============================================================================
// BODY SIDE
// ============================================================================

/// Joints of one side of the body used for bike-fit angles
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SideJoints {
    pub shoulder: LandmarkIndex,
    pub hip: LandmarkIndex,
    pub knee: LandmarkIndex,
    pub ankle: LandmarkIndex,
}

impl SideJoints {
    pub fn as_array(&self) -> [LandmarkIndex; 4] {
        [self.shoulder, self.hip, self.knee, self.ankle]
    }
}

/// Side of the body facing the camera
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodySide {
    #[default]
    Left,
    Right,
}

impl BodySide {
    pub const fn joints(self) -> SideJoints {
        match self {
            BodySide::Left => SideJoints {
                shoulder: LandmarkIndex::LeftShoulder,
                hip: LandmarkIndex::LeftHip,
                knee: LandmarkIndex::LeftKnee,
                ankle: LandmarkIndex::LeftAnkle,
            },
            BodySide::Right => SideJoints {
                shoulder: LandmarkIndex::RightShoulder,
                hip: LandmarkIndex::RightHip,
                knee: LandmarkIndex::RightKnee,
                ankle: LandmarkIndex::RightAnkle,
            },
        }
    }
}

// ============================================================================
// LANDMARK DATA STRUCTURE
// ============================================================================

/// A single landmark as produced by the pose model
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f32,  // 0-1 normalized
    pub y: f32,  // 0-1 normalized
    #[serde(default)]
    pub z: f32,  // Relative depth
    pub visibility: f32,
    #[serde(default)]
    pub presence: f32,
}

impl Landmark {
    pub const fn new(x: f32, y: f32, visibility: f32) -> Self {
        Self { x, y, z: 0.0, visibility, presence: 0.0 }
    }

    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}
