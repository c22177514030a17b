//! Body angle extraction
//!
//! Maps one frame of landmarks to the knee, hip and back angles:
//!
//! - knee = angle at knee between hip and ankle
//! - hip  = angle at hip between shoulder and knee
//! - back = torso incline of shoulder over hip
//!
//! All three use the same side of the body. An angle whose landmarks fail
//! the visibility gate, or whose points coincide, takes its default value
//! instead of failing the frame.

use super::landmarks::{BodySide, Landmark, SideJoints};
use super::reading::{AngleData, AngleKind, PoseQuality, PoseReading};
use super::visibility_gate::VisibilityGate;
use crate::config::{BackAngleConvention, FitConfig, SideSelection};
use crate::error::{FitError, Result};
use crate::geometry::{back_incline, try_angle_at, AngleMethod, Point, MIN_SEGMENT_LENGTH};

/// Extracts bike-fit angles from pose landmarks
#[derive(Clone, Debug)]
pub struct BodyAngleExtractor {
    gate: VisibilityGate,
    side: SideSelection,
    method: AngleMethod,
    back_convention: BackAngleConvention,
    good_pose_confidence: f32,
}

impl BodyAngleExtractor {
    pub fn new() -> Self {
        Self::from_config(&FitConfig::default())
    }

    pub fn from_config(config: &FitConfig) -> Self {
        Self {
            gate: VisibilityGate::with_threshold(config.visibility_threshold),
            side: config.side,
            method: config.angle_method,
            back_convention: config.back_angle,
            good_pose_confidence: config.good_pose_confidence,
        }
    }

    /// Angles only
    pub fn extract(&self, landmarks: &[Landmark]) -> AngleData {
        self.read(landmarks).angles
    }

    /// Angles plus confidence, quality and fallback bookkeeping
    pub fn read(&self, landmarks: &[Landmark]) -> PoseReading {
        let side = self.resolve_side(landmarks);
        let joints = side.joints();
        let mut fallbacks = Vec::new();

        let knee_angle = self.joint_angle(landmarks, AngleKind::Knee, &joints, &mut fallbacks);
        let hip_angle = self.joint_angle(landmarks, AngleKind::Hip, &joints, &mut fallbacks);
        let back_angle = self.joint_angle(landmarks, AngleKind::Back, &joints, &mut fallbacks);

        let pose_confidence = pose_confidence(landmarks);
        let reading = PoseReading {
            angles: AngleData::new(knee_angle, hip_angle, back_angle),
            pose_confidence,
            pose_quality: PoseQuality::from_confidence(pose_confidence, self.good_pose_confidence),
            side,
            fallbacks,
        };

        tracing::trace!(
            "pose reading: side={:?} knee={} hip={} back={} confidence={:.2} fallbacks={:?}",
            reading.side,
            knee_angle,
            hip_angle,
            back_angle,
            pose_confidence,
            reading.fallbacks
        );

        reading
    }

    /// True when all four joints of the side this extractor would measure
    /// pass its visibility gate
    pub fn is_valid_pose(&self, landmarks: &[Landmark]) -> bool {
        self.resolve_side(landmarks)
            .joints()
            .as_array()
            .iter()
            .all(|idx| self.gate.admit(landmarks, *idx).is_ok())
    }

    fn joint_angle(
        &self,
        landmarks: &[Landmark],
        kind: AngleKind,
        joints: &SideJoints,
        fallbacks: &mut Vec<AngleKind>,
    ) -> i32 {
        match self.measure(landmarks, kind, joints) {
            Ok(angle) => angle,
            Err(err) => {
                tracing::debug!("{} angle falls back to default: {}", kind.name(), err);
                fallbacks.push(kind);
                kind.default_angle()
            }
        }
    }

    fn measure(&self, landmarks: &[Landmark], kind: AngleKind, joints: &SideJoints) -> Result<i32> {
        let point = |idx| self.gate.admit(landmarks, idx);

        match kind {
            AngleKind::Knee => {
                let (hip, knee, ankle) = (point(joints.hip)?, point(joints.knee)?, point(joints.ankle)?);
                Ok(try_angle_at(hip, knee, ankle, self.method)?.round() as i32)
            }
            AngleKind::Hip => {
                let (shoulder, hip, knee) = (point(joints.shoulder)?, point(joints.hip)?, point(joints.knee)?);
                Ok(try_angle_at(shoulder, hip, knee, self.method)?.round() as i32)
            }
            AngleKind::Back => {
                let (shoulder, hip) = (point(joints.shoulder)?, point(joints.hip)?);
                if (shoulder.distance(hip) as f64) < MIN_SEGMENT_LENGTH {
                    return Err(FitError::DegenerateGeometry);
                }
                Ok(self.back_angle(shoulder, hip))
            }
        }
    }

    fn back_angle(&self, shoulder: Point, hip: Point) -> i32 {
        let incline = back_incline(shoulder, hip);
        match self.back_convention {
            BackAngleConvention::FromHorizontal => incline,
            BackAngleConvention::FromVertical => 90 - incline,
        }
    }

    fn resolve_side(&self, landmarks: &[Landmark]) -> BodySide {
        match self.side {
            SideSelection::Left => BodySide::Left,
            SideSelection::Right => BodySide::Right,
            SideSelection::MostVisible => {
                let left = side_visibility(landmarks, BodySide::Left);
                let right = side_visibility(landmarks, BodySide::Right);
                if right > left {
                    BodySide::Right
                } else {
                    BodySide::Left
                }
            }
        }
    }
}

impl Default for BodyAngleExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract angles with the default configuration (left side, 0.5 gate)
pub fn extract_body_angles(landmarks: &[Landmark]) -> AngleData {
    BodyAngleExtractor::new().extract(landmarks)
}

/// Mean visibility over all landmarks; 0 for an empty frame
///
/// Non-finite visibilities count as 0.
pub fn pose_confidence(landmarks: &[Landmark]) -> f32 {
    if landmarks.is_empty() {
        return 0.0;
    }
    let sum: f32 = landmarks
        .iter()
        .map(|lm| if lm.visibility.is_finite() { lm.visibility } else { 0.0 })
        .sum();
    sum / landmarks.len() as f32
}

/// Pre-capture check: left shoulder, hip, knee and ankle all strictly above
/// 0.5 visibility
///
/// Always the left side with a fixed threshold, whatever the config says.
/// Use [`BodyAngleExtractor::is_valid_pose`] to follow a `FitConfig`.
pub fn is_valid_pose(landmarks: &[Landmark]) -> bool {
    BodySide::Left
        .joints()
        .as_array()
        .iter()
        .all(|idx| landmarks.get(idx.index()).is_some_and(|lm| lm.visibility > 0.5))
}

fn side_visibility(landmarks: &[Landmark], side: BodySide) -> f32 {
    let joints = side.joints().as_array();
    let sum: f32 = joints
        .iter()
        .map(|idx| {
            landmarks
                .get(idx.index())
                .map(|lm| lm.visibility)
                .filter(|v| v.is_finite())
                .unwrap_or(0.0)
        })
        .sum();
    sum / joints.len() as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pose::{LandmarkIndex, LANDMARK_COUNT};

    /// Rider facing right: shoulder up-forward of hip, knee forward of hip,
    /// ankle below the knee.
    fn rider(side: BodySide, visibility: f32) -> Vec<Landmark> {
        let mut frame = vec![Landmark::new(0.5, 0.5, visibility); LANDMARK_COUNT];
        let joints = side.joints();
        frame[joints.shoulder.index()] = Landmark::new(0.8, 0.3, visibility);
        frame[joints.hip.index()] = Landmark::new(0.4, 0.5, visibility);
        frame[joints.knee.index()] = Landmark::new(0.6, 0.7, visibility);
        frame[joints.ankle.index()] = Landmark::new(0.6, 0.9, visibility);
        frame
    }

    #[test]
    fn test_empty_frame_gives_defaults() {
        let reading = BodyAngleExtractor::new().read(&[]);
        assert_eq!(reading.angles, AngleData::new(32, 45, 28));
        assert_eq!(reading.fallbacks, vec![AngleKind::Knee, AngleKind::Hip, AngleKind::Back]);
        assert_eq!(reading.pose_confidence, 0.0);
        assert_eq!(reading.pose_quality, PoseQuality::AdjustPosition);
        assert_eq!(extract_body_angles(&[]), AngleData::default());
    }

    #[test]
    fn test_measured_angles() {
        let frame = rider(BodySide::Left, 0.9);
        let reading = BodyAngleExtractor::new().read(&frame);
        assert!(reading.fallbacks.is_empty());
        // hip(0.4,0.5) knee(0.6,0.7) ankle(0.6,0.9): 135° at the knee
        assert_eq!(reading.angles.knee_angle, 135);
        // shoulder(0.8,0.3) hip(0.4,0.5) knee(0.6,0.7): 45° + 26.57° = 72°
        assert_eq!(reading.angles.hip_angle, 72);
        // atan(0.2 / 0.4) = 26.57°
        assert_eq!(reading.angles.back_angle, 27);
        assert_eq!(reading.pose_quality, PoseQuality::Good);
    }

    #[test]
    fn test_low_visibility_knee_only_affects_dependent_angles() {
        let mut frame = rider(BodySide::Left, 0.9);
        frame[LandmarkIndex::LeftKnee.index()].visibility = 0.2;
        let reading = BodyAngleExtractor::new().read(&frame);
        assert_eq!(reading.angles.knee_angle, 32);
        assert_eq!(reading.angles.hip_angle, 45);
        assert_eq!(reading.angles.back_angle, 27);
        assert!(reading.is_measured(AngleKind::Back));
        assert!(!reading.is_measured(AngleKind::Knee));
    }

    #[test]
    fn test_missing_ankle_only_affects_knee() {
        let frame: Vec<Landmark> = rider(BodySide::Left, 0.9)
            .into_iter()
            .take(LandmarkIndex::LeftAnkle.index())
            .collect();
        let reading = BodyAngleExtractor::new().read(&frame);
        assert_eq!(reading.fallbacks, vec![AngleKind::Knee]);
        assert_eq!(reading.angles.hip_angle, 72);
    }

    #[test]
    fn test_zero_threshold_uses_low_confidence_landmarks() {
        let frame = rider(BodySide::Left, 0.1);
        let config = FitConfig { visibility_threshold: 0.0, ..FitConfig::default() };
        let reading = BodyAngleExtractor::from_config(&config).read(&frame);
        assert!(reading.fallbacks.is_empty());
        assert_eq!(reading.angles.knee_angle, 135);
        assert_eq!(reading.pose_quality, PoseQuality::AdjustPosition);
    }

    #[test]
    fn test_fixed_side_never_mixes() {
        // Only the right side is visible; default left extraction falls back entirely
        let mut frame = rider(BodySide::Right, 0.9);
        for idx in BodySide::Left.joints().as_array() {
            frame[idx.index()].visibility = 0.1;
        }
        let reading = BodyAngleExtractor::new().read(&frame);
        assert_eq!(reading.side, BodySide::Left);
        assert_eq!(reading.angles, AngleData::default());
    }

    #[test]
    fn test_most_visible_side() {
        let mut frame = rider(BodySide::Right, 0.9);
        for idx in BodySide::Left.joints().as_array() {
            frame[idx.index()].visibility = 0.1;
        }
        let config = FitConfig { side: SideSelection::MostVisible, ..FitConfig::default() };
        let reading = BodyAngleExtractor::from_config(&config).read(&frame);
        assert_eq!(reading.side, BodySide::Right);
        assert_eq!(reading.angles, AngleData::new(135, 72, 27));
    }

    #[test]
    fn test_most_visible_tie_keeps_left() {
        let config = FitConfig { side: SideSelection::MostVisible, ..FitConfig::default() };
        let reading = BodyAngleExtractor::from_config(&config).read(&[]);
        assert_eq!(reading.side, BodySide::Left);
    }

    #[test]
    fn test_back_from_vertical() {
        let frame = rider(BodySide::Left, 0.9);
        let config = FitConfig { back_angle: BackAngleConvention::FromVertical, ..FitConfig::default() };
        assert_eq!(BodyAngleExtractor::from_config(&config).extract(&frame).back_angle, 63);
    }

    #[test]
    fn test_atan2_method_matches_canonical() {
        let frame = rider(BodySide::Left, 0.9);
        let config = FitConfig { angle_method: AngleMethod::Atan2Difference, ..FitConfig::default() };
        assert_eq!(
            BodyAngleExtractor::from_config(&config).extract(&frame),
            extract_body_angles(&frame)
        );
    }

    #[test]
    fn test_pose_confidence_is_mean_visibility() {
        let mut frame = vec![Landmark::new(0.5, 0.5, 1.0); 4];
        frame[0].visibility = 0.0;
        frame[1].visibility = f32::NAN;
        assert!((pose_confidence(&frame) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_coincident_hip_and_knee_fall_back() {
        let mut frame = rider(BodySide::Left, 0.9);
        frame[LandmarkIndex::LeftHip.index()] = Landmark::new(0.6, 0.7, 0.9);
        frame[LandmarkIndex::LeftKnee.index()] = Landmark::new(0.6, 0.7, 0.9);
        let reading = BodyAngleExtractor::new().read(&frame);
        assert_eq!(reading.angles.knee_angle, 32);
        assert_eq!(reading.angles.hip_angle, 45);
        assert_eq!(reading.fallbacks, vec![AngleKind::Knee, AngleKind::Hip]);
        assert!(reading.is_measured(AngleKind::Back));

        let recs = crate::fit::generate_recommendations(&reading.angles);
        assert!(recs.iter().all(|r| r.title != "Raise Saddle Height"));
    }

    #[test]
    fn test_coincident_shoulder_and_hip_fall_back() {
        let mut frame = rider(BodySide::Left, 0.9);
        frame[LandmarkIndex::LeftShoulder.index()] = Landmark::new(0.4, 0.5, 0.9);
        let reading = BodyAngleExtractor::new().read(&frame);
        assert_eq!(reading.angles.back_angle, 28);
        assert!(!reading.is_measured(AngleKind::Back));
        assert!(!reading.is_measured(AngleKind::Hip));
        assert!(reading.is_measured(AngleKind::Knee));
    }

    #[test]
    fn test_extractor_is_valid_pose_follows_config() {
        let mut frame = rider(BodySide::Right, 0.9);
        for idx in BodySide::Left.joints().as_array() {
            frame[idx.index()].visibility = 0.1;
        }
        assert!(!BodyAngleExtractor::new().is_valid_pose(&frame));
        assert!(!is_valid_pose(&frame));

        let right = FitConfig { side: SideSelection::Right, ..FitConfig::default() };
        assert!(BodyAngleExtractor::from_config(&right).is_valid_pose(&frame));
        let adaptive = FitConfig { side: SideSelection::MostVisible, ..FitConfig::default() };
        assert!(BodyAngleExtractor::from_config(&adaptive).is_valid_pose(&frame));

        let lenient = FitConfig { visibility_threshold: 0.05, ..FitConfig::default() };
        assert!(BodyAngleExtractor::from_config(&lenient).is_valid_pose(&frame));
    }

    #[test]
    fn test_is_valid_pose() {
        assert!(is_valid_pose(&rider(BodySide::Left, 0.9)));
        assert!(!is_valid_pose(&rider(BodySide::Left, 0.5)));
        assert!(!is_valid_pose(&[]));
    }
}
