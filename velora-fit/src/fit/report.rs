//! Results-screen payload: angles, advice and adjustments in one record

use serde::Serialize;

use super::advice::{back_angle_advice, hip_angle_advice, knee_angle_advice};
use super::bike::BikeType;
use super::recommendations::{generate_recommendations, Recommendation};
use crate::pose::{AngleData, AngleKind, PoseQuality, PoseReading};

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FitReport {
    pub bike_type: BikeType,
    pub angles: AngleData,
    pub knee_advice: &'static str,
    pub hip_advice: &'static str,
    pub back_advice: &'static str,
    pub recommendations: Vec<Recommendation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pose_confidence: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pose_quality: Option<PoseQuality>,
    /// Status line for the camera preview
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pose_status: Option<&'static str>,
    /// Angles that were not measured and show their default value
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub estimated: Vec<AngleKind>,
}

impl FitReport {
    /// Report for angles that did not come from a live frame
    pub fn from_angles(bike_type: BikeType, angles: AngleData) -> Self {
        Self {
            bike_type,
            angles,
            knee_advice: knee_angle_advice(angles.knee_angle as f32),
            hip_advice: hip_angle_advice(angles.hip_angle as f32),
            back_advice: back_angle_advice(angles.back_angle as f32),
            recommendations: generate_recommendations(&angles),
            pose_confidence: None,
            pose_quality: None,
            pose_status: None,
            estimated: Vec::new(),
        }
    }

    pub fn build(bike_type: BikeType, reading: &PoseReading) -> Self {
        Self {
            pose_confidence: Some(reading.pose_confidence),
            pose_quality: Some(reading.pose_quality),
            pose_status: Some(reading.pose_quality.label()),
            estimated: reading.fallbacks.clone(),
            ..Self::from_angles(bike_type, reading.angles)
        }
    }
}
