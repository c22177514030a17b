//! Advice text per angle
//!
//! The three-way classification and its thresholds come from
//! `OPTIMAL_ANGLES`; the wording is what the results screen shows.

use crate::pose::AngleKind;
use super::ranges::AngleClass;

/// Saddle-height advice from the knee angle (25° / 35°)
pub fn knee_angle_advice(angle: f32) -> &'static str {
    match AngleKind::Knee.classify(angle) {
        AngleClass::Below => {
            "Your knee angle is too acute. Raise your saddle height for better power transfer."
        }
        AngleClass::Above => {
            "Your knee angle is too obtuse. Lower your saddle height slightly for optimal pedaling."
        }
        AngleClass::Within => "Your knee angle is within the optimal range for efficient pedaling.",
    }
}

/// Saddle setback / reach advice from the hip angle (40° / 50°)
pub fn hip_angle_advice(angle: f32) -> &'static str {
    match AngleKind::Hip.classify(angle) {
        AngleClass::Below => {
            "Your hip angle is too closed. Consider moving your saddle back or handlebars forward."
        }
        AngleClass::Above => {
            "Your hip angle is too open. Try moving your saddle forward or handlebars back slightly."
        }
        AngleClass::Within => "Your hip angle is in a good range for comfort and power.",
    }
}

/// Handlebar advice from the back angle (20° / 45°)
pub fn back_angle_advice(angle: f32) -> &'static str {
    match AngleKind::Back.classify(angle) {
        AngleClass::Below => {
            "Your back is too flat. Adjust your handlebar height or reach for a more comfortable position."
        }
        AngleClass::Above => {
            "Your back is too upright. Lower your handlebars or increase reach for better aerodynamics."
        }
        AngleClass::Within => "Your back angle is good for a balance of comfort and aerodynamics.",
    }
}

/// Advice for any angle kind
pub fn angle_advice(kind: AngleKind, angle: f32) -> &'static str {
    match kind {
        AngleKind::Knee => knee_angle_advice(angle),
        AngleKind::Hip => hip_angle_advice(angle),
        AngleKind::Back => back_angle_advice(angle),
    }
}
