//! Structured fit recommendations
//!
//! Saddle height follows the knee angle, handlebar height follows the back
//! angle. The hip angle only feeds advice text. With nothing to adjust, a
//! single "optimal" entry is returned so the list is never empty.

use serde::{Deserialize, Serialize};

use super::format::format_adjustment;
use super::ranges::AngleClass;
use crate::pose::{AngleData, AngleKind};

/// Direction of an adjustment
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationType {
    Raise,
    Lower,
    Optimal,
}

impl RecommendationType {
    pub fn icon(&self) -> &'static str {
        match self {
            RecommendationType::Raise => "↑",
            RecommendationType::Lower => "↓",
            RecommendationType::Optimal => "✓",
        }
    }
}

/// One user-facing adjustment suggestion
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    pub description: String,
    /// Signed distance (`"+2cm"`) or empty when nothing changes
    pub adjustment: String,
    pub icon: String,
    #[serde(rename = "type")]
    pub kind: RecommendationType,
}

impl Recommendation {
    fn adjust(title: &str, description: &str, cm: i32, kind: RecommendationType) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            adjustment: format_adjustment(cm),
            icon: kind.icon().to_string(),
            kind,
        }
    }

    fn optimal() -> Self {
        Self {
            title: "Handlebar Reach".to_string(),
            description: "Current position is optimal".to_string(),
            adjustment: String::new(),
            icon: RecommendationType::Optimal.icon().to_string(),
            kind: RecommendationType::Optimal,
        }
    }

    pub fn is_optimal(&self) -> bool {
        self.kind == RecommendationType::Optimal
    }
}

fn saddle_recommendation(knee_angle: i32) -> Option<Recommendation> {
    match AngleKind::Knee.classify(knee_angle as f32) {
        AngleClass::Below => Some(Recommendation::adjust(
            "Raise Saddle Height",
            "Current position is too low",
            2,
            RecommendationType::Raise,
        )),
        AngleClass::Above => Some(Recommendation::adjust(
            "Lower Saddle Height",
            "Current position is too high",
            -1,
            RecommendationType::Lower,
        )),
        AngleClass::Within => None,
    }
}

fn handlebar_recommendation(back_angle: i32) -> Option<Recommendation> {
    match AngleKind::Back.classify(back_angle as f32) {
        AngleClass::Above => Some(Recommendation::adjust(
            "Adjust Handlebar Height",
            "Lower for better aerodynamics",
            -1,
            RecommendationType::Lower,
        )),
        AngleClass::Below => Some(Recommendation::adjust(
            "Raise Handlebar Height",
            "Increase for comfort",
            1,
            RecommendationType::Raise,
        )),
        AngleClass::Within => None,
    }
}

/// Adjustments for one set of angles: saddle first, then handlebar
pub fn generate_recommendations(angles: &AngleData) -> Vec<Recommendation> {
    let mut recommendations: Vec<Recommendation> = saddle_recommendation(angles.knee_angle)
        .into_iter()
        .chain(handlebar_recommendation(angles.back_angle))
        .collect();

    if recommendations.is_empty() {
        recommendations.push(Recommendation::optimal());
    }

    recommendations
}
