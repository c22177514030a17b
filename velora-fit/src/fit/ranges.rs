//! Optimal angle bands
//!
//! `min` and `max` are inclusive: an angle equal to either bound is within
//! range. The table is fixed; nothing mutates it at runtime.

use serde::Serialize;

use crate::pose::AngleKind;

/// Acceptable band for one angle, in degrees
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct OptimalRange {
    pub min: i32,
    pub optimal: i32,
    pub max: i32,
}

/// Optimal bands for all angle kinds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct OptimalAngles {
    pub knee: OptimalRange,
    pub hip: OptimalRange,
    pub back: OptimalRange,
}

pub const OPTIMAL_ANGLES: OptimalAngles = OptimalAngles {
    knee: OptimalRange { min: 25, optimal: 30, max: 35 },
    hip: OptimalRange { min: 40, optimal: 45, max: 50 },
    back: OptimalRange { min: 20, optimal: 30, max: 45 },
};

impl OptimalAngles {
    pub fn range(&self, kind: AngleKind) -> OptimalRange {
        match kind {
            AngleKind::Knee => self.knee,
            AngleKind::Hip => self.hip,
            AngleKind::Back => self.back,
        }
    }
}

/// Where an angle sits relative to its band
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleClass {
    Below,
    Within,
    Above,
}

impl OptimalRange {
    /// NaN classifies as `Within`: advice is non-critical and a bad reading
    /// should not push the rider to change anything.
    pub fn classify(&self, angle: f32) -> AngleClass {
        if angle < self.min as f32 {
            AngleClass::Below
        } else if angle > self.max as f32 {
            AngleClass::Above
        } else {
            AngleClass::Within
        }
    }
}

impl AngleKind {
    pub fn optimal_range(&self) -> OptimalRange {
        OPTIMAL_ANGLES.range(*self)
    }

    pub fn classify(&self, angle: f32) -> AngleClass {
        self.optimal_range().classify(angle)
    }
}
