//! Visibility gate
//!
//! A landmark is only used for angle math when it is present in the frame
//! and its visibility reaches the threshold. Otherwise the caller falls
//! back to a default angle.

use super::landmarks::{Landmark, LandmarkIndex};
use crate::error::{FitError, Result};
use crate::geometry::Point;

/// Default minimum visibility for a landmark to be trusted
pub const DEFAULT_VISIBILITY_THRESHOLD: f32 = 0.5;

/// Gate that admits or rejects landmarks by visibility
#[derive(Clone, Copy, Debug)]
pub struct VisibilityGate {
    /// Minimum visibility to accept raw data
    threshold: f32,
}

impl VisibilityGate {
    pub fn new() -> Self {
        Self {
            threshold: DEFAULT_VISIBILITY_THRESHOLD,
        }
    }

    pub fn with_threshold(threshold: f32) -> Self {
        Self { threshold }
    }

    /// Position of `index` if it passes the gate
    ///
    /// NaN visibility never passes.
    pub fn admit(&self, landmarks: &[Landmark], index: LandmarkIndex) -> Result<Point> {
        let landmark = landmarks
            .get(index.index())
            .ok_or(FitError::MissingLandmark { index: index.index() })?;

        if !(landmark.visibility >= self.threshold) {
            return Err(FitError::LowConfidence {
                index: index.index(),
                visibility: landmark.visibility,
            });
        }

        Ok(landmark.point())
    }
}

impl Default for VisibilityGate {
    fn default() -> Self {
        Self::new()
    }
}
