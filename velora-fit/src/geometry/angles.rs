//! Joint angle calculation
//!
//! Computes the interior angle at a vertex `b` between the segments `b→a`
//! and `b→c`. Two formulations are supported:
//!
//! - law of cosines on the three side lengths (canonical)
//! - difference of the two segment headings via `atan2`
//!
//! They agree on well-posed input. Both are evaluated in `f64` so the
//! `acos` near 0° and 180° does not lose the last degree to `f32` rounding.

use super::Point;
use crate::error::{FitError, Result};

/// Segments shorter than this (normalized units) have no usable direction
pub const MIN_SEGMENT_LENGTH: f64 = 1e-6;

/// Formula used to evaluate a joint angle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AngleMethod {
    /// `acos((|bc|² + |ab|² − |ac|²) / (2·|bc|·|ab|))`
    #[default]
    LawOfCosines,
    /// `|atan2(c − b) − atan2(a − b)|`, reflected into [0, 180]
    Atan2Difference,
}

/// Angle at vertex `b` in degrees, unrounded
///
/// Fails with `DegenerateGeometry` when either arm is shorter than
/// [`MIN_SEGMENT_LENGTH`] or any coordinate is not finite. Collinear but
/// distinct points are fine: they give 0° or 180°.
pub fn try_angle_at(a: Point, b: Point, c: Point, method: AngleMethod) -> Result<f32> {
    if !(a.is_finite() && b.is_finite() && c.is_finite()) {
        return Err(FitError::DegenerateGeometry);
    }

    let (ax, ay) = (a.x as f64, a.y as f64);
    let (bx, by) = (b.x as f64, b.y as f64);
    let (cx, cy) = (c.x as f64, c.y as f64);

    let ab = ((bx - ax).powi(2) + (by - ay).powi(2)).sqrt();
    let bc = ((bx - cx).powi(2) + (by - cy).powi(2)).sqrt();
    if ab < MIN_SEGMENT_LENGTH || bc < MIN_SEGMENT_LENGTH {
        return Err(FitError::DegenerateGeometry);
    }

    let degrees = match method {
        AngleMethod::LawOfCosines => {
            let ac = ((cx - ax).powi(2) + (cy - ay).powi(2)).sqrt();
            let cos_angle = ((bc * bc + ab * ab - ac * ac) / (2.0 * bc * ab)).clamp(-1.0, 1.0);
            cos_angle.acos().to_degrees()
        }
        AngleMethod::Atan2Difference => {
            let radians = (cy - by).atan2(cx - bx) - (ay - by).atan2(ax - bx);
            let angle = radians.to_degrees().abs();
            if angle > 180.0 {
                360.0 - angle
            } else {
                angle
            }
        }
    };

    Ok(degrees as f32)
}

/// Angle at vertex `b`, rounded to whole degrees
///
/// Degenerate input returns the sentinel `0` instead of an error so a
/// per-frame caller never has to stop on a bad detection.
pub fn angle_at_with(a: Point, b: Point, c: Point, method: AngleMethod) -> i32 {
    match try_angle_at(a, b, c, method) {
        Ok(degrees) => degrees.round() as i32,
        Err(err) => {
            tracing::debug!("angle_at: {err}, returning 0");
            0
        }
    }
}

/// Angle at vertex `b` using the canonical law-of-cosines form
pub fn angle_at(a: Point, b: Point, c: Point) -> i32 {
    angle_at_with(a, b, c, AngleMethod::LawOfCosines)
}
