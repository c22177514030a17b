//! Segment inclines used for the back angle
//!
//! These are approximations: landmark jitter alone moves the result by a
//! few degrees, so callers should not read more precision into them.

use super::Point;

/// Heading of segment `a→b` in degrees: `|atan2(Δy, Δx)|`, in [0, 180]
///
/// Non-finite input returns 0.
pub fn vertical_angle(a: Point, b: Point) -> i32 {
    if !(a.is_finite() && b.is_finite()) {
        tracing::debug!("vertical_angle: non-finite input, returning 0");
        return 0;
    }
    let dy = (b.y - a.y) as f64;
    let dx = (b.x - a.x) as f64;
    dy.atan2(dx).to_degrees().abs().round() as i32
}

/// Torso incline from horizontal, in [0, 90]
///
/// `vertical_angle(hip, shoulder)` folded so a rider facing left and a rider
/// facing right with the same posture read the same value.
pub fn back_incline(shoulder: Point, hip: Point) -> i32 {
    let heading = vertical_angle(hip, shoulder);
    if heading > 90 {
        180 - heading
    } else {
        heading
    }
}
