//! Display formatting for angles and adjustments

/// `30.4` → `"30°"`
pub fn format_angle(angle: f32) -> String {
    format!("{}°", angle.round() as i32)
}

/// Signed distance in centimeters: `2` → `"+2cm"`, `-1` → `"-1cm"`
pub fn format_adjustment(cm: i32) -> String {
    if cm > 0 {
        format!("+{cm}cm")
    } else {
        format!("{cm}cm")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_angle() {
        assert_eq!(format_angle(30.4), "30°");
        assert_eq!(format_angle(29.5), "30°");
    }

    #[test]
    fn test_format_adjustment() {
        assert_eq!(format_adjustment(2), "+2cm");
        assert_eq!(format_adjustment(-1), "-1cm");
        assert_eq!(format_adjustment(0), "0cm");
    }
}
