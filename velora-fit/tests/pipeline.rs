//! End-to-end: landmark frame → angles → recommendations

use velora_fit::fit::{knee_angle_advice, AngleClass, OPTIMAL_ANGLES};
use velora_fit::pose::{AngleKind, BodySide, PoseQuality, LANDMARK_COUNT};
use velora_fit::{
    angle_at, extract_body_angles, generate_recommendations, AngleData, BikeType,
    BodyAngleExtractor, FitConfig, FitReport, Landmark, Point, RecommendationType, SideSelection,
};

/// Rider seen from the side with a given knee angle at the bottom of the
/// stroke and a given torso incline.
fn rider(side: BodySide, knee_deg: f32, torso_deg: f32) -> Vec<Landmark> {
    let mut frame = vec![Landmark::new(0.5, 0.5, 0.95); LANDMARK_COUNT];
    let joints = side.joints();

    let hip: (f32, f32) = (0.40, 0.50);
    let knee: (f32, f32) = (0.50, 0.70);
    // Ankle rotated from the hip→knee continuation by the knee angle
    let thigh = (knee.0 - hip.0, knee.1 - hip.1);
    let turn = (180.0 - knee_deg).to_radians();
    let (s, c) = turn.sin_cos();
    let shin = (thigh.0 * c - thigh.1 * s, thigh.0 * s + thigh.1 * c);
    let ankle = (knee.0 + shin.0, knee.1 + shin.1);
    let torso = torso_deg.to_radians();
    let shoulder = (hip.0 + 0.3 * torso.cos(), hip.1 - 0.3 * torso.sin());

    frame[joints.hip.index()] = Landmark::new(hip.0, hip.1, 0.95);
    frame[joints.knee.index()] = Landmark::new(knee.0, knee.1, 0.95);
    frame[joints.ankle.index()] = Landmark::new(ankle.0, ankle.1, 0.95);
    frame[joints.shoulder.index()] = Landmark::new(shoulder.0, shoulder.1, 0.95);
    frame
}

#[test]
fn right_angle_and_collinear_points() {
    assert_eq!(angle_at(Point::new(0.0, 1.0), Point::new(0.0, 0.0), Point::new(1.0, 0.0)), 90);
    assert_eq!(angle_at(Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(2.0, 0.0)), 180);
}

#[test]
fn empty_frame_reports_defaults() {
    assert_eq!(extract_body_angles(&[]), AngleData::new(32, 45, 28));
}

#[test]
fn optimal_angles_give_single_optimal_recommendation() {
    let recs = generate_recommendations(&AngleData::new(30, 45, 30));
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].kind, RecommendationType::Optimal);
}

#[test]
fn cramped_and_upright_rider() {
    let recs = generate_recommendations(&AngleData::new(20, 45, 50));
    assert_eq!(recs.len(), 2);
    assert_eq!(recs[0].title, "Raise Saddle Height");
    assert_eq!(recs[1].title, "Adjust Handlebar Height");
}

#[test]
fn knee_advice_boundaries() {
    assert_eq!(knee_angle_advice(25.0), knee_angle_advice(35.0));
    assert_eq!(knee_angle_advice(25.0), knee_angle_advice(OPTIMAL_ANGLES.knee.optimal as f32));
}

#[test]
fn optimal_values_classify_within() {
    for kind in AngleKind::ALL {
        assert_eq!(kind.classify(kind.optimal_range().optimal as f32), AngleClass::Within);
    }
}

#[test]
fn synthetic_rider_round_trip() {
    let frame = rider(BodySide::Left, 150.0, 35.0);
    let extractor = BodyAngleExtractor::new();
    let reading = extractor.read(&frame);

    assert!(reading.fallbacks.is_empty());
    assert_eq!(reading.angles.knee_angle, 150);
    assert_eq!(reading.angles.back_angle, 35);
    assert_eq!(reading.pose_quality, PoseQuality::Good);

    let report = FitReport::build(BikeType::Road, &reading);
    // A 150° knee reads as "too obtuse" against the 25-35° band
    assert_eq!(report.recommendations[0].kind, RecommendationType::Lower);
    assert_eq!(report.recommendations.len(), 1);
}

#[test]
fn right_side_rider_with_most_visible_selection() {
    let mut frame = rider(BodySide::Right, 140.0, 30.0);
    for idx in BodySide::Left.joints().as_array() {
        frame[idx.index()].visibility = 0.05;
    }

    let fixed = BodyAngleExtractor::new().read(&frame);
    assert_eq!(fixed.angles, AngleData::default());

    let config = FitConfig { side: SideSelection::MostVisible, ..FitConfig::default() };
    let adaptive = BodyAngleExtractor::from_config(&config).read(&frame);
    assert_eq!(adaptive.side, BodySide::Right);
    assert_eq!(adaptive.angles.knee_angle, 140);
    assert_eq!(adaptive.angles.back_angle, 30);
}
