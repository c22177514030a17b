//! Analysis entry points - angles, advice and recommendations as JSON
//!
//! Every call recomputes from the stored (or passed) frame. Nothing is cached.

use wasm_bindgen::prelude::*;
use serde::Serialize;

use super::landmarks::{parse_frame, with_current_frame, with_session};
use crate::error::Result;
use crate::fit::{
    back_angle_advice, generate_recommendations, hip_angle_advice, knee_angle_advice,
    BikeType, FitReport, COMMON_FIT_ISSUES, SETUP_INSTRUCTIONS,
};
use crate::pose::{AngleData, BodyAngleExtractor, Landmark};

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

pub(crate) fn report_json(
    landmarks: &[Landmark],
    extractor: &BodyAngleExtractor,
    bike_type: BikeType,
) -> Result<String> {
    let reading = extractor.read(landmarks);
    to_json(&FitReport::build(bike_type, &reading))
}

/// Serialize for JS, warning on the console instead of failing the frame
fn json_or_warn(result: Result<String>) -> Option<String> {
    match result {
        Ok(json) => Some(json),
        Err(err) => {
            web_sys::console::warn_1(&format!("Analysis serialization failed: {}", err).into());
            None
        }
    }
}

// ============================================================================
// WASM-BINDGEN ENTRY POINTS
// ============================================================================

/// Full fit report (JSON) for the stored frame; None before the first frame
#[wasm_bindgen]
pub fn analyze_current_pose() -> Option<String> {
    with_current_frame(report_json).and_then(json_or_warn)
}

/// Full fit report (JSON) for a frame passed directly
#[wasm_bindgen]
pub fn analyze_landmarks(data: &[f32]) -> std::result::Result<String, JsValue> {
    let landmarks = parse_frame(data).map_err(|e| JsValue::from_str(&e.to_string()))?;
    with_session(|extractor, bike_type| report_json(&landmarks, extractor, bike_type))
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// `{kneeAngle, hipAngle, backAngle}` for the stored frame
#[wasm_bindgen]
pub fn get_body_angles() -> Option<String> {
    with_current_frame(|landmarks, extractor, _| to_json(&extractor.extract(landmarks)))
        .and_then(json_or_warn)
}

#[wasm_bindgen]
pub fn knee_angle_advice_text(angle: f32) -> String {
    knee_angle_advice(angle).to_string()
}

#[wasm_bindgen]
pub fn hip_angle_advice_text(angle: f32) -> String {
    hip_angle_advice(angle).to_string()
}

#[wasm_bindgen]
pub fn back_angle_advice_text(angle: f32) -> String {
    back_angle_advice(angle).to_string()
}

/// Recommendation list (JSON array) for angles the UI already holds
#[wasm_bindgen]
pub fn recommendations_for(knee_angle: i32, hip_angle: i32, back_angle: i32) -> Option<String> {
    let angles = AngleData::new(knee_angle, hip_angle, back_angle);
    json_or_warn(to_json(&generate_recommendations(&angles)))
}

/// Bike selection cards (JSON array of `{id, title, description, icon}`)
#[wasm_bindgen]
pub fn bike_types() -> Option<String> {
    let cards: Vec<_> = BikeType::ALL.iter().map(BikeType::info).collect();
    json_or_warn(to_json(&cards))
}

#[wasm_bindgen]
pub fn common_fit_issues() -> Option<String> {
    json_or_warn(to_json(&COMMON_FIT_ISSUES[..]))
}

#[wasm_bindgen]
pub fn setup_instructions() -> Option<String> {
    json_or_warn(to_json(&SETUP_INSTRUCTIONS[..]))
}
