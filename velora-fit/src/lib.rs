//! Velora Fit - bike-fit analysis from pose landmarks
//!
//! Pipeline: landmarks → `pose` (knee/hip/back angles) → `fit` (advice and
//! adjustments). The pose model and camera live in the app; this crate only
//! sees the landmark list.
//!
//! Entry point for the WASM module. Only contains:
//! - Module declarations
//! - wasm_bindgen entry points that delegate to submodules

pub mod config;
pub mod error;
pub mod fit;
pub mod geometry;
pub mod pose;

mod bridge;

use wasm_bindgen::prelude::*;

// Re-export wasm_bindgen functions for JS access
pub use bridge::{
    analyze_current_pose, analyze_landmarks, back_angle_advice_text, bike_types, clear_landmarks,
    common_fit_issues, get_body_angles, has_landmarks, hip_angle_advice_text,
    knee_angle_advice_text, parse_frame, recommendations_for, set_bike_type, set_fit_config,
    setup_instructions, update_landmarks, FLOATS_PER_LANDMARK,
};

pub use config::{BackAngleConvention, FitConfig, SideSelection};
pub use error::FitError;
pub use fit::{generate_recommendations, BikeType, FitReport, Recommendation, RecommendationType};
pub use geometry::{angle_at, vertical_angle, Point};
pub use pose::{extract_body_angles, AngleData, BodyAngleExtractor, Landmark, LandmarkIndex, PoseReading};

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Crate version, shown in the app's about screen
#[wasm_bindgen]
pub fn core_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
