//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod landmarks;
mod analysis;

pub use landmarks::{
    // WASM entry points
    update_landmarks,
    clear_landmarks,
    set_bike_type,
    set_fit_config,
    has_landmarks,
    // Internal API
    parse_frame,
    // Constants
    FLOATS_PER_LANDMARK,
};

pub use analysis::{
    analyze_current_pose,
    analyze_landmarks,
    get_body_angles,
    knee_angle_advice_text,
    hip_angle_advice_text,
    back_angle_advice_text,
    recommendations_for,
    bike_types,
    common_fit_issues,
    setup_instructions,
};
