//! Landmark storage and JS bridge
//!
//! Receives pose landmarks from the app's frame processor and keeps the
//! latest frame for the analysis entry points to read.

use wasm_bindgen::prelude::*;
use std::cell::RefCell;

use crate::config::FitConfig;
use crate::error::{FitError, Result};
use crate::fit::BikeType;
use crate::pose::{BodyAngleExtractor, Landmark, LANDMARK_COUNT};

/// Floats per landmark in the flat frame: x, y, z, visibility, presence
pub const FLOATS_PER_LANDMARK: usize = 5;

// ============================================================================
// SESSION STORAGE
// ============================================================================

/// Per-session state: latest frame plus the rider's choices
struct Session {
    landmarks: Vec<Landmark>,
    has_data: bool,
    bike_type: BikeType,
    extractor: BodyAngleExtractor,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            landmarks: Vec::with_capacity(LANDMARK_COUNT),
            has_data: false,
            bike_type: BikeType::default(),
            extractor: BodyAngleExtractor::new(),
        }
    }
}

// Thread-local storage (WASM is single-threaded)
thread_local! {
    static SESSION: RefCell<Session> = RefCell::new(Session::default());
}

/// Decode a flat frame into landmarks
///
/// Accepts 0 to 33 landmarks of 5 floats each. A short frame leaves the
/// higher indices missing; an empty one means no person was detected.
pub fn parse_frame(data: &[f32]) -> Result<Vec<Landmark>> {
    let count = data.len() / FLOATS_PER_LANDMARK;
    if data.len() % FLOATS_PER_LANDMARK != 0 || count > LANDMARK_COUNT {
        return Err(FitError::InvalidFrame { len: data.len() });
    }

    Ok(data
        .chunks_exact(FLOATS_PER_LANDMARK)
        .map(|v| Landmark {
            x: v[0],
            y: v[1],
            z: v[2],
            visibility: v[3],
            presence: v[4],
        })
        .collect())
}

// ============================================================================
// WASM-BINDGEN ENTRY POINTS
// ============================================================================

/// Called from JavaScript with a flat Float32Array
/// (up to 33 landmarks × 5 values: x, y, z, visibility, presence)
#[wasm_bindgen]
pub fn update_landmarks(data: &[f32]) {
    let landmarks = match parse_frame(data) {
        Ok(landmarks) => landmarks,
        Err(err) => {
            web_sys::console::warn_1(&err.to_string().into());
            return;
        }
    };

    SESSION.with(|cell| {
        let mut session = cell.borrow_mut();
        session.landmarks = landmarks;
        session.has_data = true;
    });
}

/// Check if we have a frame to analyze
#[wasm_bindgen]
pub fn has_landmarks() -> bool {
    SESSION.with(|cell| cell.borrow().has_data)
}

/// Forget the stored frame (camera stopped, rider left the frame)
#[wasm_bindgen]
pub fn clear_landmarks() {
    SESSION.with(|cell| {
        let mut session = cell.borrow_mut();
        session.landmarks.clear();
        session.has_data = false;
    });
}

/// Select the bike type by id (`"road"`, `"time-trial"`, `"mountain"`)
#[wasm_bindgen]
pub fn set_bike_type(id: &str) -> std::result::Result<(), JsValue> {
    let bike_type: BikeType = id.parse().map_err(|e: FitError| JsValue::from_str(&e.to_string()))?;
    SESSION.with(|cell| cell.borrow_mut().bike_type = bike_type);
    Ok(())
}

/// Replace the extraction config from a JSON object; missing keys take defaults
#[wasm_bindgen]
pub fn set_fit_config(json: &str) -> std::result::Result<(), JsValue> {
    apply_config(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    web_sys::console::log_1(&"✅ Fit config applied".into());
    Ok(())
}

// ============================================================================
// INTERNAL API (no wasm_bindgen)
// ============================================================================

pub(crate) fn apply_config(json: &str) -> Result<()> {
    let config = FitConfig::from_json(json)?;
    SESSION.with(|cell| cell.borrow_mut().extractor = BodyAngleExtractor::from_config(&config));
    Ok(())
}

/// Run `f` on the stored frame, if any
pub(crate) fn with_current_frame<T>(
    f: impl FnOnce(&[Landmark], &BodyAngleExtractor, BikeType) -> T,
) -> Option<T> {
    SESSION.with(|cell| {
        let session = cell.borrow();
        if session.has_data {
            Some(f(&session.landmarks, &session.extractor, session.bike_type))
        } else {
            None
        }
    })
}

/// Extractor and bike type without requiring a stored frame
pub(crate) fn with_session<T>(f: impl FnOnce(&BodyAngleExtractor, BikeType) -> T) -> T {
    SESSION.with(|cell| {
        let session = cell.borrow();
        f(&session.extractor, session.bike_type)
    })
}
