//! Error taxonomy for the fit core
//!
//! Landmark and geometry errors are resolved inside the core (defaults or
//! sentinel values). Frame, bike-type and config errors reach the bridge.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FitError {
    #[error("landmark {index} is missing from the frame")]
    MissingLandmark { index: usize },

    #[error("degenerate geometry: zero-length segment or non-finite coordinate")]
    DegenerateGeometry,

    #[error("landmark {index} visibility {visibility:.2} is below the gate")]
    LowConfidence { index: usize, visibility: f32 },

    #[error("invalid landmark frame: {len} floats (expected 5 per landmark, at most 33 landmarks)")]
    InvalidFrame { len: usize },

    #[error("unknown bike type `{0}`")]
    UnknownBikeType(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FitError>;
