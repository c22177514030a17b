//! Static guidance shown around an analysis

use serde::Serialize;

/// A common fit mistake and how it feels on the bike
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FitIssue {
    pub mistake: &'static str,
    pub symptoms: &'static str,
}

pub const COMMON_FIT_ISSUES: [FitIssue; 5] = [
    FitIssue {
        mistake: "Saddle too high",
        symptoms: "Hip rocking, knee pain (back of knee), overreaching",
    },
    FitIssue {
        mistake: "Saddle too low",
        symptoms: "Anterior knee pain, inefficient pedaling",
    },
    FitIssue {
        mistake: "Bars too low",
        symptoms: "Neck, back, wrist pain",
    },
    FitIssue {
        mistake: "Bars too far",
        symptoms: "Shoulder/neck tension, numb hands",
    },
    FitIssue {
        mistake: "Wrong frame size",
        symptoms: "Constant discomfort, hard to dial in fit",
    },
];

/// Camera and bike setup before recording
pub const SETUP_INSTRUCTIONS: [&str; 4] = [
    "Ensure your bike is mounted securely on a level surface",
    "Position yourself in your natural riding posture, seated on the bike",
    "Ensure your entire body and bike are visible in the frame",
    "Keep your bike parallel to the camera",
];
