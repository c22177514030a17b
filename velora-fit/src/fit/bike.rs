//! Bike types the rider can choose before analysis

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FitError;

/// Bike selection card: id plus display text
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct BikeInfo {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BikeType {
    #[default]
    #[serde(rename = "road")]
    Road,
    #[serde(rename = "time-trial")]
    TimeTrial,
    #[serde(rename = "mountain")]
    Mountain,
}

impl BikeType {
    pub const ALL: [BikeType; 3] = [BikeType::Road, BikeType::TimeTrial, BikeType::Mountain];

    pub fn id(&self) -> &'static str {
        match self {
            BikeType::Road => "road",
            BikeType::TimeTrial => "time-trial",
            BikeType::Mountain => "mountain",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            BikeType::Road => "Road Bike",
            BikeType::TimeTrial => "Time Trial Bike",
            BikeType::Mountain => "Mountain Bike",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            BikeType::Road => "Perfect for speed and endurance",
            BikeType::TimeTrial => "Engineered for maximum speed",
            BikeType::Mountain => "Built for trails and adventure",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            BikeType::Road => "🚴",
            BikeType::TimeTrial => "🕶️",
            BikeType::Mountain => "🚵",
        }
    }

    pub fn info(&self) -> BikeInfo {
        BikeInfo {
            id: self.id(),
            title: self.title(),
            description: self.description(),
            icon: self.icon(),
        }
    }
}

impl fmt::Display for BikeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for BikeType {
    type Err = FitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BikeType::ALL
            .iter()
            .copied()
            .find(|bike| bike.id() == s)
            .ok_or_else(|| FitError::UnknownBikeType(s.to_string()))
    }
}
