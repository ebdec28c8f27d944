//! Weather conditions. Resampled every time day turns to night or back.

use crate::rng::SlotRng;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum Weather {
    #[default]
    Sunny,
    Rainy,
    Windy,
    Cloudy,
}

impl Weather {
    pub const ALL: [Weather; 4] = [Self::Sunny, Self::Rainy, Self::Windy, Self::Cloudy];

    /// Draw a condition uniformly.
    pub fn sample(rng: &mut SlotRng) -> Self {
        *rng.pick(&Self::ALL)
    }

    /// Whether this condition grants the one-off growth boost on arrival.
    pub fn boosts_growth(&self) -> bool {
        matches!(self, Self::Rainy)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Sunny => "Sunny",
            Self::Rainy => "Rainy",
            Self::Windy => "Windy",
            Self::Cloudy => "Cloudy",
        }
    }
}

impl fmt::Display for Weather {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
