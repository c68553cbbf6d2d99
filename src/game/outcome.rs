use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a final pick won the car.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Outcome {
    Win,
    Lose,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Win => f.pad("WIN"),
            Outcome::Lose => f.pad("LOSE"),
        }
    }
}
