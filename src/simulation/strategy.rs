use serde::{Deserialize, Serialize};
use std::fmt;

/// The contestant's fixed policy once a goat has been revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Stay,
    Switch,
}

impl Strategy {
    /// Both strategies, in the order their rounds are recorded.
    pub const ALL: [Strategy; 2] = [Strategy::Stay, Strategy::Switch];

    /// Whether the contestant keeps the initial pick.
    pub fn stays(self) -> bool {
        matches!(self, Strategy::Stay)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Stay => f.pad("stay"),
            Strategy::Switch => f.pad("switch"),
        }
    }
}
