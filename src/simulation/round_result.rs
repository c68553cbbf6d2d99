use crate::game::outcome::Outcome;
use crate::simulation::strategy::Strategy;
use serde::{Deserialize, Serialize};

/// One row of the result table: which strategy played and how it ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub strategy: Strategy,
    pub outcome: Outcome,
}
