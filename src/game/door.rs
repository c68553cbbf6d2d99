use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three doors the contestant can point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Door {
    One,
    Two,
    Three,
}

impl Door {
    /// Every door, in position order.
    pub const ALL: [Door; 3] = [Door::One, Door::Two, Door::Three];

    /// 0-based position, used to index a game's door labels.
    pub fn index(self) -> usize {
        match self {
            Door::One => 0,
            Door::Two => 1,
            Door::Three => 2,
        }
    }

    /// 1-based door number as shown to the contestant.
    pub fn number(self) -> u8 {
        self.index() as u8 + 1
    }
}

impl fmt::Display for Door {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}
