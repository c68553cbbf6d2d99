use crate::game::door::Door;
use serde::{Deserialize, Serialize};

/// What a door hides: the car or a goat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DoorLabel {
    Car,
    Goat,
}

/// One game's assignment of labels to the three doors, fixed before the
/// contestant picks. A well-formed game hides exactly one car.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub doors: [DoorLabel; 3],
}

impl GameState {
    pub fn new(doors: [DoorLabel; 3]) -> Self {
        Self { doors }
    }

    pub fn label(&self, door: Door) -> DoorLabel {
        self.doors[door.index()]
    }

    pub fn car_count(&self) -> usize {
        self.doors
            .iter()
            .filter(|&&label| label == DoorLabel::Car)
            .count()
    }

    /// The door hiding the car, or `None` for a carless (malformed) game.
    pub fn car_door(&self) -> Option<Door> {
        Door::ALL
            .into_iter()
            .find(|&door| self.label(door) == DoorLabel::Car)
    }
}
