use crate::game::game_state::{DoorLabel, GameState};
use rand::Rng;
use rand::RngExt;

/// Builds a fresh game with the car behind a uniformly random door and
/// goats behind the other two.
pub fn create_game<R: Rng + ?Sized>(rng: &mut R) -> GameState {
    let mut doors = [DoorLabel::Goat; 3];
    doors[rng.random_range(0..doors.len())] = DoorLabel::Car;
    GameState { doors }
}
