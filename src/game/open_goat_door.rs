use crate::game::door::Door;
use crate::game::game_state::{DoorLabel, GameState};
use crate::{MontyHallError, Result};
use rand::prelude::IndexedRandom;
use rand::Rng;

/// The host's reveal: a goat door that is not the contestant's pick.
///
/// When the pick hides the car there are two candidates and the host
/// chooses uniformly between them; otherwise the single remaining goat
/// door is forced. Rejects a game that does not hide exactly one car.
pub fn open_goat_door<R: Rng + ?Sized>(
    game: &GameState,
    pick: Door,
    rng: &mut R,
) -> Result<Door> {
    let cars = game.car_count();
    if cars != 1 {
        return Err(MontyHallError::MalformedGame(cars));
    }

    let candidates: Vec<Door> = Door::ALL
        .into_iter()
        .filter(|&door| door != pick && game.label(door) == DoorLabel::Goat)
        .collect();

    candidates
        .choose(rng)
        .copied()
        .ok_or(MontyHallError::MalformedGame(cars))
}
