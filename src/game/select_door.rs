use crate::game::door::Door;
use rand::Rng;
use rand::RngExt;

/// The contestant's initial pick: uniform over the three doors,
/// independent of where the car is.
pub fn select_door<R: Rng + ?Sized>(rng: &mut R) -> Door {
    Door::ALL[rng.random_range(0..Door::ALL.len())]
}
