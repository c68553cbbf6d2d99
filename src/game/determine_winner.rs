use crate::game::door::Door;
use crate::game::game_state::{DoorLabel, GameState};
use crate::game::outcome::Outcome;

/// Judges a final pick against the game: the car wins, a goat loses.
pub fn determine_winner(final_pick: Door, game: &GameState) -> Outcome {
    match game.label(final_pick) {
        DoorLabel::Car => Outcome::Win,
        DoorLabel::Goat => Outcome::Lose,
    }
}
