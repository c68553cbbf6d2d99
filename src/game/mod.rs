pub mod change_door;
pub mod create_game;
pub mod determine_winner;
pub mod door;
pub mod game_state;
pub mod open_goat_door;
pub mod outcome;
pub mod select_door;
