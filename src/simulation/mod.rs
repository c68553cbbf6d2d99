pub mod batch;
pub mod play_game;
pub mod round_result;
pub mod strategy;
