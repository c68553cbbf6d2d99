use crate::game::change_door::change_door;
use crate::game::create_game::create_game;
use crate::game::determine_winner::determine_winner;
use crate::game::open_goat_door::open_goat_door;
use crate::game::select_door::select_door;
use crate::simulation::round_result::RoundResult;
use crate::simulation::strategy::Strategy;
use crate::Result;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// The paired outcomes of one trial, both judged against the same game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayedGame {
    pub stay: RoundResult,
    pub switch: RoundResult,
}

/// Plays one complete game and resolves both strategies counterfactually
/// on the same setup, pick and reveal. Re-rolling a fresh game per strategy
/// would invalidate the per-trial comparison.
pub fn play_game<R: Rng + ?Sized>(rng: &mut R) -> Result<PlayedGame> {
    let game = create_game(rng);
    let pick = select_door(rng);
    let opened = open_goat_door(&game, pick, rng)?;

    let [stay, switch] = Strategy::ALL.map(|strategy| {
        let final_pick = change_door(strategy.stays(), opened, pick);
        RoundResult {
            strategy,
            outcome: determine_winner(final_pick, &game),
        }
    });

    Ok(PlayedGame { stay, switch })
}

#[cfg(test)]
mod tests {
    use crate::game::change_door::change_door;
    use crate::game::create_game::create_game;
    use crate::game::determine_winner::determine_winner;
    use crate::game::open_goat_door::open_goat_door;
    use crate::game::select_door::select_door;
    use crate::simulation::play_game::play_game;
    use crate::simulation::strategy::Strategy;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_exactly_one_strategy_wins_each_trial() {
        // The pick either hides the car (stay wins) or a goat (switch wins);
        // there is no third case on a shared game instance.
        let mut rng = StdRng::seed_from_u64(99);

        for _ in 0..500 {
            let played = play_game(&mut rng).unwrap();
            assert_ne!(
                played.stay.outcome, played.switch.outcome,
                "On one shared game, stay and switch can never both win or both lose."
            );
        }
    }

    #[test]
    fn test_rounds_are_labeled_with_their_strategy() {
        let mut rng = StdRng::seed_from_u64(4);
        let played = play_game(&mut rng).unwrap();

        assert_eq!(played.stay.strategy, Strategy::Stay);
        assert_eq!(played.switch.strategy, Strategy::Switch);
    }

    #[test]
    fn test_both_strategies_are_judged_against_the_same_game() {
        // Replay the same seed by hand and check the runner made exactly the
        // same draws in the same order: one setup, one pick, one reveal.
        let seed = 2025;

        let mut rng = StdRng::seed_from_u64(seed);
        let played = play_game(&mut rng).unwrap();

        let mut replay = StdRng::seed_from_u64(seed);
        let game = create_game(&mut replay);
        let pick = select_door(&mut replay);
        let opened = open_goat_door(&game, pick, &mut replay).unwrap();

        assert_eq!(
            played.stay.outcome,
            determine_winner(change_door(true, opened, pick), &game),
            "The stay outcome must come from the replayed game and reveal."
        );
        assert_eq!(
            played.switch.outcome,
            determine_winner(change_door(false, opened, pick), &game),
            "The switch outcome must come from the replayed game and reveal."
        );
    }
}
