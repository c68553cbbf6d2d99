use crate::game::outcome::Outcome;
use crate::simulation::play_game::play_game;
use crate::simulation::round_result::RoundResult;
use crate::simulation::strategy::Strategy;
use crate::{MontyHallError, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Batch size used when the caller has no preference.
pub const DEFAULT_GAMES: usize = 100;

/// Every round of a finished batch plus the counts the summary is built
/// from. Two rounds per game, recorded in play order: the stay row first,
/// then the switch row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchResult {
    rounds: Vec<RoundResult>,
    games: usize,
}

impl BatchResult {
    /// All recorded rounds in play order.
    pub fn rounds(&self) -> &[RoundResult] {
        &self.rounds
    }

    /// Number of games the batch ran (half the number of rounds).
    pub fn games(&self) -> usize {
        self.games
    }

    pub fn win_count(&self, strategy: Strategy) -> usize {
        self.rounds
            .iter()
            .filter(|round| round.strategy == strategy && round.outcome == Outcome::Win)
            .count()
    }

    /// Exact win proportion of `strategy` over its rounds.
    pub fn win_proportion(&self, strategy: Strategy) -> f64 {
        self.win_count(strategy) as f64 / self.games as f64
    }

    /// Per-strategy proportions rounded for reporting.
    pub fn summary(&self) -> BatchSummary {
        BatchSummary {
            games: self.games,
            stay_win_rate: round2(self.win_proportion(Strategy::Stay)),
            switch_win_rate: round2(self.win_proportion(Strategy::Switch)),
        }
    }
}

/// Win proportions by strategy, rounded to two decimals for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub games: usize,
    pub stay_win_rate: f64,
    pub switch_win_rate: f64,
}

impl BatchSummary {
    pub fn win_rate(&self, strategy: Strategy) -> f64 {
        match strategy {
            Strategy::Stay => self.stay_win_rate,
            Strategy::Switch => self.switch_win_rate,
        }
    }
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<10} {:>8}", "strategy", "win rate")?;
        for strategy in Strategy::ALL {
            writeln!(f, "{:<10} {:>8.2}", strategy, self.win_rate(strategy))?;
        }
        Ok(())
    }
}

/// Runs `n` independent games and collects all 2n rounds in play order.
///
/// The batch is returned as an explicit value; nothing accumulates outside
/// of it, so two runs with the same seeded generator are identical.
pub fn play_n_games<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Result<BatchResult> {
    if n == 0 {
        return Err(MontyHallError::InvalidGameCount(n));
    }

    let mut rounds = Vec::with_capacity(2 * n);
    for _ in 0..n {
        let played = play_game(rng)?;
        rounds.push(played.stay);
        rounds.push(played.switch);
    }

    log::debug!("batch complete: {} games, {} rounds", n, rounds.len());

    Ok(BatchResult { rounds, games: n })
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use crate::game::outcome::Outcome;
    use crate::simulation::batch::{play_n_games, BatchResult};
    use crate::simulation::round_result::RoundResult;
    use crate::simulation::strategy::Strategy;
    use crate::MontyHallError;
    use assert_matches::assert_matches;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_zero_games_is_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_matches!(
            play_n_games(0, &mut rng),
            Err(MontyHallError::InvalidGameCount(0))
        );
    }

    #[test]
    fn test_batch_records_two_rounds_per_game_in_play_order() {
        let mut rng = StdRng::seed_from_u64(8);
        let result = play_n_games(25, &mut rng).unwrap();

        assert_eq!(result.games(), 25);
        assert_eq!(
            result.rounds().len(),
            50,
            "25 games must record exactly 50 rounds."
        );

        for pair in result.rounds().chunks(2) {
            assert_eq!(
                pair[0].strategy,
                Strategy::Stay,
                "Each game records its stay round first."
            );
            assert_eq!(
                pair[1].strategy,
                Strategy::Switch,
                "Each game records its switch round second."
            );
        }
    }

    #[test]
    fn test_win_counts_split_one_win_per_game() {
        let mut rng = StdRng::seed_from_u64(12);
        let result = play_n_games(200, &mut rng).unwrap();

        let stay_wins = result.win_count(Strategy::Stay);
        let switch_wins = result.win_count(Strategy::Switch);
        assert_eq!(
            stay_wins + switch_wins,
            200,
            "Exactly one strategy wins each game, so wins must sum to the game count."
        );
    }

    #[test]
    fn test_same_seed_reproduces_the_batch() {
        let mut first = StdRng::seed_from_u64(77);
        let mut second = StdRng::seed_from_u64(77);

        assert_eq!(
            play_n_games(100, &mut first).unwrap(),
            play_n_games(100, &mut second).unwrap(),
            "A seeded batch must be fully reproducible."
        );
    }

    #[test]
    fn test_summary_rounds_to_two_decimals() {
        // 1 stay win out of 3 games: 0.333... reports as 0.33.
        let rounds = vec![
            RoundResult { strategy: Strategy::Stay, outcome: Outcome::Win },
            RoundResult { strategy: Strategy::Switch, outcome: Outcome::Lose },
            RoundResult { strategy: Strategy::Stay, outcome: Outcome::Lose },
            RoundResult { strategy: Strategy::Switch, outcome: Outcome::Win },
            RoundResult { strategy: Strategy::Stay, outcome: Outcome::Lose },
            RoundResult { strategy: Strategy::Switch, outcome: Outcome::Win },
        ];
        let result = BatchResult { rounds, games: 3 };

        let summary = result.summary();
        assert_eq!(summary.stay_win_rate, 0.33);
        assert_eq!(summary.switch_win_rate, 0.67);
    }

    #[test]
    fn test_summary_table_lists_both_strategies() {
        let mut rng = StdRng::seed_from_u64(31);
        let summary = play_n_games(10, &mut rng).unwrap().summary();

        let table = summary.to_string();
        assert!(table.contains("stay"), "Summary table: {table}");
        assert!(table.contains("switch"), "Summary table: {table}");
    }
}
