/// Compare Stay vs Switch (Monty Hall)
///
/// Plays a batch of seeded games and judges both strategies against the
/// same setup, pick and reveal of every game, then reports the win
/// proportions side by side.
///
/// This answers: "How much does switching actually improve over staying?"
use chrono::Utc;
use clap::Parser;
use flexi_logger::Logger;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::error::Error;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use monty_hall::simulation::batch::{play_n_games, DEFAULT_GAMES};
use monty_hall::simulation::strategy::Strategy;

#[derive(Parser, Debug)]
#[command(
    name = "compare-strategies",
    about = "Empirically compare stay vs switch over repeated Monty Hall games"
)]
struct Args {
    /// Number of games to simulate
    #[arg(short, long, default_value_t = DEFAULT_GAMES)]
    games: usize,

    /// RNG seed for reproducible results
    #[arg(short = 'r', long, default_value_t = 2025)]
    seed: u64,

    /// CSV path to append results
    #[arg(long, default_value = "compare_strategies.csv")]
    log_path: String,

    /// Optional path to dump the full round table as JSON
    #[arg(long)]
    json_path: Option<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    Logger::try_with_env_or_str("info")?
        .format(flexi_logger::colored_default_format)
        .start()?;

    log::info!("🚪 Monty Hall Strategy Comparison");
    log::info!("   Games: {}, Seed: {}", args.games, args.seed);

    let mut rng = StdRng::seed_from_u64(args.seed);
    let result = play_n_games(args.games, &mut rng)?;
    let summary = result.summary();

    // Print results
    println!("\n{}", "=".repeat(60));
    println!("===== Stay vs Switch =====");
    println!("Games simulated    : {}", result.games());
    println!(
        "Wins               : stay = {}, switch = {}",
        result.win_count(Strategy::Stay),
        result.win_count(Strategy::Switch)
    );
    println!();
    print!("{}", summary);
    println!();
    println!("Expected as games grow:");
    println!("  stay   : ~0.33");
    println!("  switch : ~0.67");
    println!("{}", "=".repeat(60));

    // Log to CSV
    if !args.log_path.is_empty() {
        let path = Path::new(&args.log_path);
        let needs_header = !path.exists();

        let mut file = OpenOptions::new().create(true).append(true).open(path)?;

        if needs_header {
            writeln!(file, "timestamp,games,seed,stay_win_rate,switch_win_rate")?;
        }

        writeln!(
            file,
            "{},{},{},{:.2},{:.2}",
            Utc::now().format("%Y-%m-%d %H:%M:%S"),
            args.games,
            args.seed,
            summary.stay_win_rate,
            summary.switch_win_rate
        )?;

        log::info!("✅ Results appended to {}", args.log_path);
    }

    // Full round table for inspection
    if let Some(json_path) = &args.json_path {
        std::fs::write(json_path, serde_json::to_string_pretty(result.rounds())?)?;
        log::info!("✅ Round table written to {}", json_path);
    }

    Ok(())
}
