//! # Monty Hall Simulator Library
//!
//! A library for simulating the Monty Hall problem: three doors, one car,
//! two goats, and a contestant who either stays with the initial pick or
//! switches after the host reveals a goat.
//!
//! ## Features
//!
//! - **Game Engine**: Complete single-game logic (setup, pick, reveal, resolve, judge)
//! - **Batch Simulation**: Repeated trials with per-strategy win statistics
//! - **Fair Comparison**: Both strategies judged against the same random game instance
//! - **Reproducibility**: Every random draw flows through a caller-supplied generator
//!
//! ## Usage
//!
//! ```rust
//! use monty_hall::simulation::batch::play_n_games;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(2025);
//! let result = play_n_games(100, &mut rng).unwrap();
//! println!("{}", result.summary());
//! ```

// ============================================================================
// PUBLIC API MODULES
// ============================================================================

/// Core game logic: doors, setups, the host's reveal and outcome judging
pub mod game;

/// Single-game runner and batch simulation with aggregate statistics
pub mod simulation;

// ============================================================================
// ERROR TYPES
// ============================================================================

/// Main error type for the Monty Hall library
#[derive(Debug, thiserror::Error)]
pub enum MontyHallError {
    #[error("invalid game count: {0} (a batch must run at least one game)")]
    InvalidGameCount(usize),

    #[error("malformed game: expected exactly one car door, found {0}")]
    MalformedGame(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, MontyHallError>;

// ============================================================================
// LIBRARY VERSION INFO
// ============================================================================

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Library description
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
