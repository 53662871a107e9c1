//! Matches: totals across rounds, termination, and headless play.
//!
//! ## Usage
//!
//! ```rust
//! use skyjo_engine::ai::{MovePolicy, UniformRandomPolicy};
//! use skyjo_engine::core::{GameRng, MatchConfig, Seats};
//! use skyjo_engine::tournament::{play_match, Match, DEFAULT_MAX_TURNS};
//!
//! let mut game = Match::new(MatchConfig::default().with_max_rounds(2));
//! let policy: &dyn MovePolicy = &UniformRandomPolicy;
//! let mut rng = GameRng::new(7);
//!
//! let winner = play_match(&mut game, &Seats::with_value(policy), &mut rng, DEFAULT_MAX_TURNS).unwrap();
//! assert_eq!(game.history().len(), 2);
//! println!("{winner} wins with totals {:?}", game.totals());
//! ```

pub mod match_state;
pub mod runner;

pub use match_state::{Match, RoundResult};
pub use runner::{play_initial_reveals, play_match, play_round, DEFAULT_MAX_TURNS};
