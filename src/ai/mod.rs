//! Computer-controlled seats.
//!
//! ## Overview
//!
//! - `RoundView`: what a seat may see (face-up cards of both grids,
//!   pile tops)
//! - `MovePolicy`: picks a whole turn from a view
//! - `UniformRandomPolicy`: the random baseline
//! - `play_turn`: drive one turn of a `Round` with a policy
//!
//! ## Usage
//!
//! ```rust
//! use skyjo_engine::ai::{play_turn, UniformRandomPolicy};
//! use skyjo_engine::cards::new_shuffled_deck;
//! use skyjo_engine::core::{GameRng, RuleSet};
//! use skyjo_engine::rules::Round;
//!
//! let mut rng = GameRng::new(42);
//! let deck = new_shuffled_deck(&mut rng);
//! let mut round = Round::from_deck(1, RuleSet::default(), deck, rng.fork()).unwrap();
//!
//! let outcome = play_turn(&mut round, &UniformRandomPolicy, &mut rng).unwrap();
//! println!("{} played, cleared {:?}", outcome.seat, outcome.cleared);
//! ```

pub mod policy;
pub mod view;

pub use policy::{play_turn, Move, MovePolicy, UniformRandomPolicy};
pub use view::RoundView;
