//! Core types: card values, seats, RNG, configuration.
//!
//! Everything else in the engine is built on these.

pub mod card;
pub mod player;
pub mod rng;
pub mod config;

pub use card::{Card, CardValue, MAX_CARD_VALUE, MIN_CARD_VALUE};
pub use player::{Seat, Seats};
pub use rng::{GameRng, GameRngState};
pub use config::{InitialReveal, MatchConfig, MatchEnd, RuleSet, StartingPlayer};
