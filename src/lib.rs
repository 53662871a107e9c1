//! # skyjo-engine
//!
//! A two-player Skyjo rules engine: deterministic, headless and testable
//! without any display layer.
//!
//! ## Design Principles
//!
//! 1. **Explicit state**: `Round` and `Match` are plain values. A UI holds
//!    them and calls one method per user action, then reads state to redraw.
//!
//! 2. **Validate, then mutate**: every command checks legality first. An
//!    `EngineError` always leaves the state exactly as it was.
//!
//! 3. **Deterministic**: all randomness (shuffles, initial reveals,
//!    reshuffles, AI moves) comes from seeded `GameRng` streams.
//!
//! ## Modules
//!
//! - `core`: card values, seats, RNG, rule and match configuration
//! - `cards`: the 125-card deck, shuffling and dealing
//! - `zones`: the 4×3 grid and the draw/discard piles
//! - `rules`: turn commands, the round state machine, scoring
//! - `ai`: read-only views and move policies
//! - `tournament`: match totals and history, headless round/match runner
//! - `error`: the error taxonomy

pub mod ai;
pub mod cards;
pub mod core;
pub mod error;
pub mod rules;
pub mod tournament;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    Card, CardValue,
    Seat, Seats,
    GameRng, GameRngState,
    InitialReveal, MatchConfig, MatchEnd, RuleSet, StartingPlayer,
};

pub use crate::error::{EngineError, EngineResult, PileKind};

pub use crate::zones::{Grid, GridView, Pile, Position, COLUMNS, ROWS};

pub use crate::cards::{deal, new_shuffled_deck, standard_deck, Deal, DECK_SIZE};

pub use crate::rules::{
    Action, ActionOutcome, DrawSource, HeldCard, Placement, TurnRecord,
    Round, RoundPhase, RoundStatus, TurnOutcome,
    RoundScore, Winner,
};

pub use crate::ai::{play_turn, Move, MovePolicy, RoundView, UniformRandomPolicy};

pub use crate::tournament::{play_match, play_round, Match, RoundResult, DEFAULT_MAX_TURNS};
