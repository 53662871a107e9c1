//! Turn rules: commands, the round state machine and round scoring.
//!
//! A `Round` accepts commands from the seat to move and reports what each
//! one did. It never renders, prompts or waits: the caller drives it one
//! command at a time and reads state back for display.

pub mod action;
pub mod round;
pub mod scoring;

pub use action::{Action, DrawSource, HeldCard, Placement, TurnRecord};
pub use round::{ActionOutcome, Round, RoundPhase, RoundStatus, TurnOutcome};
pub use scoring::{score_round, RoundScore, Winner};
