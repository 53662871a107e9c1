//! Move policies for computer-controlled seats.
//!
//! A policy looks at a `RoundView` and picks a whole turn up front: where
//! to take a card from and what to do with it. Policies are trait-based so
//! a stronger player can replace the random baseline without touching the
//! rules engine.

use smallvec::SmallVec;

use crate::core::GameRng;
use crate::error::EngineResult;
use crate::rules::{DrawSource, Placement, Round, TurnOutcome};
use crate::zones::{Position, GRID_SIZE};

use super::view::RoundView;

/// A complete turn: pick-up plus placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    /// Draw from the pile and swap into any slot.
    DrawAndSwap(Position),
    /// Draw from the pile, discard it, and flip a face-down slot.
    DrawAndFlip(Position),
    /// Take the discard and swap into any slot.
    TakeDiscardAndSwap(Position),
}

impl Move {
    #[must_use]
    pub const fn source(self) -> DrawSource {
        match self {
            Move::DrawAndSwap(_) | Move::DrawAndFlip(_) => DrawSource::DrawPile,
            Move::TakeDiscardAndSwap(_) => DrawSource::DiscardPile,
        }
    }

    #[must_use]
    pub const fn placement(self) -> Placement {
        match self {
            Move::DrawAndSwap(pos) | Move::TakeDiscardAndSwap(pos) => Placement::Swap(pos),
            Move::DrawAndFlip(pos) => Placement::DiscardAndFlip(pos),
        }
    }
}

/// Policy for choosing a seat's move.
pub trait MovePolicy: Send + Sync {
    /// Choose the next move for `view.seat`.
    fn choose_move(&self, view: &RoundView, rng: &mut GameRng) -> Move;

    /// Choose a face-down card to turn up before the first turn.
    ///
    /// Defaults to a uniformly random face-down slot.
    fn choose_reveal(&self, view: &RoundView, rng: &mut GameRng) -> Option<Position> {
        rng.choose(&view.hidden_positions()).copied()
    }

    /// Short name for logs.
    fn name(&self) -> &'static str;
}

/// Uniform random baseline.
///
/// Picks one of the three move kinds with equal probability, then a
/// uniformly random legal slot for it. A flip with nothing face-down, or
/// a discard pick-up from an empty pile, falls back to draw-and-swap.
#[derive(Clone, Debug, Default)]
pub struct UniformRandomPolicy;

impl MovePolicy for UniformRandomPolicy {
    fn choose_move(&self, view: &RoundView, rng: &mut GameRng) -> Move {
        let all: SmallVec<[Position; GRID_SIZE]> = view.positions().collect();
        let any_slot = |rng: &mut GameRng| rng.choose(&all).copied().unwrap_or(Position::new(0, 0));

        match rng.gen_range_usize(0..3) {
            0 => Move::DrawAndSwap(any_slot(rng)),
            1 => match rng.choose(&view.hidden_positions()) {
                Some(&pos) => Move::DrawAndFlip(pos),
                None => Move::DrawAndSwap(any_slot(rng)),
            },
            _ if view.discard_top.is_some() => Move::TakeDiscardAndSwap(any_slot(rng)),
            _ => Move::DrawAndSwap(any_slot(rng)),
        }
    }

    fn name(&self) -> &'static str {
        "uniform-random"
    }
}

/// Let `policy` play the current seat's whole turn.
pub fn play_turn(round: &mut Round, policy: &dyn MovePolicy, rng: &mut GameRng) -> EngineResult<TurnOutcome> {
    let seat = round.current_turn();
    let chosen = policy.choose_move(&RoundView::new(round, seat), rng);
    log::debug!("{seat} ({}) plays {chosen:?}", policy.name());

    match chosen.source() {
        DrawSource::DrawPile => round.draw_from_pile(seat)?,
        DrawSource::DiscardPile => round.take_discard(seat)?,
    };
    match chosen.placement() {
        Placement::Swap(pos) => round.swap_into(seat, pos),
        Placement::DiscardAndFlip(pos) => round.discard_and_flip(seat, pos),
    }
}
