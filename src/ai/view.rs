//! What a seat is allowed to see when choosing a move.

use smallvec::SmallVec;

use crate::core::{CardValue, Seat};
use crate::rules::{HeldCard, Round, RoundPhase};
use crate::zones::{GridView, Position, GRID_SIZE};

/// A seat's read-only window onto a round.
///
/// The seat sees the face-up cards of both grids, the shape of its own
/// grid and the pile tops. Face-down values never enter the view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundView {
    pub seat: Seat,
    pub phase: RoundPhase,
    own: GridView,
    pub opponent: GridView,
    pub discard_top: Option<CardValue>,
    pub draw_pile_len: usize,
    pub final_turn_owner: Option<Seat>,
    pub held: Option<HeldCard>,
}

impl RoundView {
    #[must_use]
    pub fn new(round: &Round, seat: Seat) -> Self {
        Self {
            seat,
            phase: round.phase(),
            own: round.grid_view(seat),
            opponent: round.grid_view(seat.other()),
            discard_top: round.discard_top(),
            draw_pile_len: round.draw_pile_len(),
            final_turn_owner: round.final_turn_owner(),
            held: round.held_card().filter(|_| round.current_turn() == seat),
        }
    }

    /// The seat's own grid with face-down values withheld.
    #[must_use]
    pub fn own_view(&self) -> &GridView {
        &self.own
    }

    /// Every slot of the seat's own grid.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.own.positions()
    }

    /// The seat's own face-down slots.
    #[must_use]
    pub fn hidden_positions(&self) -> SmallVec<[Position; GRID_SIZE]> {
        self.own.hidden_positions()
    }

    /// True if this is the seat's last turn of the round.
    #[must_use]
    pub fn is_final_turn(&self) -> bool {
        self.final_turn_owner == Some(self.seat)
    }
}
