//! Turn commands and their records.
//!
//! A normal turn is two commands from the seat to move:
//! 1. Pick up a card: `DrawFromPile` or `TakeDiscard`
//! 2. Place it: `SwapInto` a slot, or `DiscardAndFlip` a face-down slot
//!
//! `Reveal` is only used before the first turn, when seats choose their
//! initial face-up cards.

use serde::{Deserialize, Serialize};

use crate::core::{CardValue, Seat};
use crate::zones::{ClearedValues, Position};

/// One command sent to a Round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Take the top card of the draw pile.
    DrawFromPile,
    /// Take the top card of the discard pile.
    TakeDiscard,
    /// Replace the card at a slot with the held card.
    SwapInto(Position),
    /// Discard the held card and turn a face-down slot face-up.
    DiscardAndFlip(Position),
    /// Initial reveal of one face-down card.
    Reveal(Position),
}

/// Where a held card came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrawSource {
    DrawPile,
    DiscardPile,
}

impl DrawSource {
    /// The pick-up command for this source.
    #[must_use]
    pub const fn action(self) -> Action {
        match self {
            DrawSource::DrawPile => Action::DrawFromPile,
            DrawSource::DiscardPile => Action::TakeDiscard,
        }
    }
}

/// The card in hand between pick-up and placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeldCard {
    pub value: CardValue,
    pub source: DrawSource,
}

/// How a held card was placed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Placement {
    Swap(Position),
    DiscardAndFlip(Position),
}

impl Placement {
    /// The placement command.
    #[must_use]
    pub const fn action(self) -> Action {
        match self {
            Placement::Swap(pos) => Action::SwapInto(pos),
            Placement::DiscardAndFlip(pos) => Action::DiscardAndFlip(pos),
        }
    }

    /// The slot the placement touches.
    #[must_use]
    pub const fn position(self) -> Position {
        match self {
            Placement::Swap(pos) | Placement::DiscardAndFlip(pos) => pos,
        }
    }
}

/// A completed turn, for history and replay.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Turn number within the round (starts at 1).
    pub turn: u32,

    /// The seat that moved.
    pub seat: Seat,

    /// The card picked up.
    pub held: HeldCard,

    /// What was done with it.
    pub placement: Placement,

    /// The value sent to the discard pile by a swap.
    pub replaced: Option<CardValue>,

    /// Values removed by column clears this turn.
    pub cleared: ClearedValues,
}
