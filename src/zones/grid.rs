//! A seat's 4×3 card grid.
//!
//! The grid is stored column-major: a sequence of columns, each holding
//! three cards top to bottom. Columns can only disappear (when three
//! matching face-up cards clear), never be added, so positions are always
//! relative to the columns still on the table.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Card, CardValue, GameRng};
use crate::error::{EngineError, EngineResult};

/// Columns in a freshly dealt grid.
pub const COLUMNS: usize = 4;

/// Cards per column.
pub const ROWS: usize = 3;

/// Slots in a freshly dealt grid.
pub const GRID_SIZE: usize = COLUMNS * ROWS;

/// One column, top card first.
pub type Column = [Card; ROWS];

/// Values banked by a column clear, left to right, top to bottom.
pub type ClearedValues = SmallVec<[CardValue; GRID_SIZE]>;

/// A slot address within the current columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub col: usize,
    pub row: usize,
}

impl Position {
    #[must_use]
    pub const fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// A seat's grid of cards.
///
/// ## Example
///
/// ```
/// use skyjo_engine::core::Card;
/// use skyjo_engine::zones::{Grid, Position};
///
/// let mut grid = Grid::from_columns([[Card::hidden(3), Card::hidden(-2), Card::hidden(9)]]);
/// grid.reveal(Position::new(0, 0)).unwrap();
/// grid.reveal(Position::new(0, 1)).unwrap();
///
/// // Hidden cards never count
/// assert_eq!(grid.score(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    columns: SmallVec<[Column; COLUMNS]>,
}

impl Grid {
    /// Build a grid from columns, left to right.
    pub fn from_columns(columns: impl IntoIterator<Item = Column>) -> Self {
        Self {
            columns: columns.into_iter().collect(),
        }
    }

    /// Columns still on the table.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// True once every column has been cleared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// The columns, left to right.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// The card at `pos`, if the slot exists.
    #[must_use]
    pub fn card(&self, pos: Position) -> Option<&Card> {
        self.columns.get(pos.col).and_then(|column| column.get(pos.row))
    }

    /// Every slot address, column by column.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.columns.len()).flat_map(|col| (0..ROWS).map(move |row| Position::new(col, row)))
    }

    /// Addresses of the face-down cards, column by column.
    #[must_use]
    pub fn hidden_positions(&self) -> SmallVec<[Position; GRID_SIZE]> {
        self.positions()
            .filter(|&pos| self.card(pos).is_some_and(|card| !card.revealed))
            .collect()
    }

    /// All card values, face-up or not.
    pub fn values(&self) -> impl Iterator<Item = CardValue> + '_ {
        self.columns.iter().flatten().map(|card| card.value)
    }

    fn slot(&self, pos: Position) -> EngineResult<&Card> {
        self.card(pos).ok_or(EngineError::InvalidPosition {
            col: pos.col,
            row: pos.row,
            reason: "out of range",
        })
    }

    /// Turn a face-down card face-up.
    ///
    /// Fails if the slot does not exist or the card is already face-up.
    pub fn reveal(&mut self, pos: Position) -> EngineResult<()> {
        if self.slot(pos)?.revealed {
            return Err(EngineError::InvalidPosition {
                col: pos.col,
                row: pos.row,
                reason: "card already revealed",
            });
        }
        self.columns[pos.col][pos.row].reveal();
        Ok(())
    }

    /// Put `value` face-up at `pos` and return the value it replaced.
    ///
    /// Legal on face-up and face-down slots alike.
    pub fn swap(&mut self, pos: Position, value: CardValue) -> EngineResult<CardValue> {
        let old = self.slot(pos)?.value;
        self.columns[pos.col][pos.row] = Card::face_up(value);
        Ok(old)
    }

    /// Remove every column of three face-up cards sharing one value.
    ///
    /// Surviving columns keep their left-to-right order. The removed
    /// values are returned column by column for the discard pile.
    pub fn clear_matched_columns(&mut self) -> ClearedValues {
        let mut cleared = ClearedValues::new();
        self.columns.retain(|column| {
            if is_matched(column) {
                cleared.extend(column.iter().map(|card| card.value));
                false
            } else {
                true
            }
        });
        cleared
    }

    /// True when no card is face-down. An emptied grid counts as revealed.
    #[must_use]
    pub fn is_fully_revealed(&self) -> bool {
        self.columns.iter().flatten().all(|card| card.revealed)
    }

    /// Sum of the face-up values.
    #[must_use]
    pub fn score(&self) -> i32 {
        self.columns
            .iter()
            .flatten()
            .filter_map(Card::visible_value)
            .map(i32::from)
            .sum()
    }

    /// Flip a uniformly chosen face-down card.
    ///
    /// Returns the flipped position, or `None` if nothing is face-down.
    pub fn reveal_random_hidden(&mut self, rng: &mut GameRng) -> Option<Position> {
        let hidden = self.hidden_positions();
        let pos = *rng.choose(&hidden)?;
        self.columns[pos.col][pos.row].reveal();
        Some(pos)
    }

    /// Turn every card face-up.
    pub fn reveal_all(&mut self) {
        for card in self.columns.iter_mut().flatten() {
            card.reveal();
        }
    }

    /// Observer's view: face-down cards hide their value.
    #[must_use]
    pub fn view(&self) -> GridView {
        GridView {
            columns: self
                .columns
                .iter()
                .map(|column| column.map(|card| card.visible_value()))
                .collect(),
        }
    }
}

fn is_matched(column: &Column) -> bool {
    let first = column[0];
    column.iter().all(|card| card.revealed && card.value == first.value)
}

/// Read-only snapshot of a grid with face-down values withheld.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridView {
    /// Per column, per row: `Some(value)` if face-up, `None` if face-down.
    pub columns: Vec<[Option<CardValue>; ROWS]>,
}

impl GridView {
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// `Some(Some(v))` face-up, `Some(None)` face-down, `None` no such slot.
    #[must_use]
    pub fn cell(&self, pos: Position) -> Option<Option<CardValue>> {
        self.columns.get(pos.col).and_then(|column| column.get(pos.row)).copied()
    }

    /// Sum of the visible values.
    #[must_use]
    pub fn visible_score(&self) -> i32 {
        self.columns.iter().flatten().flatten().map(|&v| i32::from(v)).sum()
    }

    /// Number of face-down slots.
    #[must_use]
    pub fn hidden_count(&self) -> usize {
        self.columns.iter().flatten().filter(|cell| cell.is_none()).count()
    }

    /// Every slot address, column by column.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.columns.len()).flat_map(|col| (0..ROWS).map(move |row| Position::new(col, row)))
    }

    /// Addresses of the face-down slots, column by column.
    #[must_use]
    pub fn hidden_positions(&self) -> SmallVec<[Position; GRID_SIZE]> {
        self.positions().filter(|&pos| self.cell(pos) == Some(None)).collect()
    }
}
