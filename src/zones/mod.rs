//! Card locations: each seat's grid and the shared piles.
//!
//! ## Key Types
//!
//! - `Grid`: A seat's columns of face-up/face-down cards
//! - `Position`: Slot address within a grid's current columns
//! - `GridView`: Observer snapshot with face-down values withheld
//! - `Pile`: Stack of card values (draw pile, discard pile)

pub mod grid;
pub mod pile;

pub use grid::{ClearedValues, Column, Grid, GridView, Position, COLUMNS, GRID_SIZE, ROWS};
pub use pile::Pile;
