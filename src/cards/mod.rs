//! The Skyjo deck.
//!
//! ## Key Functions
//!
//! - `standard_deck` / `new_shuffled_deck`: The fixed 125-card multiset
//! - `deal`: Fill face-down grids and seed the piles
//! - `composition`: Value census used to check that no card is lost

pub mod deck;

pub use deck::{
    composition, deal, new_shuffled_deck, standard_composition, standard_deck, Deal, COMPOSITION,
    DECK_SIZE,
};
