//! The Skyjo deck: composition, shuffle and deal.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{Card, CardValue, GameRng};
use crate::error::{EngineError, EngineResult};
use crate::zones::{Column, Grid, Pile, COLUMNS, GRID_SIZE, ROWS};

/// Copies of each printed value.
pub const COMPOSITION: [(CardValue, usize); 13] = [
    (-2, 5),
    (-1, 10),
    (0, 15),
    (1, 10),
    (2, 10),
    (3, 10),
    (4, 10),
    (5, 10),
    (6, 10),
    (7, 10),
    (8, 10),
    (9, 10),
    (10, 5),
];

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = total_copies(&COMPOSITION);

const fn total_copies(composition: &[(CardValue, usize)]) -> usize {
    let mut total = 0;
    let mut i = 0;
    while i < composition.len() {
        total += composition[i].1;
        i += 1;
    }
    total
}

/// The unshuffled deck, grouped by value from -2 up to 10.
#[must_use]
pub fn standard_deck() -> Vec<CardValue> {
    COMPOSITION
        .iter()
        .flat_map(|&(value, copies)| std::iter::repeat(value).take(copies))
        .collect()
}

/// A full deck in uniformly random order.
#[must_use]
pub fn new_shuffled_deck(rng: &mut GameRng) -> Vec<CardValue> {
    let mut deck = standard_deck();
    rng.shuffle(&mut deck);
    deck
}

/// Count copies per value.
pub fn composition(values: impl IntoIterator<Item = CardValue>) -> FxHashMap<CardValue, usize> {
    let mut counts = FxHashMap::default();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }
    counts
}

/// Composition of a full deck.
#[must_use]
pub fn standard_composition() -> FxHashMap<CardValue, usize> {
    COMPOSITION.iter().copied().collect()
}

/// Result of dealing a deck.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deal {
    /// One face-down grid per player, in seating order.
    pub grids: Vec<Grid>,
    /// The undealt remainder, top last.
    pub draw_pile: Pile,
    /// The single card turned up to start the discard pile.
    pub discard_pile: Pile,
}

/// Deal `players` face-down grids from the top (end) of `deck`.
///
/// Each grid is filled column by column, top row first. One more card
/// then seeds the discard pile and the rest becomes the draw pile.
pub fn deal(mut deck: Vec<CardValue>, players: usize) -> EngineResult<Deal> {
    let required = players * GRID_SIZE + 1;
    if deck.len() < required {
        return Err(EngineError::InsufficientCards {
            required,
            available: deck.len(),
        });
    }

    let mut grids = Vec::with_capacity(players);
    for _ in 0..players {
        let mut columns: Vec<Column> = Vec::with_capacity(COLUMNS);
        for _ in 0..COLUMNS {
            let mut column = [Card::hidden(0); ROWS];
            for card in &mut column {
                // length checked above
                if let Some(value) = deck.pop() {
                    *card = Card::hidden(value);
                }
            }
            columns.push(column);
        }
        grids.push(Grid::from_columns(columns));
    }

    let mut discard_pile = Pile::new();
    if let Some(value) = deck.pop() {
        discard_pile.push(value);
    }

    Ok(Deal {
        grids,
        draw_pile: Pile::from_values(deck),
        discard_pile,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zones::Position;

    #[test]
    fn test_standard_deck_composition() {
        let deck = standard_deck();
        assert_eq!(deck.len(), DECK_SIZE);

        let counts = composition(deck.iter().copied());
        let count = |value: CardValue| counts.get(&value).copied().unwrap_or(0);
        assert_eq!(count(-2), 5);
        assert_eq!(count(-1), 10);
        assert_eq!(count(0), 15);
        assert_eq!(count(10), 5);
        for value in 1..=9 {
            assert_eq!(count(value), 10);
        }
        assert_eq!(counts, standard_composition());
    }

    #[test]
    fn test_deck_size_matches_composition() {
        assert_eq!(DECK_SIZE, 125);
        assert_eq!(standard_deck().len(), DECK_SIZE);
        assert_eq!(standard_composition().values().sum::<usize>(), DECK_SIZE);
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = GameRng::new(42);
        let deck = new_shuffled_deck(&mut rng);
        assert_ne!(deck, standard_deck());
        assert_eq!(composition(deck), standard_composition());
    }

    #[test]
    fn test_shuffle_is_deterministic_per_seed() {
        let deck1 = new_shuffled_deck(&mut GameRng::new(5));
        let deck2 = new_shuffled_deck(&mut GameRng::new(5));
        assert_eq!(deck1, deck2);
    }

    #[test]
    fn test_deal_sizes() {
        let deal = deal(standard_deck(), 2).unwrap();

        assert_eq!(deal.grids.len(), 2);
        for grid in &deal.grids {
            assert_eq!(grid.column_count(), COLUMNS);
            assert_eq!(grid.hidden_positions().len(), GRID_SIZE);
        }
        assert_eq!(deal.discard_pile.len(), 1);
        assert_eq!(deal.draw_pile.len(), DECK_SIZE - 2 * GRID_SIZE - 1);
        assert_eq!(deal.draw_pile.len(), 100);
    }

    #[test]
    fn test_deal_pops_from_top_column_major() {
        // Top of the deck is the end of the vector.
        let deck: Vec<CardValue> = (0..30).map(|i| (i % 13) as CardValue - 2).collect();
        let expected_first = deck[deck.len() - 1];
        let expected_second = deck[deck.len() - 2];
        let expected_col1 = deck[deck.len() - 4];
        let expected_discard = deck[deck.len() - 25];

        let deal = deal(deck, 2).unwrap();
        let grid = &deal.grids[0];

        assert_eq!(grid.card(Position::new(0, 0)).unwrap().value, expected_first);
        assert_eq!(grid.card(Position::new(0, 1)).unwrap().value, expected_second);
        assert_eq!(grid.card(Position::new(1, 0)).unwrap().value, expected_col1);
        assert_eq!(deal.discard_pile.top(), Some(expected_discard));
        assert_eq!(deal.draw_pile.len(), 5);
    }

    #[test]
    fn test_deal_insufficient_cards() {
        let err = deal(vec![1; 24], 2).unwrap_err();
        assert_eq!(
            err,
            EngineError::InsufficientCards {
                required: 25,
                available: 24
            }
        );
    }

    #[test]
    fn test_deal_exact_size() {
        let deal = deal(vec![3; 25], 2).unwrap();
        assert!(deal.draw_pile.is_empty());
        assert_eq!(deal.discard_pile.top(), Some(3));
    }
}
