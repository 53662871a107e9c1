//! Draw and discard piles.
//!
//! Both piles are stacks of card values: the last element is the top.

use serde::{Deserialize, Serialize};

use crate::core::{CardValue, GameRng};

/// A face-down draw pile or face-up discard pile.
///
/// ```
/// use skyjo_engine::zones::Pile;
///
/// let mut pile = Pile::from_values(vec![1, 2, 3]);
/// assert_eq!(pile.top(), Some(3));
/// assert_eq!(pile.pop(), Some(3));
/// pile.push(9);
/// assert_eq!(pile.top(), Some(9));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pile {
    cards: Vec<CardValue>,
}

impl Pile {
    /// Create an empty pile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from values, bottom first.
    #[must_use]
    pub fn from_values(cards: Vec<CardValue>) -> Self {
        Self { cards }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The top card, if any.
    #[must_use]
    pub fn top(&self) -> Option<CardValue> {
        self.cards.last().copied()
    }

    /// Remove and return the top card.
    pub fn pop(&mut self) -> Option<CardValue> {
        self.cards.pop()
    }

    /// Put a card on top.
    pub fn push(&mut self, value: CardValue) {
        self.cards.push(value);
    }

    /// Put several cards on top, in order (the last ends up on top).
    pub fn extend(&mut self, values: impl IntoIterator<Item = CardValue>) {
        self.cards.extend(values);
    }

    /// Values bottom to top.
    #[must_use]
    pub fn as_slice(&self) -> &[CardValue] {
        &self.cards
    }

    /// Take every card except the top one, shuffled, leaving only the top.
    ///
    /// Used to rebuild an exhausted draw pile from the discards.
    pub fn take_all_but_top(&mut self, rng: &mut GameRng) -> Pile {
        let Some(top) = self.cards.pop() else {
            return Pile::new();
        };
        let mut rest = std::mem::replace(&mut self.cards, vec![top]);
        rng.shuffle(&mut rest);
        Pile { cards: rest }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_semantics() {
        let mut pile = Pile::new();
        assert!(pile.is_empty());
        assert_eq!(pile.top(), None);
        assert_eq!(pile.pop(), None);

        pile.push(4);
        pile.extend([5, 6]);
        assert_eq!(pile.len(), 3);
        assert_eq!(pile.top(), Some(6));
        assert_eq!(pile.as_slice(), &[4, 5, 6]);
    }

    #[test]
    fn test_take_all_but_top() {
        let mut rng = GameRng::new(42);
        let mut discard = Pile::from_values(vec![1, 2, 3, 4, 5]);

        let mut rebuilt = discard.take_all_but_top(&mut rng);

        assert_eq!(discard.as_slice(), &[5]);
        assert_eq!(rebuilt.len(), 4);
        let mut values: Vec<_> = std::iter::from_fn(|| rebuilt.pop()).collect();
        values.sort();
        assert_eq!(values, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_take_all_but_top_small_piles() {
        let mut rng = GameRng::new(42);

        let mut single = Pile::from_values(vec![7]);
        assert!(single.take_all_but_top(&mut rng).is_empty());
        assert_eq!(single.top(), Some(7));

        let mut empty = Pile::new();
        assert!(empty.take_all_but_top(&mut rng).is_empty());
        assert!(empty.is_empty());
    }
}
