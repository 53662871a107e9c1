//! Card values and face-up/face-down cards.
//!
//! A Skyjo card carries a single point value in `-2..=10`. Once dealt, a
//! card's value never changes; only its `revealed` flag flips, and only from
//! face-down to face-up.

use serde::{Deserialize, Serialize};

/// Point value printed on a card.
pub type CardValue = i8;

/// Lowest printed card value.
pub const MIN_CARD_VALUE: CardValue = -2;

/// Highest printed card value.
pub const MAX_CARD_VALUE: CardValue = 10;

/// A card in a grid slot.
///
/// ```
/// use skyjo_engine::core::Card;
///
/// let mut card = Card::hidden(7);
/// assert!(!card.revealed);
/// card.reveal();
/// assert!(card.revealed);
/// assert_eq!(card.visible_value(), Some(7));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub value: CardValue,
    pub revealed: bool,
}

impl Card {
    /// A face-down card.
    #[must_use]
    pub const fn hidden(value: CardValue) -> Self {
        Self { value, revealed: false }
    }

    /// A face-up card.
    #[must_use]
    pub const fn face_up(value: CardValue) -> Self {
        Self { value, revealed: true }
    }

    /// Turn the card face-up. Revealing twice is a no-op.
    pub fn reveal(&mut self) {
        self.revealed = true;
    }

    /// The value as seen by an observer: `None` while face-down.
    #[must_use]
    pub fn visible_value(&self) -> Option<CardValue> {
        self.revealed.then_some(self.value)
    }
}

/// Check whether a value is a printed Skyjo value.
#[must_use]
pub fn is_valid_value(value: CardValue) -> bool {
    (MIN_CARD_VALUE..=MAX_CARD_VALUE).contains(&value)
}
