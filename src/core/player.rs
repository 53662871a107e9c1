//! Seat identification and per-seat data storage.
//!
//! ## Seat
//!
//! Skyjo here is strictly two-handed: the human `Player` and the AI
//! `Opponent`. Turn order alternates between them.
//!
//! ## Seats
//!
//! A fixed pair of values, one per seat, indexable by `Seat`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two seats at the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Seat {
    /// The human player.
    Player,
    /// The computer opponent.
    Opponent,
}

impl Seat {
    /// Both seats, in turn order starting from `Player`.
    pub const ALL: [Seat; 2] = [Seat::Player, Seat::Opponent];

    /// The other seat.
    ///
    /// ```
    /// use skyjo_engine::core::Seat;
    ///
    /// assert_eq!(Seat::Player.other(), Seat::Opponent);
    /// assert_eq!(Seat::Opponent.other(), Seat::Player);
    /// ```
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Seat::Player => Seat::Opponent,
            Seat::Opponent => Seat::Player,
        }
    }

    /// Stable 0-based index (`Player` = 0).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Seat::Player => 0,
            Seat::Opponent => 1,
        }
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Seat::Player => write!(f, "Player"),
            Seat::Opponent => write!(f, "Opponent"),
        }
    }
}

/// Per-seat data storage.
///
/// ## Example
///
/// ```
/// use skyjo_engine::core::{Seat, Seats};
///
/// let mut totals: Seats<i32> = Seats::with_value(0);
/// totals[Seat::Opponent] += 12;
///
/// assert_eq!(totals[Seat::Player], 0);
/// assert_eq!(totals[Seat::Opponent], 12);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Seats<T> {
    pub player: T,
    pub opponent: T,
}

impl<T> Seats<T> {
    /// Create from explicit per-seat values.
    pub const fn new(player: T, opponent: T) -> Self {
        Self { player, opponent }
    }

    /// Create with values from a factory function.
    pub fn from_fn(mut factory: impl FnMut(Seat) -> T) -> Self {
        Self {
            player: factory(Seat::Player),
            opponent: factory(Seat::Opponent),
        }
    }

    /// Create with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            player: value.clone(),
            opponent: value,
        }
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, seat: Seat) -> &T {
        match seat {
            Seat::Player => &self.player,
            Seat::Opponent => &self.opponent,
        }
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, seat: Seat) -> &mut T {
        match seat {
            Seat::Player => &mut self.player,
            Seat::Opponent => &mut self.opponent,
        }
    }

    /// Iterate over (Seat, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (Seat, &T)> {
        [(Seat::Player, &self.player), (Seat::Opponent, &self.opponent)].into_iter()
    }

    /// Apply a function to both entries.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Seats<U> {
        Seats {
            player: f(self.player),
            opponent: f(self.opponent),
        }
    }
}

impl<T> Index<Seat> for Seats<T> {
    type Output = T;

    fn index(&self, seat: Seat) -> &Self::Output {
        self.get(seat)
    }
}

impl<T> IndexMut<Seat> for Seats<T> {
    fn index_mut(&mut self, seat: Seat) -> &mut Self::Output {
        self.get_mut(seat)
    }
}
