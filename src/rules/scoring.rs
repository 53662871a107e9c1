//! Round scoring.

use serde::{Deserialize, Serialize};

use crate::core::{RuleSet, Seat, Seats};
use crate::zones::Grid;

/// Outcome of a comparison of scores: lower wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Winner {
    Seat(Seat),
    Tie,
}

impl Winner {
    /// Lower score wins; equal scores tie.
    #[must_use]
    pub fn from_scores(scores: &Seats<i32>) -> Self {
        match scores.player.cmp(&scores.opponent) {
            std::cmp::Ordering::Less => Winner::Seat(Seat::Player),
            std::cmp::Ordering::Greater => Winner::Seat(Seat::Opponent),
            std::cmp::Ordering::Equal => Winner::Tie,
        }
    }

    /// Check if a seat won.
    #[must_use]
    pub fn is_winner(&self, seat: Seat) -> bool {
        matches!(self, Winner::Seat(s) if *s == seat)
    }
}

impl std::fmt::Display for Winner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Winner::Seat(seat) => write!(f, "{seat}"),
            Winner::Tie => write!(f, "Tie"),
        }
    }
}

/// Final tally of one round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundScore {
    /// 1-based round number within the match.
    pub round_number: u32,

    /// Sum of each grid after the forced reveal.
    pub raw_scores: Seats<i32>,

    /// Scores after the round-ender penalty, if any.
    pub scores: Seats<i32>,

    /// The seat whose grid was revealed first.
    pub ender: Seat,

    /// True if the ender's score was doubled.
    pub penalized: bool,

    pub winner: Winner,
}

/// Score two fully revealed grids.
///
/// With `double_penalty`, the ender's score doubles when it is not strictly
/// lower than the other seat's, whatever its sign.
#[must_use]
pub fn score_round(round_number: u32, grids: &Seats<Grid>, ender: Seat, rules: &RuleSet) -> RoundScore {
    let raw_scores = Seats::from_fn(|seat| grids[seat].score());
    let mut scores = raw_scores;

    let ender_score = raw_scores[ender];
    let penalized = rules.double_penalty && ender_score >= raw_scores[ender.other()];
    if penalized {
        scores[ender] = ender_score * 2;
    }

    RoundScore {
        round_number,
        raw_scores,
        scores,
        ender,
        penalized,
        winner: Winner::from_scores(&scores),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Card;

    fn grid_of(values: [i8; 3]) -> Grid {
        Grid::from_columns([values.map(Card::face_up)])
    }

    fn grids(player: [i8; 3], opponent: [i8; 3]) -> Seats<Grid> {
        Seats::new(grid_of(player), grid_of(opponent))
    }

    #[test]
    fn test_winner_from_scores() {
        assert_eq!(Winner::from_scores(&Seats::new(3, 9)), Winner::Seat(Seat::Player));
        assert_eq!(Winner::from_scores(&Seats::new(9, 3)), Winner::Seat(Seat::Opponent));
        assert_eq!(Winner::from_scores(&Seats::new(-4, -4)), Winner::Tie);
        assert!(Winner::Seat(Seat::Player).is_winner(Seat::Player));
        assert!(!Winner::Tie.is_winner(Seat::Player));
    }

    #[test]
    fn test_plain_scoring() {
        let score = score_round(1, &grids([1, 2, 3], [4, 5, 6]), Seat::Player, &RuleSet::default());

        assert_eq!(score.raw_scores, Seats::new(6, 15));
        assert_eq!(score.scores, score.raw_scores);
        assert!(!score.penalized);
        assert_eq!(score.winner, Winner::Seat(Seat::Player));
    }

    #[test]
    fn test_penalty_disabled_by_default() {
        let score = score_round(1, &grids([9, 9, 8], [1, 1, 1]), Seat::Player, &RuleSet::default());
        assert_eq!(score.scores, Seats::new(26, 3));
        assert!(!score.penalized);
    }

    #[test]
    fn test_penalty_doubles_losing_ender() {
        let rules = RuleSet::default().with_double_penalty(true);
        let score = score_round(2, &grids([9, 9, 8], [1, 1, 1]), Seat::Player, &rules);

        assert_eq!(score.raw_scores, Seats::new(26, 3));
        assert_eq!(score.scores, Seats::new(52, 3));
        assert!(score.penalized);
        assert_eq!(score.winner, Winner::Seat(Seat::Opponent));
    }

    #[test]
    fn test_penalty_applies_on_tie() {
        let rules = RuleSet::default().with_double_penalty(true);
        let score = score_round(1, &grids([2, 2, 2], [1, 2, 3]), Seat::Opponent, &rules);

        assert_eq!(score.scores, Seats::new(6, 12));
        assert!(score.penalized);
    }

    #[test]
    fn test_no_penalty_for_strictly_lower_ender() {
        let rules = RuleSet::default().with_double_penalty(true);
        let score = score_round(1, &grids([1, 1, 1], [2, 2, 2]), Seat::Player, &rules);

        assert_eq!(score.scores, Seats::new(3, 6));
        assert!(!score.penalized);
    }

    #[test]
    fn test_penalty_doubles_negative_ender() {
        let rules = RuleSet::default().with_double_penalty(true);
        let score = score_round(1, &grids([-2, -1, 0], [-2, -2, -2]), Seat::Player, &rules);

        assert_eq!(score.raw_scores, Seats::new(-3, -6));
        assert_eq!(score.scores, Seats::new(-6, -6));
        assert!(score.penalized);
        assert_eq!(score.winner, Winner::Tie);
    }
}
