//! Rule and match configuration.
//!
//! The engine plays exactly one Skyjo variant, but the points where
//! house rules commonly differ are explicit settings rather than
//! hard-coded choices:
//! - `RuleSet`: how a round starts and how it is scored
//! - `MatchConfig`: the rule set plus when the match ends and the RNG seed
//!
//! The defaults reproduce the classic two-player tournament table:
//! random initial reveals, the human player starts, a final column-clear
//! pass at round end, no doubling penalty, five rounds.

use serde::{Deserialize, Serialize};

use super::player::Seat;

/// How the initial face-up cards are chosen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InitialReveal {
    /// The engine flips random hidden cards when the round is started.
    #[default]
    Random,
    /// Each seat picks its own cards through `Round::reveal`.
    Manual,
}

/// Who takes the first turn of a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StartingPlayer {
    /// Always the same seat.
    Fixed(Seat),
    /// The seat whose initially revealed cards sum highest. Ties go to `Seat::Player`.
    HighestInitialSum,
}

impl Default for StartingPlayer {
    fn default() -> Self {
        StartingPlayer::Fixed(Seat::Player)
    }
}

/// When a match is over.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchEnd {
    /// After this many completed rounds.
    Rounds(u32),
    /// As soon as any cumulative total reaches this score.
    TargetScore(i32),
}

impl Default for MatchEnd {
    fn default() -> Self {
        MatchEnd::Rounds(5)
    }
}

/// Round rules.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    /// Cards each seat turns face-up before the first turn.
    pub initial_reveals: usize,

    /// Who chooses the initial face-up cards.
    pub initial_reveal: InitialReveal,

    /// Who moves first.
    pub starting_player: StartingPlayer,

    /// Run one more column-clear pass after the forced reveal at round end.
    pub final_clear_pass: bool,

    /// Double the round-ender's score unless it is strictly lowest.
    pub double_penalty: bool,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            initial_reveals: 2,
            initial_reveal: InitialReveal::Random,
            starting_player: StartingPlayer::default(),
            final_clear_pass: true,
            double_penalty: false,
        }
    }
}

impl RuleSet {
    /// Create the default rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how initial reveals are chosen.
    #[must_use]
    pub fn with_initial_reveal(mut self, mode: InitialReveal) -> Self {
        self.initial_reveal = mode;
        self
    }

    /// Set the number of initial reveals per seat.
    #[must_use]
    pub fn with_initial_reveals(mut self, count: usize) -> Self {
        self.initial_reveals = count;
        self
    }

    /// Set the starting-player rule.
    #[must_use]
    pub fn with_starting_player(mut self, rule: StartingPlayer) -> Self {
        self.starting_player = rule;
        self
    }

    /// Enable or disable the end-of-round clear pass.
    #[must_use]
    pub fn with_final_clear_pass(mut self, enabled: bool) -> Self {
        self.final_clear_pass = enabled;
        self
    }

    /// Enable or disable the round-ender doubling penalty.
    #[must_use]
    pub fn with_double_penalty(mut self, enabled: bool) -> Self {
        self.double_penalty = enabled;
        self
    }
}

/// Complete match configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Round rules.
    pub rules: RuleSet,

    /// Termination rule.
    pub end: MatchEnd,

    /// Seed for every random element of the match.
    pub seed: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            rules: RuleSet::default(),
            end: MatchEnd::default(),
            seed: 42,
        }
    }
}

impl MatchConfig {
    /// Create the default match configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the round rules.
    #[must_use]
    pub fn with_rules(mut self, rules: RuleSet) -> Self {
        self.rules = rules;
        self
    }

    /// End after `rounds` completed rounds.
    #[must_use]
    pub fn with_max_rounds(mut self, rounds: u32) -> Self {
        self.end = MatchEnd::Rounds(rounds);
        self
    }

    /// End when any total reaches `target`.
    #[must_use]
    pub fn with_target_score(mut self, target: i32) -> Self {
        self.end = MatchEnd::TargetScore(target);
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules() {
        let rules = RuleSet::default();
        assert_eq!(rules.initial_reveals, 2);
        assert_eq!(rules.initial_reveal, InitialReveal::Random);
        assert_eq!(rules.starting_player, StartingPlayer::Fixed(Seat::Player));
        assert!(rules.final_clear_pass);
        assert!(!rules.double_penalty);
    }

    #[test]
    fn test_rules_builder() {
        let rules = RuleSet::new()
            .with_initial_reveal(InitialReveal::Manual)
            .with_starting_player(StartingPlayer::HighestInitialSum)
            .with_final_clear_pass(false)
            .with_double_penalty(true);

        assert_eq!(rules.initial_reveal, InitialReveal::Manual);
        assert_eq!(rules.starting_player, StartingPlayer::HighestInitialSum);
        assert!(!rules.final_clear_pass);
        assert!(rules.double_penalty);
    }

    #[test]
    fn test_match_end_is_exclusive() {
        let config = MatchConfig::new().with_max_rounds(3).with_target_score(100);
        assert_eq!(config.end, MatchEnd::TargetScore(100));

        let config = MatchConfig::new().with_target_score(100).with_max_rounds(3);
        assert_eq!(config.end, MatchEnd::Rounds(3));
    }

    #[test]
    fn test_default_match_config() {
        let config = MatchConfig::default();
        assert_eq!(config.end, MatchEnd::Rounds(5));
        assert_eq!(config.seed, 42);
    }

    #[test]
    fn test_serialization() {
        let config = MatchConfig::new().with_seed(123).with_target_score(100);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: MatchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
