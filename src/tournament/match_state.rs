//! Match state: cumulative totals and round history.
//!
//! A Match hands out fresh Rounds and records their scores. It never
//! drives turns itself; callers (a UI, or the headless runner) play each
//! Round and report back through `finish_round` or `record_round_result`.

use im::Vector;
use log::info;
use serde::{Deserialize, Serialize};

use crate::cards::new_shuffled_deck;
use crate::core::{GameRng, MatchConfig, MatchEnd, Seats};
use crate::error::{EngineError, EngineResult};
use crate::rules::{Round, Winner};

/// One entry of the match history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub round_number: u32,
    pub player_score: i32,
    pub opponent_score: i32,
    pub winner: Winner,
}

/// A sequence of rounds between the two seats.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Match {
    config: MatchConfig,
    totals: Seats<i32>,
    history: Vector<RoundResult>,
    rng: GameRng,
}

impl Match {
    #[must_use]
    pub fn new(config: MatchConfig) -> Self {
        let rng = GameRng::new(config.seed);
        Self {
            config,
            totals: Seats::with_value(0),
            history: Vector::new(),
            rng,
        }
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Cumulative scores.
    #[must_use]
    pub fn totals(&self) -> Seats<i32> {
        self.totals
    }

    /// Completed rounds, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<RoundResult> {
        &self.history
    }

    #[must_use]
    pub fn rounds_played(&self) -> usize {
        self.history.len()
    }

    /// Number the next round will get.
    #[must_use]
    pub fn next_round_number(&self) -> u32 {
        u32::try_from(self.history.len()).map_or(u32::MAX, |n| n.saturating_add(1))
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        match self.config.end {
            MatchEnd::Rounds(limit) => self.history.len() >= limit as usize,
            MatchEnd::TargetScore(target) => self.totals.iter().any(|(_, &total)| total >= target),
        }
    }

    /// Lowest total wins. `None` while the match is still running.
    #[must_use]
    pub fn winner(&self) -> Option<Winner> {
        self.is_over().then(|| Winner::from_scores(&self.totals))
    }

    /// Shuffle a fresh deck and deal the next round.
    ///
    /// Each round plays on its own fork of the match RNG.
    pub fn start_round(&mut self) -> EngineResult<Round> {
        if self.is_over() {
            return Err(EngineError::illegal("the match is over"));
        }

        let round_rng = self.rng.fork();
        let deck = new_shuffled_deck(&mut round_rng.for_context("shuffle"));
        Round::from_deck(self.next_round_number(), self.config.rules.clone(), deck, round_rng)
    }

    /// Record a finished round. Returns whether the match has ended.
    pub fn finish_round(&mut self, round: &Round) -> EngineResult<bool> {
        let score = round
            .score()
            .ok_or_else(|| EngineError::illegal(format!("round {} is not finished", round.number())))?;
        if round.number() != self.next_round_number() {
            return Err(EngineError::illegal(format!(
                "expected round {}, got round {}",
                self.next_round_number(),
                round.number()
            )));
        }
        self.record_round_result(score.scores.player, score.scores.opponent)
    }

    /// Add a round's scores to the totals. Returns whether the match has ended.
    pub fn record_round_result(&mut self, player_score: i32, opponent_score: i32) -> EngineResult<bool> {
        if self.is_over() {
            return Err(EngineError::illegal("the match is over"));
        }

        let scores = Seats::new(player_score, opponent_score);
        let result = RoundResult {
            round_number: self.next_round_number(),
            player_score,
            opponent_score,
            winner: Winner::from_scores(&scores),
        };
        self.totals.player += player_score;
        self.totals.opponent += opponent_score;
        self.history.push_back(result);

        let over = self.is_over();
        if over {
            info!(
                "match over after {} rounds: player {} / opponent {} (winner: {})",
                self.history.len(),
                self.totals.player,
                self.totals.opponent,
                Winner::from_scores(&self.totals)
            );
        }
        Ok(over)
    }
}
