//! The round state machine.
//!
//! ## Phases
//!
//! ```text
//! InitialReveal ──(both seats revealed)──▶ AwaitingDraw
//! AwaitingDraw  ──draw / take discard────▶ HoldingCard
//! HoldingCard   ──swap / discard+flip────▶ AwaitingDraw (other seat)
//!                                       └▶ Finished (final turn taken)
//! ```
//!
//! ## Final turn
//!
//! The first time a mover's grid ends a turn fully revealed, the other
//! seat becomes the final-turn owner. The round ends as soon as that
//! owner completes one more turn. Scoring then force-reveals both grids,
//! runs one more column-clear pass (if enabled) and totals the values.
//!
//! Every command is validated before anything is mutated, so an error
//! leaves the round untouched.

use im::Vector;
use log::{debug, info};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::action::{Action, DrawSource, HeldCard, Placement, TurnRecord};
use super::scoring::{score_round, RoundScore};
use crate::cards::{self, Deal};
use crate::core::{CardValue, GameRng, InitialReveal, RuleSet, Seat, Seats, StartingPlayer};
use crate::error::{EngineError, EngineResult, PileKind};
use crate::zones::{ClearedValues, Grid, GridView, Pile, Position};

/// Where a round is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Seats are choosing their initial face-up cards.
    InitialReveal,
    /// The seat to move must draw or take the discard.
    AwaitingDraw,
    /// The seat to move holds a card and must place it.
    HoldingCard,
    /// Scored; no more commands are accepted.
    Finished,
}

/// What happens after a turn resolves.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundStatus {
    InProgress { next: Seat },
    Finished(RoundScore),
}

/// Result of a completed turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOutcome {
    /// The seat that moved.
    pub seat: Seat,

    /// Values removed by column clears.
    pub cleared: ClearedValues,

    /// True if this turn revealed the mover's last card and started the final turn.
    pub final_turn_triggered: bool,

    pub status: RoundStatus,
}

/// Result of one dispatched command.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionOutcome {
    Revealed(Position),
    Holding(HeldCard),
    TurnResolved(TurnOutcome),
}

/// One deal-to-scoring cycle for two seats.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Round {
    number: u32,
    rules: RuleSet,
    grids: Seats<Grid>,
    draw_pile: Pile,
    discard_pile: Pile,
    phase: RoundPhase,
    current_turn: Seat,
    final_turn_owner: Option<Seat>,
    held: Option<HeldCard>,
    initial_reveals: Seats<usize>,
    turn_number: u32,
    log: Vector<TurnRecord>,
    score: Option<RoundScore>,
    rng: GameRng,
}

impl Round {
    /// Deal a round from `deck` (top card last).
    ///
    /// With `InitialReveal::Random` the initial cards are flipped here and
    /// the round starts in `AwaitingDraw`; with `Manual` it waits in
    /// `InitialReveal` for `reveal` calls.
    pub fn from_deck(number: u32, rules: RuleSet, deck: Vec<CardValue>, rng: GameRng) -> EngineResult<Self> {
        let deal = cards::deal(deck, Seat::ALL.len())?;
        Self::from_deal(number, rules, deal, rng)
    }

    /// Start a round from an existing deal.
    ///
    /// `deal.grids` must hold exactly two grids, `Player` first.
    pub fn from_deal(number: u32, rules: RuleSet, deal: Deal, rng: GameRng) -> EngineResult<Self> {
        let Deal {
            grids,
            draw_pile,
            discard_pile,
        } = deal;
        let [player, opponent]: [Grid; 2] = grids.try_into().map_err(|grids: Vec<Grid>| {
            EngineError::illegal(format!("a round needs 2 grids, got {}", grids.len()))
        })?;

        let mut round = Self {
            number,
            rules,
            grids: Seats::new(player, opponent),
            draw_pile,
            discard_pile,
            phase: RoundPhase::InitialReveal,
            current_turn: Seat::Player,
            final_turn_owner: None,
            held: None,
            initial_reveals: Seats::with_value(0),
            turn_number: 0,
            log: Vector::new(),
            score: None,
            rng,
        };

        if round.rules.initial_reveal == InitialReveal::Random {
            round.reveal_random_initial();
        }
        round.begin_play_if_ready();

        Ok(round)
    }

    fn reveal_random_initial(&mut self) {
        let mut reveal_rng = self.rng.for_context("initial-reveal");
        for seat in Seat::ALL {
            while self.initial_reveals[seat] < self.rules.initial_reveals {
                if self.grids[seat].reveal_random_hidden(&mut reveal_rng).is_none() {
                    break;
                }
                self.initial_reveals[seat] += 1;
            }
        }
    }

    fn initial_reveals_done(&self, seat: Seat) -> bool {
        self.initial_reveals[seat] >= self.rules.initial_reveals
            || self.grids[seat].hidden_positions().is_empty()
    }

    fn begin_play_if_ready(&mut self) {
        if self.phase != RoundPhase::InitialReveal
            || !Seat::ALL.iter().all(|&seat| self.initial_reveals_done(seat))
        {
            return;
        }

        self.current_turn = match self.rules.starting_player {
            StartingPlayer::Fixed(seat) => seat,
            StartingPlayer::HighestInitialSum => {
                if self.grids.opponent.score() > self.grids.player.score() {
                    Seat::Opponent
                } else {
                    Seat::Player
                }
            }
        };
        self.phase = RoundPhase::AwaitingDraw;

        info!(
            "round {} started: {} moves first, discard shows {:?}",
            self.number,
            self.current_turn,
            self.discard_pile.top()
        );
    }

    // === Queries ===

    /// 1-based round number within the match.
    #[must_use]
    pub fn number(&self) -> u32 {
        self.number
    }

    #[must_use]
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// The seat to move.
    #[must_use]
    pub fn current_turn(&self) -> Seat {
        self.current_turn
    }

    /// The seat with the one remaining turn, once a grid is fully revealed.
    #[must_use]
    pub fn final_turn_owner(&self) -> Option<Seat> {
        self.final_turn_owner
    }

    /// The card currently held by the seat to move.
    #[must_use]
    pub fn held_card(&self) -> Option<HeldCard> {
        self.held
    }

    #[must_use]
    pub fn grid(&self, seat: Seat) -> &Grid {
        &self.grids[seat]
    }

    #[must_use]
    pub fn grids(&self) -> &Seats<Grid> {
        &self.grids
    }

    /// A seat's grid with face-down values withheld.
    #[must_use]
    pub fn grid_view(&self, seat: Seat) -> GridView {
        self.grids[seat].view()
    }

    #[must_use]
    pub fn discard_top(&self) -> Option<CardValue> {
        self.discard_pile.top()
    }

    #[must_use]
    pub fn discard_pile(&self) -> &Pile {
        &self.discard_pile
    }

    #[must_use]
    pub fn draw_pile_len(&self) -> usize {
        self.draw_pile.len()
    }

    /// Initial reveals `seat` still owes before play can begin.
    #[must_use]
    pub fn reveals_remaining(&self, seat: Seat) -> usize {
        if self.phase != RoundPhase::InitialReveal || self.initial_reveals_done(seat) {
            return 0;
        }
        self.rules.initial_reveals - self.initial_reveals[seat]
    }

    /// Number of completed turns.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Completed turns, oldest first.
    #[must_use]
    pub fn log(&self) -> &Vector<TurnRecord> {
        &self.log
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == RoundPhase::Finished
    }

    /// The final tally, once finished.
    #[must_use]
    pub fn score(&self) -> Option<&RoundScore> {
        self.score.as_ref()
    }

    /// Count of every card value in play: grids, piles and the held card.
    ///
    /// Equal to the dealt deck's composition at every step of a round.
    #[must_use]
    pub fn card_census(&self) -> FxHashMap<CardValue, usize> {
        let grid_values = Seat::ALL.into_iter().flat_map(|seat| self.grids[seat].values());
        cards::composition(
            grid_values
                .chain(self.draw_pile.as_slice().iter().copied())
                .chain(self.discard_pile.as_slice().iter().copied())
                .chain(self.held.map(|held| held.value)),
        )
    }

    // === Commands ===

    /// Dispatch one command for `seat`.
    pub fn apply(&mut self, seat: Seat, action: Action) -> EngineResult<ActionOutcome> {
        match action {
            Action::Reveal(pos) => self.reveal(seat, pos).map(|()| ActionOutcome::Revealed(pos)),
            Action::DrawFromPile => self.draw_from_pile(seat).map(ActionOutcome::Holding),
            Action::TakeDiscard => self.take_discard(seat).map(ActionOutcome::Holding),
            Action::SwapInto(pos) => self.swap_into(seat, pos).map(ActionOutcome::TurnResolved),
            Action::DiscardAndFlip(pos) => {
                self.discard_and_flip(seat, pos).map(ActionOutcome::TurnResolved)
            }
        }
    }

    /// Initial reveal of one of `seat`'s face-down cards.
    ///
    /// Only legal while the round is in `InitialReveal` and the seat has
    /// reveals left. Play begins once both seats are done.
    pub fn reveal(&mut self, seat: Seat, pos: Position) -> EngineResult<()> {
        if self.phase != RoundPhase::InitialReveal {
            return Err(EngineError::illegal("initial reveals are over"));
        }
        if self.initial_reveals_done(seat) {
            return Err(EngineError::illegal(format!(
                "{seat} already revealed {} initial cards",
                self.rules.initial_reveals
            )));
        }

        self.grids[seat].reveal(pos)?;
        self.initial_reveals[seat] += 1;
        debug!("{seat} revealed initial card at {pos}");

        self.begin_play_if_ready();
        Ok(())
    }

    /// Pick up the top of the draw pile.
    ///
    /// An empty draw pile is rebuilt from every discard but the top one.
    pub fn draw_from_pile(&mut self, seat: Seat) -> EngineResult<HeldCard> {
        self.check_turn(seat, RoundPhase::AwaitingDraw)?;

        if self.draw_pile.is_empty() {
            if self.discard_pile.len() < 2 {
                return Err(EngineError::DeckExhausted);
            }
            self.draw_pile = self.discard_pile.take_all_but_top(&mut self.rng);
            debug!(
                "round {}: reshuffled {} discards into the draw pile",
                self.number,
                self.draw_pile.len()
            );
        }

        let value = self.draw_pile.pop().ok_or(EngineError::DeckExhausted)?;
        Ok(self.hold(value, DrawSource::DrawPile))
    }

    /// Pick up the top of the discard pile.
    pub fn take_discard(&mut self, seat: Seat) -> EngineResult<HeldCard> {
        self.check_turn(seat, RoundPhase::AwaitingDraw)?;

        let value = self
            .discard_pile
            .pop()
            .ok_or(EngineError::EmptyPile(PileKind::Discard))?;
        Ok(self.hold(value, DrawSource::DiscardPile))
    }

    fn hold(&mut self, value: CardValue, source: DrawSource) -> HeldCard {
        let held = HeldCard { value, source };
        self.held = Some(held);
        self.phase = RoundPhase::HoldingCard;
        held
    }

    /// Put the held card face-up at `pos`; the replaced card is discarded.
    pub fn swap_into(&mut self, seat: Seat, pos: Position) -> EngineResult<TurnOutcome> {
        let held = self.held_for(seat)?;

        let replaced = self.grids[seat].swap(pos, held.value)?;
        self.discard_pile.push(replaced);

        Ok(self.resolve_turn(seat, held, Placement::Swap(pos), Some(replaced)))
    }

    /// Discard the held card and turn the face-down card at `pos` face-up.
    pub fn discard_and_flip(&mut self, seat: Seat, pos: Position) -> EngineResult<TurnOutcome> {
        let held = self.held_for(seat)?;

        self.grids[seat].reveal(pos)?;
        self.discard_pile.push(held.value);

        Ok(self.resolve_turn(seat, held, Placement::DiscardAndFlip(pos), None))
    }

    fn held_for(&self, seat: Seat) -> EngineResult<HeldCard> {
        self.check_turn(seat, RoundPhase::HoldingCard)?;
        self.held
            .ok_or_else(|| EngineError::illegal("no card is held"))
    }

    fn check_turn(&self, seat: Seat, expected: RoundPhase) -> EngineResult<()> {
        match self.phase {
            RoundPhase::Finished => return Err(EngineError::illegal("the round is over")),
            RoundPhase::InitialReveal => {
                return Err(EngineError::illegal("initial reveals are not complete"))
            }
            _ => {}
        }
        if seat != self.current_turn {
            return Err(EngineError::illegal(format!("it is {}'s turn", self.current_turn)));
        }
        if self.phase != expected {
            return Err(match expected {
                RoundPhase::HoldingCard => {
                    EngineError::illegal("no card is held; draw or take the discard first")
                }
                _ => EngineError::illegal("a card is already held; swap it or discard it"),
            });
        }
        Ok(())
    }

    fn resolve_turn(
        &mut self,
        seat: Seat,
        held: HeldCard,
        placement: Placement,
        replaced: Option<CardValue>,
    ) -> TurnOutcome {
        self.held = None;

        let cleared = self.grids[seat].clear_matched_columns();
        self.discard_pile.extend(cleared.iter().copied());

        self.turn_number += 1;
        debug!(
            "round {} turn {}: {seat} took {} from {:?}, {:?}, cleared {:?}",
            self.number, self.turn_number, held.value, held.source, placement, cleared
        );
        self.log.push_back(TurnRecord {
            turn: self.turn_number,
            seat,
            held,
            placement,
            replaced,
            cleared: cleared.clone(),
        });

        if self.final_turn_owner == Some(seat) {
            let score = self.finish();
            return TurnOutcome {
                seat,
                cleared,
                final_turn_triggered: false,
                status: RoundStatus::Finished(score),
            };
        }

        let final_turn_triggered =
            self.final_turn_owner.is_none() && self.grids[seat].is_fully_revealed();
        if final_turn_triggered {
            self.final_turn_owner = Some(seat.other());
            info!(
                "round {}: {seat} revealed every card; {} takes the final turn",
                self.number,
                seat.other()
            );
        }

        self.current_turn = seat.other();
        self.phase = RoundPhase::AwaitingDraw;

        TurnOutcome {
            seat,
            cleared,
            final_turn_triggered,
            status: RoundStatus::InProgress {
                next: self.current_turn,
            },
        }
    }

    fn finish(&mut self) -> RoundScore {
        for seat in Seat::ALL {
            let grid = &mut self.grids[seat];
            grid.reveal_all();
            if self.rules.final_clear_pass {
                let cleared = grid.clear_matched_columns();
                self.discard_pile.extend(cleared);
            }
        }

        // The owner of the final turn is never the seat that ended the round.
        let ender = self.final_turn_owner.map_or(self.current_turn, Seat::other);
        let score = score_round(self.number, &self.grids, ender, &self.rules);
        self.phase = RoundPhase::Finished;
        self.score = Some(score.clone());

        info!(
            "round {} over: player {} / opponent {} (winner: {})",
            self.number, score.scores.player, score.scores.opponent, score.winner
        );
        score
    }
}
