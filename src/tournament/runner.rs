//! Headless play: drive rounds and matches with one policy per seat.

use log::debug;

use crate::ai::{play_turn, MovePolicy, RoundView};
use crate::core::{GameRng, Seat, Seats};
use crate::error::{EngineError, EngineResult};
use crate::rules::{Round, RoundScore, Winner};

use super::match_state::Match;

/// Turn cap for one round. A real round never gets close.
pub const DEFAULT_MAX_TURNS: u32 = 500;

/// Let each seat's policy pick its outstanding initial reveals.
pub fn play_initial_reveals(
    round: &mut Round,
    policies: &Seats<&dyn MovePolicy>,
    rng: &mut GameRng,
) -> EngineResult<()> {
    for seat in Seat::ALL {
        while round.reveals_remaining(seat) > 0 {
            let pos = policies[seat]
                .choose_reveal(&RoundView::new(round, seat), rng)
                .ok_or_else(|| EngineError::illegal(format!("{seat} has no face-down card to reveal")))?;
            round.reveal(seat, pos)?;
        }
    }
    Ok(())
}

/// Play `round` to the end.
///
/// Fails with `TurnLimitExceeded` if the round is still running after
/// `max_turns` completed turns.
pub fn play_round(
    round: &mut Round,
    policies: &Seats<&dyn MovePolicy>,
    rng: &mut GameRng,
    max_turns: u32,
) -> EngineResult<RoundScore> {
    play_initial_reveals(round, policies, rng)?;

    while !round.is_finished() {
        if round.turn_number() >= max_turns {
            return Err(EngineError::TurnLimitExceeded(max_turns));
        }
        let seat = round.current_turn();
        play_turn(round, policies[seat], rng)?;
    }

    debug!("round {} finished after {} turns", round.number(), round.turn_number());
    round
        .score()
        .cloned()
        .ok_or_else(|| EngineError::illegal("finished round has no score"))
}

/// Play rounds until the match ends and return its winner.
pub fn play_match(
    game: &mut Match,
    policies: &Seats<&dyn MovePolicy>,
    rng: &mut GameRng,
    max_turns: u32,
) -> EngineResult<Winner> {
    while !game.is_over() {
        let mut round = game.start_round()?;
        play_round(&mut round, policies, rng, max_turns)?;
        game.finish_round(&round)?;
    }

    game.winner()
        .ok_or_else(|| EngineError::illegal("match ended without a winner"))
}
