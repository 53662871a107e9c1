//! Skyjo simulator - AI vs AI matches from the command line
//!
//! Plays complete matches between two uniform-random seats and reports
//! per-round scores. The round history can be exported as CSV.

use clap::Parser;
use csv::Writer;
use flexi_logger::Logger;
use std::error::Error;
use std::path::PathBuf;

use skyjo_engine::ai::{MovePolicy, UniformRandomPolicy};
use skyjo_engine::core::{GameRng, MatchConfig, RuleSet, Seat, Seats, StartingPlayer};
use skyjo_engine::rules::Winner;
use skyjo_engine::tournament::{play_match, Match, RoundResult, DEFAULT_MAX_TURNS};

#[derive(Parser, Debug)]
#[command(name = "skyjo-sim", about = "Play AI vs AI Skyjo matches")]
struct Args {
    /// Number of matches to play
    #[arg(long, default_value_t = 1)]
    matches: usize,

    /// Rounds per match
    #[arg(long, default_value_t = 5)]
    rounds: u32,

    /// End each match when a total reaches this score (overrides --rounds)
    #[arg(long)]
    target: Option<i32>,

    /// Random seed (match i uses seed + i)
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Double the round-ender's score unless it is strictly lowest
    #[arg(long, default_value_t = false)]
    double_penalty: bool,

    /// The seat with the higher initial reveal sum starts each round
    #[arg(long, default_value_t = false)]
    highest_sum_starts: bool,

    /// Skip the column-clear pass after the end-of-round reveal
    #[arg(long, default_value_t = false)]
    no_final_clear: bool,

    /// Abort a round after this many turns
    #[arg(long, default_value_t = DEFAULT_MAX_TURNS)]
    max_turns: u32,

    /// Output CSV file for round history
    #[arg(short, long)]
    output: Option<String>,

    /// Log level (overridden by RUST_LOG)
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Args {
    fn match_config(&self, index: usize) -> MatchConfig {
        let mut rules = RuleSet::default()
            .with_double_penalty(self.double_penalty)
            .with_final_clear_pass(!self.no_final_clear);
        if self.highest_sum_starts {
            rules = rules.with_starting_player(StartingPlayer::HighestInitialSum);
        }

        let config = MatchConfig::default()
            .with_rules(rules)
            .with_seed(self.seed.wrapping_add(index as u64));
        match self.target {
            Some(target) => config.with_target_score(target),
            None => config.with_max_rounds(self.rounds),
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let _logger = Logger::try_with_env_or_str(&args.log_level)?
        .format(flexi_logger::colored_default_format)
        .start()?;

    let policy: &dyn MovePolicy = &UniformRandomPolicy;
    let policies = Seats::with_value(policy);

    let mut wins = Seats::with_value(0usize);
    let mut ties = 0usize;
    let mut histories = Vec::with_capacity(args.matches);

    for index in 0..args.matches {
        let config = args.match_config(index);
        let mut rng = GameRng::new(config.seed).for_context("policy");
        let mut game = Match::new(config);

        let winner = play_match(&mut game, &policies, &mut rng, args.max_turns)?;
        for result in game.history() {
            log::info!(
                "match {} round {}: player {} / opponent {} ({})",
                index + 1,
                result.round_number,
                result.player_score,
                result.opponent_score,
                result.winner
            );
        }
        log::info!(
            "match {} totals: player {} / opponent {} -> {}",
            index + 1,
            game.totals().player,
            game.totals().opponent,
            winner
        );

        match winner {
            Winner::Seat(seat) => wins[seat] += 1,
            Winner::Tie => ties += 1,
        }
        histories.push(game.history().iter().copied().collect::<Vec<_>>());
    }

    log::info!(
        "{} matches: player won {}, opponent won {}, {} tied",
        args.matches,
        wins[Seat::Player],
        wins[Seat::Opponent],
        ties
    );

    if let Some(path) = &args.output {
        save_history_csv(path, &histories)?;
        log::info!("round history written to {path}");
    }

    Ok(())
}

fn save_history_csv(path: &str, histories: &[Vec<RoundResult>]) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = PathBuf::from(path).parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut writer = Writer::from_path(path)?;
    writer.write_record(["match", "round", "player_score", "opponent_score", "winner"])?;

    for (index, history) in histories.iter().enumerate() {
        for result in history {
            writer.write_record(&[
                (index + 1).to_string(),
                result.round_number.to_string(),
                result.player_score.to_string(),
                result.opponent_score.to_string(),
                result.winner.to_string(),
            ])?;
        }
    }

    writer.flush()?;
    Ok(())
}
