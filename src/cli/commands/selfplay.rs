//! Selfplay command - agent against agent from the empty board

use std::collections::HashMap;

use anyhow::Result;
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use serde::Serialize;
use tracing::info;

use super::AgentArgs;
use crate::{
    Result as CrateResult,
    agent::{Agent, TieBreaker},
    cli::output::{create_game_progress, percent, print_kv, print_section},
    tictactoe::{Game, GameOutcome, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Play the agent against itself")]
pub struct SelfplayArgs {
    /// Number of games
    #[arg(long, short = 'g', default_value_t = 10)]
    pub games: usize,

    /// Print the summary as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub agent: AgentArgs,
}

#[derive(Debug, Default, Serialize)]
struct Summary {
    games: usize,
    x_wins: usize,
    o_wins: usize,
    draws: usize,
    first_moves: HashMap<String, usize>,
}

/// Let the two agents alternate on `game` until it ends.
///
/// # Errors
///
/// Propagates any error from the agents or the live board.
pub fn play_out<A, B>(game: &mut Game, x: &mut Agent<A>, o: &mut Agent<B>) -> CrateResult<GameOutcome>
where
    A: TieBreaker,
    B: TieBreaker,
{
    loop {
        if let Some(outcome) = game.outcome() {
            return Ok(outcome);
        }
        match game.to_move() {
            Player::X => x.play(game)?,
            Player::O => o.play(game)?,
        };
    }
}

pub fn execute(args: SelfplayArgs) -> Result<()> {
    let config = args.agent.load()?;
    let base_seed = config.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(base_seed);

    let mut x = Agent::new(Player::X, config.clone().with_seed(base_seed.wrapping_add(1)))?;
    let mut o = Agent::new(Player::O, config.with_seed(base_seed.wrapping_add(2)))?;

    let pb = create_game_progress(args.games as u64);
    let mut summary = Summary {
        games: args.games,
        ..Summary::default()
    };

    for game_num in 0..args.games {
        let mut game = Game::new_random_first(&mut rng);
        let outcome = play_out(&mut game, &mut x, &mut o)?;

        match outcome {
            GameOutcome::Win(Player::X) => summary.x_wins += 1,
            GameOutcome::Win(Player::O) => summary.o_wins += 1,
            GameOutcome::Draw => summary.draws += 1,
        }
        if let Some(first) = first_move(&game) {
            *summary.first_moves.entry(first).or_default() += 1;
        }
        info!(game = game_num, first = %game.first(), ?outcome, "game finished");

        pb.inc(1);
        pb.set_message(format!("{} draws", summary.draws));
    }
    pb.finish_and_clear();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    print_section("Selfplay summary");
    print_kv("Games", &summary.games.to_string());
    print_kv("X wins", &percent(summary.x_wins, summary.games));
    print_kv("O wins", &percent(summary.o_wins, summary.games));
    print_kv("Draws", &percent(summary.draws, summary.games));
    let mut openings: Vec<_> = summary.first_moves.iter().collect();
    openings.sort();
    for (cell, count) in openings {
        print_kv(&format!("Opened {cell}"), &count.to_string());
    }

    Ok(())
}

/// Opening cell of a finished game
fn first_move(game: &Game) -> Option<String> {
    game.history().first().map(|(pos, _)| pos.to_string())
}
