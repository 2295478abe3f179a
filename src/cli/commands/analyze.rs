//! Analyze command - show the agent's decision for one position

use anyhow::{Result, anyhow};
use clap::Parser;
use serde::Serialize;

use super::{AgentArgs, parse_player_token};
use crate::{
    agent::{Agent, Decision},
    cli::output::{format_number, print_kv, print_section},
    tictactoe::{Board, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Show the move the agent would play")]
pub struct AnalyzeArgs {
    /// Board in row-major order, e.g. "XX.|.O.|..." ('.' for empty)
    #[arg(long, short = 'b', default_value = ".........")]
    pub board: String,

    /// Token the agent plays (`x` or `o`); inferred from token counts if omitted
    #[arg(long, short = 'p')]
    pub player: Option<String>,

    /// Print the decision as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub agent: AgentArgs,
}

#[derive(Serialize)]
struct AnalysisReport<'a> {
    board: String,
    player: Player,
    decision: &'a Decision,
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let board = Board::from_string(&args.board)?;
    let player = match &args.player {
        Some(value) => parse_player_token(value, "--player")?,
        None => infer_player(&board)?,
    };

    let mut agent = Agent::new(player, args.agent.load()?)?;
    let decision = agent.decide(&board)?;

    if args.json {
        let report = AnalysisReport {
            board: board.encode(),
            player,
            decision: &decision,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_section(&format!("Decision for {player}"));
    println!("{board}\n");
    print_kv("Chosen move", &decision.position.to_string());
    print_kv("Value", &decision.value.to_string());
    let candidates: Vec<String> = decision.candidates.iter().map(|p| p.to_string()).collect();
    print_kv("Equal candidates", &candidates.join(" "));
    print_kv("Tree nodes", &format_number(decision.nodes));
    print_kv("Nodes visited", &format_number(decision.visited));

    Ok(())
}

/// X moves on equal counts, O when X is one token ahead
fn infer_player(board: &Board) -> Result<Player> {
    let (x, o) = (board.count(Player::X), board.count(Player::O));
    if x == o {
        Ok(Player::X)
    } else if x == o + 1 {
        Ok(Player::O)
    } else {
        Err(anyhow!(
            "cannot infer the player to move from X={x}, O={o}; pass --player"
        ))
    }
}
