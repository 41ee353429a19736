//! ttt_play - tic-tac-toe against an exhaustive minimax advisor.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::io;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;
use ttt_engine::{Board, Player, analyze};
use ttt_play::{Advisor, Contestant, Human, Match, MatchEnd, PlayConfig};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = PlayConfig::load(cli.config.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Command::Play { human, hints } => {
            let human = human.unwrap_or(*config.human());
            let hints = hints || *config.hints();
            run_play(config.with_human(human).with_hints(hints))
        }
        Command::Selfplay => run_selfplay(),
        Command::Suggest { moves, json } => run_suggest(&moves, json),
    }
}

/// Play a human against the advisor on stdin/stdout.
#[instrument(skip(config), fields(human = %config.human()))]
fn run_play(config: PlayConfig) -> Result<()> {
    info!("Starting interactive game");

    let human: Box<dyn Contestant> = Box::new(Human::new(
        "You",
        io::stdin().lock(),
        io::stdout(),
        *config.hints(),
    ));
    let advisor: Box<dyn Contestant> = Box::new(Advisor::new("Advisor"));
    let (player_x, player_o) = match config.human() {
        Player::X => (human, advisor),
        Player::O => (advisor, human),
    };

    let mut game = Match::new(player_x, player_o, io::stdout());
    if let MatchEnd::Withdrew(player) = game.run()? {
        info!(%player, "Game abandoned");
    }
    Ok(())
}

/// Let the advisor play both sides from the empty board.
#[instrument]
fn run_selfplay() -> Result<()> {
    let mut game = Match::new(
        Box::new(Advisor::new("Advisor X")),
        Box::new(Advisor::new("Advisor O")),
        io::stdout(),
    );
    game.run()?;
    Ok(())
}

/// Replay `moves` and print the advisor's suggestion for the resulting board.
#[instrument]
fn run_suggest(moves: &[String], json: bool) -> Result<()> {
    let mut board = Board::new();
    for token in moves {
        if board.outcome().is_decided() {
            anyhow::bail!("Game is already over before move {:?}", token);
        }
        let position = board
            .parse_position(token)
            .with_context(|| format!("Cannot play move {:?}", token))?;
        board.apply_move(position);
    }

    let Some(suggestion) = analyze(&board) else {
        println!("{}", board);
        println!("Game over: {}", board.outcome());
        return Ok(());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&suggestion)?);
    } else {
        println!("{}", board);
        println!(
            "Suggested move for {}: {} ({})",
            suggestion.player, suggestion.position, suggestion.evaluation
        );
    }
    Ok(())
}
