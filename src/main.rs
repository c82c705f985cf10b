//! Perfect Play - interactive tic-tac-toe CLI.
//!
//! Thin driver around the engine core: it owns a [`GameState`], asks
//! the [`Searcher`] for a move on the engine's turn, reads `row col`
//! pairs from the terminal for the human's turn, and loops until the
//! state is terminal.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use perfect_play::{GameState, GameStatus, Move, Player, Position, Searcher};
use std::io::{BufRead, Write};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { engine_first } => {
            let engine = if engine_first { Player::X } else { Player::O };
            run_play(engine)
        }
        Command::Demo => run_demo(),
    }
}

/// Interactive game: human on one side, engine on the other.
fn run_play(engine: Player) -> Result<()> {
    info!(%engine, "starting interactive game");

    let mut state = GameState::new();
    let searcher = Searcher::new();
    let stdin = std::io::stdin();
    let mut input = stdin.lock();

    println!("Welcome to Perfect Play tic-tac-toe!");
    println!("You are '{}' and the engine is '{}'.", engine.opponent(), engine);
    println!("{}\n", state.board());

    while !state.is_terminal() {
        let mover = state.to_move();
        let position = if mover == engine {
            let position = searcher.best_move(&state);
            println!("Engine ({}) plays {}.", engine, position);
            position
        } else {
            prompt_move(&mut input, &state)?
        };

        state
            .apply(Move::new(mover, position))
            .context("selected move should be legal")?;
        println!("{}\n", state.board());
    }

    match state.status() {
        GameStatus::Won(winner) if winner == engine => println!("The engine wins."),
        GameStatus::Won(_) => println!("You win!"),
        GameStatus::Draw => println!("It's a draw."),
        GameStatus::InProgress => unreachable!("loop exits only on terminal state"),
    }

    Ok(())
}

/// Engine vs engine, printing each move.
fn run_demo() -> Result<()> {
    info!("starting self-play demo");

    let mut state = GameState::new();
    let searcher = Searcher::new();

    println!("{}\n", state.board());

    while !state.is_terminal() {
        let mover = state.to_move();
        let position = searcher.best_move(&state);
        println!("{} plays {}.", mover, position);
        state
            .apply(Move::new(mover, position))
            .context("searched move should be legal")?;
        println!("{}\n", state.board());
    }

    match state.status() {
        GameStatus::Won(winner) => println!("{} wins.", winner),
        GameStatus::Draw => println!("It's a draw, as perfect play demands."),
        GameStatus::InProgress => unreachable!("loop exits only on terminal state"),
    }

    Ok(())
}

/// Prompts until the human supplies a legal `row col` pair.
fn prompt_move(input: &mut impl BufRead, state: &GameState) -> Result<Position> {
    loop {
        print!("Enter row and column (0, 1, or 2): ");
        std::io::stdout().flush().context("flushing prompt")?;

        let mut line = String::new();
        let read = input.read_line(&mut line).context("reading move input")?;
        if read == 0 {
            anyhow::bail!("input closed before the game finished");
        }

        let Some(position) = parse_move(&line) else {
            println!("Invalid input. Please enter two numbers separated by a space.");
            continue;
        };

        if state.available_moves().contains(&position) {
            debug!(%position, "human move accepted");
            return Ok(position);
        }
        println!("Invalid move. The cell is already occupied.");
    }
}

/// Parses a `row col` pair into a position.
fn parse_move(line: &str) -> Option<Position> {
    let mut parts = line.split_whitespace();
    let row = parts.next()?.parse::<usize>().ok()?;
    let col = parts.next()?.parse::<usize>().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Position::from_row_col(row, col)
}
