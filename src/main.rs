//! Tengen: a Go rules engine.
//!
//! ## Usage
//!
//! - `tengen` - Run a random self-play demo
//! - `tengen demo --size 13` - Demo on a 13x13 board
//! - `tengen replay "B[ee]W[cc]B[]"` - Replay an encoded history

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use tengen::board::{Board, Color, Coord};
use tengen::constants::max_game_len;
use tengen::game::{GameState, Status};
use tengen::score::{Points, ScoringMethod};
use tengen::{GoError, history};

/// Tengen: a Go rules engine
#[derive(Parser)]
#[command(name = "tengen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a random self-play game and score it both ways
    Demo {
        /// Board size (9, 13 or 19)
        #[arg(long, default_value_t = 9)]
        size: u8,
        /// Komi as an exact decimal, e.g. 6.5
        #[arg(long, default_value = "6.5")]
        komi: String,
    },
    /// Replay an encoded move history and show the resulting position
    Replay {
        /// Token stream, e.g. "B[ee]W[cc]B[]"
        tokens: String,
        /// Board size (9, 13 or 19)
        #[arg(long, default_value_t = 9)]
        size: u8,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Replay { tokens, size }) => run_replay(&tokens, size),
        Some(Commands::Demo { size, komi }) => {
            let komi: Points = komi.parse().context("invalid komi")?;
            run_demo(size, komi)
        }
        None => run_demo(9, "6.5".parse().context("invalid komi")?),
    }
}

fn run_replay(tokens: &str, size: u8) -> Result<()> {
    let moves = history::decode(tokens)?;
    let game = GameState::replay(size, "6.5".parse().context("invalid komi")?, &moves)?;
    print!("{}", game.render());
    println!("status: {:?}", game.status());
    Ok(())
}

fn run_demo(size: u8, komi: Points) -> Result<()> {
    let mut game = GameState::with_komi(size, komi)?;

    while game.status() == Status::InProgress && (game.move_count() as usize) < max_game_len(size) {
        match random_move(&mut game)? {
            Some(_) => {}
            None => game.pass()?,
        }
    }

    print!("{}", game.render());
    for method in [ScoringMethod::Territory, ScoringMethod::Area] {
        let result = game.score(method);
        let name = match method {
            ScoringMethod::Territory => "japanese",
            ScoringMethod::Area => "chinese",
        };
        println!(
            "{name}: black {} - white {} ({})",
            result.black_score, result.white_score, result.winner
        );
    }
    Ok(())
}

/// Play a random legal move that does not fill the mover's own
/// one-point eye. Returns the coordinate, or None when no candidate
/// is playable.
fn random_move(game: &mut GameState) -> Result<Option<Coord>, GoError> {
    let color = game.current_player();
    let board = game.board();
    let mut candidates = Vec::with_capacity(board.area());
    for row in 0..board.size() {
        for col in 0..board.size() {
            let coord = Coord::new(row, col);
            if board.stone_at(coord).is_none() && !is_own_eye(board, coord, color) {
                candidates.push(coord);
            }
        }
    }
    fastrand::shuffle(&mut candidates);

    for coord in candidates {
        match game.play(coord) {
            Ok(_) => return Ok(Some(coord)),
            Err(GoError::SuicideMove(_) | GoError::KoViolation(_)) => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(None)
}

/// Crude one-point eye test: every in-bounds neighbor is an own stone.
/// Good enough to keep random games terminating.
fn is_own_eye(board: &Board, coord: Coord, color: Color) -> bool {
    board
        .neighbors(coord)
        .into_iter()
        .all(|n| board.stone_at(n) == Some(color))
}
