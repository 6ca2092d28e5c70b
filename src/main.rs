//! Kennel Puzzle Solver
//!
//! Packs ten dog-shaped pieces into an 8x8 walled yard so that every free
//! square is covered exactly once. The default run solves the standard
//! puzzle and prints the finished board, one marker glyph per piece.

use clap::{Parser, Subcommand};

use kennel::puzzles::{standard_board, standard_pieces, BREEDS};
use kennel::{solve, Piece};

/// Solves a dog-packing puzzle on a walled yard.
#[derive(Parser)]
#[command(name = "kennel")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Solve the standard puzzle and print the finished board.
    Solve,
    /// List the piece catalog with names, sizes and shapes.
    Pieces,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Pieces) => run_pieces(),
        Some(Command::Solve) | None => run_solve(),
    }
}

/// Solves the standard puzzle and prints the result.
fn run_solve() {
    let board = standard_board();
    let pieces = standard_pieces();

    let piece_area: usize = pieces.iter().map(Piece::size).sum();
    println!("Total piece area: {piece_area}");
    println!("Free board area: {}", board.free_cells());

    match solve(&board, &pieces) {
        Ok(solution) => print!("{solution}"),
        Err(error) => {
            eprintln!("Error: {error}");
            std::process::exit(1);
        }
    }
}

/// Prints every breed in the catalog.
fn run_pieces() {
    for (name, shape) in BREEDS {
        let piece = Piece::new(name, shape);
        println!("{} ({} squares)", piece.name(), piece.size());
        print!("{}", piece.orientations()[0]);
        println!();
    }
}
