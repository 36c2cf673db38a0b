//! Tsumego-Rust: incremental Go board engine.
//!
//! This is a Rust reimplementation of the board core of tsumego.js, a
//! solver for Go life-and-death problems.
//!
//! ## Usage
//!
//! - `tsumego-rust` - Show a demo
//! - `tsumego-rust demo` - Play a scripted capture and rewind it
//! - `tsumego-rust show <file>` - Load an SGF problem and print diagnostics

use std::fs;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use tsumego_rust::block::Color;
use tsumego_rust::board::Board;

/// Tsumego-Rust: incremental Go board engine
#[derive(Parser)]
#[command(name = "tsumego-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a scripted capture sequence and rewind it
    Demo,
    /// Load an SGF setup and print the grid, liberty counts and position key
    Show {
        /// Path to an SGF file with AB/AW setup stones
        file: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Show { file }) => {
            let text =
                fs::read_to_string(&file).with_context(|| format!("cannot read {file}"))?;
            let board = Board::from_sgf(&text)?;
            show(&board);
        }
        Some(Commands::Demo) | None => run_demo()?,
    }
    Ok(())
}

fn show(board: &Board) {
    println!("{board}\n");
    println!("liberties:\n{}\n", board.to_libs());
    println!("key: {}", board.hash());
    println!(
        "libs: black {}, white {}",
        board.total_libs(Color::Black),
        board.total_libs(Color::White)
    );
    println!("sgf: {}", board.to_sgf());
}

fn run_demo() -> Result<()> {
    // a white stone with two liberties left; black takes them both
    let mut board = Board::from_rows(5, &["-X-", "XO-", "---"])?;
    println!("start:\n{board}\n");

    let r = board.play(1, 2, Color::Black);
    println!("black at (1, 2) -> {r:?}");
    let r = board.play(2, 1, Color::Black);
    println!("black at (2, 1) -> {r:?} (captures the white stone)\n");
    println!("after the capture:\n{board}\n");
    println!("key: {}", board.hash());

    board.undo();
    board.undo();
    println!("rewound key: {}", board.hash());
    Ok(())
}
