use anyhow::{Context, Result};
use clap::Parser;
use peg_solitaire::engine::Board;
use peg_solitaire::logging;
use peg_solitaire::report::{write_solution, ReportOrder};
use peg_solitaire::solver::solve_dfs;
use peg_solitaire::utils::board_from_text;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::warn;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Solves English peg solitaire and prints one line per jump"
)]
struct Args {
    /// Order in which the solution record is printed
    #[arg(long, value_enum, default_value_t = ReportOrder::Lifo)]
    order: ReportOrder,

    /// Start from the pegs in this file instead of the standard board
    /// ('o' = peg, '.' or space = no peg, one row per line)
    #[arg(long)]
    board: Option<PathBuf>,

    /// Also print the starting and final boards
    #[arg(long)]
    show_board: bool,
}

fn read_board_file(path: &PathBuf) -> Result<Board> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read board file {}", path.display()))?;
    board_from_text(&content).with_context(|| format!("invalid board in {}", path.display()))
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    logging::init();
    let args = Args::parse();

    let start = match &args.board {
        Some(path) => read_board_file(path)?,
        None => Board::standard(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.show_board {
        writeln!(out, "{start}\n")?;
    }

    match solve_dfs(&start) {
        Some(solution) => {
            write_solution(&mut out, &solution, args.order)?;
            if args.show_board {
                let end = solution.replay(&start)?;
                writeln!(out, "\n{end}")?;
            }
        }
        None => warn!(pegs = start.peg_count(), "no solution exists for this board"),
    }

    Ok(())
}
