use std::fs;
use std::io::Write as _;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use console::{style, Term};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use npuzzle_solver::solve::{self, Limits, Outcome, Strategy};
use npuzzle_solver::{Board, Tile, BLANK};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Puzzle file: the size k followed by k*k tiles, `0` for the blank
    input: PathBuf,

    /// Answer file to write
    output: PathBuf,

    /// Search strategy, `bfs` or `astar`
    #[clap(short, long, default_value_t = Strategy::BestFirst)]
    strategy: Strategy,

    /// Abort once this many search nodes have been created
    #[clap(long)]
    max_nodes: Option<usize>,

    /// Hide the progress spinner
    #[clap(short, long)]
    quiet: bool,

    /// Replay the solution on stderr
    #[clap(long)]
    show: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let input = fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    let board = input
        .parse::<Board>()
        .context("Failed to parse the puzzle")?;

    let pb = if args.quiet {
        ProgressBar::hidden()
    } else {
        ProgressBar::new_spinner()
    };
    pb.set_style(ProgressStyle::with_template(
        "{spinner} [{elapsed}] {human_pos} nodes expanded ({per_sec})",
    )?);
    pb.enable_steady_tick(Duration::from_millis(100));

    let limits = Limits {
        max_nodes: args.max_nodes,
    };
    let outcome = solve::solve(&board, args.strategy, &limits, || pb.inc(1));
    pb.finish_and_clear();
    let outcome = outcome.with_context(|| format!("Failed to solve with {}", args.strategy))?;

    match &outcome {
        Outcome::Solved(solution) => info!(
            "Solved in {} moves with {}, {:?}",
            solution.moves.len(),
            args.strategy,
            solution.stats,
        ),
        Outcome::Unsolvable => info!("No solution"),
    }

    // Only touched once the search has an answer.
    let mut output = fs::File::create(&args.output)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;
    write!(output, "{outcome}")
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    if args.show {
        if let Some(moves) = outcome.moves() {
            replay(&board, moves)?;
        }
    }

    Ok(())
}

fn replay(start: &Board, moves: &[Tile]) -> Result<()> {
    let term = Term::stderr();
    let mut board = start.clone();
    term.write_line(&render(&board, None))?;
    for (&tile, i) in moves.iter().zip(1..) {
        board = board
            .slide_tile(tile)
            .with_context(|| format!("Failed to perform step {i}: {tile}"))?;
        term.write_line(&format!("{} {tile}", style(format!("#{i}")).dim()))?;
        term.write_line(&render(&board, Some(tile)))?;
    }
    Ok(())
}

fn render(board: &Board, moved: Option<Tile>) -> String {
    board.render_with(|tile, label| {
        if Some(tile) == moved {
            style(label).green().bold().to_string()
        } else if tile == BLANK {
            style(label).dim().to_string()
        } else {
            label
        }
    })
}
