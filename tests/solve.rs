use std::fmt::Write;

use anyhow::{ensure, Context};
use npuzzle_solver::solve::{solve, Limits, Outcome, Strategy};
use npuzzle_solver::Board;

use crate::common::*;

mod common;

fn main() {
    run_tests("solve", |content| {
        let input = content
            .split_once(SEPARATOR)
            .map_or(content, |(input, _)| input)
            .trim();
        let board = input.parse::<Board>().context("Invalid puzzle")?;

        let mut got = format!("{input}\n\n");
        let mut lens = Vec::new();
        for strategy in [Strategy::BreadthFirst, Strategy::BestFirst] {
            let outcome = solve(&board, strategy, &Limits::default(), || {})
                .with_context(|| format!("Search failed with {strategy}"))?;
            if let Outcome::Solved(solution) = &outcome {
                replay(&board, &solution.moves)
                    .with_context(|| format!("Invalid solution from {strategy}"))?;
            }
            lens.push(outcome.moves().map(|moves| moves.len()));
            write!(got, "{SEPARATOR}{strategy}\n{outcome}").unwrap();
        }
        ensure!(lens[0] == lens[1], "Strategies disagree on length: {lens:?}");

        Ok(got)
    });
}
