// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line driver: enumerate free polyominoes and print the results.
//!
//! Usage: `polyomino [RANK] [--shapes]`
//!
//! Prints the per-rank fixed / one-sided / free counts for every rank up to
//! RANK (default 8), and the rendered shapes when `--shapes` is given.

use polyomino_search::context::EnumerationContext;
use polyomino_search::geometry::Rank;
use polyomino_search::search::ShapeEnumerator;
use polyomino_search::state::Counter;
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut show_shapes = false;
    let mut target_rank: usize = 8;

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--shapes" | "-s" => show_shapes = true,
            other => match other.parse() {
                Ok(value) => target_rank = value,
                Err(_) => {
                    eprintln!("polyomino: unrecognized argument '{}'", other);
                    eprintln!("usage: polyomino [RANK] [--shapes]");
                    return ExitCode::FAILURE;
                }
            },
        }
    }

    let target = match Rank::try_new(target_rank) {
        Some(target) => target,
        None => {
            eprintln!(
                "polyomino: {}",
                polyomino_search::EnumerationError::RankOutOfRange {
                    requested: target_rank
                }
            );
            return ExitCode::FAILURE;
        }
    };

    let mut ctx = EnumerationContext::new(target);
    ShapeEnumerator::new(target).run(&mut ctx);

    for rank in 1..=target.as_usize() {
        println!(
            "rank {:2}: {} free ({} one-sided, {} fixed)",
            rank,
            ctx.statistics.get(Counter::FreeShapes, rank),
            ctx.statistics.get(Counter::OneSidedShapes, rank),
            ctx.statistics.get(Counter::FixedShapes, rank),
        );
        if show_shapes {
            for shape in ctx.registry.shapes(rank as u8) {
                println!();
                println!("{}", shape);
            }
            println!();
        }
    }

    ExitCode::SUCCESS
}
