use std::path::Path;
use std::time::Instant;

use anyhow::Context;
use mazebench::{
    generators::generate_maze,
    logging::init_logging,
    maze::MazeKind,
    solvers::{Solver, solve_maze},
};

/// Usage: profile [size] [solver] [iterations]
fn main() -> anyhow::Result<()> {
    let _guard = init_logging(Path::new("."), false).context("initializing logging")?;

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let size = args
        .next()
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(500);
    let solver = match args.next() {
        Some(name) => name.parse::<Solver>()?,
        None => Solver::AStar,
    };
    let num_iters = args
        .next()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(10);

    let maze = generate_maze(size, MazeKind::Imperfect, Some(0)).context("generating maze")?;
    let timer = Instant::now();
    for _ in 0..num_iters {
        solve_maze(&maze, solver)?;
    }
    println!(
        "{} on a {}x{} maze: {} runs in {:?}",
        solver,
        size,
        size,
        num_iters,
        timer.elapsed()
    );
    Ok(())
}
