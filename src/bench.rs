use std::io::Write;
use std::time::Duration;

use crossterm::{
    queue,
    style::{self, Attribute, Color, Stylize},
};

use crate::generators::{MazeError, generate_maze};
use crate::maze::MazeKind;
use crate::solvers::{SolveError, Solver, solve_maze};

#[derive(Debug, thiserror::Error)]
pub enum BenchError {
    #[error("repetitions must be at least 1")]
    NoRepetitions,
    #[error(transparent)]
    Maze(#[from] MazeError),
    #[error(transparent)]
    Solve(#[from] SolveError),
}

/// Which mazes to build and which solvers to time on them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    /// Side lengths to generate, one maze per size and kind.
    pub sizes: Vec<u16>,
    /// Runs of each solver on the same maze; timings are averaged.
    pub repetitions: usize,
    pub kinds: Vec<MazeKind>,
    pub solvers: Vec<Solver>,
    /// Base seed. Maze `i` of the run uses `seed + i`. `None` draws fresh entropy.
    pub seed: Option<u64>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            sizes: vec![10, 50, 100, 500],
            repetitions: 5,
            kinds: MazeKind::ALL.to_vec(),
            solvers: Solver::ALL.to_vec(),
            seed: None,
        }
    }
}

/// Averaged measurements of one solver on one maze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchResult {
    pub kind: MazeKind,
    pub size: u16,
    pub solver: Solver,
    pub runs: usize,
    pub mean_elapsed: Duration,
    pub path_len: usize,
    pub skipped_nodes: usize,
    pub visited_nodes: usize,
}

/// Generates every configured maze once and times each solver against it.
pub fn run_benchmark(config: &BenchConfig) -> Result<Vec<BenchResult>, BenchError> {
    if config.repetitions == 0 {
        return Err(BenchError::NoRepetitions);
    }

    let mut results =
        Vec::with_capacity(config.kinds.len() * config.sizes.len() * config.solvers.len());
    let mazes = config
        .kinds
        .iter()
        .flat_map(|&kind| config.sizes.iter().map(move |&size| (kind, size)));

    for (index, (kind, size)) in mazes.enumerate() {
        let seed = config.seed.map(|s| s.wrapping_add(index as u64));
        tracing::info!("[bench] Creating {} of size {}", kind, size);
        let maze = generate_maze(size, kind, seed)?;

        for &solver in &config.solvers {
            let mut total = Duration::ZERO;
            let mut last = None;
            for _ in 0..config.repetitions {
                let solution = solve_maze(&maze, solver)?;
                total += solution.elapsed;
                last = Some(solution);
            }
            let Some(solution) = last else {
                continue;
            };
            results.push(BenchResult {
                kind,
                size,
                solver,
                runs: config.repetitions,
                mean_elapsed: total / config.repetitions as u32,
                path_len: solution.path.len(),
                skipped_nodes: solution.skipped_nodes,
                visited_nodes: solution.visited_nodes,
            });
        }
    }
    Ok(results)
}

const SOLVER_COLUMN: usize = 38;

/// Prints the results as a table, one block per maze.
pub fn print_report<W: Write>(out: &mut W, results: &[BenchResult]) -> std::io::Result<()> {
    let mut current = None;
    for result in results {
        if current != Some((result.kind, result.size)) {
            current = Some((result.kind, result.size));
            queue!(
                out,
                style::PrintStyledContent(
                    format!("\r\n{} of size {}\r\n", result.kind, result.size)
                        .with(Color::Yellow)
                        .attribute(Attribute::Bold)
                ),
                style::PrintStyledContent(
                    format!(
                        "  {:<width$} {:>14} {:>12} {:>14} {:>14}\r\n",
                        "Algorithm",
                        "Mean time",
                        "Path length",
                        "Visited nodes",
                        "Skipped nodes",
                        width = SOLVER_COLUMN
                    )
                    .with(Color::Cyan)
                ),
            )?;
        }
        queue!(
            out,
            style::Print(format!(
                "  {:<width$} {:>14} {:>12} {:>14} {:>14}\r\n",
                result.solver.to_string(),
                format!("{:.3?}", result.mean_elapsed),
                result.path_len,
                result.visited_nodes,
                result.skipped_nodes,
                width = SOLVER_COLUMN
            )),
        )?;
    }
    out.flush()
}
