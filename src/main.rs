use std::io::stdout;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use mazebench::{
    bench::{BenchConfig, print_report, run_benchmark},
    logging::init_logging,
    maze::MazeKind,
    solvers::Solver,
};

/// Generate Kruskal mazes and time BFS, Dijkstra and A* on them.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Maze side lengths, comma separated
    #[arg(short, long, value_delimiter = ',', default_values_t = [10u16, 50, 100, 500])]
    sizes: Vec<u16>,

    /// Runs of each solver per maze
    #[arg(short, long, default_value_t = 5)]
    repetitions: usize,

    /// Maze kinds to build (perfect, imperfect); all when omitted
    #[arg(short, long, value_delimiter = ',')]
    kinds: Vec<MazeKind>,

    /// Solvers to time (bfs, dijkstra, astar); all when omitted
    #[arg(long, value_delimiter = ',')]
    solvers: Vec<Solver>,

    /// Base seed for reproducible mazes
    #[arg(long)]
    seed: Option<u64>,

    /// Directory for the log file
    #[arg(long, default_value = ".")]
    log_dir: PathBuf,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

impl From<Args> for BenchConfig {
    fn from(args: Args) -> Self {
        let defaults = BenchConfig::default();
        BenchConfig {
            sizes: args.sizes,
            repetitions: args.repetitions,
            kinds: if args.kinds.is_empty() {
                defaults.kinds
            } else {
                args.kinds
            },
            solvers: if args.solvers.is_empty() {
                defaults.solvers
            } else {
                args.solvers
            },
            seed: args.seed,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    std::fs::create_dir_all(&args.log_dir)
        .with_context(|| format!("creating log directory {}", args.log_dir.display()))?;
    let _guard = init_logging(&args.log_dir, args.verbose).context("initializing logging")?;

    let config = BenchConfig::from(args);
    tracing::info!("Starting benchmark with {:?}", config);

    let results = run_benchmark(&config).context("benchmark failed")?;
    print_report(&mut stdout(), &results).context("writing report")?;

    tracing::info!("Benchmark finished with {} results", results.len());
    Ok(())
}
