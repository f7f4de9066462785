use std::str::FromStr;
use std::time::{Duration, Instant};

mod best_first;
mod bfs;
pub mod queue;

pub use best_first::search_with_queue;
use bfs::solve_bfs;
use queue::{AStarQueue, DijkstraQueue};

use crate::maze::{Cell, Grid, Maze};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Solver {
    Bfs,
    Dijkstra,
    AStar,
}

impl Solver {
    pub const ALL: [Solver; 3] = [Solver::Bfs, Solver::Dijkstra, Solver::AStar];
}

impl std::fmt::Display for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Solver::Bfs => write!(f, "Breadth-First Search"),
            Solver::Dijkstra => write!(f, "Dijkstra"),
            Solver::AStar => write!(f, "A* with Manhattan distance heuristic"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown solver `{0}` (expected `bfs`, `dijkstra` or `astar`)")]
pub struct ParseSolverError(pub String);

impl FromStr for Solver {
    type Err = ParseSolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" | "breadth-first" => Ok(Solver::Bfs),
            "dijkstra" => Ok(Solver::Dijkstra),
            "astar" | "a-star" | "a*" => Ok(Solver::AStar),
            _ => Err(ParseSolverError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SolveError {
    #[error("{solver} exhausted its frontier without reaching the goal {goal:?}")]
    GoalUnreachable { solver: Solver, goal: Cell },
    #[error("parent chain is broken at {at:?}")]
    BrokenPath { at: Cell },
}

/// What a search leaves behind for path reconstruction.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Predecessor of every reached cell; `None` for the start and unreached cells.
    pub parents: Grid<Option<Cell>>,
    /// Distance recorded for the goal, `None` if it was never reached.
    pub goal_distance: Option<usize>,
    /// Number of cells that were given a distance.
    pub reached: usize,
}

/// A traced path together with the cost of finding it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub solver: Solver,
    /// Cells from the start to the goal, both included.
    pub path: Vec<Cell>,
    /// Wall-clock time of the search loop.
    pub elapsed: Duration,
    /// Cells the search never reached.
    pub skipped_nodes: usize,
    /// Cells the search reached, `num_cells - skipped_nodes`.
    pub visited_nodes: usize,
}

fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let timer = Instant::now();
    let result = f();
    (result, timer.elapsed())
}

/// Runs `solver` from the bottom-left to the top-right corner of `maze`.
///
/// Queue construction happens before the clock starts; only the search loop is timed.
pub fn solve_maze(maze: &Maze, solver: Solver) -> Result<Solution, SolveError> {
    let (outcome, elapsed) = match solver {
        Solver::Bfs => timed(|| solve_bfs(maze)),
        Solver::Dijkstra => {
            let mut queue = DijkstraQueue::new(maze);
            timed(|| search_with_queue(maze, &mut queue))
        }
        Solver::AStar => {
            let mut queue = AStarQueue::new(maze);
            timed(|| search_with_queue(maze, &mut queue))
        }
    };

    let goal = maze.goal();
    let Some(goal_distance) = outcome.goal_distance else {
        tracing::error!("[solver] {} did not reach the goal", solver);
        return Err(SolveError::GoalUnreachable { solver, goal });
    };
    let path = trace_path(&outcome.parents, maze.start(), goal)?;
    if path.len() != goal_distance + 1 {
        return Err(SolveError::BrokenPath { at: goal });
    }

    let solution = Solution {
        solver,
        path,
        elapsed,
        skipped_nodes: maze.num_cells() - outcome.reached,
        visited_nodes: outcome.reached,
    };
    tracing::info!(
        "[solver] {}: path length {}, {} skipped nodes, took {:?}",
        solver,
        solution.path.len(),
        solution.skipped_nodes,
        solution.elapsed
    );
    Ok(solution)
}

/// Walks the parent chain back from `goal` to `start` and returns it start-first.
pub fn trace_path(
    parents: &Grid<Option<Cell>>,
    start: Cell,
    goal: Cell,
) -> Result<Vec<Cell>, SolveError> {
    let mut path = vec![goal];
    let mut current = goal;
    while current != start {
        let Some(parent) = parents.get(current).copied().flatten() else {
            return Err(SolveError::BrokenPath { at: current });
        };
        path.push(parent);
        current = parent;
        // A chain longer than the grid must contain a cycle
        if path.len() > parents.len() {
            return Err(SolveError::BrokenPath { at: current });
        }
    }
    path.reverse();
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::generate_maze;
    use crate::maze::{Direction, MazeKind, Wall};
    use proptest::prelude::*;

    fn two_by_two() -> Maze {
        let mut maze = Maze::new(2, MazeKind::Perfect);
        maze.open_passage(Wall::new((0, 0), Direction::Right));
        maze.open_passage(Wall::new((0, 0), Direction::Up));
        maze.open_passage(Wall::new((1, 0), Direction::Up));
        maze
    }

    fn assert_valid_path(maze: &Maze, path: &[Cell]) {
        assert_eq!(path.first(), Some(&maze.start()));
        assert_eq!(path.last(), Some(&maze.goal()));
        for pair in path.windows(2) {
            assert!(
                maze.get_neighbours(pair[0]).any(|c| c == pair[1]),
                "{:?} and {:?} are not connected",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_two_by_two_scenario() {
        let maze = two_by_two();
        for solver in Solver::ALL {
            let solution = solve_maze(&maze, solver).unwrap();
            assert_eq!(solution.path, vec![(0, 0), (1, 0), (1, 1)]);
            assert_eq!(solution.solver, solver);
        }
        assert_eq!(solve_maze(&maze, Solver::Bfs).unwrap().skipped_nodes, 0);
    }

    #[test]
    fn test_unreachable_goal_is_an_error() {
        let mut maze = Maze::new(2, MazeKind::Perfect);
        maze.open_passage(Wall::new((0, 0), Direction::Right));
        for solver in Solver::ALL {
            assert_eq!(
                solve_maze(&maze, solver),
                Err(SolveError::GoalUnreachable {
                    solver,
                    goal: (1, 1)
                })
            );
        }
    }

    #[test]
    fn test_trace_path_detects_broken_chain() {
        let mut parents = Grid::new(2, 2, None);
        parents[(1, 1)] = Some((1, 0));
        assert_eq!(
            trace_path(&parents, (0, 0), (1, 1)),
            Err(SolveError::BrokenPath { at: (1, 0) })
        );

        parents[(1, 0)] = Some((1, 1));
        assert!(trace_path(&parents, (0, 0), (1, 1)).is_err());
    }

    #[test]
    fn test_single_cell_path() {
        let maze = generate_maze(1, MazeKind::Perfect, Some(0)).unwrap();
        let solution = solve_maze(&maze, Solver::AStar).unwrap();
        assert_eq!(solution.path, vec![(0, 0)]);
    }

    #[test]
    fn test_parse_solver() {
        assert_eq!("BFS".parse::<Solver>(), Ok(Solver::Bfs));
        assert_eq!("a*".parse::<Solver>(), Ok(Solver::AStar));
        assert_eq!("dijkstra".parse::<Solver>(), Ok(Solver::Dijkstra));
        assert_eq!(
            "greedy".parse::<Solver>(),
            Err(ParseSolverError("greedy".to_string()))
        );
    }

    #[test]
    fn test_repeated_runs_are_identical() {
        let maze = generate_maze(30, MazeKind::Imperfect, Some(9)).unwrap();
        let again = generate_maze(30, MazeKind::Imperfect, Some(9)).unwrap();
        for solver in Solver::ALL {
            let a = solve_maze(&maze, solver).unwrap();
            let b = solve_maze(&again, solver).unwrap();
            assert_eq!(a.path, b.path);
            assert_eq!(a.skipped_nodes, b.skipped_nodes);
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_solvers_agree_on_length(
            size in 2u16..30,
            seed in any::<u64>(),
            imperfect in any::<bool>(),
        ) {
            let kind = if imperfect { MazeKind::Imperfect } else { MazeKind::Perfect };
            let maze = generate_maze(size, kind, Some(seed)).unwrap();
            let bfs = solve_maze(&maze, Solver::Bfs).unwrap();
            let dijkstra = solve_maze(&maze, Solver::Dijkstra).unwrap();
            let astar = solve_maze(&maze, Solver::AStar).unwrap();

            prop_assert_eq!(bfs.path.len(), dijkstra.path.len());
            prop_assert_eq!(dijkstra.path.len(), astar.path.len());
            prop_assert!(astar.visited_nodes <= dijkstra.visited_nodes);
            prop_assert!(astar.skipped_nodes >= dijkstra.skipped_nodes);
            for solution in [&bfs, &dijkstra, &astar] {
                prop_assert_eq!(
                    solution.visited_nodes + solution.skipped_nodes,
                    maze.num_cells()
                );
                assert_valid_path(&maze, &solution.path);
            }
            if kind == MazeKind::Perfect {
                // a spanning tree has exactly one path
                prop_assert_eq!(&bfs.path, &dijkstra.path);
                prop_assert_eq!(&dijkstra.path, &astar.path);
            }
        }
    }
}
