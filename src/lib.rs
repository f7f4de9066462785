//! Kruskal maze generation and a comparison of breadth-first search, Dijkstra and A*
//! on bucketed priority queues.
//!
//! ```
//! use mazebench::{generators::generate_maze, maze::MazeKind, solvers::{Solver, solve_maze}};
//!
//! let maze = generate_maze(20, MazeKind::Imperfect, Some(7)).unwrap();
//! let solution = solve_maze(&maze, Solver::AStar).unwrap();
//! assert_eq!(solution.path.first(), Some(&(0, 0)));
//! assert_eq!(solution.path.last(), Some(&(19, 19)));
//! ```

pub mod bench;
pub mod generators;
pub mod logging;
pub mod maze;
pub mod solvers;
