use rand::{SeedableRng, rngs::StdRng};

mod disjoint_set;
mod imperfect;
mod kruskal;

pub use disjoint_set::DisjointSet;
use imperfect::punch_extra_passages;
use kruskal::randomized_kruskal;

use crate::maze::{Maze, MazeKind};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MazeError {
    #[error("a maze needs at least one cell")]
    EmptyMaze,
    /// All candidate walls were scanned but the cells still form several components.
    #[error("maze generation ran out of walls with {remaining_sets} disconnected regions left")]
    Disconnected { remaining_sets: usize },
}

/// Get a random number generator, optionally seeded for reproducibility.
pub(crate) fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Number of extra passages an imperfect maze gets on top of its spanning tree.
pub fn extra_passages(size: u16) -> usize {
    let cells = size as usize * size as usize;
    (cells / 10).max(5)
}

/// Generates a `size` x `size` maze of the given kind.
///
/// The same seed, size and kind always produce the same maze. Without a seed the
/// generator draws from the OS entropy source.
pub fn generate_maze(size: u16, kind: MazeKind, seed: Option<u64>) -> Result<Maze, MazeError> {
    if size == 0 {
        return Err(MazeError::EmptyMaze);
    }
    let mut rng = get_rng(seed);
    let mut maze = Maze::new(size, kind);
    randomized_kruskal(&mut maze, &mut rng)?;
    if kind == MazeKind::Imperfect {
        punch_extra_passages(&mut maze, extra_passages(size), &mut rng);
    }
    tracing::info!(
        "[generate] Created {} of size {} with {} open passages",
        kind,
        size,
        maze.num_open_passages()
    );
    Ok(maze)
}
