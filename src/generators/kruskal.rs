use rand::{Rng, seq::SliceRandom};

use super::{DisjointSet, MazeError};
use crate::maze::{Maze, Wall};

/// Carves a perfect maze by scanning the shuffled candidate walls and opening each one
/// that joins two separate regions.
///
/// Walls that stay closed are kept on the maze in scan order, followed by the walls that
/// were never reached once the spanning tree was complete.
pub fn randomized_kruskal<R: Rng>(maze: &mut Maze, rng: &mut R) -> Result<(), MazeError> {
    let size = maze.size() as usize;
    let total_cells = size * size;
    let mut sets = DisjointSet::new(total_cells);

    let mut walls = maze.candidate_walls();
    walls.shuffle(rng);

    // Convert cell coordinates to DisjointSet indices
    let flat = |(x, y): (u16, u16)| y as usize * size + x as usize;

    let progress_step = (total_cells / 10).max(1);
    let mut closed: Vec<Wall> = Vec::with_capacity(walls.len());
    let mut remaining = walls.into_iter();

    while sets.num_sets() > 1 {
        let Some(wall) = remaining.next() else {
            tracing::warn!(
                "[kruskal] Ran out of walls with {} regions left",
                sets.num_sets()
            );
            return Err(MazeError::Disconnected {
                remaining_sets: sets.num_sets(),
            });
        };
        let Some(other) = wall.other() else {
            closed.push(wall);
            continue;
        };
        let (a, b) = (flat(wall.cell), flat(other));

        if sets.same_set(a, b) {
            // Would close a loop
            closed.push(wall);
            continue;
        }

        maze.open_passage(wall);
        sets.union(a, b);

        let merged = total_cells - sets.num_sets();
        if merged % progress_step == 0 {
            tracing::debug!(
                "[kruskal] Progress {}/{} passages carved",
                merged,
                total_cells - 1
            );
        }
    }

    closed.extend(remaining);
    maze.set_walls(closed);
    Ok(())
}
