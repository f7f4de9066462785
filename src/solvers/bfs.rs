use std::collections::VecDeque;

use super::SearchOutcome;
use crate::maze::{Grid, Maze};

/// Breadth-first search from the maze's start until the goal is dequeued.
///
/// Cells are marked and given their parent when enqueued, so each one enters the
/// frontier at most once.
pub fn solve_bfs(maze: &Maze) -> SearchOutcome {
    let (start, goal) = (maze.start(), maze.goal());
    let mut parents = Grid::new(maze.size(), maze.size(), None);
    let mut distances: Grid<Option<usize>> = Grid::new(maze.size(), maze.size(), None);

    let mut frontier = VecDeque::from([start]);
    distances[start] = Some(0);
    let mut reached = 1;

    while let Some(current) = frontier.pop_front() {
        if current == goal {
            break;
        }
        let next_distance = distances[current].map_or(0, |d| d + 1);

        for neighbour in maze.get_neighbours(current) {
            if distances[neighbour].is_none() {
                distances[neighbour] = Some(next_distance);
                parents[neighbour] = Some(current);
                reached += 1;
                frontier.push_back(neighbour);
            }
        }
    }

    tracing::debug!(
        "[bfs] Stopped with {} cells still in the frontier",
        frontier.len()
    );

    SearchOutcome {
        parents,
        goal_distance: distances[goal],
        reached,
    }
}
