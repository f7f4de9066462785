use super::SearchOutcome;
use super::queue::FrontierQueue;
use crate::maze::{Grid, Maze};

/// Best-first search from the maze's start to its goal over any [`FrontierQueue`].
///
/// Driven by a [`super::queue::DijkstraQueue`] this is Dijkstra's algorithm; driven by a
/// [`super::queue::AStarQueue`] it is A*. Every passage costs one step.
pub fn search_with_queue<Q: FrontierQueue>(maze: &Maze, queue: &mut Q) -> SearchOutcome {
    let goal = maze.goal();
    let mut parents = Grid::new(maze.size(), maze.size(), None);

    while let Some(current) = queue.pop() {
        if current == goal {
            break;
        }
        let Some(distance) = queue.get_dist(current) else {
            continue;
        };
        let new_distance = distance + 1;

        for neighbour in maze.get_neighbours(current) {
            if queue
                .get_dist(neighbour)
                .is_none_or(|known| new_distance < known)
            {
                queue.update(neighbour, new_distance);
                parents[neighbour] = Some(current);
            }
        }
    }

    if queue.get_dist(goal).is_none() {
        tracing::debug!("[best-first] Queue exhausted before reaching {:?}", goal);
    }

    SearchOutcome {
        parents,
        goal_distance: queue.get_dist(goal),
        reached: queue.num_reached(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::{Direction, MazeKind, Wall};
    use crate::solvers::queue::{AStarQueue, DijkstraQueue};

    /// A 3x3 maze with a loop around the centre column.
    fn looped_maze() -> Maze {
        let mut maze = Maze::new(3, MazeKind::Imperfect);
        for (cell, direction) in [
            ((0, 0), Direction::Right),
            ((1, 0), Direction::Right),
            ((2, 0), Direction::Up),
            ((2, 1), Direction::Up),
            ((0, 0), Direction::Up),
            ((0, 1), Direction::Up),
            ((0, 2), Direction::Right),
            ((1, 2), Direction::Right),
            ((1, 1), Direction::Up),
        ] {
            maze.open_passage(Wall::new(cell, direction));
        }
        maze
    }

    #[test]
    fn test_dijkstra_goal_distance() {
        let maze = looped_maze();
        let outcome = search_with_queue(&maze, &mut DijkstraQueue::new(&maze));
        assert_eq!(outcome.goal_distance, Some(4));
        assert_eq!(outcome.parents[(0, 0)], None);
        assert!(outcome.parents[(2, 2)].is_some());
    }

    #[test]
    fn test_astar_matches_dijkstra_distance() {
        let maze = looped_maze();
        let dijkstra = search_with_queue(&maze, &mut DijkstraQueue::new(&maze));
        let astar = search_with_queue(&maze, &mut AStarQueue::new(&maze));
        assert_eq!(astar.goal_distance, dijkstra.goal_distance);
        assert!(astar.reached <= dijkstra.reached);
    }

    #[test]
    fn test_unreachable_goal_leaves_no_distance() {
        let mut maze = Maze::new(3, MazeKind::Perfect);
        maze.open_passage(Wall::new((0, 0), Direction::Right));
        let outcome = search_with_queue(&maze, &mut DijkstraQueue::new(&maze));
        assert_eq!(outcome.goal_distance, None);
        assert_eq!(outcome.reached, 2);
    }
}
