use rand::Rng;

use crate::maze::Maze;

/// Opens `count` randomly chosen closed walls of a finished maze, creating loops.
///
/// The disjoint set is not consulted: the maze is already connected and opening a wall
/// can only add paths. When fewer walls are left than requested, all of them are opened.
/// Returns the number of passages actually opened.
pub fn punch_extra_passages<R: Rng>(maze: &mut Maze, count: usize, rng: &mut R) -> usize {
    let available = maze.walls().len();
    if available < count {
        tracing::warn!(
            "[imperfect] Only {} closed walls left, wanted {} extra passages",
            available,
            count
        );
    }

    let mut opened = 0;
    while opened < count && !maze.walls().is_empty() {
        let idx = rng.random_range(0..maze.walls().len());
        let wall = maze.walls_mut().swap_remove(idx);
        maze.open_passage(wall);
        opened += 1;
    }
    tracing::debug!("[imperfect] Opened {} extra passages", opened);
    opened
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{get_rng, kruskal::randomized_kruskal};
    use crate::maze::MazeKind;

    fn perfect(size: u16, seed: u64) -> Maze {
        let mut maze = Maze::new(size, MazeKind::Imperfect);
        randomized_kruskal(&mut maze, &mut get_rng(Some(seed))).unwrap();
        maze
    }

    #[test]
    fn test_punch_opens_requested_walls() {
        let mut maze = perfect(10, 5);
        let closed_before = maze.walls().len();
        let opened = punch_extra_passages(&mut maze, 10, &mut get_rng(Some(5)));
        assert_eq!(opened, 10);
        assert_eq!(maze.walls().len(), closed_before - 10);
        assert_eq!(maze.num_open_passages(), 99 + 10);
        assert!(maze.is_connected());
    }

    #[test]
    fn test_punch_caps_at_available_walls() {
        let mut maze = perfect(2, 1);
        let opened = punch_extra_passages(&mut maze, 5, &mut get_rng(Some(1)));
        assert_eq!(opened, 1);
        assert!(maze.walls().is_empty());
        assert_eq!(maze.num_open_passages(), 4);
    }
}
