use std::collections::{BTreeMap, BTreeSet};

use crate::maze::{Cell, Grid, Maze};

/// Capabilities the shared best-first driver needs from a frontier.
pub trait FrontierQueue {
    /// Removes and returns a cell with the lowest priority, or `None` when exhausted.
    fn pop(&mut self) -> Option<Cell>;
    /// Best known distance from the start, `None` while the cell is unreached.
    fn get_dist(&self, cell: Cell) -> Option<usize>;
    /// Records a shorter distance for `cell` and (re)queues it at the matching priority.
    fn update(&mut self, cell: Cell, distance: usize);
    /// Number of cells that have been given a distance so far.
    fn num_reached(&self) -> usize;
}

/// Integer-keyed priority queue that groups equal priorities into one bucket.
///
/// Empty buckets are removed eagerly, so the first key is always the current minimum.
/// Within a bucket cells come out in `(x, y)` order.
#[derive(Debug, Default, Clone)]
pub struct BucketQueue {
    buckets: BTreeMap<usize, BTreeSet<Cell>>,
    len: usize,
}

impl BucketQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of distinct priorities currently queued.
    pub fn num_buckets(&self) -> usize {
        self.buckets.len()
    }

    pub fn min_priority(&self) -> Option<usize> {
        self.buckets.keys().next().copied()
    }

    pub fn push(&mut self, cell: Cell, priority: usize) {
        if self.buckets.entry(priority).or_default().insert(cell) {
            self.len += 1;
        }
    }

    /// Removes `cell` from the bucket at `priority`. Returns whether it was queued there.
    pub fn remove(&mut self, cell: Cell, priority: usize) -> bool {
        let Some(bucket) = self.buckets.get_mut(&priority) else {
            return false;
        };
        let removed = bucket.remove(&cell);
        if bucket.is_empty() {
            self.buckets.remove(&priority);
        }
        if removed {
            self.len -= 1;
        }
        removed
    }

    /// Removes a cell from the lowest bucket, dropping the bucket once it is empty.
    pub fn pop_min(&mut self) -> Option<(usize, Cell)> {
        let mut entry = self.buckets.first_entry()?;
        let priority = *entry.key();
        let cell = entry.get_mut().pop_first();
        if entry.get().is_empty() {
            entry.remove();
        }
        let cell = cell?;
        self.len -= 1;
        Some((priority, cell))
    }
}

/// Frontier ordered by distance from the start alone.
#[derive(Debug, Clone)]
pub struct DijkstraQueue {
    distances: Grid<Option<usize>>,
    buckets: BucketQueue,
    reached: usize,
}

impl DijkstraQueue {
    /// Creates a queue holding only the maze's start cell, at distance 0.
    pub fn new(maze: &Maze) -> Self {
        let mut queue = DijkstraQueue {
            distances: Grid::new(maze.size(), maze.size(), None),
            buckets: BucketQueue::new(),
            reached: 0,
        };
        queue.update(maze.start(), 0);
        queue
    }

    pub fn priority(&self, cell: Cell) -> Option<usize> {
        self.get_dist(cell)
    }

    pub fn buckets(&self) -> &BucketQueue {
        &self.buckets
    }
}

impl FrontierQueue for DijkstraQueue {
    fn pop(&mut self) -> Option<Cell> {
        self.buckets.pop_min().map(|(_, cell)| cell)
    }

    fn get_dist(&self, cell: Cell) -> Option<usize> {
        self.distances.get(cell).copied().flatten()
    }

    fn update(&mut self, cell: Cell, distance: usize) {
        match self.distances[cell].replace(distance) {
            Some(old) => {
                self.buckets.remove(cell, old);
            }
            None => self.reached += 1,
        }
        self.buckets.push(cell, distance);
    }

    fn num_reached(&self) -> usize {
        self.reached
    }
}

/// Frontier ordered by distance plus the Manhattan distance to the goal.
///
/// On a uniform-cost grid the Manhattan distance never overestimates the remaining
/// hops and never drops by more than one per step, so the first time the goal is popped
/// its distance is optimal.
#[derive(Debug, Clone)]
pub struct AStarQueue {
    distances: Grid<Option<usize>>,
    heuristics: Grid<usize>,
    buckets: BucketQueue,
    reached: usize,
}

impl AStarQueue {
    /// Creates a queue holding only the maze's start cell, with every heuristic precomputed.
    pub fn new(maze: &Maze) -> Self {
        let goal = maze.goal();
        let mut queue = AStarQueue {
            distances: Grid::new(maze.size(), maze.size(), None),
            heuristics: Grid::from_fn(maze.size(), maze.size(), |cell| manhattan(cell, goal)),
            buckets: BucketQueue::new(),
            reached: 0,
        };
        queue.update(maze.start(), 0);
        queue
    }

    pub fn heuristic(&self, cell: Cell) -> Option<usize> {
        self.heuristics.get(cell).copied()
    }

    /// Distance plus heuristic, `None` while the cell is unreached.
    pub fn priority(&self, cell: Cell) -> Option<usize> {
        Some(self.get_dist(cell)? + self.heuristic(cell)?)
    }

    pub fn buckets(&self) -> &BucketQueue {
        &self.buckets
    }
}

impl FrontierQueue for AStarQueue {
    fn pop(&mut self) -> Option<Cell> {
        self.buckets.pop_min().map(|(_, cell)| cell)
    }

    fn get_dist(&self, cell: Cell) -> Option<usize> {
        self.distances.get(cell).copied().flatten()
    }

    fn update(&mut self, cell: Cell, distance: usize) {
        let heuristic = self.heuristics[cell];
        match self.distances[cell].replace(distance) {
            Some(old) => {
                self.buckets.remove(cell, old + heuristic);
            }
            None => self.reached += 1,
        }
        self.buckets.push(cell, distance + heuristic);
    }

    fn num_reached(&self) -> usize {
        self.reached
    }
}

/// Manhattan distance between two cells.
pub fn manhattan(a: Cell, b: Cell) -> usize {
    a.0.abs_diff(b.0) as usize + a.1.abs_diff(b.1) as usize
}
