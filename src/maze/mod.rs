pub mod cell;
pub mod grid;

use std::fmt;
use std::str::FromStr;

pub use cell::{Cell, Connection, Direction, Wall};
pub use grid::Grid;

/// Whether a maze is a spanning tree or has extra passages punched through it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MazeKind {
    /// Exactly one path between any two cells.
    Perfect,
    /// A perfect maze with extra open passages, so some cells have several paths.
    Imperfect,
}

impl MazeKind {
    pub const ALL: [MazeKind; 2] = [MazeKind::Perfect, MazeKind::Imperfect];
}

impl fmt::Display for MazeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MazeKind::Perfect => write!(f, "Perfect Maze"),
            MazeKind::Imperfect => write!(f, "Imperfect Maze"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown maze kind `{0}` (expected `perfect` or `imperfect`)")]
pub struct ParseMazeKindError(pub String);

impl FromStr for MazeKind {
    type Err = ParseMazeKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "perfect" => Ok(MazeKind::Perfect),
            "imperfect" => Ok(MazeKind::Imperfect),
            _ => Err(ParseMazeKindError(s.to_string())),
        }
    }
}

/// A square maze where each cell stores only its right and up passages.
///
/// The left passage of a cell is the right passage of the cell to its left, and the down
/// passage is the up passage of the cell below, so every edge is stored exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    connections: Grid<Connection>,
    walls: Vec<Wall>,
    size: u16,
    kind: MazeKind,
}

impl Maze {
    /// Creates a maze of the given side length with every passage closed and no candidate walls.
    pub(crate) fn new(size: u16, kind: MazeKind) -> Self {
        Maze {
            connections: Grid::new(size, size, Connection::default()),
            walls: Vec::new(),
            size,
            kind,
        }
    }

    /// Returns the side length of the maze in cells.
    pub fn size(&self) -> u16 {
        self.size
    }

    pub fn kind(&self) -> MazeKind {
        self.kind
    }

    /// Total number of cells.
    pub fn num_cells(&self) -> usize {
        self.connections.len()
    }

    /// The bottom-left cell every search starts from.
    pub fn start(&self) -> Cell {
        (0, 0)
    }

    /// The top-right cell every search looks for.
    pub fn goal(&self) -> Cell {
        let last = self.size.saturating_sub(1);
        (last, last)
    }

    /// Checks if the given coordinate is within the bounds of the maze.
    pub fn is_in_bounds(&self, coord: Cell) -> bool {
        self.connections.is_in_bounds(coord)
    }

    /// Returns the stored passages of a cell, or `None` when it is out of bounds.
    pub fn connection(&self, coord: Cell) -> Option<Connection> {
        self.connections.get(coord).copied()
    }

    /// Read access to the passage grid for renderers.
    pub fn connections(&self) -> &Grid<Connection> {
        &self.connections
    }

    /// Walls that are still closed, in the order generation left them.
    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    /// Checks whether the passage leaving `from` in `direction` is open.
    /// Out-of-bounds cells and passages leaving the grid are always closed.
    pub fn is_open(&self, from: Cell, direction: Direction) -> bool {
        self.connection(from)
            .is_some_and(|connection| connection.is_open(direction))
    }

    /// Checks whether `wall` joins two cells of this maze.
    pub fn contains_wall(&self, wall: &Wall) -> bool {
        self.is_in_bounds(wall.cell) && wall.other().is_some_and(|c| self.is_in_bounds(c))
    }

    /// Opens the passage behind `wall`.
    ///
    /// # Panics
    /// If the wall leaves the grid.
    pub(crate) fn open_passage(&mut self, wall: Wall) {
        if !self.contains_wall(&wall) {
            panic!("Cannot open wall {} outside a {}x{} maze", wall, self.size, self.size);
        }
        self.connections[wall.cell].open(wall.direction);
    }

    pub(crate) fn set_walls(&mut self, walls: Vec<Wall>) {
        self.walls = walls;
    }

    pub(crate) fn walls_mut(&mut self) -> &mut Vec<Wall> {
        &mut self.walls
    }

    /// Every candidate wall of the grid, right then up for each cell, row by row.
    /// Walls on the outer boundary do not exist and are never produced.
    pub fn candidate_walls(&self) -> Vec<Wall> {
        let size = self.size;
        (0..size)
            .flat_map(|y| (0..size).map(move |x| (x, y)))
            .flat_map(|(x, y)| {
                [
                    (x + 1 < size).then(|| Wall::new((x, y), Direction::Right)),
                    (y + 1 < size).then(|| Wall::new((x, y), Direction::Up)),
                ]
            })
            .flatten()
            .collect()
    }

    /// Iterates over every open passage as a wall that has been removed.
    pub fn open_passages(&self) -> impl Iterator<Item = Wall> + '_ {
        self.connections.iter().flat_map(|(coord, connection)| {
            Direction::ALL
                .into_iter()
                .filter(move |&direction| connection.is_open(direction))
                .map(move |direction| Wall::new(coord, direction))
        })
    }

    pub fn num_open_passages(&self) -> usize {
        self.open_passages().count()
    }

    /// Get the cells reachable from `coord` through one open passage, in the order
    /// right, up, left, down. Out-of-bounds cells have no neighbours.
    pub fn get_neighbours(&self, coord: Cell) -> impl Iterator<Item = Cell> + use<> {
        let mut neighbours = Vec::with_capacity(4);
        if let Some(connection) = self.connection(coord) {
            let (x, y) = coord;
            if connection.right {
                neighbours.push((x + 1, y));
            }
            if connection.up {
                neighbours.push((x, y + 1));
            }
            if x > 0 && self.is_open((x - 1, y), Direction::Right) {
                neighbours.push((x - 1, y));
            }
            if y > 0 && self.is_open((x, y - 1), Direction::Up) {
                neighbours.push((x, y - 1));
            }
        }
        neighbours.into_iter()
    }

    /// Checks whether every cell can be reached from the start.
    pub fn is_connected(&self) -> bool {
        if self.connections.is_empty() {
            return true;
        }
        let mut seen = Grid::new(self.size, self.size, false);
        let mut stack = vec![self.start()];
        seen[self.start()] = true;
        let mut count = 1;
        while let Some(current) = stack.pop() {
            for next in self.get_neighbours(current) {
                if !seen[next] {
                    seen[next] = true;
                    count += 1;
                    stack.push(next);
                }
            }
        }
        count == self.num_cells()
    }
}
