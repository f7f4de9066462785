use std::fmt;

/// A cell coordinate `(x, y)` in the maze, with `(0, 0)` in the bottom-left corner.
pub type Cell = (u16, u16);

/// The two passage directions stored per cell. Left and down passages are read from the
/// neighbouring cell's right and up bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Right,
    Up,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Right, Direction::Up];

    /// The cell on the other side of a passage leaving `from` in this direction.
    /// Returns `None` when the step would overflow the coordinate type.
    pub fn step(self, from: Cell) -> Option<Cell> {
        match self {
            Direction::Right => from.0.checked_add(1).map(|x| (x, from.1)),
            Direction::Up => from.1.checked_add(1).map(|y| (from.0, y)),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Right => write!(f, "right"),
            Direction::Up => write!(f, "up"),
        }
    }
}

/// Open passages leaving a cell to the right and upwards.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Connection {
    pub right: bool,
    pub up: bool,
}

impl Connection {
    pub fn is_open(&self, direction: Direction) -> bool {
        match direction {
            Direction::Right => self.right,
            Direction::Up => self.up,
        }
    }

    pub fn open(&mut self, direction: Direction) {
        match direction {
            Direction::Right => self.right = true,
            Direction::Up => self.up = true,
        }
    }
}

/// A candidate passage between `cell` and its neighbour in `direction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Wall {
    pub cell: Cell,
    pub direction: Direction,
}

impl Wall {
    pub fn new(cell: Cell, direction: Direction) -> Self {
        Wall { cell, direction }
    }

    /// The cell on the far side of the wall.
    pub fn other(&self) -> Option<Cell> {
        self.direction.step(self.cell)
    }
}

impl fmt::Display for Wall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})-{}", self.cell.0, self.cell.1, self.direction)
    }
}
