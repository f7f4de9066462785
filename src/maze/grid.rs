/// Dense row-major storage of one value per cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    data: Box<[T]>,
    width: u16,
    height: u16,
}

impl<T: Clone> Grid<T> {
    pub fn new(width: u16, height: u16, value: T) -> Self {
        let data = vec![value; width as usize * height as usize].into_boxed_slice();
        Grid {
            data,
            width,
            height,
        }
    }
}

impl<T> Grid<T> {
    /// Builds a grid by evaluating `f` at every coordinate.
    pub fn from_fn(width: u16, height: u16, mut f: impl FnMut((u16, u16)) -> T) -> Self {
        let data = (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .map(&mut f)
            .collect::<Vec<_>>()
            .into_boxed_slice();
        Grid {
            data,
            width,
            height,
        }
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn is_in_bounds(&self, coord: (u16, u16)) -> bool {
        coord.0 < self.width && coord.1 < self.height
    }

    /// Flattens a coordinate into an index into the backing slice.
    pub fn ravel_index(&self, coord: (u16, u16)) -> Option<usize> {
        // Overflow-safe since width and height are u16 (assuming usize is at least 32 bits)
        self.is_in_bounds(coord)
            .then(|| coord.1 as usize * self.width as usize + coord.0 as usize)
    }

    pub fn get(&self, coord: (u16, u16)) -> Option<&T> {
        self.ravel_index(coord).map(|idx| &self.data[idx])
    }

    pub fn get_mut(&mut self, coord: (u16, u16)) -> Option<&mut T> {
        self.ravel_index(coord).map(|idx| &mut self.data[idx])
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Iterates `(coord, value)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = ((u16, u16), &T)> {
        let width = self.width as usize;
        self.data
            .iter()
            .enumerate()
            .map(move |(i, v)| (((i % width) as u16, (i / width) as u16), v))
    }
}

impl<T> std::ops::Index<(u16, u16)> for Grid<T> {
    type Output = T;

    fn index(&self, index: (u16, u16)) -> &Self::Output {
        match self.get(index) {
            Some(value) => value,
            None => panic!(
                "Coordinate {:?} is out of bounds for a {}x{} grid",
                index, self.width, self.height
            ),
        }
    }
}

impl<T> std::ops::IndexMut<(u16, u16)> for Grid<T> {
    fn index_mut(&mut self, index: (u16, u16)) -> &mut Self::Output {
        let (width, height) = (self.width, self.height);
        match self.get_mut(index) {
            Some(value) => value,
            None => panic!(
                "Coordinate {:?} is out of bounds for a {}x{} grid",
                index, width, height
            ),
        }
    }
}
