pub mod wall_grid;

/// (column, row), column grows rightward and row grows downward
pub type Coord = (usize, usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub columns: usize,
    pub rows: usize,
}

impl Dimensions {
    #[inline]
    pub fn contains(&self, col: usize, row: usize) -> bool {
        col < self.columns && row < self.rows
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.columns * self.rows
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// North is the top of a cell, row - 1 on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North = 0,
    South = 1,
    East = 2,
    West = 3,
}

impl Direction {
    /// order neighbors are enumerated in: left, right, up, down
    pub const ORDER: [Direction; 4] = [
        Direction::West,
        Direction::East,
        Direction::North,
        Direction::South,
    ];

    /// Coordinates one step in this direction, if they stay inside `dims`.
    pub fn step(self, (col, row): Coord, dims: &Dimensions) -> Option<Coord> {
        let (n_col, n_row) = match self {
            Direction::North => (col, row.checked_sub(1)?),
            Direction::South => (col, row + 1),
            Direction::East => (col + 1, row),
            Direction::West => (col.checked_sub(1)?, row),
        };

        if dims.contains(n_col, n_row) {
            Some((n_col, n_row))
        } else {
            None
        }
    }

    /// Direction that leads from `from` to the adjacent cell `to`.
    pub fn between(from: Coord, to: Coord) -> Option<Direction> {
        match (to.0 as isize - from.0 as isize, to.1 as isize - from.1 as isize) {
            (0, -1) => Some(Direction::North),
            (0, 1) => Some(Direction::South),
            (1, 0) => Some(Direction::East),
            (-1, 0) => Some(Direction::West),
            _ => None,
        }
    }

    #[inline]
    fn bit(self) -> u8 {
        1 << self as u8
    }
}

impl std::ops::Neg for Direction {
    type Output = Direction;

    fn neg(self) -> Self::Output {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }
}

impl From<usize> for Direction {
    fn from(dir: usize) -> Self {
        match dir {
            0 => Direction::North,
            1 => Direction::South,
            2 => Direction::East,
            3 => Direction::West,
            _ => unreachable!(),
        }
    }
}

/// One bit per standing wall, indexed by `Direction`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Walls(u8);

impl Walls {
    pub const ALL: Walls = Walls(0b1111);
    pub const NONE: Walls = Walls(0);

    #[inline]
    pub fn has(self, dir: Direction) -> bool {
        self.0 & dir.bit() != 0
    }

    #[inline]
    pub fn remove(&mut self, dir: Direction) {
        self.0 &= !dir.bit();
    }

    #[inline]
    pub fn insert(&mut self, dir: Direction) {
        self.0 |= dir.bit();
    }
}

impl Default for Walls {
    fn default() -> Self {
        Walls::ALL
    }
}

impl std::fmt::Debug for Walls {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Walls")
            .field("top", &self.has(Direction::North))
            .field("bottom", &self.has(Direction::South))
            .field("left", &self.has(Direction::West))
            .field("right", &self.has(Direction::East))
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    pub walls: Walls,
    pub visited: bool,
}

impl Cell {
    #[inline]
    pub fn has_wall(&self, dir: Direction) -> bool {
        self.walls.has(dir)
    }

    pub fn has_top_wall(&self) -> bool {
        self.has_wall(Direction::North)
    }

    pub fn has_bottom_wall(&self) -> bool {
        self.has_wall(Direction::South)
    }

    pub fn has_left_wall(&self) -> bool {
        self.has_wall(Direction::West)
    }

    pub fn has_right_wall(&self) -> bool {
        self.has_wall(Direction::East)
    }
}

/// Lazily walks the in-bounds neighbors of a cell in `Direction::ORDER`,
/// regardless of walls.
#[derive(Debug, Clone, Copy)]
pub struct Neighborhood {
    origin: Coord,
    dims: Dimensions,

    counter: usize,
}

impl Neighborhood {
    pub fn new(origin: Coord, dims: Dimensions) -> Self {
        Self {
            origin,
            dims,
            counter: 0,
        }
    }
}

impl Iterator for Neighborhood {
    type Item = (Coord, Direction);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&dir) = Direction::ORDER.get(self.counter) {
            self.counter += 1;
            if let Some(neighbor) = dir.step(self.origin, &self.dims) {
                return Some((neighbor, dir));
            }
        }

        None
    }
}
