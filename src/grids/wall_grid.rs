use std::fmt;

use crate::error::{MazeError, Result};
use crate::grids::{Cell, Coord, Dimensions, Direction, Neighborhood};

pub struct WallGrid {
    pub dims: Dimensions,

    /// indexed `[col][row]`
    cells: Vec<Vec<Cell>>,
}

impl WallGrid {
    pub fn with_dims(columns: usize, rows: usize) -> Result<Self> {
        if columns == 0 || rows == 0 {
            return Err(MazeError::InvalidDimension { columns, rows });
        }

        Ok(Self {
            cells: vec![vec![Cell::default(); rows]; columns],
            dims: Dimensions { columns, rows },
        })
    }

    #[inline]
    pub fn dims(&self) -> &Dimensions {
        &self.dims
    }

    #[inline]
    pub fn columns(&self) -> &[Vec<Cell>] {
        &self.cells
    }

    #[inline]
    pub fn cell(&self, col: usize, row: usize) -> &Cell {
        &self.cells[col][row]
    }

    /// Clears a single wall flag. The neighbor's matching wall is left alone,
    /// so both sides of a passage have to be broken separately.
    #[inline]
    pub fn break_wall(&mut self, col: usize, row: usize, dir: Direction) {
        self.cells[col][row].walls.remove(dir);
    }

    #[inline]
    pub fn visit(&mut self, col: usize, row: usize) {
        self.cells[col][row].visited = true;
    }

    #[inline]
    pub fn is_visited(&self, col: usize, row: usize) -> bool {
        self.cells[col][row].visited
    }

    pub fn reset_visited(&mut self) {
        for cell in self.cells.iter_mut().flatten() {
            cell.visited = false;
        }
    }

    pub fn neighbors_of(&self, col: usize, row: usize) -> Neighborhood {
        Neighborhood::new((col, row), self.dims)
    }

    pub fn unvisited_neighbors(&self, col: usize, row: usize) -> Vec<(Coord, Direction)> {
        self.neighbors_of(col, row)
            .filter(|&((n_col, n_row), _)| !self.is_visited(n_col, n_row))
            .collect()
    }

    /// True when nothing stands between `(col, row)` and its neighbor in `dir`,
    /// checked from both sides.
    pub fn is_open(&self, col: usize, row: usize, dir: Direction) -> bool {
        match dir.step((col, row), &self.dims) {
            Some((n_col, n_row)) => {
                !self.cell(col, row).has_wall(dir) && !self.cell(n_col, n_row).has_wall(-dir)
            }
            None => false,
        }
    }

    /// Interior connections open on both sides, entrance and exit excluded.
    pub fn passage_count(&self) -> usize {
        let mut count = 0;
        for col in 0..self.dims.columns {
            for row in 0..self.dims.rows {
                if self.is_open(col, row, Direction::East) {
                    count += 1;
                }
                if self.is_open(col, row, Direction::South) {
                    count += 1;
                }
            }
        }

        count
    }
}

impl fmt::Display for WallGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.dims.rows {
            for col in 0..self.dims.columns {
                let top = if self.cell(col, row).has_top_wall() {
                    "---"
                } else {
                    "   "
                };
                write!(f, "+{}", top)?;
            }
            writeln!(f, "+")?;

            for col in 0..self.dims.columns {
                let cell = self.cell(col, row);
                let left = if cell.has_left_wall() { '|' } else { ' ' };
                write!(f, "{}   ", left)?;
            }
            let last = self.cell(self.dims.columns - 1, row);
            writeln!(f, "{}", if last.has_right_wall() { '|' } else { ' ' })?;
        }

        for col in 0..self.dims.columns {
            let bottom = if self.cell(col, self.dims.rows - 1).has_bottom_wall() {
                "---"
            } else {
                "   "
            };
            write!(f, "+{}", bottom)?;
        }
        writeln!(f, "+")
    }
}
