use crate::renderer::Layout;

/// (columns, rows)
pub const DEFAULT_DIMS: (usize, usize) = (14, 10);
pub const DEFAULT_ORIGIN: (i32, i32) = (50, 50);
pub const DEFAULT_CELL_SIZE: (i32, i32) = (50, 50);

#[derive(Debug, Clone, PartialEq)]
pub struct MazeConfig {
    /// top left corner of the maze on the canvas
    pub x1: i32,
    pub y1: i32,

    pub num_cols: usize,
    pub num_rows: usize,

    pub cell_size_x: i32,
    pub cell_size_y: i32,

    /// fresh entropy every run when unset
    pub seed: Option<u64>,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            x1: DEFAULT_ORIGIN.0,
            y1: DEFAULT_ORIGIN.1,
            num_cols: DEFAULT_DIMS.0,
            num_rows: DEFAULT_DIMS.1,
            cell_size_x: DEFAULT_CELL_SIZE.0,
            cell_size_y: DEFAULT_CELL_SIZE.1,
            seed: None,
        }
    }
}

impl MazeConfig {
    pub fn with_dims(mut self, num_cols: usize, num_rows: usize) -> Self {
        self.num_cols = num_cols;
        self.num_rows = num_rows;
        self
    }

    pub fn with_cell_size(mut self, cell_size_x: i32, cell_size_y: i32) -> Self {
        self.cell_size_x = cell_size_x;
        self.cell_size_y = cell_size_y;
        self
    }

    pub fn with_origin(mut self, x1: i32, y1: i32) -> Self {
        self.x1 = x1;
        self.y1 = y1;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn layout(&self) -> Layout {
        Layout {
            x1: self.x1,
            y1: self.y1,
            cell_size_x: self.cell_size_x,
            cell_size_y: self.cell_size_y,
        }
    }

    /// Canvas size needed to show the whole maze with an even margin.
    pub fn window_size(&self) -> (i32, i32) {
        (
            2 * self.x1 + self.cell_size_x * self.num_cols as i32,
            2 * self.y1 + self.cell_size_y * self.num_rows as i32,
        )
    }
}
