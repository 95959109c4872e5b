use thiserror::Error;

pub type Result<T> = std::result::Result<T, MazeError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MazeError {
    #[error("grid dimensions must be non-zero, got {columns} columns x {rows} rows")]
    InvalidDimension { columns: usize, rows: usize },

    /// a move was drawn before the cell was laid out on the canvas
    #[error("cell ({col}, {row}) has no coordinates")]
    UnpositionedCellAccess { col: usize, row: usize },
}
