//! Perfect maze generation with a randomized recursive backtracker, solved by
//! an exhaustive depth first search. Both can be watched step by step through
//! a `Renderer`.

pub mod config;
pub mod error;
pub mod generators;
pub mod grids;
pub mod maze;
pub mod renderer;
pub mod solvers;

pub use config::MazeConfig;
pub use error::{MazeError, Result};
pub use grids::wall_grid::WallGrid;
pub use grids::{Cell, Coord, Direction, Walls};
pub use maze::Maze;
pub use renderer::{Canvas, Headless, LineBuffer, Renderer, Stroke};
