pub mod depth_first;

use crate::error::Result;
use crate::grids::wall_grid::WallGrid;
use crate::grids::Coord;
use crate::renderer::{Canvas, Renderer};

pub trait Solver {
    /// Advances the search by one move. Returns false once the search is over,
    /// either because the goal was reached or every branch was exhausted.
    fn step_solve_path<R: Renderer>(
        &mut self,
        grid: &mut WallGrid,
        canvas: &mut Canvas<R>,
    ) -> Result<bool>;

    fn is_solved(&self) -> bool;

    /// Cells from the start to the goal, empty until solved.
    fn path(&self) -> Vec<Coord>;

    fn solve_path<R: Renderer>(
        &mut self,
        grid: &mut WallGrid,
        canvas: &mut Canvas<R>,
    ) -> Result<bool> {
        while self.step_solve_path(grid, canvas)? {}

        Ok(self.is_solved())
    }
}
