pub mod backtracker;

use crate::grids::wall_grid::WallGrid;
use crate::renderer::{Canvas, Renderer};

pub trait Generator {
    /// Performs one carving step, drawing whatever it changed.
    fn step_generation<R: Renderer>(&mut self, grid: &mut WallGrid, canvas: &mut Canvas<R>);

    fn is_done(&self) -> bool;

    fn generate_maze<R: Renderer>(&mut self, grid: &mut WallGrid, canvas: &mut Canvas<R>) {
        while !self.is_done() {
            self.step_generation(grid, canvas);
        }
    }
}
