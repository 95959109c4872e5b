use log::{debug, trace};
use rand::prelude::*;

use crate::generators::Generator;
use crate::grids::wall_grid::WallGrid;
use crate::grids::{Coord, Direction};
use crate::renderer::{Canvas, Renderer};

/// Randomized depth first carving. Every wall is broken toward a cell that was
/// not visited yet, so the passages form a spanning tree over the grid.
///
/// The recursion lives on `stack` instead of the call stack, one `step` either
/// carves into a fresh neighbor or backtracks a single cell.
pub struct RecursiveBacktracker<G: Rng> {
    rng: G,
    stack: Vec<Coord>,
    started: bool,
    pub done: bool,
}

impl<G: Rng> RecursiveBacktracker<G> {
    pub fn new(rng: G) -> Self {
        Self {
            rng,
            stack: Vec::new(),
            started: false,
            done: false,
        }
    }

    /// Opens the left side of the top left cell and the right side of the
    /// bottom right one, then seeds carving at the center of the grid.
    fn start<R: Renderer>(&mut self, grid: &mut WallGrid, canvas: &mut Canvas<R>) {
        let (last_col, last_row) = (grid.dims.columns - 1, grid.dims.rows - 1);

        grid.break_wall(0, 0, Direction::West);
        canvas.draw_cell(grid, 0, 0);
        grid.break_wall(last_col, last_row, Direction::East);
        canvas.draw_cell(grid, last_col, last_row);
        debug!("entrance (0, 0), exit ({}, {})", last_col, last_row);

        let center = (grid.dims.columns / 2, grid.dims.rows / 2);
        grid.visit(center.0, center.1);
        self.stack.push(center);
        self.started = true;
    }

    fn finish(&mut self, grid: &mut WallGrid) {
        // the solver reuses the visited flags
        grid.reset_visited();
        self.done = true;
        debug!("carving done, {} passages", grid.passage_count());
    }
}

impl<G: Rng> Generator for RecursiveBacktracker<G> {
    fn step_generation<R: Renderer>(&mut self, grid: &mut WallGrid, canvas: &mut Canvas<R>) {
        if self.done {
            return;
        }
        if !self.started {
            self.start(grid, canvas);
            return;
        }

        let (col, row) = match self.stack.last() {
            Some(&current) => current,
            None => {
                self.finish(grid);
                return;
            }
        };

        let candidates = grid.unvisited_neighbors(col, row);
        let ((next_col, next_row), dir) = match candidates.choose(&mut self.rng) {
            Some(&choice) => choice,
            None => {
                // dead end
                self.stack.pop();
                return;
            }
        };

        trace!(
            "carving ({}, {}) -> ({}, {})",
            col,
            row,
            next_col,
            next_row
        );
        grid.break_wall(col, row, dir);
        canvas.draw_cell(grid, col, row);
        grid.break_wall(next_col, next_row, -dir);
        canvas.draw_cell(grid, next_col, next_row);

        grid.visit(next_col, next_row);
        self.stack.push((next_col, next_row));
    }

    fn is_done(&self) -> bool {
        self.done
    }
}
