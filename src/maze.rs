use log::info;
use rand::prelude::*;

use crate::config::MazeConfig;
use crate::error::Result;
use crate::generators::backtracker::RecursiveBacktracker;
use crate::generators::Generator;
use crate::grids::wall_grid::WallGrid;
use crate::grids::Coord;
use crate::renderer::{Canvas, Headless, Renderer};
use crate::solvers::depth_first::DepthFirst;
use crate::solvers::Solver;

/// A generated maze together with the canvas it is drawn on.
pub struct Maze<R: Renderer = Headless> {
    grid: WallGrid,
    canvas: Canvas<R>,
    seed: u64,
    path: Vec<Coord>,
}

impl Maze<Headless> {
    pub fn headless(config: &MazeConfig) -> Result<Self> {
        Self::new(config, Headless)
    }
}

impl<R: Renderer> Maze<R> {
    /// Lays out and draws every cell, then carves the maze.
    pub fn new(config: &MazeConfig, renderer: R) -> Result<Self> {
        let mut grid = WallGrid::with_dims(config.num_cols, config.num_rows)?;
        let mut canvas = Canvas::new(config.layout(), &grid, renderer);

        for col in 0..grid.dims.columns {
            for row in 0..grid.dims.rows {
                canvas.draw_cell(&grid, col, row);
            }
        }

        let seed = config.seed.unwrap_or_else(|| thread_rng().gen());
        let mut generator = RecursiveBacktracker::new(StdRng::seed_from_u64(seed));
        generator.generate_maze(&mut grid, &mut canvas);

        info!(
            "generated {}x{} maze with seed {}, {} passages",
            grid.dims.columns,
            grid.dims.rows,
            seed,
            grid.passage_count()
        );

        Ok(Self {
            grid,
            canvas,
            seed,
            path: Vec::new(),
        })
    }

    /// Looks for a path from the entrance to the exit. Flags left over from an
    /// earlier solve are cleared first, so repeated calls agree.
    pub fn solve(&mut self) -> Result<bool> {
        self.grid.reset_visited();

        let mut solver = DepthFirst::corner_to_corner(&self.grid);
        let solved = solver.solve_path(&mut self.grid, &mut self.canvas)?;
        self.path = solver.path();

        info!("solved: {}, path of {} cells", solved, self.path.len());
        Ok(solved)
    }

    pub fn grid(&self) -> &WallGrid {
        &self.grid
    }

    pub fn canvas(&self) -> &Canvas<R> {
        &self.canvas
    }

    pub fn into_renderer(self) -> R {
        self.canvas.into_renderer()
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Path found by the last successful `solve`.
    pub fn path(&self) -> &[Coord] {
        &self.path
    }
}
